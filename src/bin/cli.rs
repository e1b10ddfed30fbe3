//! ScribeDB CLI
//!
//! Command-line interface for inspecting and editing a ScribeDB directory.

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

use scribedb::{Config, Engine, LogLevel, Result};

/// ScribeDB CLI
#[derive(Parser, Debug)]
#[command(name = "scribedb")]
#[command(about = "Embedded JSON document store")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./scribedb_data")]
    data_dir: String,

    /// Engine log level (fatal, error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a JSON record
    Put {
        /// Collection name
        collection: String,

        /// Resource name
        resource: String,

        /// Record body as JSON text
        json: String,
    },

    /// Print a single record
    Get {
        /// Collection name
        collection: String,

        /// Resource name
        resource: String,
    },

    /// Print every record in a collection
    List {
        /// Collection name
        collection: String,
    },

    /// Delete a record, or the whole collection when no resource is given
    Del {
        /// Collection name
        collection: String,

        /// Resource name
        resource: Option<String>,
    },

    /// Write the sample "Dinner" collection and print it back
    Seed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Ingredients {
    ingredient1: String,
    ingredient2: String,
    ingredient3: String,
    ingredient4: String,
    ingredient5: String,
    ingredient6: String,
    ingredient7: String,
    ingredient8: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Dinner {
    name: String,
    #[serde(rename = "Type")]
    kind: String,
    ingredients: Ingredients,
    rating: String,
}

fn main() {
    let args = Args::parse();

    let level: LogLevel = match args.log_level.parse() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,scribedb={}", tracing_level(level))));

    fmt().with_env_filter(filter).with_target(true).init();

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .log_level(level)
        .build();

    let engine = match Engine::open(config) {
        Ok(e) => e,
        Err(e) => {
            tracing::error!("Failed to open database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&engine, args.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(engine: &Engine, command: Commands) -> Result<()> {
    match command {
        Commands::Put {
            collection,
            resource,
            json,
        } => {
            let value: serde_json::Value = serde_json::from_str(&json)?;
            engine.write(&collection, &resource, &value)?;
        }
        Commands::Get {
            collection,
            resource,
        } => {
            let value: serde_json::Value = engine.read(&collection, &resource)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Commands::List { collection } => {
            for record in engine.read_all(&collection)? {
                print!("{}", record);
            }
        }
        Commands::Del {
            collection,
            resource,
        } => {
            engine.delete(&collection, resource.as_deref().unwrap_or(""))?;
        }
        Commands::Seed => seed(engine)?,
    }
    Ok(())
}

fn seed(engine: &Engine) -> Result<()> {
    for dinner in sample_dinners() {
        engine.write("Dinner", &dinner.name, &dinner)?;
    }

    let records = engine.read_all("Dinner")?;
    println!("{:?}", records);

    let dinners: Vec<Dinner> = engine.read_all_as("Dinner")?;
    for dinner in &dinners {
        println!("{:?}", dinner);
    }
    Ok(())
}

fn sample_dinners() -> Vec<Dinner> {
    let dinner = |name: &str, kind: &str, ingredients: [&str; 8], rating: &str| {
        let [i1, i2, i3, i4, i5, i6, i7, i8] = ingredients.map(str::to_string);
        Dinner {
            name: name.to_string(),
            kind: kind.to_string(),
            ingredients: Ingredients {
                ingredient1: i1,
                ingredient2: i2,
                ingredient3: i3,
                ingredient4: i4,
                ingredient5: i5,
                ingredient6: i6,
                ingredient7: i7,
                ingredient8: i8,
            },
            rating: rating.to_string(),
        }
    };

    vec![
        dinner(
            "Spaghetti",
            "Italian",
            ["Spaghetti noodles", "Sauce", "Parmesan Cheese", "", "", "", "", ""],
            "8",
        ),
        dinner(
            "Stir Fry",
            "Asian",
            ["Chicken", "Cauliflower", "Brocolli", "Mushrooms", "Asparagus", "Onion", "Rice", ""],
            "7",
        ),
        dinner(
            "Taco",
            "Mexican",
            ["Ground Beef", "Taco seasoning", "Taco shells", "Cheese", "Salsa", "", "", ""],
            "9",
        ),
        dinner(
            "Pizza",
            "Italian",
            [
                "Pizza Dough",
                "Pizza Sauce",
                "Mozzeralla Cheese",
                "Peperoni",
                "Sausage",
                "Black Olives",
                "",
                "",
            ],
            "10",
        ),
    ]
}

/// Map the engine's level onto a `tracing` filter directive
fn tracing_level(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Fatal | LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}

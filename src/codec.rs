//! Record codec
//!
//! Records are stored as pretty-printed JSON, indented with tabs, one record
//! per file. The engine is payload-agnostic: anything `serde` can serialize
//! is a valid record.
//!
//! ## File Format
//! ```text
//! {
//! 	"Name": "Taco",
//! 	"Rating": "9"
//! }
//! ```
//! (plus the trailing newline added by the engine on write)

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use crate::error::Result;

/// Extension of committed record files
pub const EXTENSION: &str = "json";

/// Extension appended to a record file name while it is being written
pub const TEMP_EXTENSION: &str = "tmp";

const INDENT: &[u8] = b"\t";

/// Encode a record to its canonical on-disk bytes (no trailing newline)
pub fn encode_record<T: Serialize + ?Sized>(record: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(128);
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    record.serialize(&mut serializer)?;
    Ok(buf)
}

/// Decode a record from its on-disk bytes
pub fn decode_record<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(bytes)?)
}

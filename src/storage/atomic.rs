//! Atomic file primitives
//!
//! Records are committed by writing a temporary file next to the target and
//! renaming it over the target. A rename within one filesystem is atomic, so
//! a reader sees either the previous record or the new one, never a mix.
//!
//! The temporary file must live on the same filesystem as the target. A store
//! root spanning several mounts (a collection directory that is itself a
//! mount point is fine, a symlinked record file is not) loses this guarantee.

use std::fs::{self, DirBuilder, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};

/// Permissions for created directories (rwxr-xr-x)
#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

/// Permissions for created record files (rw-r--r--)
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Create `path` and any missing parents. Existing directories are left as-is.
pub fn create_dir_all(path: &Path) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    builder.mode(DIR_MODE);

    builder.create(path)
}

/// Write `data` to `temp_path`, then rename it over `final_path`
///
/// Steps:
/// 1. Create/truncate the temp file
/// 2. Write all bytes
/// 3. fsync (when `sync` is set)
/// 4. Rename over the target
///
/// On error the temp file may be left behind; see [`remove_temp`].
pub fn atomic_write(temp_path: &Path, final_path: &Path, data: &[u8], sync: bool) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.create(true).write(true).truncate(true);

    #[cfg(unix)]
    options.mode(FILE_MODE);

    let mut file = options.open(temp_path)?;
    file.write_all(data)?;
    if sync {
        file.sync_all()?;
    }
    drop(file);

    fs::rename(temp_path, final_path)
}

/// Remove a leftover temp file. A file that is already gone is not an error.
pub fn remove_temp(temp_path: &Path) -> io::Result<()> {
    match fs::remove_file(temp_path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

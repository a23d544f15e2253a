//! Atomic file writes
//!
//! Snapshot rewrites go through a temp file:
//!
//! 1. Write content to `<path>.tmp`
//! 2. `sync_all()` to flush to disk
//! 3. Rename onto the final path (atomic on most filesystems)
//!
//! A crash leaves either the old snapshot or the new one, never a partial
//! file.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Atomically write content to a file, creating parent directories
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
    let path = path.as_ref();
    let temp_path = path.with_extension("tmp");

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;

    fs::rename(&temp_path, path)?;

    Ok(())
}

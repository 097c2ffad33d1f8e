// src/file.rs

use std::{
    error::Error,
    fs::{self, OpenOptions},
    io::BufWriter,
    path::{Path, PathBuf},
};

use crate::csv::{table_writer, write_table};

/// Pick the first free export name in `dir`:
/// `<stem>.<ext>`, then `<stem>_1.<ext>`, `<stem>_2.<ext>`, …
///
/// Linear probe, no upper bound, no gap filling: only what `exists`
/// reports at call time matters.
pub fn next_available_name<F>(dir: &Path, stem: &str, ext: &str, mut exists: F) -> PathBuf
where
    F: FnMut(&Path) -> bool,
{
    let base = dir.join(join!(stem, ".", ext));
    if !exists(&base) {
        return base;
    }
    let mut n: u64 = 1;
    loop {
        let candidate = dir.join(format!("{stem}_{n}.{ext}"));
        if !exists(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// `next_available_name` against the real filesystem.
pub fn next_available_path(dir: &Path, stem: &str, ext: &str) -> PathBuf {
    let path = next_available_name(dir, stem, ext, |p| p.exists());
    logd!("export name: {}", path.display());
    path
}

/// Create `path` (must not exist yet) and write header + rows.
/// Parent directory is created if needed.
pub fn write_export_new(
    path: &Path,
    headers: &[String],
    rows: &[Vec<String>],
    sep: u8,
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    // create_new: never truncate a file from an earlier run
    let file = OpenOptions::new().write(true).create_new(true).open(path)?;
    let mut out = table_writer(BufWriter::new(file), sep);
    write_table(&mut out, headers, rows)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

// src/runner.rs
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use crate::{
    config::{consts::DEFAULT_STEM, options::Options},
    core::html::parse_document,
    file::{ensure_directory, next_available_path, write_export_new},
    specs::scoreboard::{self, PlayerRecord},
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub path: PathBuf,
    pub rows: usize,
}

/// Read the saved page, extract players, write them to a fresh export file.
/// Any I/O failure aborts the run; nothing is written if the input can't be read.
pub fn run(opts: &Options) -> Result<RunSummary, Box<dyn Error>> {
    let text = fs::read_to_string(&opts.input).map_err(|e| {
        loge!("reading {}: {e}", opts.input.display());
        format!("Cannot read {}: {e}", opts.input.display())
    })?;

    let doc = parse_document(&text);
    let rows: Vec<Vec<String>> = scoreboard::extract(&doc)
        .into_iter()
        .map(PlayerRecord::into_row)
        .collect();

    if !opts.out_dir.as_os_str().is_empty() {
        ensure_directory(&opts.out_dir)?;
    }
    let path = next_available_path(&opts.out_dir, DEFAULT_STEM, opts.format.ext());
    write_export_new(&path, &scoreboard::headers(), &rows, opts.format.delim()).map_err(|e| {
        loge!("writing {}: {e}", path.display());
        e
    })?;

    logf!("wrote {} rows to {}", rows.len(), path.display());
    Ok(RunSummary { path, rows: rows.len() })
}

// src/config/options.rs
use std::path::PathBuf;

use super::consts::DEFAULT_INPUT;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub input: PathBuf,    // saved scoreboard page
    pub out_dir: PathBuf,  // where the output name is probed; empty = cwd
    pub format: ExportFormat,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            out_dir: PathBuf::new(),
            format: ExportFormat::Csv,
        }
    }
}

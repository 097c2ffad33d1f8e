// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::config::options::{ExportFormat, Options};
use crate::runner;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(Options),
    Help,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!(include_str!("cli_help.txt"));
            Ok(())
        }
        Command::Run(opts) => {
            let summary = runner::run(&opts)?;
            println!("Wrote {} players to {}", summary.rows, summary.path.display());
            Ok(())
        }
    }
}

pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = Options::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--input" => opts.input = PathBuf::from(args.next().ok_or("Missing input path")?),
            "-o" | "--out-dir" => opts.out_dir = PathBuf::from(args.next().ok_or("Missing output directory")?),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                opts.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(Command::Run(opts))
}

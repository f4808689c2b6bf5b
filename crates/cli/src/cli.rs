//! CLI definitions and dispatch.

use std::{
    env::current_dir,
    io::{Write, stderr},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use gaelic_core::{BatchReport, FontFilter, MarkOptions, Marker};

#[derive(Parser, Debug)]
#[command(name = "mark-gaelic", version)]
#[command(about = "Mark OTF/WOFF2 fonts with Irish (Gaelic) language metadata")]
#[command(long_about = "Mark OTF/WOFF2 fonts with Irish (Gaelic) language metadata.\n\n\
    Every .otf and .woff2 file in DIRECTORY is modified in place to add Irish name records \
    (language ID 0x083C), the OS/2 Latin Extended Additional bit and an IRI language system \
    in the GSUB latn script. Running it again on marked fonts changes nothing.")]
pub struct Cli {
    /// Directory containing the fonts (default: current directory)
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,
    /// Skip files whose name starts with PREFIX (in addition to SF-Pro)
    #[arg(short, long, value_name = "PREFIX")]
    pub exclude: Vec<String>,
    /// Stop at the first font that cannot be marked
    #[arg(long)]
    pub fail_fast: bool,
}

impl Cli {
    pub fn run(&self) -> ExitCode {
        report(self.execute(), &mut stderr())
    }

    fn execute(&self) -> Result<BatchReport> {
        let directory = self.directory()?;
        debug!("Processing {}", directory.display());

        let batch = self.marker().process_directory(&directory)?;
        println!("\n{}", batch.summary());
        Ok(batch)
    }

    fn directory(&self) -> Result<PathBuf> {
        match &self.directory {
            Some(directory) => Ok(directory.clone()),
            None => current_dir().context("Failed to get current directory"),
        }
    }

    pub fn marker(&self) -> Marker {
        let filter = self
            .exclude
            .iter()
            .fold(FontFilter::default(), |filter, prefix| filter.with_excluded_prefix(prefix));
        Marker::new(filter, MarkOptions::default()).fail_fast(self.fail_fast)
    }
}

/// Print errors to `out` and pick the exit code.
fn report(result: Result<BatchReport>, out: &mut impl Write) -> ExitCode {
    match result {
        Err(e) => {
            let _ = writeln!(out, "Error: {e:#}");
            ExitCode::FAILURE
        }
        Ok(batch) => {
            for failed in &batch.failed {
                let _ = writeln!(out, "{}: {:#}", failed.filename, failed.error);
            }
            if batch.all_succeeded() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
        }
    }
}

//! `twofold maybe <path>` — parse through the `Maybe` producer.

use std::error::Error;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use twofold_core::Failure;
use twofold_ini::parse_file;

use super::{failed_prefix, print_json, print_parsed, Outcome};

/// Arguments for `twofold maybe`.
#[derive(Args, Debug)]
pub struct MaybeArgs {
    /// File to parse.
    pub path: PathBuf,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct FailureJson<'a> {
    status: &'static str,
    message: &'a str,
    cause: Option<String>,
}

impl MaybeArgs {
    pub fn run(self, verbose: bool) -> Result<Outcome> {
        let json = self.json;
        parse_file(&self.path).case(
            |parsed| print_parsed(&parsed, json),
            |failure| print_failure(&failure, json, verbose),
        )
    }
}

fn print_failure(failure: &Failure, json: bool, verbose: bool) -> Result<Outcome> {
    if json {
        print_json(&FailureJson {
            status: "failure",
            message: failure.message(),
            cause: failure.cause().map(|c| c.to_string()),
        })?;
    } else {
        println!("{} {}", failed_prefix(), failure.message());
    }

    if verbose {
        let mut next: Option<&(dyn Error + 'static)> = failure.source();
        while let Some(err) = next {
            eprintln!("  caused by: {err:?}");
            next = err.source();
        }
    }
    Ok(Outcome::Failed)
}

//! `twofold either <path>` — parse through the `Either` producer.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use twofold_ini::parse_file_either;

use super::{failed_prefix, print_json, print_parsed, Outcome};

/// Arguments for `twofold either`.
#[derive(Args, Debug)]
pub struct EitherArgs {
    /// File to parse.
    pub path: PathBuf,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl EitherArgs {
    pub fn run(self) -> Result<Outcome> {
        let json = self.json;
        parse_file_either(&self.path).case(
            |parsed| print_parsed(&parsed, json),
            |fault| -> Result<Outcome> {
                if json {
                    print_json(&fault)?;
                } else {
                    println!("{} {fault}", failed_prefix());
                }
                Ok(Outcome::Failed)
            },
        )
    }
}

//! Subcommands and the rendering they share.

pub mod either;
pub mod maybe;

use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use twofold_ini::ParseResult;

/// What a subcommand reports back to `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Parsed,
    Failed,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Parsed => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::from(1),
        }
    }
}

#[derive(Serialize)]
struct SuccessJson<'a> {
    status: &'static str,
    sections: usize,
    lines: usize,
    file_last_modified: String,
    content: &'a [String],
}

/// Prints the one-line summary, or a JSON document with `json`.
pub fn print_parsed(parsed: &ParseResult, json: bool) -> Result<Outcome> {
    if json {
        let doc = SuccessJson {
            status: "success",
            sections: parsed.section_count,
            lines: parsed.lines.len(),
            file_last_modified: parsed.file_last_modified.to_rfc3339(),
            content: &parsed.lines,
        };
        print_json(&doc)?;
    } else {
        println!(
            "{} {} sections, {} lines",
            "Success parsed,".green().bold(),
            parsed.section_count,
            parsed.lines.len()
        );
    }
    Ok(Outcome::Parsed)
}

pub fn print_json<T: Serialize>(doc: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(doc).context("failed to render JSON output")?;
    println!("{rendered}");
    Ok(())
}

pub fn failed_prefix() -> String {
    "Failed to parse:".red().bold().to_string()
}

use super::resolve;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use puckblocks_core::{validate as validate_value, Validity};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// JSON file to check
    pub file: PathBuf,
}

pub fn validate(args: ValidateArgs, cwd: &str) -> Result<()> {
    let path = resolve(cwd, &args.file);
    let source = fs::read_to_string(&path)?;
    let value: Value = serde_json::from_str(&source)
        .map_err(|e| anyhow!("{} is not valid JSON: {}", args.file.display(), e))?;

    match validate_value(&value) {
        Validity::Valid => {
            println!(
                "{} {} is a valid page document",
                "✓".green(),
                args.file.display()
            );
            Ok(())
        }
        Validity::Invalid(reasons) => {
            println!(
                "{} {} is not a valid page document",
                "✗".red(),
                args.file.display()
            );
            for reason in &reasons {
                println!("  - {}", reason);
            }
            Err(anyhow!("{} problem(s) found", reasons.len()))
        }
    }
}

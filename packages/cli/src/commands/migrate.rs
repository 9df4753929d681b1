use super::{collect_inputs, output_path, read_input, resolve};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use puckblocks_core::Migrator;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Content file or directory to migrate
    pub input: PathBuf,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,
}

pub fn migrate(args: MigrateArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let input = resolve(cwd, &args.input);
    let files = collect_inputs(&input)?;

    if files.is_empty() {
        println!("{}", "⚠️  No content files found".yellow());
        return Ok(());
    }

    if !args.stdout {
        println!("{}", "🔁 Migrating content...".bright_blue().bold());
        println!("Found {} files", files.len());
    }

    let out_dir = config.get_out_dir(cwd, args.out_dir.as_deref());
    let migrator = Migrator::new();
    let mut success_count = 0;
    let mut error_count = 0;

    for file in &files {
        match migrate_file(&migrator, file, &input, &out_dir, args.stdout) {
            Ok(destination) => {
                success_count += 1;
                if !args.stdout {
                    println!(
                        "  {} {} → {}",
                        "✓".green(),
                        file.display(),
                        destination.display()
                    );
                }
            }
            Err(e) => {
                error_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    file.display(),
                    e.to_string().red()
                );
            }
        }
    }

    if !args.stdout {
        println!();
        if error_count == 0 {
            println!("{} Migrated {} files successfully", "✅".green(), success_count);
        } else {
            println!(
                "{} Migrated {} files, {} errors",
                "⚠️".yellow(),
                success_count,
                error_count
            );
        }
    }

    Ok(())
}

fn migrate_file(
    migrator: &Migrator,
    file: &Path,
    input_root: &Path,
    out_dir: &Path,
    stdout: bool,
) -> Result<PathBuf> {
    let doc = migrator.normalize(read_input(file)?);
    let json = doc.to_json_pretty()?;

    if stdout {
        println!("{}", json);
        return Ok(PathBuf::from("stdout"));
    }

    let output_file = output_path(file, input_root, out_dir, "json");
    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_file, json)?;

    Ok(output_file)
}

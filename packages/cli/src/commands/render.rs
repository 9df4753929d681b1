use super::{collect_inputs, output_path, read_input, resolve};
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use puckblocks_components::default_registry;
use puckblocks_core::ComponentRegistry;
use puckblocks_renderer::{render_input, RenderOptions};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Content file or directory to render
    pub input: PathBuf,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Emit an HTML fragment instead of a full page
    #[arg(long)]
    pub fragment: bool,

    /// Fail on unknown components instead of emitting a comment
    #[arg(long)]
    pub strict: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,
}

pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let input = resolve(cwd, &args.input);
    let files = collect_inputs(&input)?;

    if files.is_empty() {
        println!("{}", "⚠️  No content files found".yellow());
        return Ok(());
    }

    if !args.stdout {
        println!("{}", "🖨  Rendering pages...".bright_blue().bold());
    }

    let options = RenderOptions {
        pretty: config.pretty,
        full_page: !args.fragment,
        title: config.title.clone(),
        strict: args.strict,
        ..Default::default()
    };
    let registry = default_registry();
    let out_dir = config.get_out_dir(cwd, args.out_dir.as_deref());
    let mut error_count = 0;

    for file in &files {
        match render_file(&registry, file, &input, &out_dir, &options, args.stdout) {
            Ok(destination) => {
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

    if error_count > 0 {
        return Err(anyhow!("{} of {} files failed to render", error_count, files.len()));
    }

    Ok(())
}

fn render_file(
    registry: &ComponentRegistry,
    file: &Path,
    input_root: &Path,
    out_dir: &Path,
    options: &RenderOptions,
    stdout: bool,
) -> Result<PathBuf> {
    let html = render_input(read_input(file)?, registry, options.clone())?;

    if stdout {
        println!("{}", html);
        return Ok(PathBuf::from("stdout"));
    }

    let output_file = output_path(file, input_root, out_dir, "html");
    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_file, html)?;

    Ok(output_file)
}

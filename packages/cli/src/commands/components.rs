use anyhow::Result;
use clap::Args;
use puckblocks_components::default_registry;

#[derive(Debug, Args)]
pub struct ComponentsArgs {
    /// Print compact JSON
    #[arg(long)]
    pub compact: bool,
}

pub fn components(args: ComponentsArgs, _cwd: &str) -> Result<()> {
    let registry = default_registry();
    let output = if args.compact {
        serde_json::to_string(&registry)?
    } else {
        serde_json::to_string_pretty(&registry)?
    };
    println!("{}", output);
    Ok(())
}

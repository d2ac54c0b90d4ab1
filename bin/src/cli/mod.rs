use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use simplelog::LevelFilter;

mod generate;
mod paramargs;
mod params;
mod templateargs;
mod templates;
mod validate;

/// Generates CloudLab/GENI request RSpecs for a bare metal server that serves as a Google Colab
/// local runtime.
#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Logging level.
    #[arg(long, default_value = "Warn")]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Command {
    Generate(generate::Command),
    Params(params::Command),
    Templates(templates::Command),
    Validate(validate::Command),
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    simplelog::SimpleLogger::init(args.log_level, simplelog::Config::default())
        .with_context(|| "configuring logging")?;

    use Command::*;
    match &args.command {
        Generate(cmd) => generate::run(cmd),
        Params(cmd) => params::run(cmd),
        Templates(cmd) => templates::run(cmd),
        Validate(cmd) => validate::run(cmd),
    }
}

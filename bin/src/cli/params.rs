use anyhow::{Context, Result};
use clap::Args;
use profile::params::ParameterSet;

use super::templateargs::TemplateArgs;

/// Prints the parameters declared by a profile template as JSON.
#[derive(Args, Debug)]
pub struct Command {
    /// Options selecting the profile template.
    #[command(flatten)]
    template: TemplateArgs,
}

/// Runs the subcommand.
pub fn run(cmd: &Command) -> Result<()> {
    println!("{}", to_json(cmd)?);
    Ok(())
}

/// Renders the declared parameters of the selected template as pretty-printed JSON.
fn to_json(cmd: &Command) -> Result<String> {
    let tmpl = cmd.template.load_template()?;
    let params = ParameterSet::for_template(&tmpl);
    serde_json::to_string_pretty(&params).with_context(|| "serialising parameters")
}

use anyhow::{Context, Result, bail};
use clap::Args;
use profile::{
    params::ParameterSet,
    validate::{self, ParameterErrors},
};

use super::{paramargs::ParamArgs, templateargs::TemplateArgs};

/// Checks parameter values and prints the errors found as JSON.
#[derive(Args, Debug)]
pub struct Command {
    /// Options selecting the profile template.
    #[command(flatten)]
    template: TemplateArgs,

    /// Parameter values.
    #[command(flatten)]
    params: ParamArgs,
}

/// Runs the subcommand.
pub fn run(cmd: &Command) -> Result<()> {
    let errors = check(cmd)?;
    let report = serde_json::to_string_pretty(&errors).with_context(|| "serialising report")?;
    println!("{report}");

    if !errors.is_empty() {
        bail!("parameters are invalid: {errors}");
    }
    Ok(())
}

/// Returns the validation errors for the parameters, which is empty if they are valid.
fn check(cmd: &Command) -> Result<ParameterErrors> {
    let tmpl = cmd.template.load_template()?;
    let params = ParameterSet::for_template(&tmpl);
    let bound = cmd.params.bind(&params)?;

    Ok(validate::validate(&bound).err().unwrap_or_default())
}

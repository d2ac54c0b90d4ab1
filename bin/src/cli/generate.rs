
use std::{io::Write, path::PathBuf};

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use clap::Args;
use profile::{params::ParameterSet, request, rspec};

use super::{paramargs::ParamArgs, templateargs::TemplateArgs};

/// Generates the request RSpec for a profile from parameter values.
#[derive(Args, Debug)]
pub struct Command {
    /// Options selecting the profile template.
    #[command(flatten)]
    template: TemplateArgs,

    /// Parameter values.
    #[command(flatten)]
    params: ParamArgs,

    /// Path to write the RSpec to. It is written to standard output if not given.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Omit the tour (description and instructions) from the RSpec.
    #[arg(long)]
    no_tour: bool,
}

/// Runs the subcommand.
pub fn run(cmd: &Command) -> Result<()> {
    let rspec = render(cmd)?;

    match &cmd.output {
        Some(path) => write_output(path, &rspec),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rspec.as_bytes())
                .with_context(|| "writing RSpec to stdout")
        }
    }
}

/// Binds, validates and builds the request, returning the serialised RSpec.
fn render(cmd: &Command) -> Result<String> {
    let tmpl = cmd.template.load_template()?;
    let params = ParameterSet::for_template(&tmpl);
    let bound = cmd.params.bind(&params)?;

    let request =
        request::build_request(&tmpl, &bound, !cmd.no_tour).with_context(|| "building request")?;

    rspec::to_string(&request).with_context(|| "serialising request")
}

fn write_output(path: &std::path::Path, rspec: &str) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("opening output file {:?}", path))?;
    file.write_all(rspec.as_bytes())
        .with_context(|| format!("writing output file {:?}", path))?;
    file.commit()
        .with_context(|| format!("committing output file {:?}", path))?;
    log::info!("wrote RSpec to {:?}", path);
    Ok(())
}

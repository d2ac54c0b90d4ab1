use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::templateargs;

/// Lists the available profile templates.
#[derive(Args, Debug)]
pub struct Command {
    /// Path to a YAML file of profile templates to list instead of the built-in templates.
    #[arg(long)]
    template_file: Option<PathBuf>,
}

/// Runs the subcommand.
pub fn run(cmd: &Command) -> Result<()> {
    for line in listing(cmd)? {
        println!("{line}");
    }
    Ok(())
}

/// One tab-separated line per template: name, summary and image labels.
fn listing(cmd: &Command) -> Result<Vec<String>> {
    let templates = templateargs::load_templates(cmd.template_file.as_deref())?;
    Ok(templates
        .iter()
        .map(|tmpl| {
            let labels: Vec<&str> = tmpl.images.iter().map(|image| image.label.as_str()).collect();
            format!("{}\t{}\t[{}]", tmpl.name, tmpl.summary, labels.join(", "))
        })
        .collect())
}

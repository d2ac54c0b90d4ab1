use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use profile::template::{self, ProfileTemplate, Templates};

/// CLI arguments selecting a [ProfileTemplate].
#[derive(Args, Clone, Debug)]
pub struct TemplateArgs {
    /// Name of the profile template to use.
    #[arg(long, default_value = template::DEFAULT_TEMPLATE)]
    pub template: String,

    /// Path to a YAML file of profile templates to use instead of the built-in templates.
    #[arg(long)]
    pub template_file: Option<PathBuf>,
}

impl TemplateArgs {
    /// Loads the selected template.
    pub fn load_template(&self) -> Result<ProfileTemplate> {
        let templates = load_templates(self.template_file.as_deref())?;
        let tmpl = templates
            .get(&self.template)
            .with_context(|| format!("selecting template {:?}", self.template))?;
        log::debug!("using template {:?}", tmpl.name);
        Ok(tmpl.clone())
    }
}

/// Loads templates from `path`, or the built-in templates if not given.
pub fn load_templates(path: Option<&std::path::Path>) -> Result<Templates> {
    match path {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening template file {:?}", path))?;
            template::load(std::io::BufReader::new(file))
                .with_context(|| format!("loading template file {:?}", path))
        }
        None => template::builtin().with_context(|| "loading built-in templates"),
    }
}

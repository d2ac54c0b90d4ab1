use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use profile::{
    args::{self, ProfileParams, RawArgSet},
    params::ParameterSet,
};

/// CLI arguments supplying raw parameter values.
#[derive(Args, Clone, Debug)]
pub struct ParamArgs {
    /// Sets a parameter, as NAME=VALUE. May be given multiple times. Takes precedence over
    /// --params-file.
    #[arg(long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<String>,

    /// Path to a YAML mapping of parameter names to values.
    #[arg(long)]
    pub params_file: Option<PathBuf>,
}

impl ParamArgs {
    /// Collects the raw values from the file and then the individual assignments.
    pub fn raw_args(&self) -> Result<RawArgSet> {
        let mut raw = match &self.params_file {
            Some(path) => {
                let file = std::fs::File::open(path)
                    .with_context(|| format!("opening parameters file {:?}", path))?;
                RawArgSet::from_yaml_reader(std::io::BufReader::new(file))
                    .with_context(|| format!("reading parameters file {:?}", path))?
            }
            None => RawArgSet::default(),
        };

        let mut assigned = RawArgSet::default();
        for assignment in &self.params {
            assigned
                .set_assignment(assignment)
                .with_context(|| "parsing --param")?;
        }
        raw.merge(assigned);

        Ok(raw)
    }

    /// Binds the raw values against `params`.
    pub fn bind(&self, params: &ParameterSet) -> Result<ProfileParams> {
        let raw = self.raw_args()?;
        let bound = args::bind(params, &raw).with_context(|| "binding parameters")?;
        log::info!("bound parameters: {bound:?}");
        Ok(bound)
    }
}

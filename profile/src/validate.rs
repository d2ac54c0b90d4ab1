//! Validation of bound [ProfileParams].

use serde::Serialize;

use crate::{args::ProfileParams, params};

pub const TEMP_FS_SIZE_MIN: i64 = 0;
pub const TEMP_FS_SIZE_MAX: i64 = 200;

/// A problem with one or more parameter values, attributed to the offending fields.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ParameterError {
    pub message: String,
    pub fields: Vec<params::ParamId>,
}

/// All [ParameterError]s reported for a set of parameters.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ParameterErrors {
    pub errors: Vec<ParameterError>,
}

impl ParameterErrors {
    pub fn report(&mut self, err: ParameterError) {
        self.errors.push(err);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `Err(self)` if any errors have been reported.
    pub fn verify(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Returns true if any reported error is attributed to `field`.
    pub fn has_field(&self, field: params::ParamId) -> bool {
        self.errors.iter().any(|err| err.fields.contains(&field))
    }
}

impl std::fmt::Display for ParameterErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            let fields: Vec<&str> = err.fields.iter().map(|field| field.0).collect();
            write!(f, "{} [{}]", err.message, fields.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ParameterErrors {}

/// Checks the bound parameters, collecting every problem found.
pub fn validate(profile: &ProfileParams) -> Result<(), ParameterErrors> {
    let mut errors = ParameterErrors::default();

    if !(TEMP_FS_SIZE_MIN..=TEMP_FS_SIZE_MAX).contains(&profile.temp_fs_size) {
        log::debug!(
            "{} value {} out of range",
            params::TEMP_FS_SIZE,
            profile.temp_fs_size
        );
        errors.report(ParameterError {
            message: format!(
                "Please specify a size of at least {TEMP_FS_SIZE_MIN}GB and at most \
                 {TEMP_FS_SIZE_MAX}GB"
            ),
            fields: vec![params::TEMP_FS_SIZE],
        });
    }

    errors.verify()
}

//! Binding of raw caller supplied values to the declared [params::ParameterSet].
//!
//! Values that are unknown, mistyped, or outside an enumeration are rejected here, before
//! [crate::validate] sees them.


use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::params::{self, ArgValue, ParamId, ParamType, ParameterSet};

#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("unknown parameter {name:?}")]
    UnknownParam { name: String },
    #[error("parameter {param} got {value:?} which is not {expected}")]
    InvalidValue {
        param: ParamId,
        value: String,
        expected: &'static str,
    },
    #[error("parameter {param} got {value:?} which is not one of: {}", .legal.join(", "))]
    NotLegalValue {
        param: ParamId,
        value: String,
        legal: Vec<String>,
    },
    #[error("expected assignment of the form NAME=VALUE, got {0:?}")]
    BadAssignment(String),
    #[error("parameter {0} is not declared")]
    Undeclared(ParamId),
    #[error("parsing parameter values: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}

/// An unbound value as supplied by the caller, from any YAML scalar.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawArg {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    /// An explicit null, read as empty text.
    Null,
}

impl std::fmt::Display for RawArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use RawArg::*;
        match self {
            Boolean(b) => write!(f, "{b}"),
            Integer(i) => write!(f, "{i}"),
            Float(x) => write!(f, "{x}"),
            Text(s) => f.write_str(s),
            Null => Ok(()),
        }
    }
}

/// Raw values keyed by parameter name. Later sources override earlier ones via [RawArgSet::merge].
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct RawArgSet {
    args: BTreeMap<String, RawArg>,
}

impl RawArgSet {
    /// Reads a YAML mapping of parameter name to scalar value.
    pub fn from_yaml_str(s: &str) -> Result<Self, BindError> {
        Ok(serde_yaml_ng::from_str(s)?)
    }

    pub fn from_yaml_reader<R: std::io::Read>(rdr: R) -> Result<Self, BindError> {
        Ok(serde_yaml_ng::from_reader(rdr)?)
    }

    pub fn set<S: Into<String>>(&mut self, name: S, arg: RawArg) {
        self.args.insert(name.into(), arg);
    }

    /// Sets a value from a `NAME=VALUE` assignment. The value is kept as text.
    pub fn set_assignment(&mut self, assignment: &str) -> Result<(), BindError> {
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| BindError::BadAssignment(assignment.into()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(BindError::BadAssignment(assignment.into()));
        }
        self.set(name, RawArg::Text(value.into()));
        Ok(())
    }

    /// Overrides values in self with those in `other`.
    pub fn merge(&mut self, other: RawArgSet) {
        self.args.extend(other.args);
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

/// Typed arguments for every declared parameter, defaults included.
#[derive(Debug, Default)]
pub struct ArgSet {
    args: HashMap<ParamId, ArgValue>,
}

impl ArgSet {
    pub fn set(&mut self, param_id: ParamId, arg: ArgValue) {
        self.args.insert(param_id, arg);
    }

    pub fn get(&self, param_id: &ParamId) -> Option<&ArgValue> {
        self.args.get(param_id)
    }

    fn string(&self, param_id: ParamId) -> Result<String, BindError> {
        match self.get(&param_id) {
            Some(ArgValue::String(s)) => Ok(s.clone()),
            Some(other) => Err(mistyped(param_id, other, "a string")),
            None => Err(BindError::Undeclared(param_id)),
        }
    }

    fn integer(&self, param_id: ParamId) -> Result<i64, BindError> {
        match self.get(&param_id) {
            Some(ArgValue::Integer(i)) => Ok(*i),
            Some(other) => Err(mistyped(param_id, other, "an integer")),
            None => Err(BindError::Undeclared(param_id)),
        }
    }

    fn boolean(&self, param_id: ParamId) -> Result<bool, BindError> {
        match self.get(&param_id) {
            Some(ArgValue::Boolean(b)) => Ok(*b),
            Some(other) => Err(mistyped(param_id, other, "a boolean")),
            None => Err(BindError::Undeclared(param_id)),
        }
    }
}

fn mistyped(param: ParamId, value: &ArgValue, expected: &'static str) -> BindError {
    BindError::InvalidValue {
        param,
        value: format!("{value:?}"),
        expected,
    }
}

/// The bound values of a profile's parameters, threaded explicitly through validation, building
/// and serialisation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProfileParams {
    /// Disk image URN.
    pub os_image: String,
    /// Hardware type constraint, empty for no preference.
    pub phystype: String,
    /// Temporary filesystem size in GB.
    pub temp_fs_size: i64,
    /// Use all available space for the temporary filesystem instead of `temp_fs_size`.
    pub temp_fs_max: bool,
    pub temp_fs_mount: String,
}

impl ProfileParams {
    pub fn from_args(args: &ArgSet) -> Result<Self, BindError> {
        Ok(Self {
            os_image: args.string(params::OS_IMAGE)?,
            phystype: args.string(params::PHYSTYPE)?,
            temp_fs_size: args.integer(params::TEMP_FS_SIZE)?,
            temp_fs_max: args.boolean(params::TEMP_FS_MAX)?,
            temp_fs_mount: args.string(params::TEMP_FS_MOUNT)?,
        })
    }
}

/// Binds `raw` against the declared `params`, filling in defaults for omitted parameters.
pub fn bind_args(params: &ParameterSet, raw: &RawArgSet) -> Result<ArgSet, BindError> {
    if let Some(name) = raw.args.keys().find(|name| params.find(name).is_none()) {
        return Err(BindError::UnknownParam { name: name.clone() });
    }

    let mut args = ArgSet::default();
    for param in params.iter() {
        let value = match raw.args.get(param.id.0) {
            Some(raw_arg) => convert(param.id, &param.param_type, raw_arg)?,
            None => param.default.clone(),
        };
        log::trace!("bound {} = {:?}", param.id, value);
        args.set(param.id, value);
    }
    Ok(args)
}

/// Binds `raw` against the declared `params` and extracts the [ProfileParams].
pub fn bind(params: &ParameterSet, raw: &RawArgSet) -> Result<ProfileParams, BindError> {
    let args = bind_args(params, raw)?;
    ProfileParams::from_args(&args)
}

fn convert(param: ParamId, param_type: &ParamType, raw: &RawArg) -> Result<ArgValue, BindError> {
    let invalid = || BindError::InvalidValue {
        param,
        value: raw.to_string(),
        expected: param_type.expected(),
    };

    match param_type {
        ParamType::String => Ok(ArgValue::String(raw.to_string())),
        ParamType::Integer { .. } => match raw {
            RawArg::Integer(i) => Ok(ArgValue::Integer(*i)),
            RawArg::Text(s) => s
                .trim()
                .parse::<i64>()
                .map(ArgValue::Integer)
                .map_err(|_| invalid()),
            RawArg::Boolean(_) | RawArg::Float(_) | RawArg::Null => Err(invalid()),
        },
        ParamType::Boolean => match raw {
            RawArg::Boolean(b) => Ok(ArgValue::Boolean(*b)),
            RawArg::Integer(0) => Ok(ArgValue::Boolean(false)),
            RawArg::Integer(1) => Ok(ArgValue::Boolean(true)),
            RawArg::Text(s) => parse_bool(s).map(ArgValue::Boolean).ok_or_else(invalid),
            RawArg::Integer(_) | RawArg::Float(_) | RawArg::Null => Err(invalid()),
        },
        ParamType::Enum { legal_values } => {
            let value = raw.to_string();
            if legal_values.iter().any(|legal| legal.value == value) {
                Ok(ArgValue::String(value))
            } else {
                Err(BindError::NotLegalValue {
                    param,
                    value,
                    legal: legal_values.iter().map(|legal| legal.value.clone()).collect(),
                })
            }
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

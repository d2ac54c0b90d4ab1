//! Declared parameters of a profile.
//!
//! The [ParameterSet] is what the portal form is rendered from. It can be serialised to JSON for
//! that purpose.


use serde::Serialize;

use crate::{template::ProfileTemplate, validate};

/// Name of a parameter as presented to the portal.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct ParamId(pub &'static str);

impl std::fmt::Display for ParamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const OS_IMAGE: ParamId = ParamId("osImage");
pub const PHYSTYPE: ParamId = ParamId("phystype");
pub const TEMP_FS_SIZE: ParamId = ParamId("tempFileSystemSize");
pub const TEMP_FS_MAX: ParamId = ParamId("tempFileSystemMax");
pub const TEMP_FS_MOUNT: ParamId = ParamId("tempFileSystemMount");

/// Typed value of a parameter, either its default or a bound argument.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    String(String),
    Integer(i64),
    Boolean(bool),
}

/// A selectable value of an enumerated parameter.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LegalValue {
    pub value: String,
    pub label: String,
}

/// Indicates the required type of an argument, and any constraints the form should show.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParamType {
    String,
    Integer {
        /// Advisory range. Enforced by [validate::validate] rather than at binding.
        min: Option<i64>,
        max: Option<i64>,
    },
    Boolean,
    Enum { legal_values: Vec<LegalValue> },
}

impl ParamType {
    /// Human-readable description of values accepted by this type.
    pub fn expected(&self) -> &'static str {
        use ParamType::*;
        match self {
            String => "a string",
            Integer { .. } => "an integer",
            Boolean => "a boolean (true/false, yes/no, 1/0)",
            Enum { .. } => "one of the legal values",
        }
    }
}

/// Describes an input parameter of a profile.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Param {
    pub id: ParamId,
    /// Short name shown as the form label.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(flatten)]
    pub param_type: ParamType,
    pub default: ArgValue,
    /// Shown in the advanced section of the form.
    pub advanced: bool,
}

/// The [Param]s of a profile, in declaration order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ParameterSet {
    pub params: Vec<Param>,
}

impl ParameterSet {
    /// Declares the parameters for the given template.
    pub fn for_template(tmpl: &ProfileTemplate) -> Self {
        let hardware_hint = if tmpl.hardware_types.is_empty() {
            String::new()
        } else {
            format!(" ({})", tmpl.hardware_types.join(", "))
        };

        Self {
            params: vec![
                Param {
                    id: OS_IMAGE,
                    name: "Select OS image".into(),
                    long_description: None,
                    param_type: ParamType::Enum {
                        legal_values: tmpl
                            .images
                            .iter()
                            .map(|image| LegalValue {
                                value: image.urn.clone(),
                                label: image.label.clone(),
                            })
                            .collect(),
                    },
                    default: ArgValue::String(tmpl.default_image.clone()),
                    advanced: false,
                },
                Param {
                    id: PHYSTYPE,
                    name: "Physical node type".into(),
                    long_description: Some(format!(
                        "Specify a physical node type{hardware_hint} instead of letting the \
                         resource mapper choose for you."
                    )),
                    param_type: ParamType::String,
                    default: ArgValue::String(String::new()),
                    advanced: false,
                },
                Param {
                    id: TEMP_FS_SIZE,
                    name: "Temporary Filesystem Size".into(),
                    long_description: Some(
                        "The size in GB of a temporary file system to mount on each of your \
                         nodes. Temporary means that they are deleted when your experiment is \
                         terminated. The images provided by the system have small root \
                         partitions, so use this option if you expect you will need more space \
                         to build your software packages or store temporary files."
                            .into(),
                    ),
                    param_type: ParamType::Integer {
                        min: Some(validate::TEMP_FS_SIZE_MIN),
                        max: Some(validate::TEMP_FS_SIZE_MAX),
                    },
                    default: ArgValue::Integer(0),
                    advanced: true,
                },
                Param {
                    id: TEMP_FS_MAX,
                    name: "Temp Filesystem Max Space".into(),
                    long_description: Some(
                        "Instead of specifying a size for your temporary filesystem, check this \
                         box to allocate all available disk space. Leave the size above as zero."
                            .into(),
                    ),
                    param_type: ParamType::Boolean,
                    default: ArgValue::Boolean(true),
                    advanced: true,
                },
                Param {
                    id: TEMP_FS_MOUNT,
                    name: "Temporary Filesystem Mount Point".into(),
                    long_description: Some(
                        "Mount the temporary file system at this mount point; in general you do \
                         not need to change this, but we provide the option just in case your \
                         software is finicky."
                            .into(),
                    ),
                    param_type: ParamType::String,
                    default: ArgValue::String(tmpl.default_mount.clone()),
                    advanced: true,
                },
            ],
        }
    }

    /// Looks up a declared parameter by its portal name.
    pub fn find(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|param| param.id.0 == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Param> {
        self.params.iter()
    }
}

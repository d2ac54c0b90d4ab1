//! Profile templates: the per-variant data that the generator is parameterised by.
//!
//! Templates are read from YAML, either the set built into the crate or a user provided file.

#[cfg(test)]
mod tests;

use std::{collections::BTreeMap, io::Read};

use serde::Deserialize;

const BUILTIN_YAML: &str = include_str!("builtin.yaml");

/// Name of the built-in template used when none is requested.
pub const DEFAULT_TEMPLATE: &str = "colab-ubuntu";

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("parsing templates: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
    #[error("template {name:?} not found")]
    NotFound { name: String },
    #[error("template {name:?} is invalid: {reason}")]
    Invalid { name: String, reason: String },
}

/// Loads the templates built into the crate.
pub fn builtin() -> Result<Templates, TemplateError> {
    load_str(BUILTIN_YAML)
}

/// Loads templates from YAML read from `rdr`.
pub fn load<R: Read>(rdr: R) -> Result<Templates, TemplateError> {
    let yaml: YamlTemplates = serde_yaml_ng::from_reader(rdr)?;
    yaml.prepare()
}

pub fn load_str(s: &str) -> Result<Templates, TemplateError> {
    let yaml: YamlTemplates = serde_yaml_ng::from_str(s)?;
    yaml.prepare()
}

/// Collection of named [ProfileTemplate]s.
#[derive(Debug)]
pub struct Templates {
    templates: BTreeMap<String, ProfileTemplate>,
}

impl Templates {
    pub fn get(&self, name: &str) -> Result<&ProfileTemplate, TemplateError> {
        self.templates
            .get(name)
            .ok_or_else(|| TemplateError::NotFound { name: name.into() })
    }

    /// Iterates over the templates in name order.
    pub fn iter(&self) -> impl Iterator<Item = &ProfileTemplate> {
        self.templates.values()
    }
}

/// One selectable entry in a template's image menu.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct ImageChoice {
    pub urn: String,
    pub label: String,
}

/// Describes one profile variant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProfileTemplate {
    pub name: String,
    pub summary: String,
    /// Client ID of the requested node. Also prefixes the block store name.
    pub node_id: String,
    pub images: Vec<ImageChoice>,
    /// URN of the image selected when the caller does not pick one. Always one of `images`.
    pub default_image: String,
    pub default_mount: String,
    /// Hardware types suggested to the user for `phystype`. Not enforced.
    pub hardware_types: Vec<String>,
}

#[derive(Deserialize, Debug)]
struct YamlTemplates {
    templates: BTreeMap<String, YamlTemplate>,
}

impl YamlTemplates {
    fn prepare(self) -> Result<Templates, TemplateError> {
        let templates = self
            .templates
            .into_iter()
            .map(|(name, tmpl)| {
                let prepared = tmpl.prepare(name.clone())?;
                Ok((name, prepared))
            })
            .collect::<Result<BTreeMap<_, _>, TemplateError>>()?;
        log::debug!("loaded {} profile templates", templates.len());
        Ok(Templates { templates })
    }
}

#[derive(Deserialize, Debug)]
struct YamlTemplate {
    #[serde(default)]
    summary: String,
    #[serde(default = "default_node_id")]
    node_id: String,
    #[serde(default = "default_mount")]
    default_mount: String,
    default_image: Option<String>,
    images: Vec<ImageChoice>,
    #[serde(default)]
    hardware_types: Vec<String>,
}

fn default_node_id() -> String {
    "node".into()
}

fn default_mount() -> String {
    "/mydata".into()
}

impl YamlTemplate {
    /// Creates a [ProfileTemplate] from self. `name` is the key of the template within the parent
    /// [YamlTemplates].
    fn prepare(self, name: String) -> Result<ProfileTemplate, TemplateError> {
        let invalid = |reason: String| TemplateError::Invalid {
            name: name.clone(),
            reason,
        };

        if !lazy_regex::regex_is_match!(r#"^[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?$"#, &self.node_id)
        {
            return Err(invalid(format!(
                "node_id {:?} must be alphanumeric with inner hyphens",
                self.node_id
            )));
        }
        if !lazy_regex::regex_is_match!(r#"^/\S*$"#, &self.default_mount) {
            return Err(invalid(format!(
                "default_mount {:?} must be an absolute path without whitespace",
                self.default_mount
            )));
        }
        if self.images.is_empty() {
            return Err(invalid("images must not be empty".into()));
        }
        for image in &self.images {
            if !lazy_regex::regex_is_match!(r#"^urn:publicid:IDN\+[^+\s]+\+image\+\S+$"#, &image.urn)
            {
                return Err(invalid(format!("{:?} is not a disk image URN", image.urn)));
            }
        }

        let default_image = match self.default_image {
            Some(urn) => {
                if !self.images.iter().any(|image| image.urn == urn) {
                    return Err(invalid(format!(
                        "default_image {urn:?} is not one of the listed images"
                    )));
                }
                urn
            }
            None => self.images[0].urn.clone(),
        };

        Ok(ProfileTemplate {
            name,
            summary: self.summary,
            node_id: self.node_id,
            images: self.images,
            default_image,
            default_mount: self.default_mount,
            hardware_types: self.hardware_types,
        })
    }
}

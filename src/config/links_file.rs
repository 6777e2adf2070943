use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use url::Url;

use super::params::value_from_yaml;
use crate::domain::{Link, LinkSet, Value};

/// On-disk document describing the links of an API, in YAML or JSON
#[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
pub struct LinksFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    pub links: BTreeMap<String, Link>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, serde_yaml::Value>,
}

impl LinksFile {
    /// Load from `path`. Files ending in `.json` are read as JSON, anything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read links file {}", path.display()))?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let parsed = if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        };
        parsed.with_context(|| format!("Invalid links file {}", path.display()))
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        serde_yaml::from_str(contents).context("Failed to parse YAML links document")
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).context("Failed to parse JSON links document")
    }

    /// Build the link set. `base_override` takes precedence over the document's `base`.
    pub fn link_set(&self, base_override: Option<&str>) -> Result<LinkSet> {
        let mut links: LinkSet = self
            .links
            .iter()
            .map(|(name, link)| (name.clone(), link.clone()))
            .collect();

        if let Some(base) = base_override.or(self.base.as_deref()) {
            let base = Url::parse(base).with_context(|| format!("Invalid base URI '{}'", base))?;
            links.set_base(Some(base));
        }

        Ok(links)
    }

    /// Default parameters of the document, classified by shape.
    ///
    /// Values go through YAML typing, so unquoted numbers are normalized
    /// (`price: 1.50` binds `1.5`). Quote them to keep the exact text.
    pub fn params(&self) -> Result<Vec<(String, Option<Value>)>> {
        self.params
            .iter()
            .map(|(name, value)| {
                let value = value_from_yaml(value.clone())
                    .with_context(|| format!("Invalid value for parameter '{}'", name))?;
                Ok((name.clone(), value))
            })
            .collect()
    }
}

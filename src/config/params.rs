// Parameter values from YAML/JSON documents and `name=value` arguments

use anyhow::{bail, Context, Result};
use serde_yaml::Value as YamlValue;

use crate::domain::{Bindings, Value};

/// Classify a document value by its shape.
///
/// Scalars become [`Value::Scalar`], sequences [`Value::Sequence`] and mappings
/// [`Value::Mapping`]. `null` yields `None` so the parameter stays unbound.
/// Composites nested inside composites are rejected.
pub fn value_from_yaml(value: YamlValue) -> Result<Option<Value>> {
    match value {
        YamlValue::Null => Ok(None),
        YamlValue::Sequence(items) => {
            let items = items
                .iter()
                .map(|item| scalar_text(item).context("Sequence items must be scalars"))
                .collect::<Result<Vec<_>>>()?;
            Ok(Some(Value::Sequence(items)))
        }
        YamlValue::Mapping(mapping) => {
            let entries = mapping
                .iter()
                .map(|(key, value)| {
                    let key = scalar_text(key).context("Mapping keys must be scalars")?;
                    let value = scalar_text(value)
                        .with_context(|| format!("Value of mapping key '{}' must be a scalar", key))?;
                    Ok((key, value))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Some(Value::Mapping(entries)))
        }
        YamlValue::Tagged(tagged) => value_from_yaml(tagged.value),
        scalar => Ok(scalar_text(&scalar).map(Value::Scalar)),
    }
}

fn scalar_text(value: &YamlValue) -> Option<String> {
    match value {
        YamlValue::Bool(b) => Some(b.to_string()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Tagged(tagged) => scalar_text(&tagged.value),
        YamlValue::Null | YamlValue::Sequence(_) | YamlValue::Mapping(_) => None,
    }
}

const NULL_LITERALS: [&str; 4] = ["~", "null", "Null", "NULL"];

/// Parse a `name=value` argument.
///
/// Flow sequences and mappings are read as YAML, so `tag=[a, b]` binds a
/// sequence and `map={x: 1}` a mapping. Anything else binds its text exactly
/// as written (`q=a: b`, `anchor=#top`, `zip=007`). An empty value binds the
/// empty string and `~`/`null` leave the name unbound.
pub fn parse_param(arg: &str) -> Result<(String, Option<Value>)> {
    let Some((name, raw)) = arg.split_once('=') else {
        bail!("Invalid parameter '{}': expected NAME=VALUE", arg);
    };

    let name = name.trim();
    if name.is_empty() {
        bail!("Invalid parameter '{}': name is empty", arg);
    }

    if raw.is_empty() {
        return Ok((name.to_string(), Some(Value::Scalar(String::new()))));
    }

    let trimmed = raw.trim();
    if NULL_LITERALS.contains(&trimmed) {
        return Ok((name.to_string(), None));
    }

    if !(trimmed.starts_with('[') || trimmed.starts_with('{')) {
        return Ok((name.to_string(), Some(Value::Scalar(raw.to_string()))));
    }

    let value = match serde_yaml::from_str::<YamlValue>(raw) {
        Ok(composite @ (YamlValue::Sequence(_) | YamlValue::Mapping(_))) => {
            value_from_yaml(composite).with_context(|| format!("Invalid value for parameter '{}'", name))?
        }
        // Not a flow collection after all: take the text literally
        _ => Some(Value::Scalar(raw.to_string())),
    };

    Ok((name.to_string(), value))
}

/// Bind every `(name, value)` pair whose value is not null
pub fn bind_all<I>(bindings: &mut Bindings, params: I)
where
    I: IntoIterator<Item = (String, Option<Value>)>,
{
    for (name, value) in params {
        match value {
            Some(value) => {
                bindings.bind(name, value);
            }
            None => tracing::debug!("Leaving parameter '{}' unbound", name),
        }
    }
}

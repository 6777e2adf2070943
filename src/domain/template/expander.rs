// Expansion of a single parsed expression

use super::ast::{Expression, Modifier, VarSpec};
use super::bindings::Bindings;
use super::encoder::encode;
use super::operator::Operator;
use super::value::Value;

/// Separator used inside one non-exploded composite, whatever the operator
const COMPOSITE_SEPARATOR: &str = ",";

/// Expand one expression against `bindings`.
///
/// Unbound variables and empty composites contribute nothing. When no variable
/// contributes, the result is empty and the operator prefix is not emitted.
pub fn expand(expression: &Expression, bindings: &Bindings) -> String {
    let operator = expression.operator;

    let contributions: Vec<String> = expression
        .varspecs
        .iter()
        .filter_map(|varspec| match bindings.get(&varspec.name) {
            None => {
                tracing::trace!("Variable '{}' is unbound", varspec.name);
                None
            }
            Some(value) if value.is_empty_composite() => None,
            Some(value) => Some(expand_varspec(varspec, value, operator)),
        })
        .collect();

    let joined = contributions.join(operator.separator());
    if joined.is_empty() {
        return joined;
    }

    let mut result = String::with_capacity(operator.prefix().len() + joined.len());
    result.push_str(operator.prefix());
    result.push_str(&joined);
    result
}

fn expand_varspec(varspec: &VarSpec, value: &Value, operator: Operator) -> String {
    let name = varspec.name.as_str();
    let named = operator.is_named();

    match (value, varspec.modifier) {
        (Value::Scalar(scalar), Modifier::Prefix(length)) => {
            render(name, &encode(truncate(scalar, length)), named)
        }
        (Value::Scalar(scalar), _) => render(name, &encode(scalar), named),
        (Value::Sequence(items), Modifier::Explode) => items
            .iter()
            .map(|item| render(name, &encode(item), named))
            .collect::<Vec<_>>()
            .join(operator.separator()),
        (Value::Sequence(items), _) => {
            let list = items
                .iter()
                .map(|item| encode(item))
                .collect::<Vec<_>>()
                .join(COMPOSITE_SEPARATOR);
            render(name, &list, named)
        }
        (Value::Mapping(entries), Modifier::Explode) => entries
            .iter()
            .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
            .collect::<Vec<_>>()
            .join(operator.separator()),
        (Value::Mapping(entries), _) => {
            let list = entries
                .iter()
                .flat_map(|(key, value)| [encode(key), encode(value)])
                .collect::<Vec<_>>()
                .join(COMPOSITE_SEPARATOR);
            render(name, &list, named)
        }
    }
}

fn render(name: &str, encoded: &str, named: bool) -> String {
    if named {
        format!("{}={}", name, encoded)
    } else {
        encoded.to_string()
    }
}

/// First `length` characters of `value`
fn truncate(value: &str, length: usize) -> &str {
    match value.char_indices().nth(length) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}

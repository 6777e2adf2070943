// URI template orchestration: parse, expand every expression, stitch literals back

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ast::{Expression, ParsedTemplate, TemplatePart};
use super::bindings::Bindings;
use super::expander::expand;
use super::parser::TemplateParser;

/// An immutable URI template.
///
/// Templates hold no expansion state, so a single instance can be shared and
/// built from many threads at once. Every [`build`](Self::build) call takes its
/// own [`Bindings`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UriTemplate {
    template: String,
}

impl UriTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    pub fn parse(&self) -> ParsedTemplate<'_> {
        TemplateParser::parse(&self.template)
    }

    /// All expressions in template order, with their raw span text
    pub fn expressions(&self) -> Vec<(&str, Expression)> {
        self.parse()
            .parts
            .into_iter()
            .filter_map(|part| match part {
                TemplatePart::Expression { raw, expression } => Some((raw, expression)),
                TemplatePart::Literal(_) => None,
            })
            .collect()
    }

    /// Variable names in the order they first appear
    pub fn variable_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for (_, expression) in self.expressions() {
            for varspec in expression.varspecs {
                if !names.contains(&varspec.name) {
                    names.push(varspec.name);
                }
            }
        }
        names
    }

    /// Whether any expression references the variable `name`. Case sensitive.
    pub fn has_parameter(&self, name: &str) -> bool {
        self.expressions().iter().any(|(_, expression)| {
            expression
                .varspecs
                .iter()
                .any(|varspec| varspec.name == name)
        })
    }

    /// Expand the template, consuming `bindings`
    pub fn build(&self, bindings: Bindings) -> String {
        build(&self.template, bindings)
    }
}

/// Expand `template` against `bindings`.
///
/// Literal text is copied as is and each expression is replaced by its expansion,
/// left to right. A template without expressions is returned unchanged.
pub fn build(template: &str, bindings: Bindings) -> String {
    let parsed = TemplateParser::parse(template);
    if !parsed.has_expressions() {
        return template.to_string();
    }

    let mut uri = String::with_capacity(template.len());
    for part in &parsed.parts {
        match part {
            TemplatePart::Literal(text) => uri.push_str(text),
            TemplatePart::Expression { expression, .. } => {
                uri.push_str(&expand(expression, &bindings))
            }
        }
    }

    tracing::debug!("Expanded URI template '{}' into '{}'", template, uri);
    uri
}

impl From<&str> for UriTemplate {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

impl From<String> for UriTemplate {
    fn from(template: String) -> Self {
        Self::new(template)
    }
}

impl fmt::Display for UriTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

// Parsed representation of URI templates

use super::operator::Operator;

/// A template split into literal text and `{...}` expressions
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTemplate<'a> {
    pub parts: Vec<TemplatePart<'a>>,
}

impl<'a> ParsedTemplate<'a> {
    pub fn new(parts: Vec<TemplatePart<'a>>) -> Self {
        Self { parts }
    }

    /// Get all expressions in this template, paired with their raw span text
    pub fn expressions(&self) -> Vec<(&'a str, &Expression)> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                TemplatePart::Expression { raw, expression } => Some((*raw, expression)),
                _ => None,
            })
            .collect()
    }

    pub fn has_expressions(&self) -> bool {
        self.parts
            .iter()
            .any(|part| matches!(part, TemplatePart::Expression { .. }))
    }
}

/// A template consists of literal strings and expressions.
///
/// `raw` is the exact span text including braces.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplatePart<'a> {
    Literal(&'a str),
    Expression {
        raw: &'a str,
        expression: Expression,
    },
}

/// One `{...}` substitution unit
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub operator: Operator,
    pub varspecs: Vec<VarSpec>,
}

impl Expression {
    pub fn new(operator: Operator, varspecs: Vec<VarSpec>) -> Self {
        Self { operator, varspecs }
    }
}

/// A variable reference inside an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarSpec {
    pub name: String,
    pub modifier: Modifier,
}

impl VarSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifier: Modifier::None,
        }
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = modifier;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modifier {
    #[default]
    None,
    /// `name*`
    Explode,
    /// `name:N`, N is always positive
    Prefix(usize),
}

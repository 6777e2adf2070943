// Template scanner and expression parser
//
// Parsing never fails: anything that is not a well-formed `{...}` span is
// kept as literal text, and malformed modifiers fall back to plain varspecs.

use super::ast::{Expression, Modifier, ParsedTemplate, TemplatePart, VarSpec};
use super::operator::Operator;

const EXPLODE: char = '*';
const PREFIX: char = ':';
const VARSPEC_SEPARATOR: char = ',';

pub struct TemplateParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TemplateParser<'a> {
    pub fn parse(template: &'a str) -> ParsedTemplate<'a> {
        let mut parser = Self {
            input: template,
            pos: 0,
        };
        parser.parse_template()
    }

    fn parse_template(&mut self) -> ParsedTemplate<'a> {
        let mut parts = Vec::new();
        let mut literal_start = 0;

        while let Some(open) = self.find_from(self.pos, |ch| ch == '{') {
            let body_start = open + 1;
            let Some(stop) = self.find_from(body_start, |ch| ch == '{' || ch == '}') else {
                // Unterminated brace, rest of the input is literal
                break;
            };

            if self.input[stop..].starts_with('{') {
                // Nested or stray opening brace: restart the scan there
                self.pos = stop;
                continue;
            }

            if stop == body_start {
                // `{}` has no body and stays literal
                self.pos = stop + 1;
                continue;
            }

            if literal_start < open {
                parts.push(TemplatePart::Literal(&self.input[literal_start..open]));
            }

            let raw = &self.input[open..=stop];
            let expression = Self::parse_expression(&self.input[body_start..stop]);
            parts.push(TemplatePart::Expression { raw, expression });

            self.pos = stop + 1;
            literal_start = self.pos;
        }

        if literal_start < self.input.len() {
            parts.push(TemplatePart::Literal(&self.input[literal_start..]));
        }

        ParsedTemplate::new(parts)
    }

    /// Parse the interior of one `{...}` span
    pub fn parse_expression(body: &str) -> Expression {
        let (operator, rest) = match body.chars().next().and_then(Operator::from_char) {
            // Operator codes are single ASCII bytes
            Some(op) => (op, &body[1..]),
            None => (Operator::Simple, body),
        };

        let varspecs = rest
            .split(VARSPEC_SEPARATOR)
            .filter_map(Self::parse_varspec)
            .collect();

        Expression::new(operator, varspecs)
    }

    fn parse_varspec(token: &str) -> Option<VarSpec> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }

        let (name, modifier) = if let Some(name) = token.strip_suffix(EXPLODE) {
            (name.trim_end(), Modifier::Explode)
        } else if let Some((name, length)) = token.split_once(PREFIX) {
            let modifier = match length.trim().parse::<usize>() {
                Ok(n) if n > 0 => Modifier::Prefix(n),
                _ => {
                    tracing::warn!(
                        "Ignoring invalid prefix length '{}' for variable '{}'",
                        length,
                        name
                    );
                    Modifier::None
                }
            };
            (name.trim_end(), modifier)
        } else {
            (token, Modifier::None)
        };

        if name.is_empty() {
            tracing::warn!("Skipping varspec without a name: '{}'", token);
            return None;
        }

        Some(VarSpec::new(name).with_modifier(modifier))
    }

    fn find_from(&self, start: usize, pred: impl Fn(char) -> bool) -> Option<usize> {
        self.input[start..]
            .char_indices()
            .find(|(_, ch)| pred(*ch))
            .map(|(offset, _)| start + offset)
    }
}

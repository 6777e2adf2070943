// Template module for RFC 6570-style URI templates
//
// Supports the default, `+`, `#`, `.`, `/`, `;`, `?` and `&` operators with
// explode (`*`) and prefix (`:N`) modifiers. Expansion never fails.

mod ast;
mod bindings;
mod encoder;
mod expander;
mod operator;
mod parser;
mod uri_template;
mod value;

pub use ast::{Expression, Modifier, ParsedTemplate, TemplatePart, VarSpec};
pub use bindings::Bindings;
pub use encoder::encode;
pub use expander::expand;
pub use operator::{Operator, OperatorDescriptor};
pub use parser::TemplateParser;
pub use uri_template::{build, UriTemplate};
pub use value::Value;

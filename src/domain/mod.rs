// Domain model: URI templates and the hypermedia links that carry them

pub mod link;
pub mod template;

pub use link::{Link, LinkSet};
pub use template::{Bindings, UriTemplate, Value};

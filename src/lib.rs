//! URI template expansion for hypermedia-driven REST clients.
//!
//! Resource links discovered from an API are either literal URIs or templates
//! such as `http://host/v1/poi/search{?category*,tag:2,show}`. This crate turns
//! a template plus a set of parameters into the request URI:
//!
//! ```
//! use hyperuri::{Bindings, UriTemplate};
//!
//! let template = UriTemplate::new("http://host/v1/poi/search{?category*,tag:2,show}");
//! let bindings = Bindings::new()
//!     .with("category", vec!["Museum", "Garden"])
//!     .with("tag", "culture");
//!
//! assert_eq!(
//!     template.build(bindings),
//!     "http://host/v1/poi/search?category=Museum&category=Garden&tag=cu"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;

pub use domain::link::{Link, LinkSet};
pub use domain::template::{build, Bindings, Modifier, Operator, UriTemplate, Value};
pub use error::LinkError;

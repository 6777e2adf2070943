// Error types for hyperuri

use thiserror::Error;

/// Errors raised while resolving a named link into a request URI.
///
/// Template expansion itself never fails; these come from looking up the link,
/// validating parameters against it, and joining against a base URI.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    #[error("{parameter} is not a valid parameter for resource {resource}")]
    InvalidParameter { resource: String, parameter: String },

    #[error("Invalid URI '{uri}': {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },
}

// Hypermedia links discovered from the API and their resolution into request URIs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

use super::template::{Bindings, UriTemplate};
use crate::error::LinkError;

/// A single hypermedia link. Only templated links go through expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: UriTemplate,
    #[serde(default)]
    pub templated: bool,
}

impl Link {
    pub fn literal(href: impl Into<UriTemplate>) -> Self {
        Self {
            href: href.into(),
            templated: false,
        }
    }

    pub fn templated(href: impl Into<UriTemplate>) -> Self {
        Self {
            href: href.into(),
            templated: true,
        }
    }

    /// Expand the link. Literal links are returned verbatim and ignore `bindings`.
    pub fn expand(&self, bindings: Bindings) -> String {
        if self.templated {
            self.href.build(bindings)
        } else {
            self.href.as_str().to_string()
        }
    }

    pub fn accepts_parameter(&self, name: &str) -> bool {
        self.templated && self.href.has_parameter(name)
    }
}

/// Named links of one API version, optionally relative to a base URI
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkSet {
    links: BTreeMap<String, Link>,
    base: Option<Url>,
}

impl LinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_link(mut self, resource: impl Into<String>, link: Link) -> Self {
        self.insert(resource, link);
        self
    }

    pub fn with_base(mut self, base: Url) -> Self {
        self.base = Some(base);
        self
    }

    /// Add a link, replacing any previous link with the same resource name
    pub fn insert(&mut self, resource: impl Into<String>, link: Link) -> Option<Link> {
        self.links.insert(resource.into(), link)
    }

    pub fn set_base(&mut self, base: Option<Url>) {
        self.base = base;
    }

    pub fn base(&self) -> Option<&Url> {
        self.base.as_ref()
    }

    pub fn get(&self, resource: &str) -> Option<&Link> {
        self.links.get(resource)
    }

    pub fn has_resource(&self, resource: &str) -> bool {
        self.links.contains_key(resource)
    }

    /// Whether `resource` is a templated link that takes the parameter `name`
    pub fn has_resource_parameter(&self, resource: &str, name: &str) -> bool {
        self.get(resource)
            .map(|link| link.accepts_parameter(name))
            .unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Link)> {
        self.links.iter().map(|(name, link)| (name.as_str(), link))
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Turn `resource` plus `bindings` into a request URI.
    ///
    /// For templated links every bound name must appear in the template.
    pub fn resolve(&self, resource: &str, bindings: Bindings) -> Result<String, LinkError> {
        let link = self
            .get(resource)
            .ok_or_else(|| LinkError::UnknownResource(resource.to_string()))?;

        if link.templated {
            let mut names: Vec<&str> = bindings.names().collect();
            names.sort_unstable();
            if let Some(parameter) = names.into_iter().find(|name| !link.href.has_parameter(name)) {
                return Err(LinkError::InvalidParameter {
                    resource: resource.to_string(),
                    parameter: parameter.to_string(),
                });
            }
        }

        let uri = link.expand(bindings);

        match &self.base {
            Some(base) => join_relative(base, uri),
            None => Ok(uri),
        }
    }
}

/// Join a relative reference against `base`. Absolute URIs are returned untouched.
fn join_relative(base: &Url, uri: String) -> Result<String, LinkError> {
    match Url::parse(&uri) {
        Ok(_) => Ok(uri),
        Err(url::ParseError::RelativeUrlWithoutBase) => base
            .join(&uri)
            .map(String::from)
            .map_err(|source| LinkError::InvalidUri { uri, source }),
        Err(source) => Err(LinkError::InvalidUri { uri, source }),
    }
}

impl FromIterator<(String, Link)> for LinkSet {
    fn from_iter<I: IntoIterator<Item = (String, Link)>>(iter: I) -> Self {
        Self {
            links: iter.into_iter().collect(),
            base: None,
        }
    }
}

//! Namespace registry: the fixed prefix-to-URI table used by every lookup.

use std::fmt;

/// The `xml:` namespace (for `xml:id`, `xml:lang`).
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// XInclude namespace.
pub const XI_NS: &str = "http://www.w3.org/2001/XInclude";

/// TEI P5 namespace.
pub const TEI_NS: &str = "http://www.tei-c.org/ns/1.0";

/// Distributed Text Services namespace, used only for output fragments.
pub const DTS_NS: &str = "https://w3id.org/dts/api#";

/// Prefix bindings for documents. `dts` is deliberately not part of it.
pub const NAMESPACES: &[(&str, &str)] = &[("xml", XML_NS), ("xi", XI_NS), ("tei", TEI_NS)];

/// Look up the URI bound to a prefix.
///
/// # Examples
/// ```
/// use teidocs_analysis::namespace::{uri_for_prefix, TEI_NS};
///
/// assert_eq!(uri_for_prefix("tei"), Some(TEI_NS));
/// assert_eq!(uri_for_prefix("dts"), None);
/// ```
#[must_use]
pub fn uri_for_prefix(prefix: &str) -> Option<&'static str> {
    NAMESPACES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, uri)| *uri)
}

/// Look up the prefix bound to a URI.
#[must_use]
pub fn prefix_for_uri(uri: &str) -> Option<&'static str> {
    NAMESPACES
        .iter()
        .find(|(_, u)| *u == uri)
        .map(|(p, _)| *p)
}

/// A namespace-qualified element name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QName {
    pub namespace: &'static str,
    pub local: &'static str,
}

impl QName {
    #[must_use]
    pub const fn new(namespace: &'static str, local: &'static str) -> Self {
        Self { namespace, local }
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match prefix_for_uri(self.namespace) {
            Some(prefix) => write!(f, "{prefix}:{}", self.local),
            None => write!(f, "{{{}}}{}", self.namespace, self.local),
        }
    }
}

/// Shorthand for a name in the TEI namespace.
#[must_use]
pub const fn tei(local: &'static str) -> QName {
    QName::new(TEI_NS, local)
}

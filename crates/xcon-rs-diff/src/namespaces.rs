// crates/xcon-rs-diff/src/namespaces.rs

//! Namespace URIs used by conference-info-diff documents and the prefix
//! map applied when serializing.

/// `urn:ietf:params:xml:ns:xcon-conference-info` (RFC 6501).
pub const XCON_NS: &str = "urn:ietf:params:xml:ns:xcon-conference-info";

/// `urn:ietf:params:xml:ns:conference-info` (RFC 4575).
pub const CONFERENCE_INFO_NS: &str = "urn:ietf:params:xml:ns:conference-info";

/// `urn:ietf:params:xml:ns:patch-ops` (RFC 5261).
pub const PATCH_OPS_NS: &str = "urn:ietf:params:xml:ns:patch-ops";

/// The namespace bound to the reserved `xml` prefix.
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// The namespace of `xmlns` declarations themselves.
pub const XMLNS_NS: &str = "http://www.w3.org/2000/xmlns/";

/// An ordered prefix -> namespace URI map.
///
/// The empty prefix stands for the default namespace. When several
/// prefixes map to the same URI, the first inserted one wins in
/// [`NamespaceMap::prefix_for`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceMap {
    entries: Vec<(String, String)>,
}

impl NamespaceMap {
    /// Creates an empty map. Elements in unmapped namespaces get
    /// generated `ns{N}` prefixes when serialized.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Binds `prefix` to `uri`, replacing a previous binding of the prefix.
    pub fn insert(&mut self, prefix: impl Into<String>, uri: impl Into<String>) {
        let prefix = prefix.into();
        let uri = uri.into();
        if let Some(entry) = self.entries.iter_mut().find(|(p, _)| *p == prefix) {
            entry.1 = uri;
        } else {
            self.entries.push((prefix, uri));
        }
    }

    /// Builder-style variant of [`NamespaceMap::insert`].
    pub fn with(mut self, prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        self.insert(prefix, uri);
        self
    }

    /// Returns the preferred prefix for `uri` (`Some("")` for the default namespace).
    pub fn prefix_for(&self, uri: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, u)| u == uri)
            .map(|(p, _)| p.as_str())
    }

    /// Returns the URI bound to `prefix`.
    pub fn uri_for(&self, prefix: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, u)| u.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, u)| (p.as_str(), u.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NamespaceMap {
    /// XCON as the default namespace and `ci` for RFC 4575 conference-info.
    fn default() -> Self {
        Self::new()
            .with("", XCON_NS)
            .with("ci", CONFERENCE_INFO_NS)
    }
}

// crates/xcon-rs-diff/src/options.rs

//! Parse and serialization settings.

use crate::namespaces::NamespaceMap;

/// Settings for loading conference-info-diff documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Decode every XCON element inside `<add>`/`<replace>` content and
    /// fail on the first invalid one. Unknown XCON children of the root
    /// and unknown unqualified attributes on operations become errors
    /// instead of being skipped.
    pub strict: bool,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Settings for writing XML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Indentation width in spaces; `None` writes everything on one line.
    pub indent: Option<usize>,

    /// Emit `<?xml version="1.0" encoding="UTF-8"?>` before the root.
    pub xml_declaration: bool,

    /// Preferred prefixes per namespace URI.
    pub namespaces: NamespaceMap,
}

impl SerializeOptions {
    /// One line, no declaration, default prefixes. Handy for fragments.
    pub fn compact() -> Self {
        Self {
            indent: None,
            xml_declaration: false,
            ..Default::default()
        }
    }

    pub fn with_namespaces(mut self, namespaces: NamespaceMap) -> Self {
        self.namespaces = namespaces;
        self
    }
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            indent: Some(2),
            xml_declaration: true,
            namespaces: NamespaceMap::default(),
        }
    }
}

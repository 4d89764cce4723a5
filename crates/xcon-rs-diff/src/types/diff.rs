// crates/xcon-rs-diff/src/types/diff.rs

//! Patch operations (`<add>`, `<replace>`, `<remove>`) and the
//! `<conference-info-diff>` document that carries them.

use super::element::XconElement;
use super::enums::{Pos, Ws};
use crate::builder;
use crate::dom::{Attribute, Element, NamespaceDecl, Node};
use crate::error::XconError;
use crate::resolver;

/// Concatenates the text nodes of mixed content.
fn text_of(content: &[Node]) -> String {
    content.iter().filter_map(Node::as_text).collect()
}

// --- Add ---

/// Represents `<add sel="..." pos="..." type="...">`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Add {
    /// `@sel` (Mandatory): the selector of the target node.
    pub sel: String,
    /// `@pos`; `None` appends to the target's children.
    pub pos: Option<Pos>,
    /// `@type`: `@name` adds an attribute, `namespace::prefix` a declaration.
    pub node_type: Option<String>,
    /// Mixed content to insert.
    pub content: Vec<Node>,
    /// Declarations made on the operation element.
    pub namespaces: Vec<NamespaceDecl>,
    /// Other attributes found on the operation element.
    pub extra_attributes: Vec<Attribute>,
}

impl Add {
    pub fn new(sel: impl Into<String>) -> Self {
        Self {
            sel: sel.into(),
            ..Default::default()
        }
    }

    /// Adds the encoded form of `element` under `sel`.
    pub fn element(sel: impl Into<String>, element: &XconElement) -> Result<Self, XconError> {
        Ok(Self::new(sel).with_element(builder::save_xcon_element(element)?))
    }

    /// Adds attribute `name="value"` to the element located by `sel`.
    pub fn attribute(
        sel: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            node_type: Some(format!("@{}", name.into())),
            content: vec![Node::Text(value.into())],
            ..Self::new(sel)
        }
    }

    /// Declares `xmlns:prefix="uri"` on the element located by `sel`.
    pub fn namespace(
        sel: impl Into<String>,
        prefix: impl Into<String>,
        uri: impl Into<String>,
    ) -> Self {
        Self {
            node_type: Some(format!("namespace::{}", prefix.into())),
            content: vec![Node::Text(uri.into())],
            ..Self::new(sel)
        }
    }

    pub fn with_pos(mut self, pos: Pos) -> Self {
        self.pos = Some(pos);
        self
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.content.push(Node::Element(element));
        self
    }

    pub fn with_content(mut self, node: Node) -> Self {
        self.content.push(node);
        self
    }

    /// Binds a prefix for use in `sel`. `None` sets the default namespace.
    pub fn with_namespace(mut self, prefix: Option<&str>, uri: impl Into<String>) -> Self {
        self.namespaces.push(NamespaceDecl::new(prefix, uri));
        self
    }

    /// Decodes every XCON element of the content.
    pub fn xcon_elements(&self) -> Result<Vec<XconElement>, XconError> {
        resolver::resolve_content(&self.content)
    }

    /// The text of the content, e.g. the value of an added attribute.
    pub fn text_content(&self) -> String {
        text_of(&self.content)
    }
}

// --- Replace ---

/// Represents `<replace sel="...">`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Replace {
    /// `@sel` (Mandatory)
    pub sel: String,
    /// The replacement: one element, or text for attribute and text targets.
    pub content: Vec<Node>,
    pub namespaces: Vec<NamespaceDecl>,
    pub extra_attributes: Vec<Attribute>,
}

impl Replace {
    pub fn new(sel: impl Into<String>) -> Self {
        Self {
            sel: sel.into(),
            ..Default::default()
        }
    }

    /// Replaces the element located by `sel` with the encoded `element`.
    pub fn element(sel: impl Into<String>, element: &XconElement) -> Result<Self, XconError> {
        Ok(Self::new(sel).with_element(builder::save_xcon_element(element)?))
    }

    /// Replaces an attribute value or text node with `text`.
    pub fn text(sel: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(sel).with_content(Node::Text(text.into()))
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.content.push(Node::Element(element));
        self
    }

    pub fn with_content(mut self, node: Node) -> Self {
        self.content.push(node);
        self
    }

    pub fn with_namespace(mut self, prefix: Option<&str>, uri: impl Into<String>) -> Self {
        self.namespaces.push(NamespaceDecl::new(prefix, uri));
        self
    }

    pub fn xcon_elements(&self) -> Result<Vec<XconElement>, XconError> {
        resolver::resolve_content(&self.content)
    }

    pub fn text_content(&self) -> String {
        text_of(&self.content)
    }
}

// --- Remove ---

/// Represents `<remove sel="..." ws="..."/>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Remove {
    /// `@sel` (Mandatory)
    pub sel: String,
    /// `@ws`: adjacent whitespace text to remove with an element.
    pub ws: Option<Ws>,
    pub namespaces: Vec<NamespaceDecl>,
    pub extra_attributes: Vec<Attribute>,
}

impl Remove {
    pub fn new(sel: impl Into<String>) -> Self {
        Self {
            sel: sel.into(),
            ..Default::default()
        }
    }

    pub fn with_ws(mut self, ws: Ws) -> Self {
        self.ws = Some(ws);
        self
    }

    pub fn with_namespace(mut self, prefix: Option<&str>, uri: impl Into<String>) -> Self {
        self.namespaces.push(NamespaceDecl::new(prefix, uri));
        self
    }
}

// --- Operations ---

/// A child of `<conference-info-diff>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOperation {
    Add(Add),
    Replace(Replace),
    Remove(Remove),
    /// A child element from a foreign namespace, kept untouched.
    Extension(Element),
}

impl PatchOperation {
    /// The selector, or `None` for extensions.
    pub fn sel(&self) -> Option<&str> {
        match self {
            PatchOperation::Add(op) => Some(&op.sel),
            PatchOperation::Replace(op) => Some(&op.sel),
            PatchOperation::Remove(op) => Some(&op.sel),
            PatchOperation::Extension(_) => None,
        }
    }

    /// Declarations made on the operation element.
    pub fn namespaces(&self) -> &[NamespaceDecl] {
        match self {
            PatchOperation::Add(op) => &op.namespaces,
            PatchOperation::Replace(op) => &op.namespaces,
            PatchOperation::Remove(op) => &op.namespaces,
            PatchOperation::Extension(e) => &e.namespace_decls,
        }
    }

    /// The element name of the operation.
    pub fn name(&self) -> &str {
        match self {
            PatchOperation::Add(_) => "add",
            PatchOperation::Replace(_) => "replace",
            PatchOperation::Remove(_) => "remove",
            PatchOperation::Extension(e) => &e.name,
        }
    }
}

impl From<Add> for PatchOperation {
    fn from(op: Add) -> Self {
        PatchOperation::Add(op)
    }
}

impl From<Replace> for PatchOperation {
    fn from(op: Replace) -> Self {
        PatchOperation::Replace(op)
    }
}

impl From<Remove> for PatchOperation {
    fn from(op: Remove) -> Self {
        PatchOperation::Remove(op)
    }
}

// --- Document ---

/// Represents a `<conference-info-diff>` document (RFC 6502).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConferenceInfoDiff {
    /// `@entity` (Mandatory): the conference URI.
    pub entity: String,
    /// Operations in document order.
    pub operations: Vec<PatchOperation>,
    /// Declarations made on the root; they are in scope for every selector.
    pub namespaces: Vec<NamespaceDecl>,
    /// Attributes on the root other than `entity`.
    pub extra_attributes: Vec<Attribute>,
}

impl ConferenceInfoDiff {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            ..Default::default()
        }
    }

    /// Appends an operation.
    pub fn push(&mut self, operation: impl Into<PatchOperation>) {
        self.operations.push(operation.into());
    }

    pub fn with_operation(mut self, operation: impl Into<PatchOperation>) -> Self {
        self.push(operation);
        self
    }

    /// Binds a prefix on the root element.
    pub fn with_namespace(mut self, prefix: Option<&str>, uri: impl Into<String>) -> Self {
        self.namespaces.push(NamespaceDecl::new(prefix, uri));
        self
    }

    pub fn adds(&self) -> impl Iterator<Item = &Add> {
        self.operations.iter().filter_map(|op| match op {
            PatchOperation::Add(add) => Some(add),
            _ => None,
        })
    }

    pub fn replaces(&self) -> impl Iterator<Item = &Replace> {
        self.operations.iter().filter_map(|op| match op {
            PatchOperation::Replace(replace) => Some(replace),
            _ => None,
        })
    }

    pub fn removes(&self) -> impl Iterator<Item = &Remove> {
        self.operations.iter().filter_map(|op| match op {
            PatchOperation::Remove(remove) => Some(remove),
            _ => None,
        })
    }
}

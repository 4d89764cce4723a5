// crates/xcon-rs-diff/src/dom.rs

//! A small namespace-aware XML tree.
//!
//! Every typed value in this crate is read from and written to [`Element`]s.
//! Parsing resolves `prefix:name` pairs to namespace URIs against the
//! `xmlns` declarations in scope; writing assigns prefixes again from the
//! declarations in scope, the configured [`NamespaceMap`], the prefix the
//! element was parsed with, or a generated `ns{N}`, in that order.

use crate::error::XconError;
use crate::namespaces::{NamespaceMap, XCON_NS, XML_NS, XMLNS_NS};
use crate::options::SerializeOptions;
use log::trace;
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::{BufRead, Write};

/// An `xmlns` or `xmlns:prefix` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDecl {
    /// `None` for the default namespace.
    pub prefix: Option<String>,
    /// An empty URI undeclares the default namespace.
    pub uri: String,
}

impl NamespaceDecl {
    pub fn new(prefix: Option<&str>, uri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.map(str::to_string),
            uri: uri.into(),
        }
    }
}

/// An attribute with its resolved namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub namespace: Option<String>,
    pub prefix: Option<String>,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            prefix: None,
            value: value.into(),
        }
    }

    pub fn in_namespace(
        namespace: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            namespace: Some(namespace.into()),
            prefix: None,
            value: value.into(),
        }
    }
}

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(t) => Some(t),
            Node::Element(_) => None,
        }
    }

    /// True for text nodes made only of XML whitespace.
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Node::Text(t) if is_xml_whitespace(t))
    }
}

/// An element with resolved namespace, attributes and mixed content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Local name (no prefix).
    pub name: String,
    pub namespace: Option<String>,
    /// The prefix the element was parsed with; a hint for serialization.
    pub prefix: Option<String>,
    pub attributes: Vec<Attribute>,
    /// Declarations made on this element.
    pub namespace_decls: Vec<NamespaceDecl>,
    pub children: Vec<Node>,
}

impl Element {
    /// An element in no namespace.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn in_namespace(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: Some(namespace.into()),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.push_element(child);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(text);
        self
    }

    /// True when the element has the given namespace and local name.
    pub fn is_named(&self, namespace: Option<&str>, name: &str) -> bool {
        self.name == name && self.namespace.as_deref() == namespace
    }

    /// Value of the unqualified attribute `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attribute_ns(None, name)
    }

    pub fn attribute_ns(&self, namespace: Option<&str>, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name && a.namespace.as_deref() == namespace)
            .map(|a| a.value.as_str())
    }

    /// Sets or replaces the unqualified attribute `name`.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.set_attribute_entry(Attribute::new(name, value));
    }

    /// Sets or replaces an attribute, matching on namespace and local name.
    pub fn set_attribute_entry(&mut self, attribute: Attribute) {
        match self
            .attributes
            .iter_mut()
            .find(|a| a.name == attribute.name && a.namespace == attribute.namespace)
        {
            Some(existing) => existing.value = attribute.value,
            None => self.attributes.push(attribute),
        }
    }

    /// Removes an attribute and returns its value.
    pub fn remove_attribute(&mut self, namespace: Option<&str>, name: &str) -> Option<String> {
        let index = self
            .attributes
            .iter()
            .position(|a| a.name == name && a.namespace.as_deref() == namespace)?;
        Some(self.attributes.remove(index).value)
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn find_child(&self, namespace: Option<&str>, name: &str) -> Option<&Element> {
        self.child_elements().find(|e| e.is_named(namespace, name))
    }

    pub fn find_children<'a>(
        &'a self,
        namespace: Option<&'a str>,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.child_elements()
            .filter(move |e| e.is_named(namespace, name))
    }

    /// Concatenation of the direct text children.
    pub fn text(&self) -> String {
        self.children.iter().filter_map(Node::as_text).collect()
    }

    /// Replaces all children with a single text node.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(text.into())];
    }

    pub fn push_element(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Appends text, merging with a trailing text node.
    pub fn push_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if let Some(Node::Text(last)) = self.children.last_mut() {
            last.push_str(&text);
        } else {
            self.children.push(Node::Text(text));
        }
    }

    /// Puts every element of the subtree that has no namespace into `namespace`.
    pub fn set_namespace_recursive(&mut self, namespace: &str) {
        if self.namespace.is_none() {
            self.namespace = Some(namespace.to_string());
        }
        for child in &mut self.children {
            if let Node::Element(e) = child {
                e.set_namespace_recursive(namespace);
            }
        }
    }
}

/// True if `s` only contains XML whitespace (space, tab, CR, LF).
pub fn is_xml_whitespace(s: &str) -> bool {
    s.chars().all(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
}

/// Resolves `prefix` against `bindings`, innermost (last) declaration first.
///
/// `None` asks for the default namespace. The `xml` prefix is always bound.
/// Returns `None` when the prefix is unbound or the default namespace is
/// undeclared.
pub fn lookup_namespace<'a>(bindings: &'a [NamespaceDecl], prefix: Option<&str>) -> Option<&'a str> {
    if prefix == Some("xml") {
        return Some(XML_NS);
    }
    bindings
        .iter()
        .rev()
        .find(|d| d.prefix.as_deref() == prefix)
        .map(|d| d.uri.as_str())
        .filter(|uri| !uri.is_empty())
}

/// True for declarations Namespaces in XML forbids: declaring `xmlns`,
/// binding anything to the `xmlns` namespace, or binding `xml` and its
/// namespace to anything but each other.
pub(crate) fn is_reserved_binding(prefix: Option<&str>, uri: &str) -> bool {
    prefix == Some("xmlns") || uri == XMLNS_NS || (uri == XML_NS) != (prefix == Some("xml"))
}

// --- Parsing ---

/// Parses an XML document held in a string slice.
pub fn parse_str(xml: &str) -> Result<Element, XconError> {
    parse_reader(xml.as_bytes())
}

/// Parses an XML document held in a byte slice (UTF-8).
pub fn parse_bytes(xml: &[u8]) -> Result<Element, XconError> {
    parse_reader(xml)
}

/// Parses an XML document from a buffered stream.
pub fn parse_reader<R: BufRead>(input: R) -> Result<Element, XconError> {
    let mut reader = Reader::from_reader(input);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut builder = TreeBuilder::default();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => builder.open(&e)?,
            Event::Empty(e) => {
                builder.open(&e)?;
                builder.close()?;
            }
            Event::End(_) => builder.close()?,
            Event::Text(e) => {
                let raw = core::str::from_utf8(&e)?;
                let text = quick_xml::escape::unescape(raw)?;
                builder.text(&text)?;
            }
            Event::CData(e) => builder.text(core::str::from_utf8(&e)?)?,
            Event::GeneralRef(e) => {
                let name = core::str::from_utf8(&e)?;
                builder.text(&resolve_reference(name)?)?;
            }
            Event::Eof => break,
            // Declaration, comments, PIs and DOCTYPE carry no data for us.
            _ => {}
        }
        buf.clear();
    }

    builder.finish()
}

/// Resolves a `&name;` reference body (`lt`, `#38`, `#x26`, ...).
fn resolve_reference(name: &str) -> Result<String, XconError> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => num.parse::<u32>().ok(),
        };
        return code
            .and_then(char::from_u32)
            .map(String::from)
            .ok_or(XconError::InvalidValue {
                field: "character reference",
                value: name.to_string(),
            });
    }
    let resolved = match name {
        "lt" => "<",
        "gt" => ">",
        "amp" => "&",
        "apos" => "'",
        "quot" => "\"",
        _ => {
            return Err(XconError::InvalidValue {
                field: "entity reference",
                value: name.to_string(),
            });
        }
    };
    Ok(resolved.to_string())
}

/// Splits `prefix:local` into its parts.
fn split_qname(qname: &str) -> (Option<&str>, &str) {
    match qname.split_once(':') {
        Some((prefix, local)) => (Some(prefix), local),
        None => (None, qname),
    }
}

/// Builds the tree from reader events while tracking namespace scopes.
#[derive(Default)]
struct TreeBuilder {
    stack: Vec<Element>,
    /// Bindings in scope, flattened; `scope_marks` records where each open element's start.
    bindings: Vec<NamespaceDecl>,
    scope_marks: Vec<usize>,
    root: Option<Element>,
}

impl TreeBuilder {
    fn open(&mut self, start: &BytesStart<'_>) -> Result<(), XconError> {
        if self.root.is_some() {
            return Err(XconError::MalformedDocument("multiple top-level elements found"));
        }

        let qname = core::str::from_utf8(start.name().as_ref())?.to_string();
        let mut decls = Vec::new();
        let mut raw_attributes = Vec::new();

        for attr in start.attributes() {
            let attr = attr?;
            let key = core::str::from_utf8(attr.key.as_ref())?.to_string();
            let value = quick_xml::escape::unescape(core::str::from_utf8(&attr.value)?)?.into_owned();
            if key == "xmlns" {
                decls.push(NamespaceDecl { prefix: None, uri: value });
            } else if let Some(prefix) = key.strip_prefix("xmlns:") {
                decls.push(NamespaceDecl {
                    prefix: Some(prefix.to_string()),
                    uri: value,
                });
            } else {
                raw_attributes.push((key, value));
            }
        }

        if decls
            .iter()
            .any(|d| is_reserved_binding(d.prefix.as_deref(), &d.uri))
        {
            return Err(XconError::MalformedDocument(
                "reserved namespace prefix or URI redeclared",
            ));
        }

        self.scope_marks.push(self.bindings.len());
        self.bindings.extend(decls.iter().cloned());

        let (prefix, local) = split_qname(&qname);
        let namespace = self.resolve(prefix)?;

        let mut attributes = Vec::with_capacity(raw_attributes.len());
        for (key, value) in raw_attributes {
            let (attr_prefix, attr_local) = split_qname(&key);
            // Unprefixed attributes never take the default namespace.
            let attr_namespace = match attr_prefix {
                Some(_) => self.resolve(attr_prefix)?,
                None => None,
            };
            attributes.push(Attribute {
                name: attr_local.to_string(),
                namespace: attr_namespace,
                prefix: attr_prefix.map(str::to_string),
                value,
            });
        }

        trace!("Opening element <{}> in namespace {:?}", qname, namespace);
        self.stack.push(Element {
            name: local.to_string(),
            namespace,
            prefix: prefix.map(str::to_string),
            attributes,
            namespace_decls: decls,
            children: Vec::new(),
        });
        Ok(())
    }

    fn resolve(&self, prefix: Option<&str>) -> Result<Option<String>, XconError> {
        match lookup_namespace(&self.bindings, prefix) {
            Some(uri) => Ok(Some(uri.to_string())),
            None => match prefix {
                Some(p) => Err(XconError::UnboundPrefix {
                    prefix: p.to_string(),
                }),
                None => Ok(None),
            },
        }
    }

    fn close(&mut self) -> Result<(), XconError> {
        let element = self.stack.pop().ok_or(XconError::MalformedDocument(
            "encountered closing tag without open tag",
        ))?;
        if let Some(mark) = self.scope_marks.pop() {
            self.bindings.truncate(mark);
        }

        match self.stack.last_mut() {
            Some(parent) => parent.children.push(Node::Element(element)),
            None => self.root = Some(element),
        }
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<(), XconError> {
        match self.stack.last_mut() {
            Some(current) => current.push_text(text),
            // Outside the root only whitespace between prolog items may appear.
            None if is_xml_whitespace(text) => {}
            None => {
                return Err(XconError::MalformedDocument(
                    "character data outside the root element",
                ));
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Element, XconError> {
        if !self.stack.is_empty() {
            return Err(XconError::MalformedDocument(
                "unclosed element(s) at end of document",
            ));
        }
        self.root
            .ok_or(XconError::MalformedDocument("no root element found"))
    }
}

// --- Writing ---

/// Serializes `element` as a document into `sink`.
pub fn write_to<W: Write>(
    element: &Element,
    sink: W,
    options: &SerializeOptions,
) -> Result<(), XconError> {
    let mut writer = match options.indent {
        Some(width) => Writer::new_with_indent(sink, b' ', width),
        None => Writer::new(sink),
    };

    if options.xml_declaration {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }

    let mut scope = WriteScope::new(&options.namespaces);
    write_element(&mut writer, element, &mut scope, options.indent.is_some())?;
    Ok(())
}

/// Serializes `element` into a `String`.
pub fn to_string(element: &Element, options: &SerializeOptions) -> Result<String, XconError> {
    let mut buffer = Vec::new();
    write_to(element, &mut buffer, options)?;
    Ok(String::from_utf8(buffer).map_err(|e| e.utf8_error())?)
}

/// Prefix bindings visible while writing, plus the preferred map.
struct WriteScope<'m> {
    bindings: Vec<NamespaceDecl>,
    marks: Vec<usize>,
    preferred: &'m NamespaceMap,
    generated: usize,
}

impl<'m> WriteScope<'m> {
    fn new(preferred: &'m NamespaceMap) -> Self {
        Self {
            bindings: Vec::new(),
            marks: Vec::new(),
            preferred,
            generated: 0,
        }
    }

    fn enter(&mut self) {
        self.marks.push(self.bindings.len());
    }

    fn leave(&mut self) {
        if let Some(mark) = self.marks.pop() {
            self.bindings.truncate(mark);
        }
    }

    /// Bindings made on the element currently being written.
    fn current_frame(&self) -> &[NamespaceDecl] {
        let mark = self.marks.last().copied().unwrap_or(0);
        &self.bindings[mark..]
    }

    fn declared_here(&self, prefix: Option<&str>) -> bool {
        self.current_frame()
            .iter()
            .any(|d| d.prefix.as_deref() == prefix)
    }

    fn bind(&mut self, prefix: Option<&str>, uri: &str, emitted: &mut Vec<NamespaceDecl>) {
        let decl = NamespaceDecl::new(prefix, uri);
        self.bindings.push(decl.clone());
        emitted.push(decl);
    }

    /// Prefixes currently bound to `uri`, innermost first, skipping shadowed ones.
    fn bound_prefix(&self, uri: &str, allow_default: bool) -> Option<Option<String>> {
        self.bindings
            .iter()
            .rev()
            .filter(|d| d.uri == uri && (allow_default || d.prefix.is_some()))
            .find(|d| lookup_namespace(&self.bindings, d.prefix.as_deref()) == Some(uri))
            .map(|d| d.prefix.clone())
    }

    fn next_generated(&mut self) -> String {
        loop {
            self.generated += 1;
            let candidate = format!("ns{}", self.generated);
            if lookup_namespace(&self.bindings, Some(&candidate)).is_none() {
                return candidate;
            }
        }
    }

    /// Picks (and declares if needed) the prefix for an element namespace.
    fn element_prefix(
        &mut self,
        uri: &str,
        hint: Option<&str>,
        emitted: &mut Vec<NamespaceDecl>,
    ) -> Option<String> {
        if let Some(prefix) = self.bound_prefix(uri, true) {
            return prefix;
        }

        let preferred = self.preferred.prefix_for(uri).map(|p| {
            if p.is_empty() { None } else { Some(p.to_string()) }
        });
        let candidates = preferred
            .into_iter()
            .chain(hint.map(|h| Some(h.to_string())));
        for candidate in candidates {
            if !self.declared_here(candidate.as_deref()) {
                self.bind(candidate.as_deref(), uri, emitted);
                return candidate;
            }
        }

        let generated = self.next_generated();
        self.bind(Some(&generated), uri, emitted);
        Some(generated)
    }

    /// Picks (and declares if needed) the prefix for a namespaced attribute.
    fn attribute_prefix(
        &mut self,
        uri: &str,
        hint: Option<&str>,
        emitted: &mut Vec<NamespaceDecl>,
    ) -> String {
        if uri == XML_NS {
            return "xml".to_string();
        }
        if let Some(Some(prefix)) = self.bound_prefix(uri, false) {
            return prefix;
        }

        let preferred = self
            .preferred
            .prefix_for(uri)
            .filter(|p| !p.is_empty())
            .map(str::to_string);
        for candidate in preferred.into_iter().chain(hint.map(str::to_string)) {
            if !self.declared_here(Some(&candidate)) {
                self.bind(Some(&candidate), uri, emitted);
                return candidate;
            }
        }

        let generated = self.next_generated();
        self.bind(Some(&generated), uri, emitted);
        generated
    }
}

fn qualified(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(p) => format!("{}:{}", p, name),
        None => name.to_string(),
    }
}

fn write_element<W: Write>(
    writer: &mut Writer<W>,
    element: &Element,
    scope: &mut WriteScope<'_>,
    pretty: bool,
) -> Result<(), XconError> {
    scope.enter();
    let mut emitted = Vec::new();

    // Explicit declarations first: selectors inside patch operations rely on them.
    for decl in &element.namespace_decls {
        // An element in no namespace cannot sit under a non-empty default.
        let conflicts =
            decl.prefix.is_none() && !decl.uri.is_empty() && element.namespace.is_none();
        if conflicts {
            trace!("Dropping default namespace '{}' on unqualified <{}>", decl.uri, element.name);
            continue;
        }
        if !scope.declared_here(decl.prefix.as_deref()) {
            scope.bind(decl.prefix.as_deref(), &decl.uri, &mut emitted);
        }
    }

    let prefix = match &element.namespace {
        Some(uri) => scope.element_prefix(uri, element.prefix.as_deref(), &mut emitted),
        None => {
            if !scope.declared_here(None) && lookup_namespace(&scope.bindings, None).is_some() {
                scope.bind(None, "", &mut emitted);
            }
            None
        }
    };
    let qname = qualified(prefix.as_deref(), &element.name);

    let mut attributes = Vec::with_capacity(element.attributes.len());
    for attr in &element.attributes {
        let key = match &attr.namespace {
            Some(uri) => {
                let p = scope.attribute_prefix(uri, attr.prefix.as_deref(), &mut emitted);
                qualified(Some(&p), &attr.name)
            }
            None => attr.name.clone(),
        };
        attributes.push((key, attr.value.as_str()));
    }

    let mut start = BytesStart::new(qname.as_str());
    for decl in &emitted {
        let key = match &decl.prefix {
            Some(p) => format!("xmlns:{}", p),
            None => "xmlns".to_string(),
        };
        start.push_attribute((key.as_str(), decl.uri.as_str()));
    }
    for (key, value) in &attributes {
        start.push_attribute((key.as_str(), *value));
    }

    let children: Vec<&Node> = element
        .children
        .iter()
        .filter(|n| !(pretty && n.is_whitespace()))
        .collect();

    if children.is_empty() {
        writer.write_event(Event::Empty(start))?;
    } else {
        writer.write_event(Event::Start(start))?;
        for child in children {
            match child {
                Node::Element(e) => write_element(writer, e, scope, pretty)?,
                Node::Text(t) => writer.write_event(Event::Text(BytesText::new(t)))?,
            }
        }
        writer.write_event(Event::End(BytesEnd::new(qname.as_str())))?;
    }

    scope.leave();
    Ok(())
}

/// Writes the subtree with local names only and without namespaced
/// attributes, which is the shape the serde models in [`crate::model`] read.
///
/// Child elements outside the XCON namespace (`xs:any` extensions) are
/// dropped so they cannot be taken for schema elements of the same name.
pub(crate) fn to_unqualified_string(element: &Element) -> Result<String, XconError> {
    let mut writer = Writer::new(Vec::new());
    write_unqualified(&mut writer, element)?;
    Ok(String::from_utf8(writer.into_inner()).map_err(|e| e.utf8_error())?)
}

fn write_unqualified<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<(), XconError> {
    let mut start = BytesStart::new(element.name.as_str());
    for attr in element.attributes.iter().filter(|a| a.namespace.is_none()) {
        start.push_attribute((attr.name.as_str(), attr.value.as_str()));
    }
    if element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }
    writer.write_event(Event::Start(start))?;
    for child in &element.children {
        match child {
            Node::Element(e) if e.namespace.as_deref() == Some(XCON_NS) => {
                write_unqualified(writer, e)?
            }
            Node::Element(e) => trace!("Skipping extension element <{}>", e.name),
            Node::Text(t) => writer.write_event(Event::Text(BytesText::new(t)))?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}

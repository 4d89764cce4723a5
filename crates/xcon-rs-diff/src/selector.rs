// crates/xcon-rs-diff/src/selector.rs

//! The restricted XPath used in `sel` attributes.
//!
//! Grammar: an absolute location path of element steps, each a `qname` or
//! `*` with predicates `[n]`, `[@qname='lit']` or `[qname='lit']`,
//! optionally followed by a final `@qname`, `text()` (with an optional
//! `[n]`) or `namespace::prefix` step. Unprefixed element names take the
//! default namespace in scope at the operation; unprefixed attribute names
//! have no namespace.

use crate::dom::{Element, NamespaceDecl, Node, lookup_namespace};
use crate::error::XconError;
use log::trace;

/// An expanded name; `None` namespace means no namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Name {
    namespace: Option<String>,
    local: String,
}

impl Name {
    fn matches(&self, namespace: Option<&str>, local: &str) -> bool {
        self.local == local && self.namespace.as_deref() == namespace
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NameTest {
    Any,
    Name(Name),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Predicate {
    /// `[n]`, 1-based.
    Position(usize),
    /// `[@name='value']`
    Attribute(Name, String),
    /// `[name='value']`: a child element whose string value is `value`.
    Child(Name, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    test: NameTest,
    predicates: Vec<Predicate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Terminal {
    Element,
    Attribute(Name),
    Text(Option<usize>),
    Namespace(String),
}

/// The node a selector located, addressed from the document root.
///
/// Paths are indices into `children` at each level; an empty path is the
/// root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Element(Vec<usize>),
    Attribute {
        path: Vec<usize>,
        namespace: Option<String>,
        name: String,
    },
    Text {
        path: Vec<usize>,
        index: usize,
    },
    Namespace {
        path: Vec<usize>,
        prefix: String,
    },
}

/// A parsed selector with its prefixes resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    sel: String,
    steps: Vec<Step>,
    terminal: Terminal,
}

impl Selector {
    /// Parses `sel`, resolving prefixes against `bindings` (innermost last).
    pub fn parse(sel: &str, bindings: &[NamespaceDecl]) -> Result<Self, XconError> {
        SelectorParser {
            sel,
            pos: 0,
            bindings,
        }
        .parse()
    }

    pub fn as_str(&self) -> &str {
        &self.sel
    }

    /// Locates the single node the selector points at in `root`'s tree.
    ///
    /// # Errors
    /// `XconError::UnlocatedNode` if no node or more than one node matches.
    pub fn locate(&self, root: &Element) -> Result<Location, XconError> {
        let mut candidates: Vec<Vec<usize>> = Vec::new();

        let mut steps = self.steps.iter();
        if let Some(first) = steps.next() {
            if test_matches(&first.test, root) && root_passes(&first.predicates, root) {
                candidates.push(Vec::new());
            }
        }

        for step in steps {
            let mut next = Vec::new();
            for path in &candidates {
                let Some(parent) = element_at(root, path) else {
                    continue;
                };
                for index in select_children(parent, step) {
                    let mut child_path = path.clone();
                    child_path.push(index);
                    next.push(child_path);
                }
            }
            candidates = next;
        }

        let mut found: Vec<Location> = Vec::new();
        for path in candidates {
            let Some(element) = element_at(root, &path) else {
                continue;
            };
            match &self.terminal {
                Terminal::Element => found.push(Location::Element(path)),
                Terminal::Attribute(name) => {
                    let present = element
                        .attributes
                        .iter()
                        .any(|a| name.matches(a.namespace.as_deref(), &a.name));
                    if present {
                        found.push(Location::Attribute {
                            path,
                            namespace: name.namespace.clone(),
                            name: name.local.clone(),
                        });
                    }
                }
                Terminal::Text(position) => {
                    let texts: Vec<usize> = element
                        .children
                        .iter()
                        .enumerate()
                        .filter(|(_, n)| matches!(n, Node::Text(_)))
                        .map(|(i, _)| i)
                        .collect();
                    let picked: Vec<usize> = match position {
                        Some(n) => texts.get(n - 1).copied().into_iter().collect(),
                        None => texts,
                    };
                    for index in picked {
                        found.push(Location::Text {
                            path: path.clone(),
                            index,
                        });
                    }
                }
                Terminal::Namespace(prefix) => {
                    let declared = element
                        .namespace_decls
                        .iter()
                        .any(|d| d.prefix.as_deref() == Some(prefix.as_str()));
                    if declared {
                        found.push(Location::Namespace {
                            path,
                            prefix: prefix.clone(),
                        });
                    }
                }
            }
            if found.len() > 1 {
                break;
            }
        }

        if found.len() != 1 {
            trace!("Selector '{}' matched {} node(s)", self.sel, found.len());
            return Err(XconError::UnlocatedNode {
                sel: self.sel.clone(),
            });
        }
        found.pop().ok_or(XconError::UnlocatedNode {
            sel: self.sel.clone(),
        })
    }
}

/// Follows `path` from `root`.
pub(crate) fn element_at<'a>(root: &'a Element, path: &[usize]) -> Option<&'a Element> {
    let mut current = root;
    for &index in path {
        current = current.children.get(index)?.as_element()?;
    }
    Some(current)
}

pub(crate) fn element_at_mut<'a>(root: &'a mut Element, path: &[usize]) -> Option<&'a mut Element> {
    let mut current = root;
    for &index in path {
        current = match current.children.get_mut(index)? {
            Node::Element(e) => e,
            Node::Text(_) => return None,
        };
    }
    Some(current)
}

fn test_matches(test: &NameTest, element: &Element) -> bool {
    match test {
        NameTest::Any => true,
        NameTest::Name(name) => name.matches(element.namespace.as_deref(), &element.name),
    }
}

/// XPath string value: all descendant text in document order.
fn string_value(element: &Element) -> String {
    let mut out = String::new();
    collect_text(element, &mut out);
    out
}

fn collect_text(element: &Element, out: &mut String) {
    for child in &element.children {
        match child {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => collect_text(e, out),
        }
    }
}

fn value_matches(predicate: &Predicate, element: &Element) -> bool {
    match predicate {
        Predicate::Position(_) => true,
        Predicate::Attribute(name, value) => element
            .attributes
            .iter()
            .any(|a| name.matches(a.namespace.as_deref(), &a.name) && a.value == *value),
        Predicate::Child(name, value) => element
            .child_elements()
            .any(|c| name.matches(c.namespace.as_deref(), &c.name) && string_value(c) == *value),
    }
}

/// Predicates for the root step: the root is the only candidate.
fn root_passes(predicates: &[Predicate], root: &Element) -> bool {
    let mut alive = true;
    for predicate in predicates {
        alive = alive
            && match predicate {
                Predicate::Position(n) => *n == 1,
                other => value_matches(other, root),
            };
    }
    alive
}

/// Indices of the children of `parent` selected by `step`.
fn select_children(parent: &Element, step: &Step) -> Vec<usize> {
    let mut selected: Vec<usize> = parent
        .children
        .iter()
        .enumerate()
        .filter_map(|(i, n)| n.as_element().map(|e| (i, e)))
        .filter(|(_, e)| test_matches(&step.test, e))
        .map(|(i, _)| i)
        .collect();

    for predicate in &step.predicates {
        selected = match predicate {
            Predicate::Position(n) => selected.get(n - 1).copied().into_iter().collect(),
            other => selected
                .into_iter()
                .filter(|&i| {
                    parent.children[i]
                        .as_element()
                        .is_some_and(|e| value_matches(other, e))
                })
                .collect(),
        };
    }
    selected
}

// --- Parsing ---

struct SelectorParser<'a> {
    sel: &'a str,
    pos: usize,
    bindings: &'a [NamespaceDecl],
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.') || !c.is_ascii()
}

impl SelectorParser<'_> {
    fn invalid(&self, reason: &'static str) -> XconError {
        XconError::InvalidXpath {
            sel: self.sel.to_string(),
            reason,
        }
    }

    fn rest(&self) -> &str {
        &self.sel[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\r' | '\n')) {
            self.pos += 1;
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.sel.len()
    }

    fn ncname(&mut self) -> Result<&str, XconError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if is_name_char(c) {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
        let name = &self.sel[start..self.pos];
        match name.chars().next() {
            Some(c) if !c.is_ascii_digit() && !matches!(c, '-' | '.') => Ok(name),
            _ => Err(self.invalid("expected a name")),
        }
    }

    /// Reads `prefix:local` or `local`.
    fn qname(&mut self) -> Result<(Option<String>, String), XconError> {
        let first = self.ncname()?.to_string();
        if self.peek() == Some(':') && !self.rest().starts_with("::") {
            self.pos += 1;
            let local = self.ncname()?.to_string();
            Ok((Some(first), local))
        } else {
            Ok((None, first))
        }
    }

    fn resolve_prefix(&self, prefix: &str) -> Result<String, XconError> {
        lookup_namespace(self.bindings, Some(prefix))
            .map(str::to_string)
            .ok_or_else(|| XconError::InvalidNamespacePrefix {
                sel: self.sel.to_string(),
                prefix: prefix.to_string(),
            })
    }

    fn element_name(&self, (prefix, local): (Option<String>, String)) -> Result<Name, XconError> {
        let namespace = match prefix {
            Some(p) => Some(self.resolve_prefix(&p)?),
            None => lookup_namespace(self.bindings, None).map(str::to_string),
        };
        Ok(Name { namespace, local })
    }

    fn attribute_name(&self, (prefix, local): (Option<String>, String)) -> Result<Name, XconError> {
        let namespace = prefix.map(|p| self.resolve_prefix(&p)).transpose()?;
        Ok(Name { namespace, local })
    }

    fn literal(&mut self) -> Result<String, XconError> {
        let quote = match self.peek() {
            Some(q @ ('\'' | '"')) => q,
            _ => return Err(self.invalid("expected a quoted literal")),
        };
        self.pos += 1;
        let end = self
            .rest()
            .find(quote)
            .ok_or_else(|| self.invalid("unterminated literal"))?;
        let value = self.rest()[..end].to_string();
        self.pos += end + 1;
        Ok(value)
    }

    fn position(&mut self) -> Result<usize, XconError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.pos += 1;
        }
        match self.sel[start..self.pos].parse::<usize>() {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(self.invalid("positions start at 1")),
        }
    }

    fn predicate(&mut self) -> Result<Predicate, XconError> {
        self.skip_ws();
        let predicate = if matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            Predicate::Position(self.position()?)
        } else {
            let is_attribute = self.eat('@');
            let qname = self.qname()?;
            self.skip_ws();
            if !self.eat('=') {
                return Err(self.invalid("expected '=' in predicate"));
            }
            self.skip_ws();
            let value = self.literal()?;
            if is_attribute {
                Predicate::Attribute(self.attribute_name(qname)?, value)
            } else {
                Predicate::Child(self.element_name(qname)?, value)
            }
        };
        self.skip_ws();
        if !self.eat(']') {
            return Err(self.invalid("expected ']'"));
        }
        Ok(predicate)
    }

    fn parse(mut self) -> Result<Selector, XconError> {
        if !self.eat('/') {
            return Err(self.invalid("selector must be an absolute path"));
        }

        let mut steps = Vec::new();
        let terminal = loop {
            if self.at_end() || self.peek() == Some('/') {
                return Err(self.invalid("empty location step"));
            }

            if self.eat('@') {
                let name = self.qname()?;
                break Terminal::Attribute(self.attribute_name(name)?);
            }
            if self.eat_str("text()") {
                let position = if self.eat('[') {
                    self.skip_ws();
                    let n = self.position()?;
                    self.skip_ws();
                    if !self.eat(']') {
                        return Err(self.invalid("expected ']'"));
                    }
                    Some(n)
                } else {
                    None
                };
                break Terminal::Text(position);
            }
            if self.eat_str("namespace::") {
                let prefix = self.ncname()?.to_string();
                break Terminal::Namespace(prefix);
            }

            let test = if self.eat('*') {
                NameTest::Any
            } else {
                let name = self.qname()?;
                NameTest::Name(self.element_name(name)?)
            };
            let mut predicates = Vec::new();
            while self.eat('[') {
                predicates.push(self.predicate()?);
            }
            steps.push(Step { test, predicates });

            if self.at_end() {
                break Terminal::Element;
            }
            if !self.eat('/') {
                return Err(self.invalid("unexpected character"));
            }
        };

        if !self.at_end() {
            return Err(self.invalid("trailing characters after the final step"));
        }
        if steps.is_empty() {
            return Err(self.invalid("selector must start with an element step"));
        }

        trace!("Parsed selector '{}' with {} step(s)", self.sel, steps.len());
        Ok(Selector {
            sel: self.sel.to_string(),
            steps,
            terminal,
        })
    }
}

// crates/xcon-rs-diff/src/patch.rs

//! Applies patch operations to a conference-info document.
//!
//! Each operation locates exactly one node with its selector, then edits
//! the tree in place. [`apply_diff`] stops at the first failing operation
//! and leaves the earlier ones applied; [`apply_diff_atomic`] works on a
//! copy and only commits when every operation succeeds.

use crate::dom::{
    Attribute, Element, NamespaceDecl, Node, is_reserved_binding, is_xml_whitespace,
    lookup_namespace,
};
use crate::error::XconError;
use crate::selector::{Location, Selector, element_at_mut};
use crate::types::{Add, ConferenceInfoDiff, PatchOperation, Pos, Remove, Replace, Ws};
use log::{debug, trace, warn};

/// Applies one operation. Only the operation's own namespace declarations
/// are in scope for its selector.
pub fn apply_operation(document: &mut Element, operation: &PatchOperation) -> Result<(), XconError> {
    apply_in_scope(document, operation, &[])
}

/// Applies every operation of `diff` in order, with the root declarations
/// of the diff in scope.
///
/// # Errors
/// The first operation error. Operations before it remain applied.
pub fn apply_diff(document: &mut Element, diff: &ConferenceInfoDiff) -> Result<(), XconError> {
    debug!(
        "Applying {} operation(s) from diff for '{}'",
        diff.operations.len(),
        diff.entity
    );
    for (index, operation) in diff.operations.iter().enumerate() {
        trace!("Operation #{}: <{}>", index, operation.name());
        apply_in_scope(document, operation, &diff.namespaces)?;
    }
    Ok(())
}

/// Like [`apply_diff`], but `document` is left untouched on error.
pub fn apply_diff_atomic(document: &mut Element, diff: &ConferenceInfoDiff) -> Result<(), XconError> {
    let mut working = document.clone();
    apply_diff(&mut working, diff)?;
    *document = working;
    Ok(())
}

fn apply_in_scope(
    document: &mut Element,
    operation: &PatchOperation,
    outer: &[NamespaceDecl],
) -> Result<(), XconError> {
    let mut bindings = outer.to_vec();
    bindings.extend(operation.namespaces().iter().cloned());

    match operation {
        PatchOperation::Add(add) => apply_add(document, add, &bindings),
        PatchOperation::Replace(replace) => apply_replace(document, replace, &bindings),
        PatchOperation::Remove(remove) => apply_remove(document, remove, &bindings),
        PatchOperation::Extension(element) => {
            warn!("Skipping unsupported operation <{}>", element.name);
            Ok(())
        }
    }
}

// --- Helpers ---

fn node_types(sel: &str) -> XconError {
    XconError::InvalidNodeTypes {
        sel: sel.to_string(),
    }
}

fn directive(sel: &str, reason: &'static str) -> XconError {
    XconError::InvalidPatchDirective {
        sel: sel.to_string(),
        reason,
    }
}

fn unlocated(sel: &str) -> XconError {
    XconError::UnlocatedNode {
        sel: sel.to_string(),
    }
}

/// The content as plain text; elements are not allowed.
fn content_text(content: &[Node], sel: &str) -> Result<String, XconError> {
    if content.iter().any(|n| n.as_element().is_some()) {
        return Err(node_types(sel));
    }
    Ok(content.iter().filter_map(Node::as_text).collect())
}

/// The one element of the content, ignoring whitespace text.
fn single_element(content: &[Node], sel: &str) -> Result<Element, XconError> {
    let mut found = None;
    for node in content {
        match node {
            Node::Element(e) if found.is_none() => found = Some(e.clone()),
            Node::Text(t) if is_xml_whitespace(t) => {}
            _ => return Err(node_types(sel)),
        }
    }
    found.ok_or_else(|| node_types(sel))
}

/// Splits a located element path into parent path and child index.
/// The root has no parent.
fn split_path<'p>(path: &'p [usize], sel: &str) -> Result<(&'p [usize], usize), XconError> {
    match path.split_last() {
        Some((index, parent)) => Ok((parent, *index)),
        None => Err(XconError::InvalidRootElementOperation {
            sel: sel.to_string(),
        }),
    }
}

fn target_mut<'a>(document: &'a mut Element, path: &[usize], sel: &str) -> Result<&'a mut Element, XconError> {
    element_at_mut(document, path).ok_or_else(|| unlocated(sel))
}

/// Resolves the `@qname` of an `<add type="...">` against `bindings`.
fn attribute_from_type(
    qname: &str,
    value: String,
    bindings: &[NamespaceDecl],
    sel: &str,
) -> Result<Attribute, XconError> {
    match qname.split_once(':') {
        Some((prefix, local)) => {
            let namespace = lookup_namespace(bindings, Some(prefix)).ok_or_else(|| {
                XconError::InvalidNamespacePrefix {
                    sel: sel.to_string(),
                    prefix: prefix.to_string(),
                }
            })?;
            Ok(Attribute {
                name: local.to_string(),
                namespace: Some(namespace.to_string()),
                prefix: Some(prefix.to_string()),
                value,
            })
        }
        None => Ok(Attribute::new(qname, value)),
    }
}

/// True if `element` or a descendant still uses `prefix` as bound on `element`.
fn prefix_in_use(element: &Element, prefix: &str, uri: &str, is_declaring: bool) -> bool {
    let redeclared = element
        .namespace_decls
        .iter()
        .any(|d| d.prefix.as_deref() == Some(prefix));
    if redeclared && !is_declaring {
        return false;
    }
    let uses = |p: Option<&str>, ns: Option<&str>| p == Some(prefix) && ns == Some(uri);
    if uses(element.prefix.as_deref(), element.namespace.as_deref())
        || element
            .attributes
            .iter()
            .any(|a| uses(a.prefix.as_deref(), a.namespace.as_deref()))
    {
        return true;
    }
    element
        .child_elements()
        .any(|c| prefix_in_use(c, prefix, uri, false))
}

/// Moves names bound through `prefix` from `old` to `new` in the subtree.
fn rebind_prefix(element: &mut Element, prefix: &str, old: &str, new: &str, is_declaring: bool) {
    let redeclared = element
        .namespace_decls
        .iter()
        .any(|d| d.prefix.as_deref() == Some(prefix));
    if redeclared && !is_declaring {
        return;
    }
    if element.prefix.as_deref() == Some(prefix) && element.namespace.as_deref() == Some(old) {
        element.namespace = Some(new.to_string());
    }
    for attr in &mut element.attributes {
        if attr.prefix.as_deref() == Some(prefix) && attr.namespace.as_deref() == Some(old) {
            attr.namespace = Some(new.to_string());
        }
    }
    for child in &mut element.children {
        if let Node::Element(e) = child {
            rebind_prefix(e, prefix, old, new, false);
        }
    }
}

// --- <add> ---

fn apply_add(document: &mut Element, add: &Add, bindings: &[NamespaceDecl]) -> Result<(), XconError> {
    let sel = add.sel.as_str();
    let location = Selector::parse(sel, bindings)?.locate(document)?;
    let Location::Element(path) = location else {
        return Err(directive(sel, "<add> must select an element"));
    };

    match add.node_type.as_deref() {
        Some(node_type) => {
            if add.pos.is_some() {
                return Err(directive(sel, "'pos' cannot be combined with 'type'"));
            }
            let value = content_text(&add.content, sel)?;
            if let Some(qname) = node_type.strip_prefix('@') {
                let attribute = attribute_from_type(qname, value, bindings, sel)?;
                let target = target_mut(document, &path, sel)?;
                if target
                    .attribute_ns(attribute.namespace.as_deref(), &attribute.name)
                    .is_some()
                {
                    return Err(XconError::InvalidAttributeValue {
                        sel: sel.to_string(),
                        attribute: qname.to_string(),
                    });
                }
                trace!("Adding attribute '{}' at '{}'", qname, sel);
                target.set_attribute_entry(attribute);
                Ok(())
            } else if let Some(prefix) = node_type.strip_prefix("namespace::") {
                let uri = value.trim();
                if uri.is_empty() {
                    return Err(node_types(sel));
                }
                if is_reserved_binding(Some(prefix), uri) {
                    return Err(directive(sel, "reserved namespace prefix or URI"));
                }
                let target = target_mut(document, &path, sel)?;
                if target
                    .namespace_decls
                    .iter()
                    .any(|d| d.prefix.as_deref() == Some(prefix))
                {
                    return Err(directive(sel, "namespace prefix already declared"));
                }
                trace!("Declaring prefix '{}' at '{}'", prefix, sel);
                target
                    .namespace_decls
                    .push(NamespaceDecl::new(Some(prefix), uri));
                Ok(())
            } else {
                Err(directive(sel, "unsupported 'type' value"))
            }
        }
        None => {
            if add.content.is_empty() {
                return Err(node_types(sel));
            }
            let nodes = add.content.clone();
            match add.pos {
                None => {
                    let target = target_mut(document, &path, sel)?;
                    target.children.extend(nodes);
                }
                Some(Pos::Prepend) => {
                    let target = target_mut(document, &path, sel)?;
                    target.children.splice(0..0, nodes);
                }
                Some(pos @ (Pos::Before | Pos::After)) => {
                    let (parent_path, index) = split_path(&path, sel)?;
                    let at = if pos == Pos::Before { index } else { index + 1 };
                    let parent = target_mut(document, parent_path, sel)?;
                    parent.children.splice(at..at, nodes);
                }
            }
            trace!("Added {} node(s) at '{}'", add.content.len(), sel);
            Ok(())
        }
    }
}

// --- <replace> ---

fn apply_replace(
    document: &mut Element,
    replace: &Replace,
    bindings: &[NamespaceDecl],
) -> Result<(), XconError> {
    let sel = replace.sel.as_str();
    let location = Selector::parse(sel, bindings)?.locate(document)?;

    match location {
        Location::Element(path) => {
            let element = single_element(&replace.content, sel)?;
            match path.split_last() {
                None => *document = element,
                Some((index, parent_path)) => {
                    let parent = target_mut(document, parent_path, sel)?;
                    parent.children[*index] = Node::Element(element);
                }
            }
        }
        Location::Attribute {
            path,
            namespace,
            name,
        } => {
            let value = content_text(&replace.content, sel)?;
            let target = target_mut(document, &path, sel)?;
            let attribute = target
                .attributes
                .iter_mut()
                .find(|a| a.name == name && a.namespace == namespace)
                .ok_or_else(|| unlocated(sel))?;
            attribute.value = value;
        }
        Location::Text { path, index } => {
            let value = content_text(&replace.content, sel)?;
            let target = target_mut(document, &path, sel)?;
            if value.is_empty() {
                target.children.remove(index);
            } else {
                target.children[index] = Node::Text(value);
            }
        }
        Location::Namespace { path, prefix } => {
            let value = content_text(&replace.content, sel)?;
            let uri = value.trim();
            if uri.is_empty() {
                return Err(node_types(sel));
            }
            if is_reserved_binding(Some(&prefix), uri) {
                return Err(directive(sel, "reserved namespace prefix or URI"));
            }
            let target = target_mut(document, &path, sel)?;
            let decl = target
                .namespace_decls
                .iter_mut()
                .find(|d| d.prefix.as_deref() == Some(prefix.as_str()))
                .ok_or_else(|| unlocated(sel))?;
            let old = std::mem::replace(&mut decl.uri, uri.to_string());
            rebind_prefix(target, &prefix, &old, uri, true);
        }
    }
    trace!("Replaced node at '{}'", sel);
    Ok(())
}

// --- <remove> ---

/// Joins the text nodes at `index - 1` and `index` if both are text.
fn merge_text_at(children: &mut Vec<Node>, index: usize) {
    if index == 0 || index >= children.len() {
        return;
    }
    if !matches!(
        (&children[index - 1], &children[index]),
        (Node::Text(_), Node::Text(_))
    ) {
        return;
    }
    if let (Node::Text(next), Some(Node::Text(previous))) =
        (children.remove(index), children.get_mut(index - 1))
    {
        previous.push_str(&next);
    }
}

fn is_whitespace_at(children: &[Node], index: Option<usize>) -> bool {
    index
        .and_then(|i| children.get(i))
        .is_some_and(Node::is_whitespace)
}

fn apply_remove(
    document: &mut Element,
    remove: &Remove,
    bindings: &[NamespaceDecl],
) -> Result<(), XconError> {
    let sel = remove.sel.as_str();
    let location = Selector::parse(sel, bindings)?.locate(document)?;

    if remove.ws.is_some() && !matches!(location, Location::Element(_)) {
        return Err(directive(sel, "'ws' only applies to elements"));
    }

    match location {
        Location::Element(path) => {
            let (parent_path, index) = split_path(&path, sel)?;
            let parent = target_mut(document, parent_path, sel)?;

            let before = index.checked_sub(1);
            let after = Some(index + 1);
            let (drop_before, drop_after) = match remove.ws {
                None => (false, false),
                Some(Ws::Before) => (true, false),
                Some(Ws::After) => (false, true),
                Some(Ws::Both) => (true, true),
            };
            if (drop_before && !is_whitespace_at(&parent.children, before))
                || (drop_after && !is_whitespace_at(&parent.children, after))
            {
                return Err(XconError::InvalidWhitespaceDirective {
                    sel: sel.to_string(),
                });
            }

            // Highest index first so the lower ones stay valid.
            if drop_after {
                parent.children.remove(index + 1);
            }
            parent.children.remove(index);
            if drop_before {
                parent.children.remove(index - 1);
            }
            merge_text_at(&mut parent.children, index - usize::from(drop_before));
        }
        Location::Attribute {
            path,
            namespace,
            name,
        } => {
            let target = target_mut(document, &path, sel)?;
            target
                .remove_attribute(namespace.as_deref(), &name)
                .ok_or_else(|| unlocated(sel))?;
        }
        Location::Text { path, index } => {
            let target = target_mut(document, &path, sel)?;
            target.children.remove(index);
        }
        Location::Namespace { path, prefix } => {
            let target = target_mut(document, &path, sel)?;
            let position = target
                .namespace_decls
                .iter()
                .position(|d| d.prefix.as_deref() == Some(prefix.as_str()))
                .ok_or_else(|| unlocated(sel))?;
            let uri = target.namespace_decls[position].uri.clone();
            if prefix_in_use(target, &prefix, &uri, true) {
                return Err(directive(sel, "namespace declaration is still in use"));
            }
            target.namespace_decls.remove(position);
        }
    }
    trace!("Removed node at '{}'", sel);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_str;
    use crate::namespaces::CONFERENCE_INFO_NS;

    const DOC: &str = "<conference-info xmlns=\"urn:ietf:params:xml:ns:conference-info\" state=\"full\">\n  <users>\n    <user entity=\"sip:alice@example.com\"/>\n  </users>\n</conference-info>";

    fn doc() -> Element {
        parse_str(DOC).unwrap()
    }

    fn ci() -> Vec<NamespaceDecl> {
        vec![NamespaceDecl::new(Some("ci"), CONFERENCE_INFO_NS)]
    }

    fn user(entity: &str) -> Element {
        Element::in_namespace(CONFERENCE_INFO_NS, "user").with_attribute("entity", entity)
    }

    fn entities(document: &Element) -> Vec<String> {
        document
            .find_child(Some(CONFERENCE_INFO_NS), "users")
            .unwrap()
            .find_children(Some(CONFERENCE_INFO_NS), "user")
            .map(|u| u.attribute("entity").unwrap_or_default().to_string())
            .collect()
    }

    fn run(document: &mut Element, op: impl Into<PatchOperation>) -> Result<(), XconError> {
        let op = op.into();
        apply_in_scope(document, &op, &ci())
    }

    #[test]
    fn test_add_append_and_prepend() {
        let mut document = doc();

        // 1. Default position appends.
        run(&mut document, Add::new("/ci:conference-info/ci:users").with_element(user("sip:bob@example.com")))
            .unwrap();

        // 2. Prepend inserts as first child.
        run(
            &mut document,
            Add::new("/ci:conference-info/ci:users")
                .with_pos(Pos::Prepend)
                .with_element(user("sip:carol@example.com")),
        )
        .unwrap();

        assert_eq!(
            entities(&document),
            vec!["sip:carol@example.com", "sip:alice@example.com", "sip:bob@example.com"]
        );
    }

    #[test]
    fn test_add_before_and_after_sibling() {
        let mut document = doc();
        let sel = "/ci:conference-info/ci:users/ci:user[@entity='sip:alice@example.com']";
        run(&mut document, Add::new(sel).with_pos(Pos::Before).with_element(user("sip:a0@example.com")))
            .unwrap();
        run(&mut document, Add::new(sel).with_pos(Pos::After).with_element(user("sip:a2@example.com")))
            .unwrap();
        assert_eq!(
            entities(&document),
            vec!["sip:a0@example.com", "sip:alice@example.com", "sip:a2@example.com"]
        );
    }

    #[test]
    fn test_add_sibling_of_root_is_rejected() {
        let mut document = doc();
        let result = run(
            &mut document,
            Add::new("/ci:conference-info").with_pos(Pos::After).with_element(user("x")),
        );
        assert!(matches!(result, Err(XconError::InvalidRootElementOperation { .. })));
    }

    #[test]
    fn test_add_attribute() {
        let mut document = doc();
        run(&mut document, Add::attribute("/ci:conference-info", "version", "3")).unwrap();
        assert_eq!(document.attribute("version"), Some("3"));

        // Adding it again collides.
        let result = run(&mut document, Add::attribute("/ci:conference-info", "version", "4"));
        assert!(matches!(
            result,
            Err(XconError::InvalidAttributeValue { ref attribute, .. }) if attribute == "version"
        ));
    }

    #[test]
    fn test_add_with_pos_and_type_is_rejected() {
        let mut document = doc();
        let result = run(
            &mut document,
            Add::attribute("/ci:conference-info", "version", "3").with_pos(Pos::Prepend),
        );
        assert!(matches!(result, Err(XconError::InvalidPatchDirective { .. })));
        assert_eq!(document.attribute("version"), None);
    }

    #[test]
    fn test_add_namespace_prefix_twice_is_rejected() {
        let mut document = doc();
        run(&mut document, Add::namespace("/ci:conference-info", "ext", "urn:example:ext")).unwrap();
        let result = run(
            &mut document,
            Add::namespace("/ci:conference-info", "ext", "urn:example:other"),
        );
        assert!(matches!(result, Err(XconError::InvalidPatchDirective { .. })));
        assert_eq!(document.namespace_decls.len(), 2);

        // Reserved prefixes cannot be declared either.
        let result = run(&mut document, Add::namespace("/ci:conference-info", "xmlns", "urn:x"));
        assert!(matches!(result, Err(XconError::InvalidPatchDirective { .. })));
    }

    #[test]
    fn test_add_namespace_declaration() {
        let mut document = doc();
        run(&mut document, Add::namespace("/ci:conference-info", "ext", "urn:example:ext")).unwrap();
        assert!(document
            .namespace_decls
            .iter()
            .any(|d| d.prefix.as_deref() == Some("ext") && d.uri == "urn:example:ext"));
    }

    #[test]
    fn test_replace_element_attribute_and_text() {
        let mut document = parse_str(
            r#"<conference-info xmlns="urn:ietf:params:xml:ns:conference-info" state="full"><conference-description><subject>Old</subject></conference-description></conference-info>"#,
        )
        .unwrap();

        // 1. Attribute value.
        run(&mut document, Replace::text("/ci:conference-info/@state", "partial")).unwrap();
        assert_eq!(document.attribute("state"), Some("partial"));

        // 2. Text node.
        run(
            &mut document,
            Replace::text("/ci:conference-info/ci:conference-description/ci:subject/text()", "New"),
        )
        .unwrap();
        let description = document
            .find_child(Some(CONFERENCE_INFO_NS), "conference-description")
            .unwrap();
        assert_eq!(
            description.find_child(Some(CONFERENCE_INFO_NS), "subject").unwrap().text(),
            "New"
        );

        // 3. Whole element.
        let replacement = Element::in_namespace(CONFERENCE_INFO_NS, "conference-description")
            .with_child(Element::in_namespace(CONFERENCE_INFO_NS, "display-text").with_text("Weekly"));
        run(
            &mut document,
            Replace::new("/ci:conference-info/ci:conference-description").with_element(replacement.clone()),
        )
        .unwrap();
        assert_eq!(
            document.find_child(Some(CONFERENCE_INFO_NS), "conference-description"),
            Some(&replacement)
        );
    }

    #[test]
    fn test_replace_element_requires_single_element() {
        let mut document = doc();
        let result = run(&mut document, Replace::text("/ci:conference-info/ci:users", "nope"));
        assert!(matches!(result, Err(XconError::InvalidNodeTypes { .. })));
    }

    #[test]
    fn test_remove_with_whitespace() {
        let mut document = doc();
        run(
            &mut document,
            Remove::new("/ci:conference-info/ci:users/ci:user").with_ws(Ws::Before),
        )
        .unwrap();
        let users = document.find_child(Some(CONFERENCE_INFO_NS), "users").unwrap();
        assert_eq!(users.children, vec![Node::Text("\n  ".to_string())]);
    }

    #[test]
    fn test_remove_ws_without_whitespace_neighbour() {
        let mut document =
            parse_str(r#"<conference-info xmlns="urn:ietf:params:xml:ns:conference-info"><users/></conference-info>"#)
                .unwrap();
        let result = run(&mut document, Remove::new("/ci:conference-info/ci:users").with_ws(Ws::After));
        assert!(matches!(result, Err(XconError::InvalidWhitespaceDirective { .. })));
    }

    #[test]
    fn test_remove_root_and_attribute() {
        let mut document = doc();
        assert!(matches!(
            run(&mut document, Remove::new("/ci:conference-info")),
            Err(XconError::InvalidRootElementOperation { .. })
        ));

        run(&mut document, Remove::new("/ci:conference-info/@state")).unwrap();
        assert_eq!(document.attribute("state"), None);

        assert!(matches!(
            run(&mut document, Remove::new("/ci:conference-info/@state")),
            Err(XconError::UnlocatedNode { .. })
        ));
    }

    #[test]
    fn test_remove_ws_on_attribute_is_rejected() {
        let mut document = doc();
        let result = run(&mut document, Remove::new("/ci:conference-info/@state").with_ws(Ws::Both));
        assert!(matches!(result, Err(XconError::InvalidPatchDirective { .. })));
        assert_eq!(document.attribute("state"), Some("full"));
    }

    #[test]
    fn test_remove_merges_surrounding_text() {
        let mut document = parse_str("<a>x<b/>y</a>").unwrap();

        // 1. The two text nodes around <b> become one.
        apply_operation(&mut document, &Remove::new("/a/b").into()).unwrap();
        assert_eq!(document.children, vec![Node::Text("xy".to_string())]);

        // 2. So a text() selector finds exactly one node again.
        apply_operation(&mut document, &Replace::text("/a/text()", "z").into()).unwrap();
        assert_eq!(document.text(), "z");
    }

    #[test]
    fn test_remove_namespace_declaration_in_use() {
        let mut document = parse_str(r#"<a xmlns:p="urn:p" xmlns:q="urn:q"><p:b/></a>"#).unwrap();
        assert!(matches!(
            apply_operation(&mut document, &Remove::new("/a/namespace::p").into()),
            Err(XconError::InvalidPatchDirective { .. })
        ));
        apply_operation(&mut document, &Remove::new("/a/namespace::q").into()).unwrap();
        assert_eq!(document.namespace_decls.len(), 1);
    }

    #[test]
    fn test_replace_namespace_rebinds_names() {
        let mut document = parse_str(r#"<a xmlns:p="urn:old"><p:b p:k="v"/></a>"#).unwrap();
        apply_operation(&mut document, &Replace::text("/a/namespace::p", "urn:new").into()).unwrap();
        let b = document.child_elements().next().unwrap();
        assert_eq!(b.namespace.as_deref(), Some("urn:new"));
        assert_eq!(b.attribute_ns(Some("urn:new"), "k"), Some("v"));
    }

    #[test]
    fn test_apply_diff_atomic_rolls_back() {
        let mut document = doc();
        let diff = ConferenceInfoDiff::new("xcon:c@example.com")
            .with_namespace(Some("ci"), CONFERENCE_INFO_NS)
            .with_operation(Replace::text("/ci:conference-info/@state", "partial"))
            .with_operation(Remove::new("/ci:conference-info/ci:sidebars-by-val"));

        // 1. The atomic variant leaves the document untouched.
        let before = document.clone();
        assert!(apply_diff_atomic(&mut document, &diff).is_err());
        assert_eq!(document, before);

        // 2. The plain variant keeps the first operation.
        assert!(apply_diff(&mut document, &diff).is_err());
        assert_eq!(document.attribute("state"), Some("partial"));
    }

    #[test]
    fn test_extension_operations_are_skipped() {
        let mut document = doc();
        let before = document.clone();
        let op = PatchOperation::Extension(Element::in_namespace("urn:example:ext", "note"));
        apply_operation(&mut document, &op).unwrap();
        assert_eq!(document, before);
    }
}

// crates/xcon-rs-diff/src/resolver/diff.rs

//! Resolves a `<conference-info-diff>` element into [`ConferenceInfoDiff`].

use super::resolve_content;
use super::utils::{describe, required_attribute};
use crate::dom::{Attribute, Element, Node};
use crate::error::XconError;
use crate::namespaces::{PATCH_OPS_NS, XCON_NS};
use crate::options::ParseOptions;
use crate::types::{Add, ConferenceInfoDiff, PatchOperation, Pos, Remove, Replace, Ws};
use log::{debug, trace, warn};

/// Operations may be written in the XCON namespace (RFC 6502) or in the
/// patch-ops namespace (RFC 5261).
fn is_operation_namespace(namespace: Option<&str>) -> bool {
    matches!(namespace, Some(XCON_NS) | Some(PATCH_OPS_NS))
}

pub(crate) fn resolve_diff(
    root: &Element,
    options: &ParseOptions,
) -> Result<ConferenceInfoDiff, XconError> {
    if !root.is_named(Some(XCON_NS), "conference-info-diff") {
        return Err(XconError::UnexpectedElement {
            expected: "conference-info-diff",
            found: describe(root),
        });
    }

    let entity =
        required_attribute(root.attribute("entity"), "conference-info-diff", "entity")?.to_string();
    let extra_attributes =
        collect_extra_attributes(root, "conference-info-diff", &["entity"], options)?;

    let mut operations = Vec::new();
    for child in &root.children {
        match child {
            Node::Text(text) => check_stray_text(text, "conference-info-diff", options)?,
            Node::Element(element) => {
                if let Some(op) = resolve_operation(element, options)? {
                    operations.push(op);
                }
            }
        }
    }

    debug!(
        "Resolved conference-info-diff for '{}' with {} operation(s)",
        entity,
        operations.len()
    );

    Ok(ConferenceInfoDiff {
        entity,
        operations,
        namespaces: root.namespace_decls.clone(),
        extra_attributes,
    })
}

fn resolve_operation(
    element: &Element,
    options: &ParseOptions,
) -> Result<Option<PatchOperation>, XconError> {
    if !is_operation_namespace(element.namespace.as_deref()) {
        trace!("Keeping foreign element {} as an extension", describe(element));
        return Ok(Some(PatchOperation::Extension(element.clone())));
    }

    let op = match element.name.as_str() {
        "add" => {
            let sel = required_attribute(element.attribute("sel"), "add", "sel")?.to_string();
            let add = Add {
                sel,
                pos: element.attribute("pos").map(str::parse::<Pos>).transpose()?,
                node_type: element.attribute("type").map(str::to_string),
                content: element.children.clone(),
                namespaces: element.namespace_decls.clone(),
                extra_attributes: collect_extra_attributes(
                    element,
                    "add",
                    &["sel", "pos", "type"],
                    options,
                )?,
            };
            if options.strict {
                resolve_content(&add.content)?;
            }
            PatchOperation::Add(add)
        }
        "replace" => {
            let sel = required_attribute(element.attribute("sel"), "replace", "sel")?.to_string();
            let replace = Replace {
                sel,
                content: element.children.clone(),
                namespaces: element.namespace_decls.clone(),
                extra_attributes: collect_extra_attributes(element, "replace", &["sel"], options)?,
            };
            if options.strict {
                resolve_content(&replace.content)?;
            }
            PatchOperation::Replace(replace)
        }
        "remove" => {
            let sel = required_attribute(element.attribute("sel"), "remove", "sel")?.to_string();
            for child in &element.children {
                match child {
                    Node::Text(text) => check_stray_text(text, "remove", options)?,
                    Node::Element(e) if options.strict => {
                        return Err(XconError::UnexpectedElement {
                            expected: "empty <remove>",
                            found: describe(e),
                        });
                    }
                    Node::Element(e) => warn!("Ignoring {} inside <remove>", describe(e)),
                }
            }
            PatchOperation::Remove(Remove {
                sel,
                ws: element.attribute("ws").map(str::parse::<Ws>).transpose()?,
                namespaces: element.namespace_decls.clone(),
                extra_attributes: collect_extra_attributes(
                    element,
                    "remove",
                    &["sel", "ws"],
                    options,
                )?,
            })
        }
        other => {
            if options.strict {
                return Err(XconError::UnexpectedElement {
                    expected: "add, replace or remove",
                    found: describe(element),
                });
            }
            warn!("Skipping unknown operation <{}>", other);
            return Ok(None);
        }
    };

    trace!("Resolved <{}> sel='{}'", op.name(), op.sel().unwrap_or_default());
    Ok(Some(op))
}

/// Collects attributes that are not in `known`.
///
/// Namespace-qualified ones are always kept. Unqualified ones are an error
/// in strict mode and kept with a warning otherwise.
fn collect_extra_attributes(
    element: &Element,
    element_name: &'static str,
    known: &[&str],
    options: &ParseOptions,
) -> Result<Vec<Attribute>, XconError> {
    let mut extra = Vec::new();
    for attr in &element.attributes {
        if attr.namespace.is_none() {
            if known.contains(&attr.name.as_str()) {
                continue;
            }
            if options.strict {
                return Err(XconError::UnexpectedAttribute {
                    element: element_name,
                    attribute: attr.name.clone(),
                });
            }
            warn!("Keeping unknown attribute '{}' on <{}>", attr.name, element_name);
        }
        extra.push(attr.clone());
    }
    Ok(extra)
}

fn check_stray_text(
    text: &str,
    element_name: &'static str,
    options: &ParseOptions,
) -> Result<(), XconError> {
    if crate::dom::is_xml_whitespace(text) {
        return Ok(());
    }
    if options.strict {
        return Err(XconError::ValidationError(
            "character data is not allowed here",
        ));
    }
    warn!("Ignoring character data inside <{}>", element_name);
    Ok(())
}

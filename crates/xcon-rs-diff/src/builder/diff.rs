// crates/xcon-rs-diff/src/builder/diff.rs

//! Converts a [`ConferenceInfoDiff`] into its DOM element.

use crate::dom::{Attribute, Element};
use crate::namespaces::XCON_NS;
use crate::types::{ConferenceInfoDiff, PatchOperation};

pub(super) fn build_diff_element(diff: &ConferenceInfoDiff) -> Element {
    let mut root = Element::in_namespace(XCON_NS, "conference-info-diff");
    root.namespace_decls = diff.namespaces.clone();
    root.set_attribute("entity", diff.entity.as_str());
    push_extra(&mut root, &diff.extra_attributes);

    for op in &diff.operations {
        root.push_element(build_operation_element(op));
    }
    root
}

fn build_operation_element(op: &PatchOperation) -> Element {
    match op {
        PatchOperation::Add(add) => {
            let mut element = Element::in_namespace(XCON_NS, "add");
            element.set_attribute("sel", add.sel.as_str());
            if let Some(pos) = add.pos {
                element.set_attribute("pos", pos.as_str());
            }
            if let Some(node_type) = &add.node_type {
                element.set_attribute("type", node_type.as_str());
            }
            push_extra(&mut element, &add.extra_attributes);
            element.namespace_decls = add.namespaces.clone();
            element.children = add.content.clone();
            element
        }
        PatchOperation::Replace(replace) => {
            let mut element = Element::in_namespace(XCON_NS, "replace");
            element.set_attribute("sel", replace.sel.as_str());
            push_extra(&mut element, &replace.extra_attributes);
            element.namespace_decls = replace.namespaces.clone();
            element.children = replace.content.clone();
            element
        }
        PatchOperation::Remove(remove) => {
            let mut element = Element::in_namespace(XCON_NS, "remove");
            element.set_attribute("sel", remove.sel.as_str());
            if let Some(ws) = remove.ws {
                element.set_attribute("ws", ws.as_str());
            }
            push_extra(&mut element, &remove.extra_attributes);
            element.namespace_decls = remove.namespaces.clone();
            element
        }
        PatchOperation::Extension(element) => element.clone(),
    }
}

fn push_extra(element: &mut Element, extra: &[Attribute]) {
    for attr in extra {
        element.set_attribute_entry(attr.clone());
    }
}

// crates/xcon-rs-diff/tests/patching.rs

use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use xcon_rs_diff::{
    CONFERENCE_INFO_NS, Element, Gain, JoinHandling, SerializeOptions, XCON_NS, XML_NS, XconElement,
    XconError, apply_diff, apply_diff_atomic, dom, load_diff_from_str, load_xcon_element,
};

/// Helper function to load a test file from the `tests/data/` directory.
fn load_test_file(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(name);

    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read test file {:?}: {}", path, e))
}

fn child<'a>(element: &'a Element, namespace: &str, name: &str) -> &'a Element {
    element
        .find_child(Some(namespace), name)
        .unwrap_or_else(|| panic!("<{}> not found under <{}>", name, element.name))
}

fn patched_document() -> Element {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut document = dom::parse_str(&load_test_file("conference_info.xml")).unwrap();
    let diff = load_diff_from_str(&load_test_file("diff_full.xml")).unwrap();
    apply_diff(&mut document, &diff).expect("Failed to apply diff");
    document
}

#[test]
fn test_apply_full_diff() {
    let document = patched_document();

    // 1. Root attribute replaced.
    assert_eq!(document.attribute("version"), Some("2"));
    assert_eq!(document.attribute("state"), Some("full"));

    // 2. Attribute added in the xml namespace.
    let description = child(&document, CONFERENCE_INFO_NS, "conference-description");
    assert_eq!(
        description.attribute_ns(Some(XML_NS), "lang"),
        Some("en")
    );

    // 3. Media entry gained floor-information and new controls.
    let entry = child(
        child(description, CONFERENCE_INFO_NS, "available-media"),
        CONFERENCE_INFO_NS,
        "entry",
    );
    let controls = load_xcon_element(child(entry, XCON_NS, "controls")).unwrap();
    let Some(XconElement::Controls(controls)) = controls else {
        panic!("controls did not decode");
    };
    assert_eq!(controls.mute, Some(false));
    assert_eq!(controls.gain, Some(Gain::new(-20).unwrap()));
    assert!(entry.find_child(Some(XCON_NS), "floor-information").is_some());
    assert_eq!(entry.find_children(Some(XCON_NS), "controls").count(), 1);

    // 4. Users: list prepended, join-handling text replaced, bob removed.
    let users = child(&document, CONFERENCE_INFO_NS, "users");
    let first = users.child_elements().next().unwrap();
    assert!(first.is_named(Some(XCON_NS), "allowed-users-list"));
    assert_eq!(
        load_xcon_element(child(users, XCON_NS, "join-handling")).unwrap(),
        Some(XconElement::JoinHandling(JoinHandling::Confirm))
    );
    let entities: Vec<&str> = users
        .find_children(Some(CONFERENCE_INFO_NS), "user")
        .filter_map(|u| u.attribute("entity"))
        .collect();
    assert_eq!(entities, vec!["xcon-userid:alice@example.com"]);
}

#[test]
fn test_patched_document_serializes_with_original_prefixes() {
    let document = patched_document();
    let options = SerializeOptions::compact();
    let xml = dom::to_string(&document, &options).unwrap();

    // 1. The conference-info namespace stays the default and XCON keeps `xcon`.
    assert!(xml.starts_with(r#"<conference-info xmlns="urn:ietf:params:xml:ns:conference-info""#));
    assert!(xml.contains("<xcon:controls>"));
    assert!(xml.contains("<xcon:floor-information>"));
    assert!(xml.contains(r#"xml:lang="en""#));

    // 2. Writing the re-parsed tree gives the same text.
    let reparsed = dom::parse_str(&xml).unwrap();
    assert_eq!(dom::to_string(&reparsed, &options).unwrap(), xml);
}

#[test]
fn test_failed_diff_is_atomic() {
    let mut document = dom::parse_str(&load_test_file("conference_info.xml")).unwrap();
    let original = document.clone();

    // The last operation targets a user that does not exist.
    let diff = load_diff_from_str(
        r#"<conference-info-diff xmlns="urn:ietf:params:xml:ns:xcon-conference-info"
    xmlns:ci="urn:ietf:params:xml:ns:conference-info" entity="xcon:8977794@example.com">
  <replace sel="/ci:conference-info/@version">2</replace>
  <remove sel="/ci:conference-info/ci:users/ci:user[@entity='xcon-userid:zoe@example.com']"/>
</conference-info-diff>"#,
    )
    .unwrap();

    let err = apply_diff_atomic(&mut document, &diff).unwrap_err();
    assert!(matches!(err, XconError::UnlocatedNode { .. }));
    assert_eq!(document, original);
}

#[test]
fn test_selector_prefixes_come_from_the_diff() {
    let mut document = dom::parse_str(&load_test_file("conference_info.xml")).unwrap();

    // `c` is not declared anywhere in the diff.
    let diff = load_diff_from_str(
        r#"<conference-info-diff xmlns="urn:ietf:params:xml:ns:xcon-conference-info" entity="a">
  <remove sel="/c:conference-info/c:users"/>
</conference-info-diff>"#,
    )
    .unwrap();

    assert!(matches!(
        apply_diff(&mut document, &diff),
        Err(XconError::InvalidNamespacePrefix { ref prefix, .. }) if prefix == "c"
    ));
}

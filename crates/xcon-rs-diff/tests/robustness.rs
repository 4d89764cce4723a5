//! Integration tests focused on error handling and edge cases.
//!
//! These tests ensure the loader reports malformed XML, wrong roots,
//! missing mandatory attributes and invalid values without panicking,
//! and that strict mode tightens what lenient mode tolerates.

use xcon_rs_diff::{
    MixerName, ParseOptions, PatchOperation, XconElement, XconError, load_diff_from_bytes,
    load_diff_from_str, load_diff_from_str_with_options, load_xcon_element_from_str,
};

/// Wraps operations in a valid root.
fn diff_with(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<conference-info-diff xmlns="urn:ietf:params:xml:ns:xcon-conference-info"
    xmlns:ci="urn:ietf:params:xml:ns:conference-info" entity="xcon:c@example.com">
{}
</conference-info-diff>"#,
        body
    )
}

#[test]
fn test_malformed_xml() {
    let result = load_diff_from_str("<conference-info-diff><add></conference-info-diff>");
    assert!(result.is_err(), "mismatched tags must not parse");

    let result = load_diff_from_str("");
    assert!(matches!(result, Err(XconError::MalformedDocument(_))));
}

#[test]
fn test_multiple_roots() {
    let xml = r#"<conference-info-diff xmlns="urn:ietf:params:xml:ns:xcon-conference-info" entity="a"/><x/>"#;
    assert!(matches!(
        load_diff_from_str(xml),
        Err(XconError::MalformedDocument(_))
    ));
}

#[test]
fn test_character_data_after_root() {
    let xml = r#"<conference-info-diff xmlns="urn:ietf:params:xml:ns:xcon-conference-info" entity="a"/>garbage"#;
    assert!(matches!(
        load_diff_from_str(xml),
        Err(XconError::MalformedDocument(_))
    ));
}

#[test]
fn test_invalid_utf8() {
    let bytes = b"<conference-info-diff entity=\"\xff\"/>";
    assert!(load_diff_from_bytes(bytes).is_err());
}

#[test]
fn test_root_in_wrong_namespace() {
    let xml = r#"<conference-info-diff xmlns="urn:ietf:params:xml:ns:conference-info" entity="a"/>"#;
    let err = load_diff_from_str(xml).unwrap_err();
    match err {
        XconError::UnexpectedElement { expected, found } => {
            assert_eq!(expected, "conference-info-diff");
            assert_eq!(found, "{urn:ietf:params:xml:ns:conference-info}conference-info-diff");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_missing_entity() {
    let xml = r#"<conference-info-diff xmlns="urn:ietf:params:xml:ns:xcon-conference-info"/>"#;
    assert!(matches!(
        load_diff_from_str(xml),
        Err(XconError::MissingAttribute {
            element: "conference-info-diff",
            attribute: "entity"
        })
    ));
}

#[test]
fn test_missing_sel_on_each_operation() {
    for (body, element) in [
        ("<add/>", "add"),
        ("<replace>x</replace>", "replace"),
        ("<remove/>", "remove"),
    ] {
        let result = load_diff_from_str(&diff_with(body));
        assert!(
            matches!(result, Err(XconError::MissingAttribute { element: e, attribute: "sel" }) if e == element),
            "missing sel on <{}> not reported",
            element
        );
    }
}

#[test]
fn test_invalid_ws_value() {
    let result = load_diff_from_str(&diff_with(r#"<remove sel="/ci:conference-info/ci:users" ws="around"/>"#));
    assert!(matches!(
        result,
        Err(XconError::InvalidValue { field: "remove/@ws", ref value }) if value == "around"
    ));
}

#[test]
fn test_unbound_prefix_in_content() {
    let result = load_diff_from_str(&diff_with(r#"<add sel="/ci:conference-info"><z:user/></add>"#));
    assert!(matches!(result, Err(XconError::UnboundPrefix { ref prefix }) if prefix == "z"));
}

#[test]
fn test_lenient_mode_keeps_going() {
    // 1. Unknown operation, unknown attribute, stray text and bad XCON content.
    let xml = diff_with(
        r#"stray text
  <merge sel="/ci:conference-info"/>
  <remove sel="/ci:conference-info/ci:users" note="x"/>
  <add sel="/ci:conference-info"><controls><gain>500</gain></controls></add>"#,
    );

    // 2. Lenient mode loads the two known operations.
    let diff = load_diff_from_str(&xml).unwrap();
    assert_eq!(diff.operations.len(), 2);
    let Some(PatchOperation::Add(add)) = diff.operations.last() else {
        panic!("expected add");
    };

    // 3. The bad gain only surfaces when the content is decoded.
    assert!(matches!(
        add.xcon_elements(),
        Err(XconError::InvalidValue { field: "gain", .. })
    ));

    // 4. Strict mode rejects the document.
    assert!(load_diff_from_str_with_options(&xml, &ParseOptions::strict()).is_err());
}

#[test]
fn test_strict_mode_rejects_stray_text() {
    let xml = diff_with("oops");
    assert!(matches!(
        load_diff_from_str_with_options(&xml, &ParseOptions::strict()),
        Err(XconError::ValidationError(_))
    ));
}

#[test]
fn test_strict_mode_accepts_clean_document() {
    let xml = diff_with(
        r#"<add sel="/ci:conference-info/ci:users"><join-handling>block</join-handling></add>
  <remove sel="/ci:conference-info/ci:users/ci:user[1]" ext:why="left" xmlns:ext="urn:example:ext"/>"#,
    );
    let diff = load_diff_from_str_with_options(&xml, &ParseOptions::strict()).unwrap();
    let PatchOperation::Remove(remove) = &diff.operations[1] else {
        panic!("expected remove");
    };
    assert_eq!(remove.extra_attributes.len(), 1);
    assert_eq!(remove.extra_attributes[0].namespace.as_deref(), Some("urn:example:ext"));
}

#[test]
fn test_xcon_element_errors() {
    // 1. Missing required attribute inside a complex element.
    let result = load_xcon_element_from_str(
        r#"<codecs xmlns="urn:ietf:params:xml:ns:xcon-conference-info"><codec name="PCMU" policy="allowed"/></codecs>"#,
    );
    assert!(matches!(
        result,
        Err(XconError::MissingAttribute { element: "codecs", attribute: "decision" })
    ));

    // 2. Bad boolean.
    let result = load_xcon_element_from_str(
        r#"<allow-sidebars xmlns="urn:ietf:params:xml:ns:xcon-conference-info">maybe</allow-sidebars>"#,
    );
    assert!(matches!(
        result,
        Err(XconError::InvalidValue { field: "allow-sidebars", .. })
    ));

    // 3. Floor policy without media-label.
    let result = load_xcon_element_from_str(
        r#"<floor-information xmlns="urn:ietf:params:xml:ns:xcon-conference-info"><conference-floor-policy><floor id="f"/></conference-floor-policy></floor-information>"#,
    );
    assert!(matches!(result, Err(XconError::MissingElement { .. })));

    // 4. Unknown XCON element.
    let result = load_xcon_element_from_str(
        r#"<conference-mood xmlns="urn:ietf:params:xml:ns:xcon-conference-info">good</conference-mood>"#,
    );
    assert!(matches!(result, Err(XconError::UnexpectedElement { .. })));
}

#[test]
fn test_extension_elements_do_not_shadow_schema_elements() {
    // A foreign <ext:floor> shares its local name with the mixer's <floor>.
    let element = load_xcon_element_from_str(
        r#"<to-mixer xmlns="urn:ietf:params:xml:ns:xcon-conference-info" xmlns:ext="urn:example:ext" name="VideoIn">
  <floor id="f1">true</floor>
  <ext:floor>custom</ext:floor>
</to-mixer>"#,
    )
    .unwrap();

    let XconElement::ToMixer(mixer) = element else {
        panic!("expected to-mixer, got {:?}", element);
    };
    assert_eq!(mixer.name, MixerName::VideoIn);
    assert_eq!(mixer.floors.len(), 1);
    assert_eq!(mixer.floors[0].id, "f1");
    assert!(mixer.floors[0].value);
}

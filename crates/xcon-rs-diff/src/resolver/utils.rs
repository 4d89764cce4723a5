// crates/xcon-rs-diff/src/resolver/utils.rs

//! Utility functions for the resolver.

use crate::dom::Element;
use crate::error::XconError;
use core::str::FromStr;

/// Parses an `xs:boolean` (`true`, `false`, `1`, `0`).
pub(super) fn parse_bool(field: &'static str, value: &str) -> Result<bool, XconError> {
    match value.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(XconError::InvalidValue {
            field,
            value: other.to_string(),
        }),
    }
}

/// Parses a numeric simple type, reporting failures as `InvalidValue`.
pub(super) fn parse_number<T: FromStr>(field: &'static str, value: &str) -> Result<T, XconError> {
    value.trim().parse::<T>().map_err(|_| XconError::InvalidValue {
        field,
        value: value.to_string(),
    })
}

/// Parses an optional value with `parse`.
pub(super) fn parse_optional<T, F>(value: Option<&str>, parse: F) -> Result<Option<T>, XconError>
where
    F: FnOnce(&str) -> Result<T, XconError>,
{
    value.map(parse).transpose()
}

/// Unwraps a mandatory attribute.
pub(super) fn required_attribute<'a>(
    value: Option<&'a str>,
    element: &'static str,
    attribute: &'static str,
) -> Result<&'a str, XconError> {
    value.ok_or(XconError::MissingAttribute { element, attribute })
}

/// Unwraps a mandatory child element.
pub(super) fn required_element<T>(value: Option<T>, element: &'static str) -> Result<T, XconError> {
    value.ok_or(XconError::MissingElement { element })
}

/// The text of a simple-content element with `xs:token`-style collapsing.
pub(super) fn token_text(element: &Element) -> String {
    element.text().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clark notation (`{ns}name`) for error messages.
pub(super) fn describe(element: &Element) -> String {
    match &element.namespace {
        Some(ns) => format!("{{{}}}{}", ns, element.name),
        None => element.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepts_lexical_forms() {
        assert!(parse_bool("mute", "true").unwrap());
        assert!(parse_bool("mute", " 1 ").unwrap());
        assert!(!parse_bool("mute", "0").unwrap());
        assert!(matches!(
            parse_bool("mute", "yes"),
            Err(XconError::InvalidValue { field: "mute", .. })
        ));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number::<u32>("max-floor-users", " 4 ").unwrap(), 4);
        assert!(parse_number::<u32>("max-floor-users", "-1").is_err());
    }

    #[test]
    fn test_token_text_collapses_whitespace() {
        let e = Element::new("mixing-mode").with_text("\n  FCFS \n");
        assert_eq!(token_text(&e), "FCFS");
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(&Element::in_namespace("urn:x", "a")), "{urn:x}a");
        assert_eq!(describe(&Element::new("a")), "a");
    }
}

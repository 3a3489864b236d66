use crate::error::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Default indent used by [`pretty_json`] and [`pprint`]
pub const DEFAULT_INDENT: usize = 4;

/// Renders any serializable value as indented JSON with sorted object keys
pub fn pretty_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    pretty_json_with_indent(data, DEFAULT_INDENT)
}

/// Same as [`pretty_json`] with a custom number of spaces per level
pub fn pretty_json_with_indent<T: Serialize + ?Sized>(data: &T, indent: usize) -> Result<String> {
    // Going through `Value` sorts keys: its map is ordered by key
    let value = serde_json::to_value(data)?;

    let indent = " ".repeat(indent);
    let mut out = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Prints a serializable value to stdout as pretty JSON
pub fn pprint<T: Serialize + ?Sized>(data: &T) -> Result<()> {
    println!("{}", pretty_json(data)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::ParsedLink;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_keys_are_sorted() {
        let mut data = HashMap::new();
        data.insert("zeta", 1);
        data.insert("alpha", 2);
        data.insert("mid", 3);

        let out = pretty_json(&data).unwrap();
        assert_eq!(out, "{\n    \"alpha\": 2,\n    \"mid\": 3,\n    \"zeta\": 1\n}");
    }

    #[test]
    fn test_nested_layout() {
        let data = json!({"b": [1, 2], "a": {"y": null, "x": true}});
        let out = pretty_json(&data).unwrap();
        let expected = r#"{
    "a": {
        "x": true,
        "y": null
    },
    "b": [
        1,
        2
    ]
}"#;
        assert_eq!(out, expected);
    }

    #[test]
    fn test_custom_indent() {
        let out = pretty_json_with_indent(&json!({"k": [1]}), 2).unwrap();
        assert_eq!(out, "{\n  \"k\": [\n    1\n  ]\n}");
    }

    #[test]
    fn test_parsed_link() {
        let link = ParsedLink::new("/x".to_string(), "X".to_string());
        let out = pretty_json(&link).unwrap();
        assert_eq!(out, "{\n    \"text\": \"X\",\n    \"url\": \"/x\"\n}");
    }

    #[test]
    fn test_unserializable_is_error() {
        let mut data = HashMap::new();
        data.insert((1, 2), "tuple keys are not valid JSON");
        assert!(matches!(
            pretty_json(&data),
            Err(crate::error::Error::Json(_))
        ));
    }
}

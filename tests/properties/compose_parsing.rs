//! Property tests for compose document parsing.

use proptest::prelude::*;

use docker_deploy::domain::entities::ComposeDocument;

/// Lowercase keys that YAML would not read as a null or boolean
fn entry_key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,12}")
        .unwrap()
        .prop_filter("plain string key", |k| {
            !matches!(k.as_str(), "null" | "true" | "false")
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary bytes never panics.
    #[test]
    fn property_parse_never_panics(content in proptest::collection::vec(any::<u8>(), 0..512)) {
        let _ = ComposeDocument::parse(&content, "fuzz.yml");
    }

    /// PROPERTY: Parse errors are reported on a single line.
    #[test]
    fn property_parse_errors_single_line(s in "(?s).{0,256}") {
        if let Err(err) = ComposeDocument::parse(s.as_bytes(), "fuzz.yml") {
            prop_assert!(!err.to_string().contains('\n'));
        }
    }

    /// PROPERTY: Every declared config keeps its key.
    #[test]
    fn property_config_keys_preserved(
        keys in proptest::collection::btree_set(entry_key(), 0..8)
    ) {
        let mut yaml = String::from("configs:\n");
        for key in &keys {
            yaml.push_str(&format!("  {key}:\n    name: {key}.v1\n    file: ./{key}.conf\n"));
        }

        let doc = ComposeDocument::parse(yaml.as_bytes(), "generated.yml").unwrap();
        let parsed: Vec<&str> = doc.entries().map(|(_, key, _)| key).collect();
        let expected: Vec<&str> = keys.iter().map(String::as_str).collect();
        prop_assert_eq!(parsed, expected);
    }
}

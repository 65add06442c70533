// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check name normalization and the lenient configuration
//! accessors against arbitrary inputs.

use proptest::prelude::*;
use rescfg::adapters::EmbeddedResolver;
use rescfg::domain::ResourceName;
use rescfg::ports::ReadConfig;
use rescfg::service::ResourceLocator;
use std::collections::HashMap;

// A leading separator never changes which resource a name refers to
proptest! {
    #[test]
    fn test_leading_separator_is_normalized(name in "[a-z0-9_]{1,8}(/[a-z0-9_.]{1,8}){0,3}") {
        let absolute = ResourceName::parse(&format!("/{}", name)).unwrap();
        let relative = ResourceName::parse(&name).unwrap();
        prop_assert_eq!(absolute.as_str(), name.as_str());
        prop_assert_eq!(absolute, relative);
    }
}

// Located results are equal with and without the leading separator
proptest! {
    #[test]
    fn test_locate_ignores_leading_separator(name in "[a-z]{1,8}(/[a-z]{1,8}){0,2}") {
        let assets = EmbeddedResolver::new();
        assets.insert(&name, name.as_bytes().to_vec());
        let locator = ResourceLocator::builder().with_embedded(assets).build();

        let relative = locator.locate(&name);
        prop_assert!(relative.is_some());
        prop_assert_eq!(relative, locator.locate(&format!("/{}", name)));
    }
}

// Whitespace-only names are blank and never resolve
proptest! {
    #[test]
    fn test_blank_names_are_absent(blank in "/?[ \t\r\n]{0,6}") {
        prop_assert!(ResourceName::parse(&blank).is_none());
        let locator = ResourceLocator::with_defaults();
        prop_assert!(locator.locate(&blank).is_none());
        prop_assert!(locator.open_stream(&blank).is_err());
    }
}

// Missing keys always return the default unchanged
proptest! {
    #[test]
    fn test_missing_key_returns_default(key in "\\PC*", default in "\\PC*") {
        let map: HashMap<String, String> = HashMap::new();
        prop_assert_eq!(map.get_string_value_or(&key, &default), default);
        prop_assert!(!map.get_boolean_value(&key));
    }
}

// Present keys return the trimmed value regardless of the default
proptest! {
    #[test]
    fn test_present_key_returns_trimmed_value(
        key in "[a-z.]{1,12}",
        value in "\\PC*",
        default in "\\PC*"
    ) {
        let mut map = HashMap::new();
        map.insert(key.clone(), value.clone());
        prop_assert_eq!(map.get_string_value_or(&key, &default), value.trim());
        prop_assert!(ReadConfig::contains_key(&map, &key));
    }
}

// Boolean access is true only for a case-insensitive "true"
proptest! {
    #[test]
    fn test_boolean_matches_case_insensitive_true(value in "[ ]{0,2}[tTrRuUeEyYsS10]{0,5}[ ]{0,2}") {
        let mut map = HashMap::new();
        map.insert("flag".to_string(), value.clone());
        let expected = value.trim().eq_ignore_ascii_case("true");
        prop_assert_eq!(map.get_boolean_value("flag"), expected);
    }
}

// Integer access round-trips any i64 and never panics on garbage
proptest! {
    #[test]
    fn test_integer_roundtrip(n in prop::num::i64::ANY) {
        let mut map = HashMap::new();
        map.insert("n".to_string(), format!(" {} ", n));
        prop_assert_eq!(map.get_integer_value("n", 0), n);
    }

    #[test]
    fn test_integer_garbage_uses_default(value in "[a-z ]{1,10}", default in prop::num::i64::ANY) {
        let mut map = HashMap::new();
        map.insert("n".to_string(), value);
        prop_assert_eq!(map.get_integer_value("n", default), default);
    }
}

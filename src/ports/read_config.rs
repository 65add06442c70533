// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only configuration view trait definition.
//!
//! `ReadConfig` gives typed, defaulted access to values in a key-value mapping
//! that someone else owns. Implementations supply two primitives; every typed
//! accessor is a default method layered on top of them, so trimming and
//! default handling live in exactly one place.
//!
//! Access is lenient: missing keys and malformed values resolve to defaults
//! and are never reported as errors. Use [`ReadConfig::contains_key`] to tell
//! "absent" apart from "present but equal to the default".

use std::borrow::Cow;

/// Typed, lenient, read-only access to a string-to-string mapping.
///
/// # Examples
///
/// ```rust
/// use rescfg::ports::ReadConfig;
/// use std::collections::HashMap;
///
/// let mut properties = HashMap::new();
/// properties.insert("db.host".to_string(), "  localhost ".to_string());
/// properties.insert("db.ssl".to_string(), "TRUE".to_string());
///
/// assert_eq!(properties.get_string_value("db.host"), "localhost");
/// assert_eq!(properties.get_string_value_or("db.user", "admin"), "admin");
/// assert!(properties.get_boolean_value("db.ssl"));
/// assert!(!properties.get_boolean_value("db.pool"));
/// ```
pub trait ReadConfig {
    /// Returns `true` if the key exists, whatever its value.
    fn contains_key(&self, key: &str) -> bool;

    /// Returns the stored value exactly as held, or `None` if the key is absent.
    fn raw_value(&self, key: &str) -> Option<Cow<'_, str>>;

    /// Returns the value for `key` trimmed of surrounding whitespace, or
    /// `default` unchanged when the key is absent.
    fn get_string_value_or(&self, key: &str, default: &str) -> String {
        match self.raw_value(key) {
            Some(value) => value.trim().to_string(),
            None => default.to_string(),
        }
    }

    /// Returns the trimmed value for `key`, or an empty string.
    fn get_string_value(&self, key: &str) -> String {
        self.get_string_value_or(key, "")
    }

    /// Returns `true` only when the trimmed value equals `"true"`, ignoring case.
    ///
    /// Absent keys and every other value, including `"yes"`, `"1"` and `""`,
    /// yield `false`.
    fn get_boolean_value(&self, key: &str) -> bool {
        self.get_string_value_or(key, "false")
            .eq_ignore_ascii_case("true")
    }

    /// Returns the trimmed value parsed as an `i64`, or `default` when the key
    /// is absent or the value is not an integer.
    fn get_integer_value(&self, key: &str, default: i64) -> i64 {
        let Some(raw) = self.raw_value(key) else {
            return default;
        };
        match raw.trim().parse::<i64>() {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(
                    "Using default {} for key '{}': value '{}' is not an integer ({})",
                    default,
                    key,
                    raw,
                    e
                );
                default
            }
        }
    }
}

impl<T: ReadConfig + ?Sized> ReadConfig for &T {
    fn contains_key(&self, key: &str) -> bool {
        (**self).contains_key(key)
    }

    fn raw_value(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).raw_value(key)
    }
}

impl<T: ReadConfig + ?Sized> ReadConfig for Box<T> {
    fn contains_key(&self, key: &str) -> bool {
        (**self).contains_key(key)
    }

    fn raw_value(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).raw_value(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single-entry view used to exercise the default methods in isolation
    struct OneKey {
        key: &'static str,
        value: &'static str,
    }

    impl ReadConfig for OneKey {
        fn contains_key(&self, key: &str) -> bool {
            key == self.key
        }

        fn raw_value(&self, key: &str) -> Option<Cow<'_, str>> {
            (key == self.key).then_some(Cow::Borrowed(self.value))
        }
    }

    fn one(key: &'static str, value: &'static str) -> OneKey {
        OneKey { key, value }
    }

    #[test]
    fn test_string_value_is_trimmed() {
        let config = one("name", "  padded\t");
        assert_eq!(config.get_string_value_or("name", "x"), "padded");
        assert_eq!(config.get_string_value("name"), "padded");
    }

    #[test]
    fn test_missing_key_returns_default_untouched() {
        let config = one("name", "value");
        assert_eq!(config.get_string_value_or("other", " keep me "), " keep me ");
        assert_eq!(config.get_string_value("other"), "");
        assert!(!config.contains_key("other"));
    }

    #[test]
    fn test_present_empty_value_is_not_default() {
        let config = one("empty", "");
        assert!(config.contains_key("empty"));
        assert_eq!(config.get_string_value_or("empty", "fallback"), "");
    }

    #[test]
    fn test_boolean_value_is_case_insensitive() {
        for value in ["true", "TRUE", "True", " tRuE "] {
            assert!(one("flag", value).get_boolean_value("flag"), "{}", value);
        }
    }

    #[test]
    fn test_boolean_value_is_lenient() {
        for value in ["false", "yes", "1", "on", "", "truthy", "t"] {
            assert!(!one("flag", value).get_boolean_value("flag"), "{}", value);
        }
        assert!(!one("flag", "true").get_boolean_value("missing"));
    }

    #[test]
    fn test_integer_value() {
        assert_eq!(one("port", " 5432 ").get_integer_value("port", 0), 5432);
        assert_eq!(one("port", "-7").get_integer_value("port", 0), -7);
        assert_eq!(one("port", "54x").get_integer_value("port", 80), 80);
        assert_eq!(one("port", "5432").get_integer_value("missing", 80), 80);
    }

    #[test]
    fn test_dyn_and_reference_views() {
        let config = one("k", "v");
        let view: &dyn ReadConfig = &config;
        assert_eq!(view.get_string_value("k"), "v");

        let boxed: Box<dyn ReadConfig> = Box::new(one("k", "v"));
        assert!(boxed.contains_key("k"));
        assert_eq!((&boxed).get_string_value("k"), "v");
    }
}

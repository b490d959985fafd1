//! Property source port and its typed accessors.
//!
//! An implementor only supplies [`PropertyPort::get_raw`]; the typed getters
//! are provided on top of it so that every source applies the same
//! conventions:
//!
//! - a missing key and a key with an empty value are both "not set";
//! - a value that is set but cannot be read as the requested type is an
//!   error, never a silent fallback to the default.

use crate::domain::error::TwsConfError;

const TRUE_TOKENS: &[&str] = &["true", "yes", "on", "1"];
const FALSE_TOKENS: &[&str] = &["false", "no", "off", "0"];

pub trait PropertyPort {
    /// The value stored for `key` exactly as loaded, if the key exists.
    fn get_raw(&self, key: &str) -> Option<String>;

    fn get_string(&self, key: &str) -> Option<String> {
        self.get_raw(key).filter(|v| !v.is_empty())
    }

    fn get_int(&self, key: &str, default: i64) -> Result<i64, TwsConfError> {
        match self.get_string(key) {
            None => Ok(default),
            Some(value) => value
                .parse::<i64>()
                .map_err(|_| TwsConfError::MalformedNumeric {
                    key: key.to_string(),
                    value,
                }),
        }
    }

    fn get_bool(&self, key: &str, default: bool) -> Result<bool, TwsConfError> {
        let Some(value) = self.get_string(key) else {
            return Ok(default);
        };
        parse_bool(&value).ok_or_else(|| TwsConfError::MalformedBoolean {
            key: key.to_string(),
            value,
        })
    }

    /// A TCP port number. Zero counts as "not set".
    fn get_port(&self, key: &str) -> Result<Option<u16>, TwsConfError> {
        match self.get_int(key, 0)? {
            0 => Ok(None),
            n => u16::try_from(n)
                .map(Some)
                .map_err(|_| TwsConfError::MalformedNumeric {
                    key: key.to_string(),
                    value: n.to_string(),
                }),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    let lower = value.to_ascii_lowercase();
    if TRUE_TOKENS.contains(&lower.as_str()) {
        Some(true)
    } else if FALSE_TOKENS.contains(&lower.as_str()) {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapSource(HashMap<&'static str, &'static str>);

    impl PropertyPort for MapSource {
        fn get_raw(&self, key: &str) -> Option<String> {
            self.0.get(key).map(|v| v.to_string())
        }
    }

    fn source(pairs: &[(&'static str, &'static str)]) -> MapSource {
        MapSource(pairs.iter().copied().collect())
    }

    #[test]
    fn empty_string_is_absent() {
        let src = source(&[("IbDir", "")]);
        assert_eq!(src.get_raw("IbDir"), Some(String::new()));
        assert_eq!(src.get_string("IbDir"), None);
        assert_eq!(src.get_string("Missing"), None);
    }

    #[test]
    fn get_string_keeps_value_verbatim() {
        let src = source(&[("CommandPrompt", "ibc> ")]);
        assert_eq!(src.get_string("CommandPrompt"), Some("ibc> ".to_string()));
    }

    #[test]
    fn get_int_absent_uses_default() {
        let src = source(&[("CommandServerPort", "")]);
        assert_eq!(src.get_int("CommandServerPort", 7).unwrap(), 7);
        assert_eq!(src.get_int("Missing", -1).unwrap(), -1);
    }

    #[test]
    fn get_int_parses_value() {
        let src = source(&[("CommandServerPort", "7462")]);
        assert_eq!(src.get_int("CommandServerPort", 0).unwrap(), 7462);
    }

    #[test]
    fn get_int_malformed_is_error() {
        let src = source(&[("CommandServerPort", "74x2")]);
        let err = src.get_int("CommandServerPort", 0).unwrap_err();
        assert!(matches!(
            err,
            TwsConfError::MalformedNumeric { key, value }
                if key == "CommandServerPort" && value == "74x2"
        ));
    }

    #[test]
    fn get_bool_accepts_any_case() {
        let src = source(&[("a", "TRUE"), ("b", "False"), ("c", "yes"), ("d", "0")]);
        assert!(src.get_bool("a", false).unwrap());
        assert!(!src.get_bool("b", true).unwrap());
        assert!(src.get_bool("c", false).unwrap());
        assert!(!src.get_bool("d", true).unwrap());
    }

    #[test]
    fn get_bool_absent_uses_default() {
        let src = source(&[("FIX", "")]);
        assert!(src.get_bool("FIX", true).unwrap());
        assert!(!src.get_bool("Missing", false).unwrap());
    }

    #[test]
    fn get_bool_malformed_is_error() {
        let src = source(&[("FIX", "maybe")]);
        let err = src.get_bool("FIX", false).unwrap_err();
        assert!(matches!(
            err,
            TwsConfError::MalformedBoolean { key, value } if key == "FIX" && value == "maybe"
        ));
    }

    #[test]
    fn get_port_zero_is_unset() {
        let src = source(&[("OverrideTwsApiPort", "0")]);
        assert_eq!(src.get_port("OverrideTwsApiPort").unwrap(), None);
        assert_eq!(src.get_port("Missing").unwrap(), None);
    }

    #[test]
    fn get_port_out_of_range_is_error() {
        let src = source(&[("OverrideTwsApiPort", "70000"), ("CommandServerPort", "-1")]);
        assert!(src.get_port("OverrideTwsApiPort").is_err());
        assert!(src.get_port("CommandServerPort").is_err());
    }
}

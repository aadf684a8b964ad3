//! Key shape validation for callers that accept keys from users.
//!
//! The generator accepts any string. These checks belong to the outer layer
//! that decides which keys it is willing to forward.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("Key is empty")]
    Empty,

    #[error("Key '{0}' must be two letters, three digits, then a letter or digit (e.g. ab123c)")]
    Malformed(String),
}

/// The accepted key shape: `LLDDDX`, where `L` is an ASCII letter, `D` an
/// ASCII digit and `X` either.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyPattern;

impl KeyPattern {
    pub const LEN: usize = 6;

    pub fn matches(key: &str) -> bool {
        let bytes = key.as_bytes();
        bytes.len() == Self::LEN
            && bytes[..2].iter().all(u8::is_ascii_alphabetic)
            && bytes[2..5].iter().all(u8::is_ascii_digit)
            && bytes[5].is_ascii_alphanumeric()
    }
}

/// Check `key` against [`KeyPattern`].
pub fn validate_key(key: &str) -> Result<&str, KeyError> {
    if key.is_empty() {
        return Err(KeyError::Empty);
    }
    if !KeyPattern::matches(key) {
        return Err(KeyError::Malformed(key.to_string()));
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_keys() {
        for key in ["ab123c", "AB123C", "zz9990", "tr999a"] {
            assert_eq!(validate_key(key), Ok(key));
        }
    }

    #[test]
    fn test_empty_key() {
        assert_eq!(validate_key(""), Err(KeyError::Empty));
    }

    #[test]
    fn test_malformed_keys() {
        for key in ["ab12c", "ab1234c", "a1123c", "ab12cc", "ab123-", "ab123é", "12345c"] {
            assert_eq!(
                validate_key(key),
                Err(KeyError::Malformed(key.to_string())),
                "{key}"
            );
        }
    }

    #[test]
    fn test_error_message() {
        let err = validate_key("nope").unwrap_err();
        assert!(err.to_string().starts_with("Key 'nope' must be"));
    }
}

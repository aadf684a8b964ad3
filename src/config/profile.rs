//! YAML generation profiles.
//!
//! A profile supplies defaults for `generate`; command-line flags and
//! environment variables take precedence over it.
//!
//! ```yaml
//! count: 12
//! date: 2024-01-15
//! format: jsonl
//! envelope: true
//! allow_any_key: false
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;
use techload_populate::OutputFormat;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    /// Error reading profile file
    #[error("Failed to read profile file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse profile YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Optional defaults for the `generate` command.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Requested job count; non-positive values are ignored
    pub count: Option<i64>,

    /// Reference date in any form accepted by `--date`
    pub date: Option<String>,

    pub format: Option<OutputFormat>,

    pub envelope: Option<bool>,

    pub allow_any_key: Option<bool>,
}

impl Profile {
    /// Load a profile from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ProfileError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a profile from a YAML string. An empty document is an empty profile.
    pub fn from_yaml(yaml: &str) -> Result<Self, ProfileError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_full_profile() {
        let profile = Profile::from_yaml(
            r#"
count: 12
date: "2024-01-15"
format: jsonl
envelope: true
allow_any_key: false
"#,
        )
        .unwrap();

        assert_eq!(profile.count, Some(12));
        assert_eq!(profile.date.as_deref(), Some("2024-01-15"));
        assert_eq!(profile.format, Some(OutputFormat::Jsonl));
        assert_eq!(profile.envelope, Some(true));
        assert_eq!(profile.allow_any_key, Some(false));
    }

    #[test]
    fn test_empty_profile() {
        assert_eq!(Profile::from_yaml("").unwrap(), Profile::default());
        assert_eq!(Profile::from_yaml("format: yaml").unwrap().count, None);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Profile::from_yaml("colour: blue").unwrap_err();
        assert!(matches!(err, ProfileError::Yaml(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "count: 3\nformat: yaml").unwrap();

        let profile = Profile::from_file(file.path()).unwrap();
        assert_eq!(profile.count, Some(3));
        assert_eq!(profile.format, Some(OutputFormat::Yaml));
    }

    #[test]
    fn test_missing_file() {
        let err = Profile::from_file("/nonexistent/techload-profile.yaml").unwrap_err();
        assert!(matches!(err, ProfileError::Io(_)));
    }
}

//! Layered configuration for the `generate` command.
//!
//! Precedence, highest first: command-line flag, environment variable
//! (handled by clap), YAML profile, built-in default.

pub mod date;
pub mod profile;

pub use date::{parse_reference_date, parse_reference_date_from, DateParseError};
pub use profile::{Profile, ProfileError};

use crate::count::RequestedCount;
use anyhow::Context;
use chrono::NaiveDate;
use techload_populate::OutputFormat;
use tracing::warn;

/// Values taken from flags or the environment. `None` and `false` defer to
/// the profile.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub count: Option<String>,
    pub date: Option<String>,
    pub format: Option<OutputFormat>,
    pub envelope: bool,
    pub allow_any_key: bool,
}

/// Fully resolved `generate` settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub count: Option<i64>,
    pub reference_date: NaiveDate,
    pub format: OutputFormat,
    pub envelope: bool,
    pub allow_any_key: bool,
}

impl Settings {
    /// Merge `overrides` over `profile`, resolving relative dates against `today`.
    ///
    /// An unusable count (zero, negative or not a number) is logged and
    /// treated as not supplied. An unparseable date is an error.
    pub fn resolve(
        overrides: &Overrides,
        profile: &Profile,
        today: NaiveDate,
    ) -> anyhow::Result<Self> {
        let flag_count = overrides.count.as_deref().and_then(|raw| {
            let parsed = RequestedCount::parse(raw);
            if parsed.is_none() {
                warn!("Ignoring unusable job count '{raw}', using the count drawn from the key");
            }
            parsed
        });
        let profile_count = profile.count.filter(|n| {
            if *n <= 0 {
                warn!("Ignoring non-positive profile count {n}");
            }
            *n > 0
        });

        let reference_date = match overrides.date.as_deref().or(profile.date.as_deref()) {
            Some(raw) => parse_reference_date_from(raw, today)
                .with_context(|| "Failed to resolve the reference date")?,
            None => today,
        };

        Ok(Self {
            count: flag_count.or(profile_count),
            reference_date,
            format: overrides.format.or(profile.format).unwrap_or_default(),
            envelope: overrides.envelope || profile.envelope.unwrap_or(false),
            allow_any_key: overrides.allow_any_key || profile.allow_any_key.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(&Overrides::default(), &Profile::default(), today()).unwrap();
        assert_eq!(
            settings,
            Settings {
                count: None,
                reference_date: today(),
                format: OutputFormat::Json,
                envelope: false,
                allow_any_key: false,
            }
        );
    }

    #[test]
    fn test_flags_override_profile() {
        let profile = Profile {
            count: Some(4),
            date: Some("2024-01-15".to_string()),
            format: Some(OutputFormat::Yaml),
            envelope: Some(true),
            allow_any_key: None,
        };
        let overrides = Overrides {
            count: Some("9".to_string()),
            date: Some("yesterday".to_string()),
            format: Some(OutputFormat::Jsonl),
            envelope: false,
            allow_any_key: true,
        };

        let settings = Settings::resolve(&overrides, &profile, today()).unwrap();
        assert_eq!(settings.count, Some(9));
        assert_eq!(settings.reference_date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(settings.format, OutputFormat::Jsonl);
        assert!(settings.envelope);
        assert!(settings.allow_any_key);
    }

    #[test]
    fn test_profile_fills_gaps() {
        let profile = Profile {
            count: Some(4),
            date: Some("1/15/2024".to_string()),
            ..Default::default()
        };
        let settings = Settings::resolve(&Overrides::default(), &profile, today()).unwrap();
        assert_eq!(settings.count, Some(4));
        assert_eq!(settings.reference_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_unusable_counts_fall_through() {
        let overrides = Overrides {
            count: Some("zero".to_string()),
            ..Default::default()
        };
        let profile = Profile {
            count: Some(-2),
            ..Default::default()
        };
        let settings = Settings::resolve(&overrides, &profile, today()).unwrap();
        assert_eq!(settings.count, None);
    }

    #[test]
    fn test_bad_date_is_error() {
        let overrides = Overrides {
            date: Some("someday".to_string()),
            ..Default::default()
        };
        let err = Settings::resolve(&overrides, &Profile::default(), today()).unwrap_err();
        assert!(format!("{err:#}").contains("'someday'"));
    }
}

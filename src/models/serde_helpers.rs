//! Serde helpers for the progress field
//!
//! Progress is persisted either as a bare fraction (`0.42`) or as a
//! percentage string (`"42%"`). Any other textual form is a parse error
//! that names the offending value.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::de::{self, Deserializer, Visitor};

fn percent_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?<val>\d+(\.\d+)?)%$").unwrap())
}

/// Parse a percentage string like `"42%"` into a fraction.
pub fn parse_percentage(value: &str) -> Option<f64> {
    let captures = percent_regex().captures(value)?;
    captures["val"].parse::<f64>().ok().map(|pct| pct / 100.0)
}

/// Deserialize a progress fraction from either a number or a `"NN%"` string.
pub fn deserialize_progress<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct ProgressVisitor;

    impl<'de> Visitor<'de> for ProgressVisitor {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a fraction between 0.0 and 1.0 or a percentage string like \"42%\"")
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
            parse_percentage(value).ok_or_else(|| {
                de::Error::custom(format!("unable to parse '{}' as a percentage", value))
            })
        }
    }

    deserializer.deserialize_any(ProgressVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_percentages() {
        assert_eq!(parse_percentage("50%"), Some(0.5));
        assert_eq!(parse_percentage("100%"), Some(1.0));
        assert_eq!(parse_percentage("0%"), Some(0.0));
    }

    #[test]
    fn parses_fractional_percentages() {
        assert_eq!(parse_percentage("12.5%"), Some(0.125));
    }

    #[test]
    fn rejects_malformed_values() {
        assert_eq!(parse_percentage("abc"), None);
        assert_eq!(parse_percentage("150"), None); // missing '%'
        assert_eq!(parse_percentage("%"), None);
        assert_eq!(parse_percentage("-5%"), None);
        assert_eq!(parse_percentage("5%%"), None);
    }
}

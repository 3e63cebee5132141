//! Lenient deserializers for user-entered fields.
//!
//! Form inputs arrive as numbers, numeric strings, empty strings or `null`
//! depending on which front end saved them. Every numeric field in a stored
//! document goes through [`number`]: anything that is not a finite number
//! reads as `0`, so a half-typed value never makes a whole document
//! unreadable.

use serde::de::{Deserializer, IgnoredAny};
use serde::Deserialize;

use crate::money::{Money, Percent};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl NumberOrText {
    fn into_f64(self) -> f64 {
        let value = match self {
            NumberOrText::Number(n) => n,
            NumberOrText::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            NumberOrText::Other(_) => 0.0,
        };
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }
}

/// Reads a number, a numeric string, `""` or `null` as an `f64` (default 0).
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrText::deserialize(deserializer).map(NumberOrText::into_f64)
}

/// Like [`number`], but for whole counts such as watts per m². Negative and
/// fractional input is truncated towards zero.
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = number(deserializer)?;
    Ok(if value <= 0.0 { 0 } else { value.min(u32::MAX as f64) as u32 })
}

/// Lenient [`Money`] field.
pub fn money<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: Deserializer<'de>,
{
    number(deserializer).map(Money::new)
}

/// Lenient [`Percent`] field.
pub fn percent<'de, D>(deserializer: D) -> Result<Percent, D::Error>
where
    D: Deserializer<'de>,
{
    number(deserializer).map(Percent::new)
}

/// Optional label: `""`, whitespace and `null` all read as `None`.
pub fn label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

/// Booleans saved as `true`/`false`, `"true"`/`"false"`, `1`/`0` or `null`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FlagValue {
        Bool(bool),
        Number(f64),
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match FlagValue::deserialize(deserializer)? {
        FlagValue::Bool(b) => b,
        FlagValue::Number(n) => n != 0.0,
        FlagValue::Text(s) => s.trim().eq_ignore_ascii_case("true"),
        FlagValue::Other(_) => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "number")]
        value: f64,
        #[serde(default, deserialize_with = "label")]
        name: Option<String>,
        #[serde(default, deserialize_with = "flag")]
        on: bool,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_number_accepts_numbers_and_numeric_strings() {
        assert_eq!(probe(r#"{"value": 2.4}"#).value, 2.4);
        assert_eq!(probe(r#"{"value": 3}"#).value, 3.0);
        assert_eq!(probe(r#"{"value": " 4.5 "}"#).value, 4.5);
    }

    #[test]
    fn test_number_treats_junk_as_zero() {
        assert_eq!(probe(r#"{"value": ""}"#).value, 0.0);
        assert_eq!(probe(r#"{"value": "abc"}"#).value, 0.0);
        assert_eq!(probe(r#"{"value": null}"#).value, 0.0);
        assert_eq!(probe(r#"{"value": [1, 2]}"#).value, 0.0);
        assert_eq!(probe(r#"{}"#).value, 0.0);
    }

    #[test]
    fn test_label_blank_is_none() {
        assert_eq!(probe(r#"{"name": ""}"#).name, None);
        assert_eq!(probe(r#"{"name": "   "}"#).name, None);
        assert_eq!(probe(r#"{"name": null}"#).name, None);
        assert_eq!(probe(r#"{"name": "600×600"}"#).name.as_deref(), Some("600×600"));
    }

    #[test]
    fn test_flag_variants() {
        assert!(probe(r#"{"on": true}"#).on);
        assert!(probe(r#"{"on": "true"}"#).on);
        assert!(probe(r#"{"on": 1}"#).on);
        assert!(!probe(r#"{"on": 0}"#).on);
        assert!(!probe(r#"{"on": null}"#).on);
    }
}

//! Deserialization helpers for front-matter-derived JSON
//!
//! The dataset is compiled from authored front-matter documents, so scalar
//! fields arrive in whatever form the author typed: booleans as `true`,
//! `"yes"`, or `1`; percentages as `30`, `"30"`, or `"30%"`. These
//! deserializers normalize those forms once, at the load boundary.

use serde::{Deserializer, de};
use std::fmt;

/// Deserialize a boolean from a boolean, string, or number.
pub fn bool_from_anything<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Visitor;

    struct BoolVisitor;

    impl<'de> Visitor<'de> for BoolVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a boolean, string, or number")
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            match value.to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" | "" => Ok(false),
                _ => Err(E::custom(format!("cannot parse '{value}' as boolean"))),
            }
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value != 0)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value != 0)
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value != 0.0)
        }
    }

    deserializer.deserialize_any(BoolVisitor)
}

/// Deserialize a percentage from a number or a string, with or without a
/// trailing percent sign.
pub fn percent_from_anything<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Visitor;

    struct PercentVisitor;

    impl<'de> Visitor<'de> for PercentVisitor {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or a percentage string like \"30%\"")
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value as f64)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value as f64)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            let trimmed = value.trim().trim_end_matches('%').trim();
            trimmed
                .parse()
                .map_err(|_| E::custom(format!("cannot parse '{value}' as a percentage")))
        }
    }

    deserializer.deserialize_any(PercentVisitor)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Flags {
        #[serde(deserialize_with = "super::bool_from_anything")]
        enabled: bool,
    }

    #[derive(Deserialize)]
    struct Rate {
        #[serde(deserialize_with = "super::percent_from_anything")]
        percentage: f64,
    }

    #[test]
    fn booleans_accept_authored_forms() {
        for (raw, expected) in [
            (r#"{"enabled": true}"#, true),
            (r#"{"enabled": "yes"}"#, true),
            (r#"{"enabled": 1}"#, true),
            (r#"{"enabled": "no"}"#, false),
            (r#"{"enabled": 0}"#, false),
            (r#"{"enabled": ""}"#, false),
        ] {
            let flags: Flags = serde_json::from_str(raw).unwrap();
            assert_eq!(flags.enabled, expected, "input: {raw}");
        }
        assert!(serde_json::from_str::<Flags>(r#"{"enabled": "maybe"}"#).is_err());
    }

    #[test]
    fn percentages_accept_numbers_and_strings() {
        for (raw, expected) in [
            (r#"{"percentage": 30}"#, 30.0),
            (r#"{"percentage": 12.5}"#, 12.5),
            (r#"{"percentage": "30"}"#, 30.0),
            (r#"{"percentage": "30%"}"#, 30.0),
            (r#"{"percentage": " 15 % "}"#, 15.0),
        ] {
            let rate: Rate = serde_json::from_str(raw).unwrap();
            assert_eq!(rate.percentage, expected, "input: {raw}");
        }
        assert!(serde_json::from_str::<Rate>(r#"{"percentage": "a third"}"#).is_err());
    }
}

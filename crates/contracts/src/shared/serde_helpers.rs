//! Lenient field codecs for values the backend does not type consistently.

use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepts `2024-03-15`, `2024-03-15T10:00:00.000000Z` and `2024-03-15 10:00:00`.
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let date_part = raw
        .trim()
        .split(|c| c == 'T' || c == ' ')
        .next()
        .unwrap_or_default();
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).map_err(|e| format!("invalid date '{raw}': {e}"))
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// `Option<NaiveDate>` as `"YYYY-MM-DD"` or `null`; blank strings read as `None`.
pub mod opt_date {
    use super::{format_date, parse_date};
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.serialize_str(&format_date(date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => parse_date(&raw).map(Some).map_err(D::Error::custom),
            _ => Ok(None),
        }
    }
}

/// Booleans that may arrive as `true`, `1`, `"1"` or `"true"`.
pub mod lenient_bool {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Bool(b) => b,
            Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Value::String(s) => matches!(s.trim(), "1" | "true" | "TRUE" | "True"),
            _ => false,
        })
    }
}

/// Codes such as `codigo_ficha` come back as numbers from some endpoints.
pub mod lenient_string {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Dated {
        #[serde(with = "opt_date", default)]
        fecha: Option<NaiveDate>,
    }

    #[derive(Debug, Deserialize)]
    struct Flags {
        #[serde(deserialize_with = "lenient_bool::deserialize")]
        a: bool,
        #[serde(deserialize_with = "lenient_bool::deserialize")]
        b: bool,
        #[serde(deserialize_with = "lenient_bool::deserialize")]
        c: bool,
    }

    #[test]
    fn dates_keep_only_the_calendar_day() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15);
        for raw in ["2024-03-15", "2024-03-15T14:02:26.000000Z", "2024-03-15 08:00:00"] {
            let d: Dated = serde_json::from_value(json!({ "fecha": raw })).unwrap();
            assert_eq!(d.fecha, expected, "{raw}");
        }
        let empty: Dated = serde_json::from_value(json!({ "fecha": "" })).unwrap();
        assert_eq!(empty.fecha, None);
        let missing: Dated = serde_json::from_value(json!({})).unwrap();
        assert_eq!(missing.fecha, None);
        assert!(parse_date("15/03/2024").is_err());
    }

    #[test]
    fn dates_serialize_as_iso_day() {
        let d = Dated { fecha: NaiveDate::from_ymd_opt(2024, 1, 5) };
        assert_eq!(serde_json::to_value(&d).unwrap(), json!({"fecha": "2024-01-05"}));
        assert_eq!(serde_json::to_value(Dated { fecha: None }).unwrap(), json!({"fecha": null}));
    }

    #[test]
    fn booleans_accept_numbers_and_strings() {
        let f: Flags = serde_json::from_value(json!({"a": 1, "b": "0", "c": true})).unwrap();
        assert!(f.a);
        assert!(!f.b);
        assert!(f.c);
    }
}

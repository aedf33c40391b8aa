//! Field deserializers that never reject a row.
//!
//! The embedded selects return loosely typed JSON: numeric ids, numeric
//! prices where text is expected, text where numbers are expected. A single
//! mistyped field must not fail the whole fetch, so these coerce what they
//! can and fall back to `None` for the rest.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

pub fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Row {
        #[serde(deserialize_with = "super::text")]
        label: Option<String>,
        #[serde(deserialize_with = "super::number")]
        price: Option<f64>,
        #[serde(deserialize_with = "super::integer")]
        quantity: Option<i64>,
    }

    #[test]
    fn coerces_mixed_scalars() {
        let row: Row =
            serde_json::from_value(json!({ "label": 17, "price": "12.50", "quantity": 3 }))
                .unwrap();

        assert_eq!(row.label.as_deref(), Some("17"));
        assert_eq!(row.price, Some(12.5));
        assert_eq!(row.quantity, Some(3));
    }

    #[test]
    fn unusable_values_become_none() {
        let row: Row = serde_json::from_value(
            json!({ "label": { "nested": true }, "price": "n/a", "quantity": null }),
        )
        .unwrap();

        assert_eq!(row.label, None);
        assert_eq!(row.price, None);
        assert_eq!(row.quantity, None);
    }

    #[test]
    fn missing_fields_default() {
        let row: Row = serde_json::from_value(json!({})).unwrap();
        assert!(row.label.is_none() && row.price.is_none() && row.quantity.is_none());
    }
}

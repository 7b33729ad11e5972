//! Tolerant field deserializers for provider payloads
//!
//! Spoonacular omits fields freely and occasionally sends numbers as strings.
//! Field helpers never fail: a wrong-typed scalar becomes `None`, a non-array
//! list becomes empty, and list elements that do not decode are dropped.
//! Use with `#[serde(default, deserialize_with = "...")]`.
//!
//! [`array`] is for top-level bodies and rejects anything but a JSON array.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

pub(crate) fn string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

pub(crate) fn int<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.is_finite())
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

pub(crate) fn float<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok().filter(|f: &f64| f.is_finite()),
        _ => None,
    })
}

pub(crate) fn boolean<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Bool(b) => Some(b),
        _ => None,
    })
}

pub(crate) fn object<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(d)? {
        v @ Value::Object(_) => serde_json::from_value(v).ok(),
        _ => None,
    })
}

pub(crate) fn list<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// A JSON array whose undecodable elements are dropped; any other value is an error
pub(crate) fn array<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = Vec::<Value>::deserialize(d)?;
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    struct Record {
        #[serde(default, deserialize_with = "string")]
        name: Option<String>,
        #[serde(default, deserialize_with = "int")]
        id: Option<i64>,
        #[serde(default, deserialize_with = "float")]
        amount: Option<f64>,
        #[serde(default, deserialize_with = "boolean")]
        vegan: Option<bool>,
        #[serde(default, deserialize_with = "list")]
        tags: Vec<String>,
    }

    fn record(json: &str) -> Record {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_missing_fields_default() {
        let p = record("{}");
        assert!(p.name.is_none());
        assert!(p.id.is_none());
        assert!(p.amount.is_none());
        assert!(p.vegan.is_none());
        assert!(p.tags.is_empty());
    }

    #[test]
    fn test_nulls_default() {
        let p = record(r#"{"name":null,"id":null,"amount":null,"vegan":null,"tags":null}"#);
        assert!(p.name.is_none());
        assert!(p.id.is_none());
        assert!(p.tags.is_empty());
    }

    #[test]
    fn test_numeric_strings_coerced() {
        let p = record(r#"{"id":" 42 ","amount":"1.5"}"#);
        assert_eq!(p.id, Some(42));
        assert_eq!(p.amount, Some(1.5));
    }

    #[test]
    fn test_integral_float_id_accepted() {
        assert_eq!(record(r#"{"id":7.0}"#).id, Some(7));
        assert_eq!(record(r#"{"id":7.5}"#).id, None);
    }

    #[test]
    fn test_wrong_types_dropped() {
        let p = record(r#"{"name":{"x":1},"id":"abc","amount":[1],"vegan":"yes","tags":"a"}"#);
        assert!(p.name.is_none());
        assert!(p.id.is_none());
        assert!(p.amount.is_none());
        assert!(p.vegan.is_none());
        assert!(p.tags.is_empty());
    }

    #[test]
    fn test_bad_list_elements_dropped() {
        let p = record(r#"{"tags":["a",1,null,"b"]}"#);
        assert_eq!(p.tags, vec!["a".to_string(), "b".to_string()]);
    }

    #[derive(Debug, Deserialize)]
    #[serde(transparent)]
    struct Body(#[serde(deserialize_with = "array")] Vec<String>);

    #[test]
    fn test_array_body_requires_array() {
        let body: Body = serde_json::from_str(r#"["a",1,"b"]"#).unwrap();
        assert_eq!(body.0, vec!["a".to_string(), "b".to_string()]);

        assert!(serde_json::from_str::<Body>(r#"{"status":"failure"}"#).is_err());
        assert!(serde_json::from_str::<Body>("null").is_err());
    }
}

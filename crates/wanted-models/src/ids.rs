use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an identifier that the remote service may send as a string,
/// an integer, or `null`.
///
/// Empty strings are treated the same as a missing identifier.
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Deserialize a field that may be `null`, falling back to `T::default()`.
/// Pair with `#[serde(default)]` so a missing key behaves the same way.
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "deserialize_optional_id")]
        id: Option<String>,
    }

    fn parse(json: &str) -> Option<String> {
        serde_json::from_str::<Holder>(json).unwrap().id
    }

    #[test]
    fn test_string_and_number_ids() {
        assert_eq!(parse(r#"{"id": "tt0111161"}"#), Some("tt0111161".to_string()));
        assert_eq!(parse(r#"{"id": 278}"#), Some("278".to_string()));
    }

    #[derive(Debug, Deserialize)]
    struct Named {
        #[serde(default, deserialize_with = "deserialize_null_default")]
        name: String,
        #[serde(default, deserialize_with = "deserialize_null_default")]
        tags: Vec<String>,
    }

    #[test]
    fn test_null_falls_back_to_default() {
        let named: Named = serde_json::from_str(r#"{"name": null, "tags": null}"#).unwrap();
        assert_eq!(named.name, "");
        assert!(named.tags.is_empty());

        let named: Named = serde_json::from_str(r#"{"name": "Heat", "tags": ["a"]}"#).unwrap();
        assert_eq!(named.name, "Heat");
        assert_eq!(named.tags, vec!["a".to_string()]);
    }

    #[test]
    fn test_missing_null_and_empty_ids() {
        assert_eq!(parse(r#"{}"#), None);
        assert_eq!(parse(r#"{"id": null}"#), None);
        assert_eq!(parse(r#"{"id": ""}"#), None);
        assert_eq!(parse(r#"{"id": true}"#), None);
    }
}

//! Parameter normalization for outgoing requests.
//!
//! The remote API treats key *presence* as meaningful: an omitted
//! `expires_in` means "no expiration", which is not the same thing as
//! `"expires_in": null`. Every request body therefore passes through
//! [`normalize`], which drops absent fields entirely before serialization.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CryptoPayError;

/// Serialize `params` to a JSON object and drop every null-valued field.
///
/// Unit params (`()`) normalize to an empty object. Anything that does not
/// serialize to a JSON object is rejected with
/// [`CryptoPayError::InvalidParams`].
pub fn normalize<T: Serialize + ?Sized>(params: &T) -> Result<Map<String, Value>, CryptoPayError> {
    match serde_json::to_value(params)? {
        Value::Object(map) => Ok(map.into_iter().filter(|(_, v)| !v.is_null()).collect()),
        Value::Null => Ok(Map::new()),
        other => Err(CryptoPayError::InvalidParams(format!(
            "expected a JSON object, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_drops_null_fields() {
        let params = json!({
            "asset": "USDT",
            "description": null,
            "expires_in": null,
            "allow_comments": false,
        });

        let body = normalize(&params).unwrap();

        let keys: Vec<&str> = body.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["allow_comments", "asset"]);
        assert_eq!(body["asset"], json!("USDT"));
        assert_eq!(body["allow_comments"], json!(false));
    }

    #[test]
    fn test_normalize_keeps_falsy_non_null_values() {
        let params = json!({ "offset": 0, "asset": "", "flag": false });
        let body = normalize(&params).unwrap();
        assert_eq!(body.len(), 3);
    }

    #[test]
    fn test_normalize_unit_is_empty_object() {
        let body = normalize(&()).unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn test_normalize_rejects_non_object() {
        let err = normalize(&42).unwrap_err();
        assert!(matches!(err, CryptoPayError::InvalidParams(_)));
    }

    #[test]
    fn test_normalize_does_not_touch_nested_nulls() {
        // Only top-level presence is meaningful; nested values pass through.
        let params = json!({ "payload": { "inner": null } });
        let body = normalize(&params).unwrap();
        assert_eq!(body["payload"], json!({ "inner": null }));
    }
}

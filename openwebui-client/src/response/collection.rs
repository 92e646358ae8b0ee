//! Shape-tolerant decoding of list endpoints.
//!
//! Some endpoints return a collection either as a bare JSON array or as an
//! object wrapping the array in a named field (`{"data": [...]}`). Both are
//! accepted; anything else is a [`ValidationError::UnexpectedFormat`].
//! Single objects go through [`decode_value`] so a shape mismatch names the
//! endpoint the same way.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ValidationError;

/// Decodes a collection that may arrive bare or wrapped in `field`.
///
/// Order is preserved. Items that fail to decode into `T` are reported as
/// an unexpected format for `endpoint`.
///
/// ## Examples
///
/// ```rust
/// use openwebui_client::response::decode_collection;
/// use serde_json::json;
///
/// let bare: Vec<String> = decode_collection(json!(["a", "b"]), "/x", "data").unwrap();
/// let wrapped: Vec<String> =
///     decode_collection(json!({ "data": ["a", "b"] }), "/x", "data").unwrap();
/// assert_eq!(bare, wrapped);
/// ```
///
/// ## Errors
///
/// Returns [`ValidationError::UnexpectedFormat`] when the value is neither
/// an array nor an object whose `field` is an array.
pub fn decode_collection<T: DeserializeOwned>(
    value: Value,
    endpoint: &str,
    field: &str,
) -> Result<Vec<T>, ValidationError> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove(field) {
            Some(Value::Array(items)) => items,
            _ => return Err(ValidationError::unexpected_format(endpoint)),
        },
        _ => return Err(ValidationError::unexpected_format(endpoint)),
    };

    items
        .into_iter()
        .map(|item| decode_value(item, endpoint))
        .collect()
}

/// Decodes a single JSON value into the type `endpoint` is known to return.
///
/// ## Errors
///
/// Returns [`ValidationError::UnexpectedFormat`] naming `endpoint` when the
/// value does not have the expected shape.
pub fn decode_value<T: DeserializeOwned>(value: Value, endpoint: &str) -> Result<T, ValidationError> {
    serde_json::from_value(value).map_err(|_| ValidationError::unexpected_format(endpoint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Item {
        id: String,
    }

    #[test]
    fn test_bare_and_wrapped_are_equal() {
        let bare: Vec<Item> =
            decode_collection(json!([{ "id": "m1" }, { "id": "m2" }]), "/api/models", "data")
                .unwrap();
        let wrapped: Vec<Item> = decode_collection(
            json!({ "data": [{ "id": "m1" }, { "id": "m2" }] }),
            "/api/models",
            "data",
        )
        .unwrap();

        assert_eq!(bare, wrapped);
        assert_eq!(bare[0].id, "m1");
        assert_eq!(bare[1].id, "m2");
    }

    #[test]
    fn test_custom_field() {
        let items: Vec<Item> =
            decode_collection(json!({ "models": [{ "id": "llama3" }] }), "/ollama/api/tags", "models")
                .unwrap();
        assert_eq!(items, vec![Item { id: "llama3".to_string() }]);
    }

    #[test]
    fn test_unexpected_object_names_endpoint() {
        let err = decode_collection::<Item>(json!({ "unexpected": "format" }), "/api/models", "data")
            .unwrap_err();
        assert_eq!(err.endpoint(), Some("/api/models"));
    }

    #[test]
    fn test_field_that_is_not_an_array() {
        let err = decode_collection::<Item>(json!({ "data": { "id": "m1" } }), "/api/models", "data")
            .unwrap_err();
        assert!(matches!(err, ValidationError::UnexpectedFormat { .. }));
    }

    #[test]
    fn test_scalar_is_rejected() {
        let err = decode_collection::<Item>(json!("nope"), "/api/models", "data").unwrap_err();
        assert!(matches!(err, ValidationError::UnexpectedFormat { .. }));
    }

    #[test]
    fn test_item_shape_mismatch() {
        let err = decode_collection::<Item>(json!([{ "name": "no id" }]), "/api/models", "data")
            .unwrap_err();
        assert_eq!(err.endpoint(), Some("/api/models"));
    }

    #[test]
    fn test_value_shape_mismatch_names_endpoint() {
        let err = decode_value::<Item>(json!({ "unexpected": "format" }), "/api/users/me")
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::UnexpectedFormat { ref endpoint } if endpoint == "/api/users/me"
        ));

        let item: Item = decode_value(json!({ "id": "u-1" }), "/api/users/me").unwrap();
        assert_eq!(item.id, "u-1");
    }

    #[test]
    fn test_empty_collection() {
        let items: Vec<Item> = decode_collection(json!({ "data": [] }), "/api/models", "data").unwrap();
        assert!(items.is_empty());
    }
}

//! Inbound host message protocol.
//!
//! The host posts payloads of shape `{ "data": rows, "columns": ... }`.
//! The viewer contract is exactly one row and one column, whose single
//! cell is a string naming the image to display. Anything else is a
//! validation error carrying the raw offending JSON as details.

use serde_json::Value;

use crate::error::ViewerError;

/// Extract the image name from a host payload.
///
/// Validation ladder, in order:
/// 1. `data` present, an array, non-empty, rows are arrays,
///    otherwise [`ViewerError::InvalidPayloadShape`]
/// 2. exactly one row and one column,
///    otherwise [`ViewerError::UnsupportedCardinality`]
/// 3. the single cell is a string,
///    otherwise [`ViewerError::InvalidNameType`]
pub fn image_name_from_payload(payload: &Value) -> Result<String, ViewerError> {
    let data = payload.get("data");
    let rows = match data.and_then(Value::as_array) {
        Some(rows) if !rows.is_empty() => rows,
        _ => return Err(ViewerError::InvalidPayloadShape),
    };

    let Some(cells) = rows[0].as_array() else {
        return Err(ViewerError::InvalidPayloadShape);
    };

    if rows.len() > 1 || cells.len() > 1 {
        return Err(ViewerError::unsupported_cardinality(
            data.unwrap_or(&Value::Null),
        ));
    }

    match cells.first().and_then(Value::as_str) {
        Some(name) => Ok(name.to_string()),
        None => Err(ViewerError::invalid_name_type(data.unwrap_or(&Value::Null))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_single_cell() {
        let payload = json!({ "data": [["cat.png"]] });
        assert_eq!(
            image_name_from_payload(&payload),
            Ok("cat.png".to_string())
        );
    }

    #[test]
    fn test_columns_descriptor_is_ignored() {
        let payload = json!({ "data": [["cat.png"]], "columns": [{"label": "image"}] });
        assert_eq!(
            image_name_from_payload(&payload),
            Ok("cat.png".to_string())
        );
    }

    #[test]
    fn test_empty_data_is_shape_error() {
        let payload = json!({ "data": [] });
        assert_eq!(
            image_name_from_payload(&payload),
            Err(ViewerError::InvalidPayloadShape)
        );
    }

    #[test]
    fn test_missing_data_is_shape_error() {
        assert_eq!(
            image_name_from_payload(&json!({})),
            Err(ViewerError::InvalidPayloadShape)
        );
        assert_eq!(
            image_name_from_payload(&json!({ "data": "nope" })),
            Err(ViewerError::InvalidPayloadShape)
        );
    }

    #[test]
    fn test_two_columns_is_cardinality_error() {
        let payload = json!({ "data": [["x", "y"]] });
        let err = image_name_from_payload(&payload).unwrap_err();
        assert_eq!(err.to_string(), "Please select a single image to view");
        assert_eq!(
            err.details(),
            Some(r#"Multiple values were provided: [["x","y"]]"#)
        );
    }

    #[test]
    fn test_two_rows_is_cardinality_error() {
        let payload = json!({ "data": [["a.png"], ["b.png"]] });
        assert!(matches!(
            image_name_from_payload(&payload),
            Err(ViewerError::UnsupportedCardinality { .. })
        ));
    }

    #[test]
    fn test_non_string_cell_is_name_type_error() {
        let payload = json!({ "data": [[42]] });
        let err = image_name_from_payload(&payload).unwrap_err();
        assert_eq!(err.to_string(), "Please provide a valid image name");
        assert_eq!(err.details(), Some("[[42]]"));
    }

    #[test]
    fn test_empty_row_is_name_type_error() {
        let payload = json!({ "data": [[]] });
        assert!(matches!(
            image_name_from_payload(&payload),
            Err(ViewerError::InvalidNameType { .. })
        ));
    }
}

//! Interpretation of the backend's `{success, data | message, errors}` envelope

use super::error::ApiError;
use serde_json::Value;

/// Turn a raw HTTP status and body into the envelope's `data` or a typed error.
///
/// `data` is `Value::Null` when a successful envelope carries none.
pub fn interpret(status: u16, body: &str) -> Result<Value, ApiError> {
    let is_success_status = (200..300).contains(&status);

    if body.trim().is_empty() {
        return Err(if is_success_status {
            ApiError::UnexpectedResponse("empty response body".to_string())
        } else {
            generic_failure(status)
        });
    }

    let parsed: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => {
            return Err(if is_success_status {
                ApiError::UnexpectedResponse(format!("invalid JSON: {e}"))
            } else {
                generic_failure(status)
            });
        }
    };

    let flagged_failure = parsed.get("success").and_then(Value::as_bool) == Some(false);

    if is_success_status && !flagged_failure {
        return Ok(parsed.get("data").cloned().unwrap_or(Value::Null));
    }

    let message = parsed
        .get("message")
        .or_else(|| parsed.get("error"))
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| failure_message(status));

    Err(ApiError::Server {
        status,
        message,
        details: parsed.get("errors").map(collect_details).unwrap_or_default(),
    })
}

fn failure_message(status: u16) -> String {
    format!("Request failed with status {status}")
}

fn generic_failure(status: u16) -> ApiError {
    ApiError::Server {
        status,
        message: failure_message(status),
        details: Vec::new(),
    }
}

/// Flatten an `errors` payload into display strings.
///
/// Accepts an array of strings, an array of `{msg}` / `{message}` objects,
/// or a Mongoose-style map of `field -> {message}` or `field -> string`.
pub fn collect_details(errors: &Value) -> Vec<String> {
    match errors {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items.iter().filter_map(detail_message).collect(),
        Value::Object(map) => map.values().filter_map(detail_message).collect(),
        _ => Vec::new(),
    }
}

fn detail_message(item: &Value) -> Option<String> {
    match item {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Object(_) => item
            .get("message")
            .or_else(|| item.get("msg"))
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_success_envelope_returns_data() {
        let body = r#"{"success": true, "data": {"_id": "1", "name": "MRI"}}"#;
        assert_eq!(interpret(201, body), Ok(json!({"_id": "1", "name": "MRI"})));
    }

    #[test]
    fn test_success_without_data_is_null() {
        assert_eq!(interpret(200, r#"{"success": true}"#), Ok(Value::Null));
    }

    #[test]
    fn test_success_false_on_200_is_failure() {
        let body = r#"{"success": false, "message": "Duplicate serial number"}"#;
        assert_eq!(
            interpret(200, body),
            Err(ApiError::Server {
                status: 200,
                message: "Duplicate serial number".to_string(),
                details: vec![],
            })
        );
    }

    #[test]
    fn test_mongoose_errors_are_flattened() {
        let body = json!({
            "success": false,
            "message": "Validation failed",
            "errors": {
                "email": {"message": "Email already registered", "kind": "unique"},
                "name": {"message": "Name is too short"}
            }
        })
        .to_string();
        let err = interpret(400, &body).unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 400,
                message: "Validation failed".to_string(),
                details: vec![
                    "Email already registered".to_string(),
                    "Name is too short".to_string()
                ],
            }
        );
    }

    #[test]
    fn test_express_validator_array() {
        let errors = json!([{"msg": "Invalid value", "param": "phone"}, "plain string", 42]);
        assert_eq!(
            collect_details(&errors),
            vec!["Invalid value".to_string(), "plain string".to_string()]
        );
    }

    #[test]
    fn test_non_json_error_body_degrades_to_status_message() {
        let err = interpret(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.user_messages(), vec!["Request failed with status 502".to_string()]);
    }

    #[test]
    fn test_non_json_success_body_is_unexpected() {
        assert!(matches!(
            interpret(200, "OK"),
            Err(ApiError::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn test_empty_body() {
        assert!(matches!(
            interpret(204, "  "),
            Err(ApiError::UnexpectedResponse(_))
        ));
        assert!(matches!(
            interpret(500, ""),
            Err(ApiError::Server { status: 500, .. })
        ));
    }

    #[test]
    fn test_missing_message_uses_status() {
        let err = interpret(422, r#"{"success": false}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 422,
                message: "Request failed with status 422".to_string(),
                details: vec![],
            }
        );
    }
}

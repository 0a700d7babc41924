// src/domain/graphql.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Request body posted to the GraphQL endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    pub query: String,
    pub variables: Map<String, Value>,
    pub operation_name: String,
}

/// Response envelope. Either field may be missing; a 200 response can
/// carry both data and errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphqlError>>,
}

impl GraphqlResponse {
    /// Decode a raw response body.
    pub fn from_value(body: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(body)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    /// `extensions`, `path`, `locations` and whatever else the server sends
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl fmt::Display for GraphqlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self
            .extra
            .get("extensions")
            .and_then(|ext| ext.get("code"))
            .and_then(Value::as_str)
        {
            Some(code) => write!(f, "{} ({})", self.message, code),
            None => write!(f, "{}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn given_request_when_serializing_then_uses_operation_name_key() {
        let mut variables = Map::new();
        variables.insert("note".to_string(), json!("hello"));
        let request = GraphqlRequest {
            query: "mutation sendNotes { x }".to_string(),
            variables,
            operation_name: "sendNotes".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["operationName"], "sendNotes");
        assert_eq!(value["variables"]["note"], "hello");
        assert!(value.get("operation_name").is_none());
    }

    #[test]
    fn given_body_with_errors_when_decoding_then_keeps_extensions() {
        let body = json!({
            "errors": [{
                "message": "field not found",
                "extensions": {"path": "$.selectionSet", "code": "validation-failed"}
            }]
        });

        let response = GraphqlResponse::from_value(&body).unwrap();

        let errors = response.errors.unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "field not found (validation-failed)");
        assert!(response.data.is_none());
    }

    #[test]
    fn given_non_object_body_when_decoding_then_fails() {
        let result = GraphqlResponse::from_value(&json!("oops"));
        assert!(result.is_err());
    }
}

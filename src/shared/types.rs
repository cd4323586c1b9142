use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope returned for every failed request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

/// A single failing field reported by validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Field path in camelCase, nested fields joined with `.`
    #[schema(example = "latitude")]
    pub field: String,
    #[schema(example = "Latitude must be between -90 and 90")]
    pub message: String,
}

impl ApiErrorResponse {
    pub fn new(message: impl Into<String>, errors: Option<Vec<FieldError>>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors,
        }
    }
}

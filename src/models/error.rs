use super::null_as_default;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of any non-200 response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ErrorResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Map::is_empty"
    )]
    pub errors: Map<String, Value>,
}

use super::null_as_default;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// OTP record as returned by the server. Pass-through only; absent fields
/// decode as empty.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Otp {
    pub id: String,
    pub identifier: String,
    #[serde(rename = "type")]
    pub otp_type: String,
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub delivery_methods: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub delivery_details: Map<String, Value>,
    pub expires_at: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GenerateOtpRequest {
    #[serde(rename = "type")]
    pub otp_type: String,
    pub identifier: String,
    /// Channel name (e.g. `"sms"`, `"email"`) to channel-specific address.
    pub delivery: BTreeMap<String, String>,
    pub validity: i64,
    pub token_length: i64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GenerateOtpResponse {
    pub otp: Otp,
}

#[derive(Serialize, Clone, PartialEq)]
pub struct ValidateOtpRequest {
    pub identifier: String,
    pub token: String,
}

impl ValidateOtpRequest {
    pub fn new(identifier: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            token: token.into(),
        }
    }
}

impl fmt::Debug for ValidateOtpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidateOtpRequest")
            .field("identifier", &self.identifier)
            .field("token", &"***")
            .finish()
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ValidateOtpResponse {
    pub otp: Otp,
}

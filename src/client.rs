use crate::api::otp::{generate_otp, get_otp, validate_otp};
use crate::error::Result;
use crate::models::otp::{
    GenerateOtpRequest, GenerateOtpResponse, ValidateOtpRequest, ValidateOtpResponse,
};
use log::debug;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.fastotp.co";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Transport settings. The defaults point at the production service.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl Config {
    /// A zero `timeout_secs` falls back to the 10 second default.
    pub fn timeout(&self) -> Duration {
        match self.timeout_secs {
            0 => DEFAULT_TIMEOUT,
            secs => Duration::from_secs(secs),
        }
    }
}

/// Handle to the OTP service.
///
/// Immutable once built. Clones share the underlying connection pool, so one
/// client can serve any number of concurrent calls.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl Client {
    /// Client for the production service with the default 10 second timeout.
    pub fn init(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(Config::default(), api_key)
    }

    pub fn with_config(config: Config, api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout()).build()?;
        let base_url = config.base_url.trim_end_matches('/').to_owned();
        debug!("OTP client bound to {} (timeout {:?})", base_url, config.timeout());

        Ok(Self {
            http,
            base_url,
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /generate`
    pub async fn generate_otp(&self, request: &GenerateOtpRequest) -> Result<GenerateOtpResponse> {
        generate_otp(&self.http, &self.base_url, &self.api_key, request).await
    }

    /// `POST /validate`. A 200 is success whatever `otp.status` says.
    pub async fn validate_otp(&self, request: &ValidateOtpRequest) -> Result<ValidateOtpResponse> {
        validate_otp(&self.http, &self.base_url, &self.api_key, request).await
    }

    /// `GET /{id}`. The id is not escaped.
    pub async fn get_otp(&self, id: &str) -> Result<GenerateOtpResponse> {
        get_otp(&self.http, &self.base_url, &self.api_key, id).await
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .finish()
    }
}

//! Client for the FastOTP one-time-password service.
//!
//! ```no_run
//! # async fn run() -> fastotp::Result<()> {
//! let client = fastotp::Client::init("my-api-key")?;
//! let resp = client.get_otp("abc123").await?;
//! println!("{}", resp.otp.status);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod models;

pub use client::{Client, Config, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{Error, Result};
pub use models::error::ErrorResponse;
pub use models::otp::{
    GenerateOtpRequest, GenerateOtpResponse, Otp, ValidateOtpRequest, ValidateOtpResponse,
};

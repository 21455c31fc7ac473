use crate::api::response::read_response;
use crate::error::{Error, Result};
use crate::models::otp::{
    GenerateOtpRequest, GenerateOtpResponse, ValidateOtpRequest, ValidateOtpResponse,
};
use log::{debug, info};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;

const API_KEY_HEADER: &str = "x-api-key";

async fn post_json(
    client: &Client,
    url: &str,
    api_key: &str,
    body: &impl Serialize,
) -> Result<reqwest::Response> {
    let body = serde_json::to_vec(body).map_err(Error::Encode)?;
    let resp = client
        .post(url)
        .header(CONTENT_TYPE, "application/json")
        .header(API_KEY_HEADER, api_key)
        .body(body)
        .send()
        .await?;
    Ok(resp)
}

pub async fn generate_otp(
    client: &Client,
    base_url: &str,
    api_key: &str,
    request: &GenerateOtpRequest,
) -> Result<GenerateOtpResponse> {
    let url = format!("{}/generate", base_url);
    debug!("Generating OTP for {} via {:?}", request.identifier, request.delivery.keys());
    let resp = post_json(client, &url, api_key, request).await?;
    let response = read_response::<GenerateOtpResponse>(resp).await?;
    info!("OTP generated: {}", response.otp.id);
    Ok(response)
}

pub async fn validate_otp(
    client: &Client,
    base_url: &str,
    api_key: &str,
    request: &ValidateOtpRequest,
) -> Result<ValidateOtpResponse> {
    let url = format!("{}/validate", base_url);
    debug!("Validating OTP for {}", request.identifier);
    let resp = post_json(client, &url, api_key, request).await?;
    let response = read_response::<ValidateOtpResponse>(resp).await?;
    info!("OTP {} validated, status: {}", response.otp.id, response.otp.status);
    Ok(response)
}

/// `id` is embedded in the path as-is.
pub async fn get_otp(
    client: &Client,
    base_url: &str,
    api_key: &str,
    id: &str,
) -> Result<GenerateOtpResponse> {
    let url = format!("{}/{}", base_url, id);
    debug!("Fetching OTP {}", id);
    let resp = client.get(&url).header(API_KEY_HEADER, api_key).send().await?;
    let response = read_response::<GenerateOtpResponse>(resp).await?;
    info!("OTP {} received, status: {}", response.otp.id, response.otp.status);
    Ok(response)
}

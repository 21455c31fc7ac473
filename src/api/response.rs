use crate::error::{Error, Result};
use crate::models::error::ErrorResponse;
use log::{error, warn};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

/// Decodes a 200 body into `T`; anything else goes through `parse_error_response`.
pub(crate) async fn read_response<T: DeserializeOwned>(resp: Response) -> Result<T> {
    if resp.status() != StatusCode::OK {
        return Err(parse_error_response(resp).await);
    }
    let body = resp.bytes().await?;
    serde_json::from_slice(&body).map_err(Error::Decode)
}

pub(crate) async fn parse_error_response(resp: Response) -> Error {
    let status = resp.status();
    let body = match resp.bytes().await {
        Ok(body) => body,
        Err(e) => return Error::Transport(e),
    };

    match serde_json::from_slice::<ErrorResponse>(&body) {
        Ok(ErrorResponse { message, errors }) => {
            error!("Request failed with status {}: {}", status, message);
            Error::Api {
                status,
                message,
                errors,
            }
        }
        Err(source) => {
            warn!("Unreadable error body with status {}: {}", status, source);
            Error::ErrorBody { status, source }
        }
    }
}

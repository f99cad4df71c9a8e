use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::trace;

/// Performs a GET against the backend and decodes the JSON body.
pub(crate) async fn get_json<T: DeserializeOwned>(client: &Client, url: &str, query: &[(&str, String)]) -> Result<T, BackendError> {
    trace!(url, ?query, "GET");
    let response = client.get(url).query(query).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::Status(status));
    }

    response.json::<T>().await.map_err(BackendError::DecodeError)
}

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("backend responded with {0}")]
    Status(StatusCode),
    #[error("could not decode the backend response: {0}")]
    DecodeError(reqwest::Error),
}

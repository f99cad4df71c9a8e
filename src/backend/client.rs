use crate::app_config::AppConfig;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;

pub fn new_client(config: &AppConfig) -> Result<Client, ParkingClientError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(header::USER_AGENT, HeaderValue::from_str(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))?);

    let client = Client::builder().timeout(config.backend().timeout()).default_headers(headers).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum ParkingClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("parking client set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
}

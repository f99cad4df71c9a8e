use crate::app_config::AppConfig;
use crate::backend::domain::RealtimeResponse;
use crate::backend::{BackendError, get_json};
use crate::domain::SensorRow;
use reqwest::Client;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{info, instrument, warn};

/// Retrieves the realtime sensor snapshot, optionally restricted to one zone.
///
/// Failed requests are retried with exponential backoff up to the configured number of retries.
#[instrument(skip(client, config))]
pub async fn fetch_realtime(client: &Client, config: &AppConfig, zone: Option<&str>, only_available: bool) -> Result<Vec<SensorRow>, BackendError> {
    info!("Retrieving realtime parking...");

    let url = format!("{}/api/parking/realtime", config.backend().url());
    let mut query = vec![("only_available", only_available.to_string())];
    if let Some(zone) = zone {
        query.push(("zone_number", zone.to_string()));
    }

    let strategy = ExponentialBackoff::from_millis(config.backend().retry_ms())
        .max_delay(config.backend().retry_max_delay())
        .map(jitter)
        .take(config.backend().max_retries());

    let (url, query) = (url.as_str(), query.as_slice());
    let response = Retry::spawn(strategy, move || async move {
        get_json::<RealtimeResponse>(client, url, query).await.inspect_err(|e| {
            warn!("⚠️ Retrieving realtime parking failed: {}", e);
        })
    })
    .await?;

    let rows = response.into_rows();
    info!("Retrieving realtime parking... OK, {} rows found", rows.len());

    Ok(rows)
}

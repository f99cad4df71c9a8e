use crate::app_config::AppConfig;
use crate::backend::domain::HistoricalResponse;
use crate::backend::{BackendError, get_json};
use crate::domain::{DayType, HourlyAvailability};
use reqwest::Client;
use tracing::{info, instrument};

/// Retrieves the typical number of free spots per hour for a zone on the given kind of day.
#[instrument(skip(client, config))]
pub async fn fetch_historical(client: &Client, config: &AppConfig, zone: &str, day_type: DayType) -> Result<HourlyAvailability, BackendError> {
    info!("Retrieving historical availability...");

    let url = format!("{}/api/parking/historical", config.backend().url());
    let query = [("zone_number", zone.to_string()), ("day_type", day_type.to_string())];
    let response = get_json::<HistoricalResponse>(client, &url, &query).await?;

    let availability = response.availability();
    info!("Retrieving historical availability... OK, has data: {}", availability.has_data());

    Ok(availability)
}

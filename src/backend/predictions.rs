use crate::app_config::AppConfig;
use crate::backend::domain::PredictionsResponse;
use crate::backend::{BackendError, get_json};
use crate::domain::DayType;
use reqwest::Client;
use tracing::{info, instrument};

const SUGGESTION_RADIUS_M: u32 = 600;

/// Retrieves predicted availability for the coming hours together with better nearby zones.
#[instrument(skip(client, config))]
pub async fn fetch_predictions(
    client: &Client,
    config: &AppConfig,
    zone: &str,
    hour: u32,
    day_type: DayType,
    hours_ahead: u32,
) -> Result<PredictionsResponse, BackendError> {
    info!("Retrieving predictions...");

    let url = format!("{}/api/parking/predict", config.backend().url());
    let query = [
        ("zone_number", zone.to_string()),
        ("hour", hour.to_string()),
        ("day_type", day_type.to_string()),
        ("hours_ahead", hours_ahead.to_string()),
        ("suggest_nearby", "true".to_string()),
        ("radius_m", SUGGESTION_RADIUS_M.to_string()),
    ];
    let response = get_json::<PredictionsResponse>(client, &url, &query).await?;

    info!(
        "Retrieving predictions... OK, {} predictions and {} suggestions found",
        response.predictions.len(),
        response.suggested_zones.len()
    );

    Ok(response)
}

use crate::app_config::AppConfig;
use crate::domain::{DayType, normalize_zone_id};
use crate::extensions::PercentFormat;
use crate::ranker::{RankOptions, rank_nearby_zones};
use crate::trends::GrowthSummary;
use chrono::{Local, Timelike};
use reqwest::Client;
use tracing::{debug, info, warn};

mod app_config;
mod backend;
mod coordinate_deserializer;
mod domain;
mod extensions;
mod ranker;
mod rules;
mod sensor_row_deserializer;
mod trends;

const PREDICTION_HOURS_AHEAD: u32 = 3;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🅿️ Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let client = backend::new_client(&config)?;

    let rows = backend::fetch_realtime(&client, &config, None, config.ranking().only_available())
        .await
        .unwrap_or_else(|e| {
            warn!("⚠️ Could not retrieve realtime parking: {}", e);
            Vec::new()
        });

    let options = RankOptions::new(config.ranking().limit())
        .reference(config.location())
        .radius_m(config.ranking().radius_m());
    let zones = rank_nearby_zones(&rows, &options);

    if zones.is_empty() {
        info!("No results within {} m", config.ranking().radius_m());
    }
    for zone in &zones {
        info!("🅿️ {}", zone);
        if let Some(centroid) = zone.centroid {
            debug!("Directions: {}", centroid.maps_url());
        }
    }

    if let Some(street) = config.finder().street() {
        explore_street(&client, &config, street).await;
    }

    summarize_trends(&client, &config).await;

    Ok(())
}

async fn explore_street(client: &Client, config: &AppConfig, street: &str) {
    let listings = match backend::find_zones(client, config, street).await {
        Ok(listings) => listings,
        Err(e) => {
            warn!("⚠️ Could not find zones on '{}': {}", street, e);
            return;
        }
    };

    for listing in &listings {
        info!("🔎 {}", listing);
        if let Some(centroid) = listing.centroid {
            debug!("Directions: {}", centroid.maps_url());
        }
    }

    let Some(selected) = listings.first() else {
        info!("No zones found on '{}'", street);
        return;
    };

    let now = Local::now();
    let day_type = DayType::for_date(&now);

    for rule in backend::fetch_zone_rules(client, config, &selected.zone).await {
        info!("📋 {}", rule.sentence);
        debug!(days = %rule.days, display = %rule.display, window = %rule.window, "{}", rule.text);
    }

    match backend::fetch_historical(client, config, &selected.zone, day_type).await {
        Ok(availability) if availability.has_data() => {
            if let Some(hour) = availability.best_hour() {
                info!("📈 {} free spots peak at {:02}:00 with {}", day_type, hour, availability.value(hour));
            }
            debug!("Scale: {:?}", availability.ticks());
            for hour in 0..24 {
                debug!("{:02}:00 {} ({:?})", hour, availability.value(hour), availability.band(hour));
            }
        }
        Ok(_) => info!("📈 No historical data for zone {}", selected.zone),
        Err(e) => warn!("⚠️ Could not retrieve historical availability: {}", e),
    }

    match backend::fetch_predictions(client, config, &selected.zone, now.hour(), day_type, PREDICTION_HOURS_AHEAD).await {
        Ok(response) => {
            for prediction in &response.predictions {
                info!(
                    "🔮 Hour {} — {} (~{} spots), {}, confidence {}",
                    clock_hour(prediction.hour),
                    prediction.predicted_availability.to_percent(0),
                    prediction.available_spots.map(f64::round).unwrap_or_default(),
                    prediction.status.as_deref().unwrap_or_default(),
                    prediction.confidence_score.unwrap_or_default().to_percent(0)
                );
            }
            for suggestion in &response.suggested_zones {
                info!(
                    "🧭 Zone {} — best around {} ({}), {} m away",
                    normalize_zone_id(&suggestion.zone_number).unwrap_or_default(),
                    clock_hour(suggestion.best_hour),
                    suggestion.best_predicted_availability.to_percent(0),
                    suggestion.distance_m.map(|distance| distance.round().to_string()).unwrap_or_else(|| "—".to_string())
                );
            }
        }
        Err(e) => warn!("⚠️ Could not retrieve predictions: {}", e),
    }
}

fn clock_hour(hour: Option<u8>) -> String {
    hour.map(|hour| format!("{hour:02}:00")).unwrap_or_else(|| "—".to_string())
}

async fn summarize_trends(client: &Client, config: &AppConfig) {
    let trends = config.trends();

    match backend::fetch_vehicle_totals(client, config, trends.start_year(), trends.end_year()).await {
        Ok(series) => info!("🚗 Vehicle registrations: {}", GrowthSummary::from_series(&series.years, &series.values)),
        Err(e) => warn!("⚠️ Could not retrieve vehicle registrations: {}", e),
    }

    match backend::fetch_population(client, config, trends.start_year(), trends.end_year(), trends.region()).await {
        Ok(series) => info!("🏙️ {} population: {}", trends.region(), GrowthSummary::from_series(&series.years, &series.values)),
        Err(e) => warn!("⚠️ Could not retrieve population: {}", e),
    }
}

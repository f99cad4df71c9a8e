use crate::app_config::AppConfig;
use crate::backend::domain::ZonesResponse;
use crate::backend::{BackendError, fetch_realtime, get_json};
use crate::domain::ZoneListing;
use crate::ranker::ZoneAccumulator;
use futures::future::join_all;
use reqwest::Client;
use tracing::{info, instrument, warn};

pub const UNKNOWN_LABEL: &str = "Unknown";

/// Finds the zones on a street and describes each by its dominant road segment and centroid.
///
/// Zone snapshots are fetched concurrently. A zone whose snapshot can't be retrieved, or that
/// has no labelled bays, is left out.
#[instrument(skip(client, config))]
pub async fn find_zones(client: &Client, config: &AppConfig, street: &str) -> Result<Vec<ZoneListing>, BackendError> {
    info!("Retrieving zones on '{}'...", street);

    let url = format!("{}/api/parking/zones", config.backend().url());
    let response = get_json::<ZonesResponse>(client, &url, &[("on_street", street.to_string())]).await?;

    let zones = response.zone_ids().into_iter().take(config.finder().max_zones()).collect::<Vec<_>>();
    info!("Retrieving zones on '{}'... OK, {} found", street, zones.len());

    let listings = join_all(zones.into_iter().map(|zone| describe_zone(client, config, zone))).await;

    Ok(listings.into_iter().filter(|listing| listing.label != UNKNOWN_LABEL).collect())
}

async fn describe_zone(client: &Client, config: &AppConfig, zone: String) -> ZoneListing {
    match fetch_realtime(client, config, Some(&zone), false).await {
        Ok(rows) => {
            let mut accumulator = ZoneAccumulator::new(zone.as_str());
            rows.iter().for_each(|row| accumulator.add(row));

            ZoneListing {
                label: accumulator.majority_label().unwrap_or(UNKNOWN_LABEL).to_string(),
                centroid: accumulator.centroid(),
                zone,
            }
        }
        Err(e) => {
            warn!(zone = %zone, "⚠️ Could not describe zone: {}", e);
            ZoneListing {
                zone,
                label: UNKNOWN_LABEL.to_string(),
                centroid: None,
            }
        }
    }
}

use crate::app_config::AppConfig;
use crate::backend::domain::RulesResponse;
use crate::backend::get_json;
use crate::rules::{ParkingRule, normalize_rule};
use reqwest::Client;
use tracing::{info, instrument, warn};

/// Retrieves the sign plate rules for a zone. Returns an empty list when the rules can't be
/// retrieved.
#[instrument(skip(client, config))]
pub async fn fetch_zone_rules(client: &Client, config: &AppConfig, zone: &str) -> Vec<ParkingRule> {
    info!("Retrieving rules...");

    let url = format!("{}/api/parking/zone/{}/rules", config.backend().url(), zone);
    match get_json::<RulesResponse>(client, &url, &[]).await {
        Ok(response) => {
            let rules = response.rules.iter().map(normalize_rule).collect::<Vec<_>>();
            info!("Retrieving rules... OK, {} found", rules.len());
            rules
        }
        Err(e) => {
            warn!("⚠️ Retrieving rules... failed, {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;

    #[tokio::test]
    async fn fetch_zone_rules_returns_normalized_rules() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/api/parking/zone/7539/rules")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/rules_response.json"))
            .create_async()
            .await;

        let config = AppConfigBuilder::new().backend_url(server.url()).build();
        let rules = fetch_zone_rules(&Client::new(), &config, "7539").await;

        mock.assert();
        assert_eq!(
            rules.iter().map(|rule| rule.sentence.as_str()).collect::<Vec<_>>(),
            vec![
                "Weekdays: 2-hour limit. You can park here from 7:30 am to 6:30 pm.",
                "Saturday: No parking from 7 am to 10 am.",
                "Sunday: Loading zone (15-min). You can park here from 9 am to 5 pm.",
                "Permit holders only",
            ]
        );
    }

    #[tokio::test]
    async fn fetch_zone_rules_is_empty_on_failure() {
        let mut server = mockito::Server::new_async().await;

        let mock = server.mock("GET", "/api/parking/zone/7539/rules").with_status(404).create_async().await;

        let config = AppConfigBuilder::new().backend_url(server.url()).build();
        let rules = fetch_zone_rules(&Client::new(), &config, "7539").await;

        mock.assert();
        assert!(rules.is_empty());
    }
}

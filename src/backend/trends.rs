use crate::app_config::AppConfig;
use crate::backend::domain::{PopulationGrowthResponse, VehicleGrowthResponse, parse_years, value_for_year};
use crate::backend::{BackendError, get_json};
use reqwest::Client;
use thiserror::Error;
use tracing::{info, instrument};

/// A yearly series as returned by the growth endpoints.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct YearlySeries {
    pub years: Vec<i32>,
    pub values: Vec<Option<f64>>,
}

/// Retrieves vehicle registrations and totals them over all vehicle types per year.
#[instrument(skip(client, config))]
pub async fn fetch_vehicle_totals(client: &Client, config: &AppConfig, start: i32, end: i32) -> Result<YearlySeries, TrendError> {
    check_range(start, end)?;
    info!("Retrieving vehicle registrations...");

    let url = format!("{}/api/vehicle-growth", config.backend().url());
    let query = [("start", start.to_string()), ("end", end.to_string())];
    let response = get_json::<VehicleGrowthResponse>(client, &url, &query).await?;

    let years = parse_years(&response.years);
    let values = years
        .iter()
        .map(|year| {
            let total = response
                .data
                .iter()
                .filter_map(|row| value_for_year(&row.registrations, *year))
                .sum::<f64>();
            Some(total)
        })
        .collect::<Vec<_>>();

    info!("Retrieving vehicle registrations... OK, {} years found", years.len());
    Ok(YearlySeries { years, values })
}

/// Retrieves the population of `region`, falling back to the first region in the response.
#[instrument(skip(client, config))]
pub async fn fetch_population(client: &Client, config: &AppConfig, start: i32, end: i32, region: &str) -> Result<YearlySeries, TrendError> {
    check_range(start, end)?;
    info!("Retrieving population...");

    let url = format!("{}/api/population-growth", config.backend().url());
    let query = [("start", start.to_string()), ("end", end.to_string()), ("region", region.to_string())];
    let response = get_json::<PopulationGrowthResponse>(client, &url, &query).await?;

    let years = parse_years(&response.years);
    let population = response
        .data
        .iter()
        .find(|entry| entry.region.as_deref().is_some_and(|name| name.eq_ignore_ascii_case(region)))
        .or_else(|| response.data.first());

    let values = years
        .iter()
        .map(|year| population.and_then(|entry| value_for_year(&entry.population, *year)))
        .collect::<Vec<_>>();

    info!("Retrieving population... OK, {} years found", years.len());
    Ok(YearlySeries { years, values })
}

fn check_range(start: i32, end: i32) -> Result<(), TrendError> {
    if start > end {
        return Err(TrendError::InvalidRange { start, end });
    }
    Ok(())
}

#[derive(Error, Debug)]
pub enum TrendError {
    #[error("invalid year range {start}..={end}, start must not be after end")]
    InvalidRange { start: i32, end: i32 },
    #[error(transparent)]
    Backend(#[from] BackendError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn fetch_vehicle_totals_sums_all_vehicle_types() -> Result<(), TrendError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/api/vehicle-growth")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("start".into(), "2016".into()),
                Matcher::UrlEncoded("end".into(), "2018".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{
                    "years": [2016, 2017, 2018],
                    "data": [
                        { "vehicle_type": "Passenger", "registrations": { "2016": 1000, "2017": 1100, "2018": 1200 } },
                        { "vehicle_type": "Motorcycle", "registrations": { "2016": 50, "2018": "70" } }
                    ],
                    "source": "VicRoads"
                }"#,
            )
            .create_async()
            .await;

        let config = AppConfigBuilder::new().backend_url(server.url()).build();
        let series = fetch_vehicle_totals(&Client::new(), &config, 2016, 2018).await?;

        mock.assert();
        assert_eq!(
            series,
            YearlySeries {
                years: vec![2016, 2017, 2018],
                values: vec![Some(1050.0), Some(1100.0), Some(1270.0)],
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn fetch_population_picks_the_requested_region() -> Result<(), TrendError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/api/population-growth")
            .match_query(Matcher::UrlEncoded("region".into(), "cbd".into()))
            .with_status(200)
            .with_body(
                r#"{
                    "years": [2019, 2020, 2021],
                    "data": [
                        { "region": "Docklands", "population": { "2019": 15000, "2020": 15500, "2021": 16000 } },
                        { "region": "CBD", "population": { "2020": 47000, "2021": 49000 } }
                    ]
                }"#,
            )
            .create_async()
            .await;

        let config = AppConfigBuilder::new().backend_url(server.url()).build();
        let series = fetch_population(&Client::new(), &config, 2019, 2021, "cbd").await?;

        mock.assert();
        assert_eq!(series.values, vec![None, Some(47000.0), Some(49000.0)]);

        Ok(())
    }

    #[tokio::test]
    async fn fetch_population_falls_back_to_the_first_region() -> Result<(), TrendError> {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/api/population-growth")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{ "years": [2020], "data": [{ "region": "Docklands", "population": { "2020": 15500 } }] }"#)
            .create_async()
            .await;

        let config = AppConfigBuilder::new().backend_url(server.url()).build();
        let series = fetch_population(&Client::new(), &config, 2020, 2020, "Southbank").await?;

        assert_eq!(series.values, vec![Some(15500.0)]);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_an_inverted_range_without_calling_the_backend() {
        let config = AppConfigBuilder::new().backend_url("http://127.0.0.1:9".to_string()).build();
        let result = fetch_vehicle_totals(&Client::new(), &config, 2021, 2016).await;

        assert!(matches!(result, Err(TrendError::InvalidRange { start: 2021, end: 2016 })));
    }
}

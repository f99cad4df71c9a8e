use crate::domain::Coordinate;
use config::{Config, ConfigError};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use std::num::NonZeroUsize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    backend: Backend,
    ranking: Ranking,
    #[serde(default)]
    location: Option<Coordinate>,
    #[serde(default)]
    finder: Finder,
    #[serde(default)]
    trends: Trends,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("PARKFINDER").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    pub fn ranking(&self) -> &Ranking {
        &self.ranking
    }

    pub fn location(&self) -> Option<Coordinate> {
        self.location
    }

    pub fn finder(&self) -> &Finder {
        &self.finder
    }

    pub fn trends(&self) -> &Trends {
        &self.trends
    }
}

#[derive(Debug, Deserialize)]
pub struct Backend {
    url: String,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
    retry_ms: u64,
    retry_max_delay_ms: u64,
    max_retries: usize,
}

impl Backend {
    pub fn url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn retry_ms(&self) -> u64 {
        self.retry_ms
    }

    pub fn retry_max_delay(&self) -> Duration {
        Duration::from_millis(self.retry_max_delay_ms)
    }

    pub fn max_retries(&self) -> usize {
        self.max_retries
    }
}

#[derive(Debug, Deserialize)]
pub struct Ranking {
    #[serde(deserialize_with = "positive_meters")]
    radius_m: f64,
    limit: NonZeroUsize,
    only_available: bool,
}

impl Ranking {
    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    pub fn limit(&self) -> NonZeroUsize {
        self.limit
    }

    pub fn only_available(&self) -> bool {
        self.only_available
    }
}

fn positive_meters<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let meters = f64::deserialize(deserializer)?;
    if !(meters.is_finite() && meters > 0.0) {
        return Err(Error::custom(format!("invalid radius: {meters}, must be a positive number of meters")));
    }

    Ok(meters)
}

#[derive(Debug, Deserialize)]
pub struct Finder {
    street: Option<String>,
    #[serde(default = "default_max_zones")]
    max_zones: usize,
}

fn default_max_zones() -> usize {
    30
}

impl Default for Finder {
    fn default() -> Self {
        Finder {
            street: None,
            max_zones: default_max_zones(),
        }
    }
}

impl Finder {
    pub fn street(&self) -> Option<&str> {
        self.street.as_deref().map(str::trim).filter(|street| !street.is_empty())
    }

    pub fn max_zones(&self) -> usize {
        self.max_zones
    }
}

#[derive(Debug, Deserialize)]
pub struct Trends {
    start_year: i32,
    end_year: i32,
    #[serde(default = "default_region")]
    region: String,
}

fn default_region() -> String {
    "CBD".to_string()
}

impl Default for Trends {
    fn default() -> Self {
        Trends {
            start_year: 2016,
            end_year: 2021,
            region: default_region(),
        }
    }
}

impl Trends {
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                backend: Backend {
                    url: "http://backend.url".to_string(),
                    timeout: Duration::from_secs(5),
                    retry_ms: 1,
                    retry_max_delay_ms: 2,
                    max_retries: 0,
                },
                ranking: Ranking {
                    radius_m: 1000.0,
                    limit: NonZeroUsize::new(10).unwrap(),
                    only_available: false,
                },
                location: Some(Coordinate::new(-37.8136, 144.9631)),
                finder: Finder::default(),
                trends: Trends::default(),
            },
        }
    }

    pub fn backend_url(mut self, url: String) -> Self {
        self.config.backend.url = url;
        self
    }

    pub fn max_retries(mut self, max_retries: usize) -> Self {
        self.config.backend.max_retries = max_retries;
        self
    }

    pub fn max_zones(mut self, max_zones: usize) -> Self {
        self.config.finder.max_zones = max_zones;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

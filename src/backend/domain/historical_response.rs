use crate::domain::HourlyAvailability;
use crate::sensor_row_deserializer::as_number;
use serde::Deserialize;
use serde_json::{Map, Value};

// GET /api/parking/historical
#[derive(Debug, Default, Deserialize)]
pub struct HistoricalResponse {
    #[serde(default)]
    pub availability_by_hour: Map<String, Value>,
}

impl HistoricalResponse {
    pub fn availability(&self) -> HourlyAvailability {
        HourlyAvailability::from_pairs(
            self.availability_by_hour
                .iter()
                .filter_map(|(hour, value)| Some((hour.trim().parse::<usize>().ok()?, as_number(value)?))),
        )
    }
}

use crate::domain::SensorRow;
use serde::Deserialize;
use serde_json::Value;

// GET /api/parking/realtime
#[derive(Debug, Default, Deserialize)]
pub struct RealtimeResponse {
    #[serde(default)]
    pub results: Vec<Value>,
}

impl RealtimeResponse {
    /// Decodes the rows, skipping entries that aren't JSON objects.
    pub fn into_rows(self) -> Vec<SensorRow> {
        self.results.into_iter().filter_map(|row| serde_json::from_value::<SensorRow>(row).ok()).collect()
    }
}

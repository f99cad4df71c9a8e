use crate::domain::normalize_zone_id;
use serde::Deserialize;
use serde_json::Value;

// GET /api/parking/zones
#[derive(Debug, Default, Deserialize)]
pub struct ZonesResponse {
    #[serde(default)]
    pub zones: Vec<Value>,
}

impl ZonesResponse {
    pub fn zone_ids(&self) -> Vec<String> {
        self.zones.iter().filter_map(normalize_zone_id).collect()
    }
}

use crate::domain::{SensorRow, normalize_zone_id};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

const ZONE_KEYS: &[&str] = &["zone", "Zone", "Zone_Number", "zone_number"];
const STATUS_KEYS: &[&str] = &["status_description", "Status_Description"];
const LATITUDE_KEYS: &[&str] = &["latitude", "Latitude", "Latitude_x"];
const LONGITUDE_KEYS: &[&str] = &["longitude", "Longitude", "Longitude_x"];
const LABEL_KEYS: &[&str] = &["road_segment_description", "RoadSegmentDescription"];

// The backend returns rows straight from differently shaped data sets, so field names and value
// types vary. Anything that can't be interpreted is left empty instead of failing the row.
impl<'de> Deserialize<'de> for SensorRow {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Map::<String, Value>::deserialize(deserializer)?;

        Ok(SensorRow {
            zone: first_present(&fields, ZONE_KEYS).and_then(normalize_zone_id),
            status: first_present(&fields, STATUS_KEYS).and_then(Value::as_str).unwrap_or_default().to_string(),
            latitude: first_present(&fields, LATITUDE_KEYS).and_then(as_number),
            longitude: first_present(&fields, LONGITUDE_KEYS).and_then(as_number),
            label: first_present(&fields, LABEL_KEYS)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|label| !label.is_empty())
                .map(str::to_string),
        })
    }
}

fn first_present<'a>(fields: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().filter_map(|key| fields.get(*key)).find(|value| !value.is_null())
}

/// Interprets a JSON number or numeric string as `f64`.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

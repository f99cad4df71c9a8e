use crate::sensor_row_deserializer::as_number;
use serde::Deserialize;
use serde_json::{Map, Value};

// GET /api/vehicle-growth
#[derive(Debug, Default, Deserialize)]
pub struct VehicleGrowthResponse {
    #[serde(default)]
    pub years: Vec<Value>,
    #[serde(default)]
    pub data: Vec<VehicleRegistrations>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VehicleRegistrations {
    #[serde(default)]
    pub registrations: Map<String, Value>,
}

// GET /api/population-growth
#[derive(Debug, Default, Deserialize)]
pub struct PopulationGrowthResponse {
    #[serde(default)]
    pub years: Vec<Value>,
    #[serde(default)]
    pub data: Vec<RegionPopulation>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RegionPopulation {
    pub region: Option<String>,
    #[serde(default)]
    pub population: Map<String, Value>,
}

/// Years arrive as numbers or numeric strings; anything else is dropped.
pub fn parse_years(years: &[Value]) -> Vec<i32> {
    years.iter().filter_map(as_number).filter(|year| year.fract() == 0.0).map(|year| year as i32).collect()
}

/// Looks a value up by year, accepting both `"2016"` and `"2016.0"` style keys.
pub fn value_for_year(values: &Map<String, Value>, year: i32) -> Option<f64> {
    values
        .get(&year.to_string())
        .or_else(|| values.get(&format!("{year}.0")))
        .and_then(as_number)
}

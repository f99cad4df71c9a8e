use serde::Deserialize;

// GET /api/parking/predict
// Every scalar may come back as null, so each one is optional.
#[derive(Debug, Default, Deserialize)]
pub struct PredictionsResponse {
    #[serde(default)]
    pub predictions: Vec<Prediction>,
    #[serde(default)]
    pub suggested_zones: Vec<SuggestedZone>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Prediction {
    pub hour: Option<u8>,
    pub predicted_availability: Option<f64>,
    pub available_spots: Option<f64>,
    pub status: Option<String>,
    pub confidence_score: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SuggestedZone {
    pub zone_number: serde_json::Value,
    pub best_hour: Option<u8>,
    pub best_predicted_availability: Option<f64>,
    pub distance_m: Option<f64>,
}

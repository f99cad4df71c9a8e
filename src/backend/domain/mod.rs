mod growth_response;
mod historical_response;
mod predictions_response;
mod realtime_response;
mod rules_response;
mod zones_response;

pub use growth_response::{PopulationGrowthResponse, VehicleGrowthResponse, parse_years, value_for_year};
pub use historical_response::HistoricalResponse;
pub use predictions_response::{Prediction, PredictionsResponse, SuggestedZone};
pub use realtime_response::RealtimeResponse;
pub use rules_response::RulesResponse;
pub use zones_response::ZonesResponse;

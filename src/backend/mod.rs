mod client;
pub mod domain;
mod historical;
mod predictions;
mod realtime;
mod request;
mod rules;
mod trends;
mod zones;

pub use client::{ParkingClientError, new_client};
pub use historical::fetch_historical;
pub use predictions::fetch_predictions;
pub use realtime::fetch_realtime;
pub use request::BackendError;
pub(crate) use request::get_json;
pub use rules::fetch_zone_rules;
pub use trends::{TrendError, YearlySeries, fetch_population, fetch_vehicle_totals};
pub use zones::find_zones;

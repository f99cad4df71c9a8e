mod coordinate;
mod day_type;
mod hourly_availability;
mod sensor_row;
mod zone_id;
mod zone_summary;

pub use coordinate::Coordinate;
pub use day_type::DayType;
pub use hourly_availability::{AvailabilityBand, HourlyAvailability};
pub use sensor_row::SensorRow;
pub use zone_id::normalize_zone_id;
pub use zone_summary::{ZoneListing, ZoneSummary};

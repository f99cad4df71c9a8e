mod clock;
mod normalize;
mod vocabulary;

pub use normalize::{ParkingRule, normalize_rule};

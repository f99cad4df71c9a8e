mod accumulator;
mod rank;

pub use accumulator::{ZoneAccumulator, ZoneGroups};
pub use rank::{RankOptions, rank_nearby_zones};

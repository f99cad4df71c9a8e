use crate::domain::Coordinate;
use std::fmt::{Display, Formatter};

/// The ranked, per-zone view of a realtime snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneSummary {
    pub zone: String,
    pub free: usize,
    pub total: usize,
    pub centroid: Option<Coordinate>,
    pub distance_m: Option<f64>,
    pub label: String,
}

impl Display for ZoneSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Zone {} — {}: {}/{} free, distance ", self.zone, self.label, self.free, self.total)?;
        match self.distance_m {
            Some(distance) => write!(f, "{} m", distance.round()),
            None => write!(f, "—"),
        }
    }
}

/// A zone found by street search, described by its dominant road segment.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneListing {
    pub zone: String,
    pub label: String,
    pub centroid: Option<Coordinate>,
}

impl Display for ZoneListing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Zone {} — {}", self.zone, self.label)
    }
}

use crate::domain::{Coordinate, SensorRow, ZoneSummary};
use crate::ranker::ZoneGroups;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::num::NonZeroUsize;
use tracing::{debug, instrument};

pub const DEFAULT_LABEL: &str = "Street segment";

#[derive(Clone, Debug, PartialEq)]
pub struct RankOptions {
    reference: Option<Coordinate>,
    radius_m: f64,
    limit: NonZeroUsize,
}

impl RankOptions {
    pub fn new(limit: NonZeroUsize) -> Self {
        RankOptions {
            reference: None,
            radius_m: f64::INFINITY,
            limit,
        }
    }

    pub fn reference(mut self, reference: Option<Coordinate>) -> Self {
        self.reference = reference;
        self
    }

    /// Only applies when a reference coordinate is set.
    pub fn radius_m(mut self, radius_m: f64) -> Self {
        self.radius_m = radius_m;
        self
    }
}

/// Ranks the zones in a realtime snapshot by availability, then proximity.
///
/// Rows are grouped per zone, the most free zones come first and ties are broken by distance to
/// the reference (zones without a known distance last). With a reference coordinate, zones further
/// away than the radius are dropped, zones with an unknown distance are kept. At most `limit`
/// zones are returned.
#[instrument(skip_all, fields(rows = rows.len()))]
pub fn rank_nearby_zones(rows: &[SensorRow], options: &RankOptions) -> Vec<ZoneSummary> {
    let groups = ZoneGroups::from_rows(rows);
    debug!(zones = groups.len(), "Grouped rows into zones");

    let mut summaries = groups
        .into_zones()
        .into_iter()
        .map(|zone| {
            let centroid = zone.centroid();
            let distance_m = options.reference.zip(centroid).map(|(reference, centroid)| reference.distance_to(&centroid));

            ZoneSummary {
                zone: zone.zone().to_string(),
                free: zone.free(),
                total: zone.total(),
                centroid,
                distance_m,
                label: zone.majority_label().unwrap_or(DEFAULT_LABEL).to_string(),
            }
        })
        .collect::<Vec<_>>();

    summaries.sort_by(|a, b| b.free.cmp(&a.free).then_with(|| compare_distance(a.distance_m, b.distance_m)));

    if options.reference.is_some() {
        summaries.retain(|summary| summary.distance_m.is_none_or(|distance| distance <= options.radius_m));
    }
    summaries.truncate(options.limit.get());

    debug!(results = summaries.len(), "Ranked nearby zones");
    summaries
}

fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => OrderedFloat(a).cmp(&OrderedFloat(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

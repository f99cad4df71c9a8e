use crate::domain::{Coordinate, SensorRow};
use std::collections::HashMap;

/// Running per-zone totals built while scanning a realtime snapshot.
#[derive(Clone, Default, Debug)]
pub struct ZoneAccumulator {
    zone: String,
    free: usize,
    total: usize,
    latitude_sum: f64,
    longitude_sum: f64,
    located: usize,
    labels: LabelTally,
}

impl ZoneAccumulator {
    pub fn new(zone: impl Into<String>) -> Self {
        ZoneAccumulator {
            zone: zone.into(),
            ..Default::default()
        }
    }

    /// Adds a row regardless of its zone id. Rows without a valid coordinate still count towards
    /// the free and total counts.
    pub fn add(&mut self, row: &SensorRow) {
        self.total += 1;
        if row.is_unoccupied() {
            self.free += 1;
        }

        if let Some(coordinate) = row.coordinate() {
            self.latitude_sum += coordinate.latitude;
            self.longitude_sum += coordinate.longitude;
            self.located += 1;
        }

        if let Some(label) = row.label.as_deref() {
            self.labels.record(label);
        }
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }

    pub fn free(&self) -> usize {
        self.free
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn centroid(&self) -> Option<Coordinate> {
        if self.located == 0 {
            return None;
        }

        let located = self.located as f64;
        Some(Coordinate::new(self.latitude_sum / located, self.longitude_sum / located))
    }

    pub fn majority_label(&self) -> Option<&str> {
        self.labels.most_frequent()
    }
}

/// Label occurrence counts in first-seen order.
#[derive(Clone, Default, Debug)]
struct LabelTally {
    index: HashMap<String, usize>,
    counts: Vec<(String, usize)>,
}

impl LabelTally {
    fn record(&mut self, label: &str) {
        let label = label.trim();
        if label.is_empty() {
            return;
        }

        match self.index.get(label) {
            Some(&position) => self.counts[position].1 += 1,
            None => {
                self.index.insert(label.to_string(), self.counts.len());
                self.counts.push((label.to_string(), 1));
            }
        }
    }

    /// The label with the highest count; the earliest seen label wins a tie.
    fn most_frequent(&self) -> Option<&str> {
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.counts {
            if best.is_none_or(|(_, count)| entry.1 > *count) {
                best = Some(entry);
            }
        }
        best.map(|(label, _)| label.as_str())
    }
}

/// Groups rows by normalized zone id, keeping zones in the order they were first seen.
#[derive(Default, Debug)]
pub struct ZoneGroups {
    index: HashMap<String, usize>,
    zones: Vec<ZoneAccumulator>,
}

impl ZoneGroups {
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a SensorRow>) -> Self {
        let mut groups = ZoneGroups::default();
        for row in rows {
            groups.add(row);
        }
        groups
    }

    /// Adds a row to its zone. Rows without a zone id are dropped.
    pub fn add(&mut self, row: &SensorRow) {
        let Some(zone) = row.zone.as_deref() else {
            return;
        };

        let position = match self.index.get(zone) {
            Some(&position) => position,
            None => {
                self.index.insert(zone.to_string(), self.zones.len());
                self.zones.push(ZoneAccumulator::new(zone));
                self.zones.len() - 1
            }
        };
        self.zones[position].add(row);
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn into_zones(self) -> Vec<ZoneAccumulator> {
        self.zones
    }
}

/// Typical free spots for each hour of the day.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct HourlyAvailability {
    values: [f64; 24],
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AvailabilityBand {
    Good,
    Fair,
    Poor,
}

impl HourlyAvailability {
    /// Builds the series from `(hour, value)` pairs. Hours outside 0..24 are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (usize, f64)>) -> Self {
        let mut values = [0.0; 24];
        for (hour, value) in pairs {
            if let Some(slot) = values.get_mut(hour) {
                *slot = value;
            }
        }
        HourlyAvailability { values }
    }

    pub fn value(&self, hour: usize) -> f64 {
        self.values.get(hour).copied().unwrap_or_default()
    }

    pub fn has_data(&self) -> bool {
        self.values.iter().any(|value| *value > 0.0)
    }

    /// The largest hourly value, never less than 1 so it can be used as a scale.
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(1.0, f64::max)
    }

    /// Axis ticks at 0, 25, 50, 75 and 100 percent of the maximum.
    pub fn ticks(&self) -> [f64; 5] {
        let max = self.max();
        [0.0, 0.25, 0.5, 0.75, 1.0].map(|fraction| (max * fraction).round())
    }

    pub fn band(&self, hour: usize) -> AvailabilityBand {
        let ratio = self.value(hour) / self.max();
        if ratio >= 2.0 / 3.0 {
            AvailabilityBand::Good
        } else if ratio >= 1.0 / 3.0 {
            AvailabilityBand::Fair
        } else {
            AvailabilityBand::Poor
        }
    }

    /// The hour with the most free spots, earliest first on ties.
    pub fn best_hour(&self) -> Option<usize> {
        if !self.has_data() {
            return None;
        }

        let mut best = 0;
        for (hour, value) in self.values.iter().enumerate() {
            if *value > self.values[best] {
                best = hour;
            }
        }
        Some(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn availability() -> HourlyAvailability {
        HourlyAvailability::from_pairs([(8, 3.0), (9, 12.0), (10, 5.0), (17, 12.0), (25, 99.0)])
    }

    #[test]
    fn missing_hours_are_zero_and_out_of_range_hours_are_ignored() {
        let availability = availability();
        assert_eq!(availability.value(0), 0.0);
        assert_eq!(availability.value(9), 12.0);
        assert_eq!(availability.max(), 12.0);
    }

    #[test]
    fn empty_series_has_no_data_and_a_unit_scale() {
        let availability = HourlyAvailability::default();
        assert!(!availability.has_data());
        assert_eq!(availability.max(), 1.0);
        assert_eq!(availability.ticks(), [0.0, 0.0, 1.0, 1.0, 1.0]);
        assert_eq!(availability.best_hour(), None);
    }

    #[test]
    fn ticks_are_rounded_fractions_of_the_max() {
        assert_eq!(availability().ticks(), [0.0, 3.0, 6.0, 9.0, 12.0]);
    }

    #[rstest]
    #[case(9, AvailabilityBand::Good)]
    #[case(10, AvailabilityBand::Fair)]
    #[case(8, AvailabilityBand::Poor)]
    #[case(3, AvailabilityBand::Poor)]
    fn classifies_hours_relative_to_the_max(#[case] hour: usize, #[case] expected: AvailabilityBand) {
        assert_eq!(availability().band(hour), expected);
    }

    #[test]
    fn best_hour_prefers_the_earliest_peak() {
        assert_eq!(availability().best_hour(), Some(9));
    }
}

use crate::extensions::PercentFormat;
use std::fmt::{Display, Formatter};

/// Headline figures for a yearly series.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct GrowthSummary {
    pub first: Option<f64>,
    pub last: Option<f64>,
    pub change_abs: Option<f64>,
    pub change_pct: Option<f64>,
    pub cagr: Option<f64>,
    pub peak: Option<(i32, f64)>,
}

impl GrowthSummary {
    /// Summarizes `values`, aligned with `years`. Unknown values are skipped when looking for the
    /// first value and the peak, but an unknown final value leaves the change figures unknown.
    pub fn from_series(years: &[i32], values: &[Option<f64>]) -> Self {
        let first = values.iter().flatten().next().copied();
        let last = values.last().copied().flatten();

        let change_abs = first.zip(last).map(|(first, last)| last - first);
        let ratio = first.filter(|first| *first != 0.0).zip(last).map(|(first, last)| last / first);
        let change_pct = ratio.map(|ratio| ratio - 1.0);

        let periods = years.len().saturating_sub(1);
        let cagr = ratio
            .filter(|_| periods > 0)
            .map(|ratio| ratio.powf(1.0 / periods as f64) - 1.0)
            .filter(|cagr| cagr.is_finite());

        let mut peak: Option<(i32, f64)> = None;
        for (year, value) in years.iter().zip(values) {
            if let Some(value) = value {
                if peak.is_none_or(|(_, best)| *value > best) {
                    peak = Some((*year, *value));
                }
            }
        }

        GrowthSummary {
            first,
            last,
            change_abs,
            change_pct,
            cagr,
            peak,
        }
    }
}

impl Display for GrowthSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.first.zip(self.last) {
            Some((first, last)) => write!(f, "{first} → {last}, ")?,
            None => write!(f, "— → —, ")?,
        }
        match self.change_abs {
            Some(change) => write!(f, "change {change:+}")?,
            None => write!(f, "change —")?,
        }
        write!(f, " ({}), CAGR {}, peak ", self.change_pct.to_percent(1), self.cagr.to_percent(1))?;
        match self.peak {
            Some((year, value)) => write!(f, "{year} — {value}"),
            None => write!(f, "—"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn summarizes_a_growing_series() {
        let summary = GrowthSummary::from_series(&[2016, 2017, 2018], &[Some(100.0), Some(150.0), Some(121.0)]);

        assert_eq!(summary.first, Some(100.0));
        assert_eq!(summary.last, Some(121.0));
        assert_eq!(summary.change_abs, Some(21.0));
        assert!((summary.change_pct.unwrap() - 0.21).abs() < 1e-9);
        assert!((summary.cagr.unwrap() - 0.1).abs() < 1e-9);
        assert_eq!(summary.peak, Some((2017, 150.0)));
    }

    #[test]
    fn skips_leading_unknown_values() {
        let summary = GrowthSummary::from_series(&[2016, 2017, 2018], &[None, Some(200.0), Some(100.0)]);

        assert_eq!(summary.first, Some(200.0));
        assert_eq!(summary.change_abs, Some(-100.0));
        assert_eq!(summary.change_pct, Some(-0.5));
        assert_eq!(summary.peak, Some((2017, 200.0)));
    }

    #[test]
    fn unknown_last_value_leaves_changes_unknown() {
        let summary = GrowthSummary::from_series(&[2016, 2017], &[Some(100.0), None]);

        assert_eq!(summary.change_abs, None);
        assert_eq!(summary.change_pct, None);
        assert_eq!(summary.cagr, None);
        assert_eq!(summary.peak, Some((2016, 100.0)));
    }

    #[test]
    fn zero_first_value_has_no_relative_change() {
        let summary = GrowthSummary::from_series(&[2016, 2017], &[Some(0.0), Some(10.0)]);

        assert_eq!(summary.change_abs, Some(10.0));
        assert_eq!(summary.change_pct, None);
        assert_eq!(summary.cagr, None);
    }

    #[test]
    fn single_year_has_no_cagr_and_first_peak_wins_ties() {
        let summary = GrowthSummary::from_series(&[2016], &[Some(5.0)]);
        assert_eq!(summary.cagr, None);
        assert_eq!(summary.change_pct, Some(0.0));

        let tied = GrowthSummary::from_series(&[2016, 2017], &[Some(5.0), Some(5.0)]);
        assert_eq!(tied.peak, Some((2016, 5.0)));
    }

    #[test]
    fn empty_series_is_unknown() {
        assert_eq!(GrowthSummary::from_series(&[], &[]), GrowthSummary::default());
    }

    #[test]
    fn displays_the_headline_figures() {
        let summary = GrowthSummary::from_series(&[2016, 2017, 2018], &[Some(100.0), Some(150.0), Some(121.0)]);
        assert_eq!(summary.to_string(), "100 → 121, change +21 (21.0%), CAGR 10.0%, peak 2017 — 150");
        assert_eq!(GrowthSummary::default().to_string(), "— → —, change — (—), CAGR —, peak —");
    }
}

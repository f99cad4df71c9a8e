/// Formats ratios as percentages for display, e.g. `0.123` as `12.3%`.
pub trait PercentFormat {
    /// Returns `self * 100` rounded to `decimals` places followed by `%`, or `—` when there is no
    /// meaningful value.
    fn to_percent(&self, decimals: usize) -> String;
}

impl PercentFormat for f64 {
    fn to_percent(&self, decimals: usize) -> String {
        if !self.is_finite() {
            return "—".to_string();
        }
        format!("{:.*}%", decimals, self * 100.0)
    }
}

impl PercentFormat for Option<f64> {
    fn to_percent(&self, decimals: usize) -> String {
        match self {
            Some(value) => value.to_percent(decimals),
            None => "—".to_string(),
        }
    }
}

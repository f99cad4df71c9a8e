use crate::domain::Coordinate;

/// A single bay reading as reported by the realtime endpoint.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct SensorRow {
    pub zone: Option<String>,
    pub status: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub label: Option<String>,
}

impl SensorRow {
    pub fn is_unoccupied(&self) -> bool {
        self.status.eq_ignore_ascii_case("unoccupied")
    }

    /// The bay location, if both components are present and form a valid coordinate.
    pub fn coordinate(&self) -> Option<Coordinate> {
        let coordinate = Coordinate::new(self.latitude?, self.longitude?);
        coordinate.is_valid().then_some(coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn row(status: &str, latitude: Option<f64>, longitude: Option<f64>) -> SensorRow {
        SensorRow {
            zone: Some("12".to_string()),
            status: status.to_string(),
            latitude,
            longitude,
            label: None,
        }
    }

    #[rstest]
    #[case("Unoccupied", true)]
    #[case("unoccupied", true)]
    #[case("UNOCCUPIED", true)]
    #[case("Present", false)]
    #[case("Vacant", false)]
    #[case(" Unoccupied", false)]
    #[case("", false)]
    fn recognizes_free_bays(#[case] status: &str, #[case] expected: bool) {
        assert_eq!(row(status, None, None).is_unoccupied(), expected);
    }

    #[rstest]
    #[case(Some(-37.81), Some(144.96), Some(Coordinate::new(-37.81, 144.96)))]
    #[case(Some(-37.81), None, None)]
    #[case(None, Some(144.96), None)]
    #[case(Some(f64::NAN), Some(144.96), None)]
    #[case(Some(-137.81), Some(144.96), None)]
    fn coordinate_requires_a_valid_pair(#[case] latitude: Option<f64>, #[case] longitude: Option<f64>, #[case] expected: Option<Coordinate>) {
        assert_eq!(row("Present", latitude, longitude).coordinate(), expected);
    }
}

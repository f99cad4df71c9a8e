use crate::domain::Coordinate;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Inner {
            latitude: f64,
            longitude: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        let coordinate = Coordinate::new(inner.latitude, inner.longitude);
        if !coordinate.is_valid() {
            return Err(Error::custom(format!(
                "invalid location ({}, {}), latitude must be within [-90, 90] and longitude within [-180, 180]",
                coordinate.latitude, coordinate.longitude
            )));
        }

        Ok(coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn deserializes_a_valid_location() {
        let result = serde_json::from_value::<Coordinate>(json!({ "latitude": -37.8136, "longitude": 144.9631 })).unwrap();
        assert_eq!(result, Coordinate::new(-37.8136, 144.9631));
    }

    #[rstest]
    #[case::latitude_too_small(json!({ "latitude": -90.5, "longitude": 144.9631 }))]
    #[case::latitude_too_large(json!({ "latitude": 91.0, "longitude": 144.9631 }))]
    #[case::longitude_too_small(json!({ "latitude": -37.8136, "longitude": -181.0 }))]
    #[case::longitude_too_large(json!({ "latitude": -37.8136, "longitude": 180.1 }))]
    #[case::missing_longitude(json!({ "latitude": -37.8136 }))]
    #[case::non_numeric_latitude(json!({ "latitude": "north", "longitude": 144.9631 }))]
    fn fails_for_an_invalid_location(#[case] value: serde_json::Value) {
        let result = serde_json::from_value::<Coordinate>(value);
        assert!(result.is_err());
    }
}

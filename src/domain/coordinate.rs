const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS84 latitude/longitude pair in degrees.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate { latitude, longitude }
    }

    /// Returns `true` when both components are finite and within the WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance in meters using the haversine formula.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();
        let a = (d_lat / 2.0).sin().powi(2) + self.latitude.to_radians().cos() * other.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

        2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
    }

    pub fn maps_url(&self) -> String {
        format!("https://www.google.com/maps/dir/?api=1&destination={},{}", self.latitude, self.longitude)
    }
}

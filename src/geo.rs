/// Mean Earth radius in km (IUGG R1 for WGS-84).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Great-circle distance in km between two points given in degrees.
pub fn haversine_km(lat1_deg: f64, lon1_deg: f64, lat2_deg: f64, lon2_deg: f64) -> f64 {
    let lat1 = lat1_deg.to_radians();
    let lat2 = lat2_deg.to_radians();
    let dlat = (lat2_deg - lat1_deg).to_radians();
    let dlon = (lon2_deg - lon1_deg).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Parse a "lat,lon" pair. Returns None on malformed input.
pub fn parse_coordinates(coordinates: &str) -> Option<(f64, f64)> {
    let parts: Vec<_> = coordinates.split(',').map(|s| s.trim()).collect();
    if parts.len() != 2 {
        return None;
    }
    let lat = parts[0].parse().ok()?;
    let lon = parts[1].parse().ok()?;
    Some((lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_for_identical_points() {
        assert!(haversine_km(42.0, -71.0, 42.0, -71.0).abs() < 1e-9);
    }

    #[test]
    fn one_degree_along_the_equator() {
        // One degree of arc on the mean sphere is ~111.195 km
        let d = haversine_km(0.0, 0.0, 0.0, 1.0);
        assert!((d - 111.195).abs() < 0.01, "got {}", d);
    }

    #[test]
    fn antipodal_points_are_half_the_circumference() {
        let d = haversine_km(0.0, 0.0, 0.0, 180.0);
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((d - half_circumference).abs() < 0.5, "got {}", d);
    }

    #[test]
    fn distance_is_symmetric() {
        let forward = haversine_km(37.77, -122.42, 40.71, -74.01);
        let backward = haversine_km(40.71, -74.01, 37.77, -122.42);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn parses_valid_coordinate_pair() {
        assert_eq!(parse_coordinates("42.07, 28.35"), Some((42.07, 28.35)));
        assert_eq!(parse_coordinates("-90,180"), Some((-90.0, 180.0)));
    }

    #[test]
    fn rejects_malformed_coordinate_pairs() {
        assert_eq!(parse_coordinates("42.07"), None);
        assert_eq!(parse_coordinates("a,b"), None);
        assert_eq!(parse_coordinates("1,2,3"), None);
        assert_eq!(parse_coordinates(""), None);
    }
}

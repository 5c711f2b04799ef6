use crate::flights::types::{NearbyFlight, StateVector};
use crate::geo::haversine_km;

pub const DEFAULT_THRESHOLD_KM: f64 = 100.0;

/// Filter state vectors down to those within `threshold_km` of the
/// reference point. Distances are reported rounded to two decimals.
pub fn find_nearby(
    states: &[StateVector],
    latitude: f64,
    longitude: f64,
    threshold_km: f64,
) -> Vec<NearbyFlight> {
    states
        .iter()
        .filter_map(|state| {
            let distance_km = haversine_km(latitude, longitude, state.latitude, state.longitude);
            if distance_km > threshold_km {
                return None;
            }
            Some(NearbyFlight {
                callsign: state.callsign.clone(),
                latitude: state.latitude,
                longitude: state.longitude,
                altitude_m: state.altitude_m,
                velocity_m_s: state.velocity_m_s,
                heading_deg: state.heading_deg,
                distance_km: round_km(distance_km),
            })
        })
        .collect()
}

fn round_km(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

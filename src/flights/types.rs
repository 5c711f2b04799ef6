use serde::Serialize;
use utoipa::ToSchema;

/// One aircraft state vector from the upstream tracking API, reduced to
/// the fields the proximity search uses. States without a position are
/// dropped at parse time, so latitude and longitude are always present.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    pub callsign: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude_m: Option<f64>,
    pub velocity_m_s: Option<f64>,
    pub heading_deg: Option<f64>,
}

/// An aircraft within the proximity threshold of a reference point.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NearbyFlight {
    pub callsign: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocity_m_s: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_deg: Option<f64>,
    pub distance_km: f64,
}

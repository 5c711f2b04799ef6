use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::flights::error::OpenSkyError;
use crate::flights::types::StateVector;

pub const DEFAULT_API_URL: &str = "https://opensky-network.org/api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// Indices into the upstream state array:
// [icao24, callsign, origin_country, time_position, last_contact,
//  longitude, latitude, baro_altitude, on_ground, velocity, heading, ...]
const IDX_CALLSIGN: usize = 1;
const IDX_LONGITUDE: usize = 5;
const IDX_LATITUDE: usize = 6;
const IDX_BARO_ALTITUDE: usize = 7;
const IDX_VELOCITY: usize = 9;
const IDX_HEADING: usize = 10;

#[derive(Debug, Deserialize)]
struct StatesResponse {
    states: Option<Vec<Vec<Value>>>,
}

/// Client for the live aircraft state API. Credentials are optional;
/// anonymous access works with a lower rate limit.
pub struct OpenSkyClient {
    client: reqwest::Client,
    api_url: String,
    credentials: Option<(String, String)>,
}

impl OpenSkyClient {
    pub fn new(
        api_url: String,
        credentials: Option<(String, String)>,
    ) -> Result<Self, OpenSkyError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_url,
            credentials,
        })
    }

    /// Fetch all current aircraft state vectors. Individual malformed
    /// states are skipped; only transport and status failures surface.
    pub async fn states(&self) -> Result<Vec<StateVector>, OpenSkyError> {
        let url = format!("{}/states/all", self.api_url.trim_end_matches('/'));

        let mut request = self.client.get(&url);
        if let Some((username, password)) = &self.credentials {
            request = request.basic_auth(username, Some(password));
        }

        let response = request.send().await?;
        match response.status() {
            StatusCode::UNAUTHORIZED => return Err(OpenSkyError::Unauthorized),
            StatusCode::NOT_FOUND => return Err(OpenSkyError::EndpointNotFound(url)),
            StatusCode::TOO_MANY_REQUESTS => return Err(OpenSkyError::RateLimited),
            status if !status.is_success() => return Err(OpenSkyError::Status(status)),
            _ => {}
        }

        let payload: StatesResponse = response.json().await?;
        let raw_states = payload.states.ok_or(OpenSkyError::MissingStates)?;

        Ok(raw_states
            .iter()
            .filter_map(|raw| {
                let state = parse_state(raw);
                if state.is_none() {
                    log::debug!("Skipping state without a position: {:?}", raw.first());
                }
                state
            })
            .collect())
    }
}

/// Extract the fields of interest from one raw state array. Returns None
/// when either coordinate is missing or null.
fn parse_state(raw: &[Value]) -> Option<StateVector> {
    let latitude = raw.get(IDX_LATITUDE)?.as_f64()?;
    let longitude = raw.get(IDX_LONGITUDE)?.as_f64()?;

    let callsign = raw
        .get(IDX_CALLSIGN)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("Unknown")
        .to_string();

    Some(StateVector {
        callsign,
        latitude,
        longitude,
        altitude_m: raw.get(IDX_BARO_ALTITUDE).and_then(Value::as_f64),
        velocity_m_s: raw.get(IDX_VELOCITY).and_then(Value::as_f64),
        heading_deg: raw.get(IDX_HEADING).and_then(Value::as_f64),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_state(callsign: Value, lon: Value, lat: Value) -> Vec<Value> {
        vec![
            json!("abc123"),
            callsign,
            json!("Germany"),
            json!(1700000000),
            json!(1700000010),
            lon,
            lat,
            json!(10972.8),
            json!(false),
            json!(231.5),
            json!(82.3),
        ]
    }

    #[test]
    fn parses_a_complete_state() {
        let raw = raw_state(json!("DLH400  "), json!(8.55), json!(50.03));
        let state = parse_state(&raw).unwrap();
        assert_eq!(state.callsign, "DLH400");
        assert_eq!(state.latitude, 50.03);
        assert_eq!(state.longitude, 8.55);
        assert_eq!(state.altitude_m, Some(10972.8));
        assert_eq!(state.velocity_m_s, Some(231.5));
        assert_eq!(state.heading_deg, Some(82.3));
    }

    #[test]
    fn skips_states_without_coordinates() {
        assert!(parse_state(&raw_state(json!("DLH400"), json!(null), json!(50.03))).is_none());
        assert!(parse_state(&raw_state(json!("DLH400"), json!(8.55), json!(null))).is_none());
        assert!(parse_state(&[json!("abc123"), json!("DLH400")]).is_none());
    }

    #[test]
    fn normalizes_blank_and_null_callsigns() {
        let blank = parse_state(&raw_state(json!("   "), json!(8.55), json!(50.03))).unwrap();
        assert_eq!(blank.callsign, "Unknown");

        let null = parse_state(&raw_state(json!(null), json!(8.55), json!(50.03))).unwrap();
        assert_eq!(null.callsign, "Unknown");
    }

    #[test]
    fn missing_optional_fields_become_none() {
        let raw = vec![
            json!("abc123"),
            json!("DLH400"),
            json!("Germany"),
            json!(null),
            json!(null),
            json!(8.55),
            json!(50.03),
            json!(null),
        ];
        let state = parse_state(&raw).unwrap();
        assert_eq!(state.altitude_m, None);
        assert_eq!(state.velocity_m_s, None);
        assert_eq!(state.heading_deg, None);
    }

    #[test]
    fn states_response_tolerates_missing_states_field() {
        let payload: StatesResponse = serde_json::from_str(r#"{"time": 1700000000}"#).unwrap();
        assert!(payload.states.is_none());
    }
}

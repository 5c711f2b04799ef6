mod error;
mod nearby;
mod opensky;
mod types;

pub use error::OpenSkyError;
pub use nearby::{find_nearby, DEFAULT_THRESHOLD_KM};
pub use opensky::{OpenSkyClient, DEFAULT_API_URL};
pub use types::{NearbyFlight, StateVector};

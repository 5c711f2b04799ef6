use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// One observed balloon position from the constellation feed.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BalloonFix {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude_km: f64,
    pub observed_at: DateTime<Utc>,
}

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::balloons::error::FeedError;
use crate::balloons::types::BalloonFix;

pub const DEFAULT_FEED_URL: &str = "https://a.windbornesystems.com/treasure";

const FEED_TIMEOUT: Duration = Duration::from_secs(10);

// The feed rejects requests with a default library User-Agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Client for the hourly constellation feed. The feed publishes one JSON
/// file per trailing hour (`00.json` .. `23.json`), each an array of
/// `[latitude, longitude, altitude_km]` entries.
pub struct FeedClient {
    client: reqwest::Client,
    base_url: String,
    hours: u32,
}

impl FeedClient {
    pub fn new(base_url: String, hours: u32) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .timeout(FEED_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url,
            hours,
        })
    }

    /// Fetch the raw constellation snapshot for the trailing window.
    ///
    /// Failures are per-hour: a missing or malformed hourly file is logged
    /// and skipped, and the remaining hours are still fetched. A fully
    /// failed fetch yields an empty snapshot rather than an error.
    pub async fn snapshot(&self) -> Vec<BalloonFix> {
        let now = Utc::now();
        let mut fixes = Vec::new();

        for hour in 0..self.hours {
            let url = format!("{}/{:02}.json", self.base_url.trim_end_matches('/'), hour);
            match self.fetch_hour(&url).await {
                Ok(entries) => {
                    let observed_at = now - chrono::Duration::hours(hour as i64);
                    fixes.extend(parse_hour(&entries, observed_at, &url));
                }
                Err(e) => log::warn!("Skipping hour {:02}: {}", hour, e),
            }
        }

        fixes
    }

    async fn fetch_hour(&self, url: &str) -> Result<Vec<Value>, FeedError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                url: url.to_string(),
                status,
            });
        }

        let payload: Value = response.json().await.map_err(|e| FeedError::Malformed {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        match payload {
            Value::Array(entries) => Ok(entries),
            _ => Err(FeedError::Malformed {
                url: url.to_string(),
                message: "top-level value is not an array".to_string(),
            }),
        }
    }
}

fn parse_hour(entries: &[Value], observed_at: DateTime<Utc>, url: &str) -> Vec<BalloonFix> {
    entries
        .iter()
        .filter_map(|entry| match parse_entry(entry) {
            Some((latitude, longitude, altitude_km)) => Some(BalloonFix {
                latitude,
                longitude,
                altitude_km,
                observed_at,
            }),
            None => {
                log::debug!("Invalid entry in {}: {}", url, entry);
                None
            }
        })
        .collect()
}

/// A valid entry is an array of at least three numbers.
fn parse_entry(entry: &Value) -> Option<(f64, f64, f64)> {
    let parts = entry.as_array()?;
    if parts.len() < 3 {
        return None;
    }
    let lat = parts[0].as_f64()?;
    let lon = parts[1].as_f64()?;
    let alt = parts[2].as_f64()?;
    Some((lat, lon, alt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_a_numeric_triple() {
        let entry = json!([10.5, -20.25, 13.2]);
        assert_eq!(parse_entry(&entry), Some((10.5, -20.25, 13.2)));
    }

    #[test]
    fn extra_elements_are_ignored() {
        let entry = json!([1.0, 2.0, 3.0, "extra", 5]);
        assert_eq!(parse_entry(&entry), Some((1.0, 2.0, 3.0)));
    }

    #[test]
    fn rejects_short_or_non_numeric_entries() {
        assert_eq!(parse_entry(&json!([1.0, 2.0])), None);
        assert_eq!(parse_entry(&json!(["a", "b", "c"])), None);
        assert_eq!(parse_entry(&json!({"latitude": 1.0})), None);
        assert_eq!(parse_entry(&json!(null)), None);
    }

    #[test]
    fn parse_hour_skips_malformed_entries() {
        let entries = vec![
            json!([10.0, 20.0, 5.0]),
            json!([1.0]),
            json!("garbage"),
            json!([-45.0, 170.0, 18.7]),
        ];
        let fixes = parse_hour(&entries, Utc::now(), "test://00.json");
        assert_eq!(fixes.len(), 2);
        assert_eq!(fixes[0].latitude, 10.0);
        assert_eq!(fixes[1].longitude, 170.0);
    }

    #[test]
    fn parse_hour_stamps_every_fix_with_the_hour_timestamp() {
        let observed_at = Utc::now();
        let entries = vec![json!([0.0, 0.0, 1.0]), json!([1.0, 1.0, 2.0])];
        let fixes = parse_hour(&entries, observed_at, "test://01.json");
        assert!(fixes.iter().all(|f| f.observed_at == observed_at));
    }
}

//! Geolocation providers.

use std::time::Duration;

use serde::Deserialize;

use super::{GeoError, Geolocator};

/// Default endpoint returning the caller's approximate position as JSON.
pub const DEFAULT_GEOLOCATION_URL: &str = "https://ipapi.co/json/";

/// Timeout for the HTTP position lookup.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(8);

/// Timeout for the connectivity probe.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Coordinates as returned by common IP geolocation services.
///
/// Accepts both `latitude`/`longitude` (ipapi.co) and `lat`/`lon` (ip-api.com).
#[derive(Debug, Deserialize)]
struct PositionPayload {
    /// Latitude in decimal degrees.
    #[serde(alias = "lat")]
    latitude: Option<f64>,
    /// Longitude in decimal degrees.
    #[serde(alias = "lon")]
    longitude: Option<f64>,
}

/// What: Extract coordinates from a geolocation JSON body.
///
/// Inputs:
/// - `body`: Parsed JSON response
///
/// Output:
/// - `(latitude, longitude)` when both are present and in range
///
/// # Errors
/// - `GeoError::PositionUnavailable` when fields are missing or out of range
pub(crate) fn parse_position(body: serde_json::Value) -> Result<(f64, f64), GeoError> {
    let payload: PositionPayload = serde_json::from_value(body)
        .map_err(|e| GeoError::PositionUnavailable(format!("unexpected response: {e}")))?;
    match (payload.latitude, payload.longitude) {
        (Some(lat), Some(lon))
            if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) =>
        {
            Ok((lat, lon))
        }
        (Some(_), Some(_)) => Err(GeoError::PositionUnavailable(
            "coordinates out of range".to_string(),
        )),
        _ => Err(GeoError::PositionUnavailable(
            "response has no coordinates".to_string(),
        )),
    }
}

/// Approximate position from an IP geolocation HTTP service.
#[derive(Debug, Clone)]
pub struct IpGeolocator {
    /// Endpoint queried with a plain GET.
    url: String,
}

impl IpGeolocator {
    /// Create a locator for `url`, or the default endpoint when `url` is empty.
    #[must_use]
    pub fn new(url: String) -> Self {
        let url = if url.trim().is_empty() {
            DEFAULT_GEOLOCATION_URL.to_string()
        } else {
            url
        };
        Self { url }
    }

    /// Endpoint this locator queries.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// What: Check whether `url` answers at all.
///
/// Output:
/// - `true` for any HTTP response (even an error status); `false` on transport failure
///
/// Details:
/// - Drives the dashboard's online/offline status line
pub async fn probe_connectivity(url: &str) -> bool {
    let Ok(client) = reqwest::Client::builder()
        .timeout(PROBE_TIMEOUT)
        .user_agent(concat!("suraksha/", env!("CARGO_PKG_VERSION")))
        .build()
    else {
        return false;
    };
    match client.head(url).send().await {
        Ok(resp) => {
            tracing::trace!(url, status = %resp.status(), "connectivity probe answered");
            true
        }
        Err(e) => {
            tracing::debug!(url, error = %e, "connectivity probe failed");
            false
        }
    }
}

#[async_trait::async_trait]
impl Geolocator for IpGeolocator {
    async fn current_position(&self) -> Result<(f64, f64), GeoError> {
        let client = reqwest::Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .user_agent(concat!("suraksha/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeoError::PositionUnavailable(e.to_string()))?;
        tracing::debug!(url = %self.url, "requesting position");
        let resp = client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| GeoError::PositionUnavailable(e.to_string()))?;
        let status = resp.status();
        if status == reqwest::StatusCode::FORBIDDEN || status == reqwest::StatusCode::UNAUTHORIZED
        {
            return Err(GeoError::PermissionDenied);
        }
        if !status.is_success() {
            return Err(GeoError::PositionUnavailable(format!("HTTP {status}")));
        }
        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| GeoError::PositionUnavailable(e.to_string()))?;
        parse_position(body)
    }
}

/// Position taken from configuration.
#[derive(Debug, Clone, Copy)]
pub struct FixedGeolocator {
    /// Latitude in decimal degrees.
    latitude: f64,
    /// Longitude in decimal degrees.
    longitude: f64,
}

impl FixedGeolocator {
    /// Create a locator that always reports `(latitude, longitude)`.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[async_trait::async_trait]
impl Geolocator for FixedGeolocator {
    async fn current_position(&self) -> Result<(f64, f64), GeoError> {
        Ok((self.latitude, self.longitude))
    }
}

/// Locator used when geolocation is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedGeolocator;

#[async_trait::async_trait]
impl Geolocator for DeniedGeolocator {
    async fn current_position(&self) -> Result<(f64, f64), GeoError> {
        Err(GeoError::PermissionDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_payload_shapes() {
        let ipapi = serde_json::json!({"latitude": 19.0728, "longitude": 72.8826, "city": "Mumbai"});
        assert_eq!(parse_position(ipapi), Ok((19.0728, 72.8826)));
        let ip_api = serde_json::json!({"status": "success", "lat": 12.97, "lon": 77.59});
        assert_eq!(parse_position(ip_api), Ok((12.97, 77.59)));
    }

    #[test]
    fn rejects_missing_or_invalid_coordinates() {
        assert!(matches!(
            parse_position(serde_json::json!({"error": true, "reason": "RateLimited"})),
            Err(GeoError::PositionUnavailable(_))
        ));
        assert!(matches!(
            parse_position(serde_json::json!({"latitude": 123.0, "longitude": 0.0})),
            Err(GeoError::PositionUnavailable(_))
        ));
        assert!(matches!(
            parse_position(serde_json::json!({"latitude": "north"})),
            Err(GeoError::PositionUnavailable(_))
        ));
    }

    #[test]
    fn empty_url_uses_default_endpoint() {
        assert_eq!(IpGeolocator::new(String::new()).url, DEFAULT_GEOLOCATION_URL);
        assert_eq!(
            IpGeolocator::new("http://localhost/geo".to_string()).url,
            "http://localhost/geo"
        );
    }

    #[tokio::test]
    async fn fixed_and_denied_locators() {
        assert_eq!(
            FixedGeolocator::new(19.07, 72.87).current_position().await,
            Ok((19.07, 72.87))
        );
        assert_eq!(
            DeniedGeolocator.current_position().await,
            Err(GeoError::PermissionDenied)
        );
    }

    #[tokio::test]
    async fn probe_reports_unreachable_endpoint() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().expect("addr").port();
        drop(listener);
        assert!(!probe_connectivity(&format!("http://127.0.0.1:{port}/")).await);
    }
}

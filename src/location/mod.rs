//! Location registry: known places and the current selection.
//!
//! The selection is a display value only. It is never persisted and no
//! reverse geocoding happens; a device position is shown as raw coordinates.

use std::fmt;

use crate::platform::{GeoError, Geolocator};

/// Places offered by the selector, in display order.
const KNOWN_PLACES: [&str; 15] = [
    "Mumbai, Maharashtra",
    "Delhi, NCT",
    "Bangalore, Karnataka",
    "Chennai, Tamil Nadu",
    "Hyderabad, Telangana",
    "Pune, Maharashtra",
    "Kolkata, West Bengal",
    "Ahmedabad, Gujarat",
    "Jaipur, Rajasthan",
    "Lucknow, Uttar Pradesh",
    "Kochi, Kerala",
    "Coimbatore, Tamil Nadu",
    "Mysore, Karnataka",
    "Thiruvananthapuram, Kerala",
    "Vijayawada, Andhra Pradesh",
];

/// The fixed, ordered list of selectable places.
#[must_use]
pub const fn known_places() -> &'static [&'static str] {
    &KNOWN_PLACES
}

/// Currently selected location.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LocationSelection {
    /// Nothing chosen yet.
    #[default]
    Unset,
    /// A place picked by name.
    Named(String),
    /// Coordinates from the device.
    Current {
        /// Latitude in decimal degrees.
        latitude: f64,
        /// Longitude in decimal degrees.
        longitude: f64,
    },
}

impl LocationSelection {
    /// Whether anything is selected.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }
}

impl fmt::Display for LocationSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => Ok(()),
            Self::Named(place) => f.write_str(place),
            Self::Current {
                latitude,
                longitude,
            } => write!(f, "Current Location ({latitude:.2}, {longitude:.2})"),
        }
    }
}

/// Selection plus the state of an outstanding position request.
#[derive(Debug, Clone, Default)]
pub struct LocationContext {
    /// What is shown as the user's location.
    selection: LocationSelection,
    /// A device position request is running.
    in_flight: bool,
}

impl LocationContext {
    /// Current selection.
    #[must_use]
    pub const fn selection(&self) -> &LocationSelection {
        &self.selection
    }

    /// Whether a position request is outstanding.
    #[must_use]
    pub const fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Replace the selection with a named place.
    pub fn select_named(&mut self, place: impl Into<String>) {
        self.selection = LocationSelection::Named(place.into());
        self.in_flight = false;
    }

    /// What: Step to the next known place.
    ///
    /// Output:
    /// - The place now selected
    ///
    /// Details:
    /// - From a non-named selection (or an unknown name) starts at the first place; wraps at the end
    pub fn next_place(&mut self) -> &'static str {
        let places = known_places();
        let next = match &self.selection {
            LocationSelection::Named(current) => places
                .iter()
                .position(|p| p == current)
                .map_or(0, |i| (i + 1) % places.len()),
            _ => 0,
        };
        let place = places[next];
        self.select_named(place);
        place
    }

    /// What: Mark a position request as started.
    ///
    /// Output:
    /// - `false` when one is already running (the caller should not start another)
    pub const fn begin_position_request(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// What: Apply the outcome of a position request.
    ///
    /// Inputs:
    /// - `result`: Coordinates or the failure
    ///
    /// Output:
    /// - The new selection on success; the error unchanged on failure
    ///
    /// # Errors
    /// - Returns `result`'s `GeoError`; the previous selection is kept
    pub fn apply_position(
        &mut self,
        result: Result<(f64, f64), GeoError>,
    ) -> Result<LocationSelection, GeoError> {
        self.in_flight = false;
        match result {
            Ok((latitude, longitude)) => {
                self.selection = LocationSelection::Current {
                    latitude,
                    longitude,
                };
                tracing::info!(latitude, longitude, "using current location");
                Ok(self.selection.clone())
            }
            Err(e) => {
                tracing::warn!(error = %e, "location access failed");
                Err(e)
            }
        }
    }

    /// What: Ask the geolocator once and store the result.
    ///
    /// Inputs:
    /// - `geolocator`: Position source
    ///
    /// Output:
    /// - `Current` selection on success
    ///
    /// # Errors
    /// - `GeoError::PermissionDenied` or `GeoError::PositionUnavailable`; the
    ///   previous selection is kept and no retry happens
    pub async fn request_current_position(
        &mut self,
        geolocator: &dyn Geolocator,
    ) -> Result<LocationSelection, GeoError> {
        self.in_flight = true;
        let result = geolocator.current_position().await;
        self.apply_position(result)
    }
}

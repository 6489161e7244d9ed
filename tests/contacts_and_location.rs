//! Emergency directory, dialing and location selection.

use std::sync::Mutex;

use suraksha::contacts::{self, EmergencyContact};
use suraksha::location::{LocationContext, LocationSelection, known_places};
use suraksha::platform::{DeniedGeolocator, Dialer, FixedGeolocator, GeoError};

#[derive(Default)]
struct RecordingDialer(Mutex<Vec<String>>);

impl Dialer for RecordingDialer {
    fn dial(&self, number: &str) {
        self.0.lock().expect("lock").push(number.to_string());
    }
}

#[test]
fn dialing_ambulance_passes_102() {
    let dialer = RecordingDialer::default();
    let ambulance: &EmergencyContact = contacts::contacts()
        .iter()
        .find(|c| c.service.starts_with("Ambulance"))
        .expect("ambulance listed");
    contacts::dial(ambulance, &dialer);
    assert_eq!(*dialer.0.lock().expect("lock"), vec!["102".to_string()]);
}

#[test]
fn national_number_heads_the_directory() {
    assert_eq!(
        contacts::contacts().first().map(|c| c.number),
        Some(contacts::NATIONAL_EMERGENCY_NUMBER)
    );
}

#[tokio::test]
async fn device_position_is_displayed_with_coordinates() {
    let mut ctx = LocationContext::default();
    let selection = ctx
        .request_current_position(&FixedGeolocator::new(19.07, 72.87))
        .await
        .expect("position");
    let shown = selection.to_string();
    assert!(shown.contains("19.07"));
    assert!(shown.contains("72.87"));
    assert!(!ctx.in_flight());
}

#[tokio::test]
async fn denied_position_keeps_named_place() {
    let mut ctx = LocationContext::default();
    ctx.select_named(known_places()[1]);
    let err = ctx
        .request_current_position(&DeniedGeolocator)
        .await
        .expect_err("denied");
    assert_eq!(err, GeoError::PermissionDenied);
    assert_eq!(
        ctx.selection(),
        &LocationSelection::Named(known_places()[1].to_string())
    );
}

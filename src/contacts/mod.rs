//! Static emergency information: the national helpline directory and the
//! dashboard headlines.

mod headlines;

pub use headlines::{COLLAPSED_HEADLINES, Headline, Severity, headlines, visible_headlines};

use crate::platform::Dialer;

/// One emergency service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmergencyContact {
    /// Service name as listed.
    pub service: &'static str,
    /// Number to dial.
    pub number: &'static str,
    /// Short description.
    pub description: &'static str,
}

/// Directory of Indian emergency services, in display order.
const DIRECTORY: [EmergencyContact; 11] = [
    EmergencyContact {
        service: "All Emergencies",
        number: "112",
        description: "National Emergency Number",
    },
    EmergencyContact {
        service: "Police",
        number: "100",
        description: "Police Emergency",
    },
    EmergencyContact {
        service: "Fire Department",
        number: "101",
        description: "Fire Emergency",
    },
    EmergencyContact {
        service: "Ambulance / Medical",
        number: "102",
        description: "Medical Emergency",
    },
    EmergencyContact {
        service: "Women Helpline",
        number: "1091",
        description: "Women in Distress",
    },
    EmergencyContact {
        service: "Child Helpline",
        number: "1098",
        description: "Child in Need",
    },
    EmergencyContact {
        service: "Disaster Management (NDMA)",
        number: "108",
        description: "Natural Disasters",
    },
    EmergencyContact {
        service: "Senior Citizens Helpline",
        number: "14567",
        description: "Elderly Support",
    },
    EmergencyContact {
        service: "Cyber Crime",
        number: "1930",
        description: "Online Crime Reporting",
    },
    EmergencyContact {
        service: "Railway Emergency",
        number: "139",
        description: "Railway Accidents",
    },
    EmergencyContact {
        service: "Traffic Helpline",
        number: "103",
        description: "Traffic Issues",
    },
];

/// Number behind the prominent "Call 112" action.
pub const NATIONAL_EMERGENCY_NUMBER: &str = "112";

/// Translation keys of the safety tips shown under the directory.
pub const TIP_KEYS: [&str; 5] = [
    "contacts.tips.charged",
    "contacts.tips.location",
    "contacts.tips.calm",
    "contacts.tips.documents",
    "contacts.tips.responders",
];

/// The whole directory.
#[must_use]
pub const fn contacts() -> &'static [EmergencyContact] {
    &DIRECTORY
}

/// The "All Emergencies" entry, dialed by the page's Call 112 action.
#[must_use]
pub const fn national() -> &'static EmergencyContact {
    &DIRECTORY[0]
}

/// What: Look up a contact by the start of its service name.
///
/// Inputs:
/// - `service_prefix`: Case-insensitive prefix, e.g. `"ambulance"`
///
/// Output:
/// - First matching contact in directory order, if any
#[must_use]
pub fn find(service_prefix: &str) -> Option<&'static EmergencyContact> {
    let needle = service_prefix.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    DIRECTORY
        .iter()
        .find(|c| c.service.to_lowercase().starts_with(&needle))
}

/// What: Ask the telephony capability to call a contact.
///
/// Inputs:
/// - `contact`: Directory entry
/// - `dialer`: Telephony capability
///
/// Details:
/// - Fire-and-forget; the literal number is passed through unchanged
pub fn dial(contact: &EmergencyContact, dialer: &dyn Dialer) {
    tracing::info!(service = contact.service, number = contact.number, "dialing");
    dialer.dial(contact.number);
}

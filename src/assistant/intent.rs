//! Intent categories and keyword classification.

use std::fmt;

/// Bucket a user message is routed to before a response is chosen.
///
/// Declaration order is the classification priority: when a message matches
/// keywords of several categories, the earliest category wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IntentCategory {
    /// First aid and medical emergencies.
    Medical,
    /// Legal rights, police interactions, harassment.
    Legal,
    /// Helpline and emergency phone numbers.
    EmergencyContacts,
    /// Fire, flood, earthquake and other disaster response.
    EmergencyResponse,
    /// Rumor and news verification.
    FactCheck,
    /// Anything that matched no other category.
    General,
}

/// Categories that own a keyword list, in priority order. `General` is the
/// catch-all and has no entry.
const KEYWORD_TABLE: [(IntentCategory, &[&str]); 5] = [
    (
        IntentCategory::Medical,
        &["first aid", "medical", "bleeding", "emergency", "ambulance"],
    ),
    (
        IntentCategory::Legal,
        &["police", "rights", "legal", "arrest", "harassment"],
    ),
    (
        IntentCategory::EmergencyContacts,
        &["contact", "helpline", "number", "call"],
    ),
    (
        IntentCategory::EmergencyResponse,
        &["fire", "flood", "earthquake", "disaster"],
    ),
    (IntentCategory::FactCheck, &["fact", "news", "rumor", "verify"]),
];

impl IntentCategory {
    /// All categories in priority order.
    pub const ALL: [Self; 6] = [
        Self::Medical,
        Self::Legal,
        Self::EmergencyContacts,
        Self::EmergencyResponse,
        Self::FactCheck,
        Self::General,
    ];

    /// Human-readable label shown on assistant message badges.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Medical => "Medical",
            Self::Legal => "Legal",
            Self::EmergencyContacts => "Emergency Contacts",
            Self::EmergencyResponse => "Emergency Response",
            Self::FactCheck => "Fact Check",
            Self::General => "General",
        }
    }

    /// Keywords that route a message to this category (empty for `General`).
    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        KEYWORD_TABLE
            .iter()
            .find(|(category, _)| *category == self)
            .map_or(&[], |(_, words)| *words)
    }
}

impl fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What: Classify free text into exactly one intent category.
///
/// Inputs:
/// - `text`: Raw user message, any case
///
/// Output:
/// - First category (in priority order) with a keyword contained in the
///   lower-cased text; `General` when nothing matches
///
/// Details:
/// - Pure substring test: "firefighter" matches `fire`, "recall" matches `call`
pub fn classify(text: &str) -> IntentCategory {
    let lower = text.to_lowercase();
    let category = KEYWORD_TABLE
        .iter()
        .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
        .map_or(IntentCategory::General, |(category, _)| *category);
    tracing::trace!(category = %category, "classified message");
    category
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_each_category() {
        assert_eq!(classify("need FIRST AID now"), IntentCategory::Medical);
        assert_eq!(classify("Was I under arrest?"), IntentCategory::Legal);
        assert_eq!(classify("women helpline please"), IntentCategory::EmergencyContacts);
        assert_eq!(classify("Earthquake!"), IntentCategory::EmergencyResponse);
        assert_eq!(classify("is this rumor true"), IntentCategory::FactCheck);
        assert_eq!(classify("hello there"), IntentCategory::General);
        assert_eq!(classify(""), IntentCategory::General);
    }

    #[test]
    fn earlier_category_wins_on_overlap() {
        assert_eq!(classify("bleeding, called police"), IntentCategory::Medical);
        // "emergency numbers" hits Medical's "emergency" before Contacts' "number".
        assert_eq!(classify("emergency numbers"), IntentCategory::Medical);
        assert_eq!(classify("police rights"), IntentCategory::Legal);
        assert_eq!(classify("call about the flood"), IntentCategory::EmergencyContacts);
    }

    #[test]
    fn is_deterministic() {
        let inputs = ["🐍 Snake Bite", "Fire in kitchen", "verify this news", "?"];
        for input in inputs {
            let first = classify(input);
            for _ in 0..5 {
                assert_eq!(classify(input), first);
            }
        }
    }

    #[test]
    fn general_has_no_keywords() {
        assert!(IntentCategory::General.keywords().is_empty());
        assert!(IntentCategory::Medical.keywords().contains(&"bleeding"));
    }
}

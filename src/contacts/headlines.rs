//! Emergency headlines shown on the dashboard.

/// How urgent a headline is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Immediate danger.
    High,
    /// Local incident.
    Medium,
    /// Advisory.
    Low,
}

/// A single headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Headline {
    /// Headline text.
    pub text: &'static str,
    /// Urgency.
    pub severity: Severity,
}

/// Number of headlines shown while the panel is collapsed.
pub const COLLAPSED_HEADLINES: usize = 3;

const HEADLINES: [Headline; 5] = [
    Headline {
        text: "⚠️ Red alert in Assam due to heavy rainfall – NDMA",
        severity: Severity::High,
    },
    Headline {
        text: "🔥 Fire incident reported in Chennai market, no casualties",
        severity: Severity::Medium,
    },
    Headline {
        text: "🚧 Section 144 imposed in Old Delhi till 6 PM today",
        severity: Severity::Medium,
    },
    Headline {
        text: "🦠 Heat wave warning issued for Rajasthan and Gujarat",
        severity: Severity::High,
    },
    Headline {
        text: "📢 Traffic advisory: Major roads closed due to VIP movement in Mumbai",
        severity: Severity::Low,
    },
];

/// All headlines, most important first.
#[must_use]
pub const fn headlines() -> &'static [Headline] {
    &HEADLINES
}

/// Headlines visible for the given panel state.
#[must_use]
pub fn visible_headlines(expanded: bool) -> &'static [Headline] {
    if expanded {
        &HEADLINES
    } else {
        &HEADLINES[..COLLAPSED_HEADLINES]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_panel_shows_first_three() {
        assert_eq!(visible_headlines(false).len(), 3);
        assert_eq!(visible_headlines(true).len(), 5);
        assert_eq!(visible_headlines(false)[0].severity, Severity::High);
    }
}

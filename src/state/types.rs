//! Core value types used by Suraksha state.

/// Top-level pages reachable from the navbar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`; redirects to the dashboard on arrival.
    Landing,
    /// `/dashboard`
    #[default]
    Dashboard,
    /// `/emergency`
    Emergency,
    /// `/ai-assistant`
    Assistant,
    /// Any other path.
    NotFound(String),
}

impl Route {
    /// Pages shown in the navbar, in order.
    pub const NAV: [Self; 3] = [Self::Dashboard, Self::Emergency, Self::Assistant];

    /// What: Parse a location path into a route.
    ///
    /// Details:
    /// - Trailing slashes and surrounding whitespace are ignored; matching is exact otherwise
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        match normalized {
            "" => Self::Landing,
            "/dashboard" => Self::Dashboard,
            "/emergency" => Self::Emergency,
            "/ai-assistant" => Self::Assistant,
            _ => Self::NotFound(trimmed.to_string()),
        }
    }

    /// Path this route was parsed from.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Landing => "/",
            Self::Dashboard => "/dashboard",
            Self::Emergency => "/emergency",
            Self::Assistant => "/ai-assistant",
            Self::NotFound(p) => p,
        }
    }

    /// Translation key of the navbar label.
    #[must_use]
    pub const fn nav_key(&self) -> &'static str {
        match self {
            Self::Landing => "nav.home",
            Self::Dashboard | Self::NotFound(_) => "nav.dashboard",
            Self::Emergency => "nav.emergency",
            Self::Assistant => "nav.assistant",
        }
    }

    /// Navbar neighbour; `forward` moves right. Off-navbar routes start from the dashboard.
    #[must_use]
    pub fn cycle(&self, forward: bool) -> Self {
        let len = Self::NAV.len();
        let idx = Self::NAV.iter().position(|r| r == self);
        let next = match (idx, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, _) => 0,
        };
        Self::NAV[next].clone()
    }
}

/// Data carried into a page on navigation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NavPayload {
    /// Plain navigation.
    #[default]
    None,
    /// Send this prompt to the assistant on arrival.
    Prompt(String),
    /// Start voice input on arrival.
    VoiceMode,
}

/// Quick emergency action tiles on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    /// House fire.
    Fire,
    /// Flood zone.
    Flood,
    /// Bleeding / first aid.
    Medical,
    /// Harassment / legal rights.
    Police,
}

impl QuickAction {
    /// Tiles in display order.
    pub const ALL: [Self; 4] = [Self::Fire, Self::Flood, Self::Medical, Self::Police];

    const fn slug(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Flood => "flood",
            Self::Medical => "medical",
            Self::Police => "police",
        }
    }

    /// Tile icon.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Fire => "🔥",
            Self::Flood => "🌊",
            Self::Medical => "🏥",
            Self::Police => "👮",
        }
    }

    /// Translation key of the tile title.
    #[must_use]
    pub fn title_key(self) -> String {
        format!("dashboard.quick.{}.title", self.slug())
    }

    /// Translation key of the prompt sent to the assistant.
    #[must_use]
    pub fn prompt_key(self) -> String {
        format!("dashboard.quick.{}.prompt", self.slug())
    }
}

/// Selectable entries on the dashboard, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardItem {
    /// A quick action tile.
    Quick(QuickAction),
    /// Open the assistant in voice mode.
    VoiceAssistant,
    /// Open the assistant.
    StartChat,
    /// Open the emergency contacts.
    EmergencyContacts,
}

impl DashboardItem {
    /// Focus order.
    pub const ALL: [Self; 7] = [
        Self::Quick(QuickAction::Fire),
        Self::Quick(QuickAction::Flood),
        Self::Quick(QuickAction::Medical),
        Self::Quick(QuickAction::Police),
        Self::VoiceAssistant,
        Self::StartChat,
        Self::EmergencyContacts,
    ];
}

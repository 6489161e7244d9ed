//! Modal dialog state for the UI.

/// Blocking overlay drawn above the active page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    /// No modal is shown.
    #[default]
    None,
    /// Informational alert; dismissed with Enter or Esc.
    Alert {
        /// Text shown in the alert body.
        message: String,
    },
    /// Keyboard shortcut overview; dismissed with Enter, Esc or the help key.
    Help,
}

impl Modal {
    /// Whether a modal currently captures input.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

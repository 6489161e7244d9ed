//! Dial intents handed to the desktop's URI handler.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::Dialer;

/// URI openers probed in order.
const OPENERS: [&str; 2] = ["xdg-open", "open"];

/// What: Build the `tel:` URI for a number.
///
/// Inputs:
/// - `number`: Digits as listed in the directory
///
/// Output:
/// - `tel:<number>` with whitespace removed
#[must_use]
pub fn tel_uri(number: &str) -> String {
    let digits: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}

/// Dialer that opens `tel:` URIs, or only logs when no opener exists.
#[derive(Debug, Clone, Default)]
pub struct UriDialer {
    /// Resolved `xdg-open`/`open`, if any.
    opener: Option<PathBuf>,
}

impl UriDialer {
    /// Use the first URI opener found on `PATH`.
    #[must_use]
    pub fn detect() -> Self {
        let opener = OPENERS.iter().find_map(|name| which::which(name).ok());
        if opener.is_none() {
            tracing::info!("no URI opener found; dial requests will only be logged");
        }
        Self { opener }
    }

    /// Never launch anything; dial requests are logged.
    #[must_use]
    pub const fn log_only() -> Self {
        Self { opener: None }
    }
}

impl Dialer for UriDialer {
    fn dial(&self, number: &str) {
        let uri = tel_uri(number);
        let Some(opener) = self.opener.as_ref() else {
            tracing::info!(uri = %uri, "dial requested (no handler)");
            return;
        };
        match Command::new(opener)
            .arg(&uri)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(_) => tracing::info!(uri = %uri, opener = %opener.display(), "dial intent sent"),
            Err(e) => tracing::warn!(uri = %uri, error = %e, "failed to launch URI opener"),
        }
    }
}

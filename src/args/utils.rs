//! Shared utilities for argument processing.

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level` argument.
/// - `RUST_LOG`, when set, still wins (handled by the subscriber setup).
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Args;

    #[test]
    fn verbose_wins_over_log_level() {
        let mut args = Args {
            log_level: "warn".to_string(),
            ..Args::default()
        };
        assert_eq!(determine_log_level(&args), "warn");
        args.verbose = true;
        assert_eq!(determine_log_level(&args), "debug");
    }
}

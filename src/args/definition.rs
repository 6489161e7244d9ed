//! Command-line argument definition and processing.

use clap::Parser;

/// Suraksha Sahayak - a voice-first, multilingual emergency assistant for the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "suraksha")]
#[command(version)]
#[command(about = "A voice-first, multilingual emergency assistant for the terminal", long_about = None)]
pub struct Args {
    /// Display language (en, hi, ta, te, kn or a language name)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Ask the assistant once, print its category and answer, and exit
    #[arg(short, long, value_name = "TEXT")]
    pub ask: Option<String>,

    /// Print the emergency contacts directory and exit
    #[arg(short, long)]
    pub contacts: bool,

    /// Start on the given page (e.g. /emergency, /ai-assistant)
    #[arg(long, value_name = "PATH")]
    pub route: Option<String>,

    /// Speak assistant replies aloud for this session
    #[arg(long)]
    pub voice_output: bool,
}

/// What: Handle the command-line only modes.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - `true` when a one-shot mode ran and the TUI should not start.
///
/// Details:
/// - `--contacts` prints the directory, `--ask` prints one routed answer.
/// - Both may be combined; the directory is printed first.
pub fn process_args(args: &Args) -> bool {
    let mut handled = false;
    if args.contacts {
        print!("{}", super::contacts::format_directory());
        handled = true;
    }
    if let Some(question) = &args.ask {
        tracing::info!(chars = question.chars().count(), "one-shot question from CLI");
        print!("{}", super::ask::format_answer(question));
        handled = true;
    }
    handled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::parse_from([
            "suraksha",
            "--language",
            "hi",
            "--route",
            "/emergency",
            "--voice-output",
            "-v",
        ]);
        assert_eq!(args.language.as_deref(), Some("hi"));
        assert_eq!(args.route.as_deref(), Some("/emergency"));
        assert!(args.voice_output);
        assert!(args.verbose);
        assert!(!process_args(&args));
    }

    #[test]
    fn one_shot_modes_skip_the_tui() {
        let args = Args::parse_from(["suraksha", "--ask", "earthquake"]);
        assert!(process_args(&args));
        let args = Args::parse_from(["suraksha", "--contacts"]);
        assert!(process_args(&args));
    }
}

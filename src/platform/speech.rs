//! Speech recognition and synthesis backed by external programs.

use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::{Mutex, PoisonError};

use super::{SpeechError, SpeechRecognizer, SpeechSynthesizer};

/// Environment variable carrying the expected locale to recognizer commands.
pub const LOCALE_ENV: &str = "SURAKSHA_SPEECH_LOCALE";

/// Placeholder replaced by the locale in configured command arguments.
const LOCALE_PLACEHOLDER: &str = "{locale}";

/// Synthesizers probed in order when none is configured.
const SYNTHESIZER_CANDIDATES: [&str; 3] = ["espeak-ng", "espeak", "spd-say"];

/// What: Remove emoji and markdown emphasis so text reads naturally when spoken.
///
/// Inputs:
/// - `text`: Assistant reply as displayed
///
/// Output:
/// - Text without pictographs, joiners, variation selectors or `**` markers,
///   each line trimmed and blank lines dropped
#[must_use]
pub fn strip_decorative_symbols(text: &str) -> String {
    text.replace("**", "")
        .lines()
        .map(|line| {
            line.chars()
                .filter(|c| !is_decorative(*c))
                .collect::<String>()
                .trim()
                .to_string()
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whether `c` is a pictograph or an emoji modifier.
const fn is_decorative(c: char) -> bool {
    matches!(
        c as u32,
        0x1F000..=0x1FAFF      // emoji, pictographs, flags
            | 0x2600..=0x27BF  // misc symbols, dingbats (incl. ♂ ⚖ ⚠ ⚡ ✅)
            | 0x2B00..=0x2BFF  // arrows, stars
            | 0xFE00..=0xFE0F  // variation selectors
            | 0x200D           // zero width joiner
            | 0xE0020..=0xE007F // tag characters
    )
}

/// What: Split a configured command line into program and arguments.
///
/// Inputs:
/// - `line`: Whitespace-separated command line from settings
///
/// Output:
/// - `Some((program, args))`, or `None` when the line is blank
fn split_command_line(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace().map(str::to_string);
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Language part of a BCP-47 tag (`hi-IN` -> `hi`).
fn language_of(locale: &str) -> &str {
    locale.split(['-', '_']).next().unwrap_or(locale)
}

/// Recognizer running an external command once per request.
///
/// The command's standard output is the transcript. The expected locale is
/// passed through `SURAKSHA_SPEECH_LOCALE` and substituted for `{locale}` in
/// arguments.
#[derive(Debug, Clone)]
pub struct CommandRecognizer {
    /// Resolved executable path.
    program: PathBuf,
    /// Arguments as configured.
    args: Vec<String>,
}

impl CommandRecognizer {
    /// What: Build a recognizer from the `speech_recognizer_command` setting.
    ///
    /// Inputs:
    /// - `line`: Configured command line (may be empty)
    ///
    /// Output:
    /// - `Some(CommandRecognizer)` when the program resolves on `PATH`; `None` otherwise
    #[must_use]
    pub fn from_command_line(line: &str) -> Option<Self> {
        let (program, args) = split_command_line(line)?;
        match which::which(&program) {
            Ok(path) => Some(Self {
                program: path,
                args,
            }),
            Err(e) => {
                tracing::warn!(program = %program, error = %e, "speech recognizer not found");
                None
            }
        }
    }

    /// Arguments with `{locale}` substituted.
    fn args_for(&self, locale: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.replace(LOCALE_PLACEHOLDER, locale))
            .collect()
    }
}

impl SpeechRecognizer for CommandRecognizer {
    fn is_available(&self) -> bool {
        true
    }

    fn recognize(&self, locale: &str) -> Result<String, SpeechError> {
        tracing::debug!(program = %self.program.display(), locale, "starting recognition");
        let output = Command::new(&self.program)
            .args(self.args_for(locale))
            .env(LOCALE_ENV, locale)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| SpeechError::Recognition(e.to_string()))?;
        if !output.status.success() {
            let stderr = strip_ansi_escapes::strip_str(String::from_utf8_lossy(&output.stderr));
            return Err(SpeechError::Recognition(format!(
                "{}: {}",
                output.status,
                stderr.trim()
            )));
        }
        let transcript = strip_ansi_escapes::strip_str(String::from_utf8_lossy(&output.stdout));
        let transcript = transcript.trim();
        if transcript.is_empty() {
            return Err(SpeechError::Recognition("no speech detected".to_string()));
        }
        Ok(transcript.to_string())
    }
}

/// Recognizer used when nothing is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableRecognizer;

impl SpeechRecognizer for UnavailableRecognizer {
    fn is_available(&self) -> bool {
        false
    }

    fn recognize(&self, _locale: &str) -> Result<String, SpeechError> {
        Err(SpeechError::Unsupported)
    }
}

/// Argument convention of a synthesizer program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SynthKind {
    /// `espeak-ng` / `espeak`: `-v LANG -s WPM -p PITCH TEXT`.
    Espeak,
    /// `spd-say`: `-l LANG -r RATE -p PITCH TEXT` with rate/pitch in -100..=100.
    SpdSay,
    /// Anything else: configured args then the text; locale in the environment.
    Custom,
}

impl SynthKind {
    /// Guess the convention from the executable name.
    fn for_program(name: &str) -> Self {
        match name {
            "espeak-ng" | "espeak" => Self::Espeak,
            "spd-say" => Self::SpdSay,
            _ => Self::Custom,
        }
    }
}

/// What: Map relative rate/pitch onto program-specific argument values.
///
/// Inputs:
/// - `kind`: Program convention
/// - `rate`, `pitch`: Relative values where `1.0` is normal
///
/// Output:
/// - `(rate, pitch)` as the program expects them
#[allow(clippy::cast_possible_truncation)]
fn scaled_prosody(kind: SynthKind, rate: f32, pitch: f32) -> (i32, i32) {
    match kind {
        SynthKind::Espeak => (
            ((175.0 * rate).round() as i32).clamp(80, 450),
            ((50.0 * pitch).round() as i32).clamp(0, 99),
        ),
        SynthKind::SpdSay | SynthKind::Custom => (
            (((rate - 1.0) * 100.0).round() as i32).clamp(-100, 100),
            (((pitch - 1.0) * 100.0).round() as i32).clamp(-100, 100),
        ),
    }
}

/// Synthesizer running an external text-to-speech program.
///
/// At most one utterance is active: each `speak` kills the previous child.
#[derive(Debug)]
pub struct CommandSynthesizer {
    /// Resolved executable path.
    program: PathBuf,
    /// Argument convention.
    kind: SynthKind,
    /// Extra configured arguments (custom commands only).
    args: Vec<String>,
    /// Utterance in progress.
    active: Mutex<Option<Child>>,
}

impl CommandSynthesizer {
    /// What: Find a usable synthesizer.
    ///
    /// Inputs:
    /// - `configured`: `speech_synthesizer_command` setting (empty means auto-detect)
    ///
    /// Output:
    /// - `Some(CommandSynthesizer)` for the configured program or the first of
    ///   `espeak-ng`, `espeak`, `spd-say` found on `PATH`; `None` otherwise
    #[must_use]
    pub fn detect(configured: &str) -> Option<Self> {
        if let Some((program, args)) = split_command_line(configured) {
            return match which::which(&program) {
                Ok(path) => Some(Self::new(path, &program, args)),
                Err(e) => {
                    tracing::warn!(program = %program, error = %e, "configured synthesizer not found");
                    None
                }
            };
        }
        SYNTHESIZER_CANDIDATES.iter().find_map(|name| {
            which::which(name)
                .ok()
                .map(|path| Self::new(path, name, Vec::new()))
        })
    }

    /// Build a synthesizer for a resolved path.
    fn new(program: PathBuf, name: &str, args: Vec<String>) -> Self {
        let base = std::path::Path::new(name)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(name);
        Self {
            program,
            kind: SynthKind::for_program(base),
            args,
            active: Mutex::new(None),
        }
    }

    /// Display name of the program in use.
    #[must_use]
    pub fn program(&self) -> String {
        self.program.display().to_string()
    }

    /// Process id of the utterance in progress, if any.
    #[cfg(test)]
    fn active_pid(&self) -> Option<u32> {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(Child::id)
    }

    /// Full argument list for one utterance.
    fn command_args(&self, text: &str, locale: &str, rate: f32, pitch: f32) -> Vec<String> {
        let (rate, pitch) = scaled_prosody(self.kind, rate, pitch);
        let lang = language_of(locale).to_string();
        let mut args = match self.kind {
            SynthKind::Espeak => vec![
                "-v".to_string(),
                lang,
                "-s".to_string(),
                rate.to_string(),
                "-p".to_string(),
                pitch.to_string(),
            ],
            SynthKind::SpdSay => vec![
                "-l".to_string(),
                lang,
                "-r".to_string(),
                rate.to_string(),
                "-p".to_string(),
                pitch.to_string(),
            ],
            SynthKind::Custom => self
                .args
                .iter()
                .map(|a| a.replace(LOCALE_PLACEHOLDER, locale))
                .collect(),
        };
        args.push(text.to_string());
        args
    }
}

impl SpeechSynthesizer for CommandSynthesizer {
    fn speak(&self, text: &str, locale: &str, rate: f32, pitch: f32) {
        self.cancel_all();
        if text.trim().is_empty() {
            return;
        }
        let spawned = Command::new(&self.program)
            .args(self.command_args(text, locale, rate, pitch))
            .env(LOCALE_ENV, locale)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(child) => {
                tracing::debug!(pid = child.id(), locale, "speaking reply");
                *self.active.lock().unwrap_or_else(PoisonError::into_inner) = Some(child);
            }
            Err(e) => tracing::warn!(error = %e, "failed to start speech synthesizer"),
        }
    }

    fn cancel_all(&self) {
        let previous = self
            .active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(mut child) = previous
            && matches!(child.try_wait(), Ok(None))
        {
            let _ = child.kill();
            let _ = child.wait();
            tracing::debug!("cancelled previous utterance");
        }
        if self.kind == SynthKind::SpdSay {
            // spd-say hands text to a daemon; killing the client does not stop playback.
            let spawned = Command::new(&self.program)
                .arg("-C")
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();
            match spawned {
                // Called from the event loop: reap off-thread instead of waiting here.
                Ok(mut child) => {
                    std::thread::spawn(move || {
                        let _ = child.wait();
                    });
                }
                Err(e) => tracing::warn!(error = %e, "failed to cancel spd-say playback"),
            }
        }
    }
}

/// Synthesizer that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSynthesizer;

impl SpeechSynthesizer for NullSynthesizer {
    fn speak(&self, text: &str, locale: &str, _rate: f32, _pitch: f32) {
        tracing::trace!(locale, chars = text.chars().count(), "speech output unavailable");
    }

    fn cancel_all(&self) {}
}

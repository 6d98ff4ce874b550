//! Text-to-speech announcer
//!
//! Shells out to a speech command (`say` on macOS). If the command cannot be
//! started the announcer disables itself and the battle carries on silently.

use std::process::{Command, Stdio};

/// Speech command used when none is given
pub const DEFAULT_SPEECH_COMMAND: &str = "say";

/// Reads announcements aloud
#[derive(Debug, Clone)]
pub struct Announcer {
    /// Program invoked with the text as its only argument
    command: String,
    /// Whether speech was requested
    enabled: bool,
    /// Cleared after the command fails to start
    available: bool,
}

impl Announcer {
    /// Create an announcer using the default speech command
    pub fn new(enabled: bool) -> Self {
        Self::with_command(DEFAULT_SPEECH_COMMAND, enabled)
    }

    pub fn with_command(command: impl Into<String>, enabled: bool) -> Self {
        Self {
            command: command.into(),
            enabled,
            available: true,
        }
    }

    /// Speak `text`, blocking until the speech command finishes
    pub fn announce(&mut self, text: &str) {
        if !self.is_enabled() {
            return;
        }

        match Command::new(&self.command)
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
        {
            Ok(status) if status.success() => {}
            Ok(status) => {
                log::debug!("Speech command exited with {} for {:?}", status, text);
            }
            Err(e) => {
                log::warn!("Failed to run speech command `{}`: {}. Speech disabled.", self.command, e);
                self.available = false;
            }
        }
    }

    /// Enable or disable speech
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Check if speech is enabled and the command still works
    pub fn is_enabled(&self) -> bool {
        self.enabled && self.available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_announcer_never_runs() {
        let mut announcer = Announcer::with_command("arena-test-no-such-speech-binary", false);
        announcer.announce("FIGHT");
        assert!(!announcer.is_enabled());

        // Turning it on afterwards still works: it never tried the command
        announcer.set_enabled(true);
        assert!(announcer.is_enabled());
    }

    #[test]
    fn test_missing_command_disables_speech() {
        let mut announcer = Announcer::with_command("arena-test-no-such-speech-binary", true);
        assert!(announcer.is_enabled());
        announcer.announce("FIGHT");
        assert!(!announcer.is_enabled());
    }
}

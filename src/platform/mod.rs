//! Host environment integration layer
//!
//! This module handles everything that reaches outside the terminal:
//! - Fullscreen control via the running terminal emulator
//! - Buzzer synthesis and audio output
//! - Opening the games site in the system browser
//!
//! Everything here is best-effort. A kiosk without audio, without a
//! controllable window or without a browser still runs the dashboard.

pub mod audio;
pub mod fullscreen;
pub mod launcher;

pub use audio::Buzzer;
pub use fullscreen::{detect_driver, FullscreenDriver};
pub use launcher::open_url;

use std::process::{Command, Stdio};

/// Check if a command exists in PATH
pub(crate) fn command_exists(cmd: &str) -> bool {
    Command::new("which")
        .arg(cmd)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_exists_finds_shell_basics() {
        assert!(command_exists("ls"));
        assert!(!command_exists("carewheel-no-such-command"));
    }
}

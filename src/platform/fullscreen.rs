//! Terminal fullscreen control
//!
//! Detects, in order:
//! - kitty with a remote control socket (`kitten @ resize-os-window`)
//! - xterm-compatible emulators that honour window manipulation escapes
//! - everything else, where fullscreen requests are a logged no-op
//!
//! Detection happens once at startup and picks the first supported
//! driver. Requests are optimistic: the emulator may silently ignore
//! them and the dashboard carries on either way.

use super::command_exists;
use anyhow::{Context, Result};
use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Escape that asks an xterm-compatible emulator to go fullscreen
pub const ENTER_FULLSCREEN_ESCAPE: &str = "\x1b[10;1t";
/// Escape that asks an xterm-compatible emulator to leave fullscreen
pub const EXIT_FULLSCREEN_ESCAPE: &str = "\x1b[10;0t";

/// How this terminal's window can be driven into fullscreen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FullscreenDriver {
    /// kitty remote control over its listen socket
    KittyRemote { socket: String },
    /// xterm window manipulation escapes (CSI 10;1t / 10;0t)
    XtermWindowOps,
    /// No known way to control this terminal's window
    Unsupported,
}

impl FullscreenDriver {
    pub fn as_str(&self) -> &'static str {
        match self {
            FullscreenDriver::KittyRemote { .. } => "kitty remote control",
            FullscreenDriver::XtermWindowOps => "xterm window ops",
            FullscreenDriver::Unsupported => "unsupported",
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, FullscreenDriver::Unsupported)
    }
}

/// Pick the first driver the running terminal supports
pub fn detect_driver() -> FullscreenDriver {
    select_driver(
        env::var("KITTY_LISTEN_ON").ok().as_deref(),
        env::var("TERM").ok().as_deref(),
        env::var("TERM_PROGRAM").ok().as_deref(),
        command_exists("kitten"),
    )
}

/// Driver selection from environment values, split out for testing
///
/// kitty without a listen socket falls through to the escape path: it
/// advertises TERM=xterm-kitty, and an ignored escape is harmless.
fn select_driver(
    kitty_listen_on: Option<&str>,
    term: Option<&str>,
    term_program: Option<&str>,
    kitten_available: bool,
) -> FullscreenDriver {
    if let Some(socket) = kitty_listen_on {
        if !socket.is_empty() && kitten_available {
            return FullscreenDriver::KittyRemote {
                socket: socket.to_string(),
            };
        }
    }

    let term_matches = term.map_or(false, |t| t.starts_with("xterm"));
    let program_matches = term_program.map_or(false, |p| p == "iTerm.app" || p == "WezTerm");
    if term_matches || program_matches {
        return FullscreenDriver::XtermWindowOps;
    }

    FullscreenDriver::Unsupported
}

/// Ask the terminal window to go fullscreen
pub fn enter(driver: &FullscreenDriver) -> Result<()> {
    match driver {
        FullscreenDriver::KittyRemote { socket } => toggle_kitty_fullscreen(socket),
        FullscreenDriver::XtermWindowOps => write_escape(ENTER_FULLSCREEN_ESCAPE),
        FullscreenDriver::Unsupported => {
            log::debug!("Fullscreen requested but this terminal has no driver");
            Ok(())
        }
    }
}

/// Ask the terminal window to leave fullscreen
pub fn exit(driver: &FullscreenDriver) -> Result<()> {
    match driver {
        FullscreenDriver::KittyRemote { socket } => toggle_kitty_fullscreen(socket),
        FullscreenDriver::XtermWindowOps => write_escape(EXIT_FULLSCREEN_ESCAPE),
        FullscreenDriver::Unsupported => {
            log::debug!("Fullscreen exit requested but this terminal has no driver");
            Ok(())
        }
    }
}

/// The kitten invocation that flips the OS window state
///
/// kitty only exposes a toggle; enter and exit both run this, so the
/// caller must send it only when its parity says the window actually
/// needs to change.
fn kitty_toggle_args(socket: &str) -> [&str; 6] {
    [
        "@",
        "--to",
        socket,
        "resize-os-window",
        "--action",
        "toggle-fullscreen",
    ]
}

/// Toggle the kitty OS window over the remote control socket
fn toggle_kitty_fullscreen(socket: &str) -> Result<()> {
    let status = Command::new("kitten")
        .args(kitty_toggle_args(socket))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .context("Failed to run kitten remote control")?;

    if !status.success() {
        anyhow::bail!("kitten resize-os-window exited with {:?}", status.code());
    }
    Ok(())
}

/// Write a window manipulation escape straight to the terminal
fn write_escape(sequence: &str) -> Result<()> {
    let mut stdout = io::stdout();
    stdout
        .write_all(sequence.as_bytes())
        .context("Failed to write window escape")?;
    stdout.flush().context("Failed to flush window escape")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kitty_socket_wins_when_kitten_present() {
        let driver = select_driver(Some("unix:/tmp/kitty-1"), Some("xterm-kitty"), None, true);
        assert_eq!(
            driver,
            FullscreenDriver::KittyRemote {
                socket: String::from("unix:/tmp/kitty-1")
            }
        );
    }

    #[test]
    fn test_kitty_without_kitten_falls_back_to_escapes() {
        let driver = select_driver(Some("unix:/tmp/kitty-1"), Some("xterm-kitty"), None, false);
        assert_eq!(driver, FullscreenDriver::XtermWindowOps);
    }

    #[test]
    fn test_xterm_family_uses_window_ops() {
        let driver = select_driver(None, Some("xterm-256color"), None, false);
        assert_eq!(driver, FullscreenDriver::XtermWindowOps);

        let driver = select_driver(None, Some("screen"), Some("iTerm.app"), false);
        assert_eq!(driver, FullscreenDriver::XtermWindowOps);
    }

    #[test]
    fn test_unknown_terminal_is_unsupported() {
        let driver = select_driver(None, Some("linux"), None, false);
        assert_eq!(driver, FullscreenDriver::Unsupported);
        assert!(!driver.is_supported());

        let driver = select_driver(None, None, None, true);
        assert_eq!(driver, FullscreenDriver::Unsupported);
    }

    #[test]
    fn test_escape_sequences() {
        assert_eq!(ENTER_FULLSCREEN_ESCAPE.as_bytes(), b"\x1b[10;1t");
        assert_eq!(EXIT_FULLSCREEN_ESCAPE.as_bytes(), b"\x1b[10;0t");
    }

    #[test]
    fn test_kitty_control_is_a_toggle() {
        // There is no discrete exit in the kitty protocol; both
        // directions run this one command.
        assert_eq!(
            kitty_toggle_args("unix:/tmp/kitty-1"),
            [
                "@",
                "--to",
                "unix:/tmp/kitty-1",
                "resize-os-window",
                "--action",
                "toggle-fullscreen",
            ]
        );
    }
}

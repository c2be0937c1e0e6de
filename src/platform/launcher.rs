//! Opening the games site in the system browser
//!
//! Tries the platform openers in a fixed order and spawns the first
//! one that exists. A background thread reaps the opener when it
//! exits; the dashboard itself never blocks on it.

use super::command_exists;
use anyhow::{Context, Result};
use std::process::{Command, Stdio};
use std::thread;

/// Candidate opener commands, tried in order
const OPENERS: &[&str] = &["xdg-open", "open", "start"];

/// Open a URL in the default browser
///
/// Returns a short human-readable message for the status line.
pub fn open_url(url: &str, dry_run: bool) -> Result<String> {
    let opener = find_opener().context("No URL opener found on this machine")?;
    open_url_with(opener, url, dry_run)
}

/// Open a URL with a specific opener command
fn open_url_with(opener: &str, url: &str, dry_run: bool) -> Result<String> {
    if dry_run {
        return Ok(format!("Dry run: Would execute: {} {}", opener, url));
    }

    let mut child = Command::new(opener)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to launch browser: {} {}", opener, url))?;

    // A dropped Child is never reaped and would sit in the process
    // table as a zombie for the life of the kiosk.
    thread::spawn(move || {
        let _ = child.wait();
    });

    Ok(format!("Opened {}", url))
}

/// Find the first URL opener available on this machine
fn find_opener() -> Option<&'static str> {
    OPENERS.iter().copied().find(|cmd| command_exists(cmd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dry_run_reports_command() {
        let msg = open_url_with("xdg-open", "https://example.com/", true).unwrap();
        assert!(msg.contains("Dry run"));
        assert!(msg.contains("xdg-open https://example.com/"));
    }

    #[test]
    fn test_opener_order_prefers_xdg_open() {
        assert_eq!(OPENERS[0], "xdg-open");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_opener_child_is_reaped() {
        // `true` exits immediately; without the reaper thread its
        // entry would linger in the process table until the kiosk
        // exits, one zombie per games launch.
        let msg = open_url_with("true", "https://example.com/", false).unwrap();
        assert!(msg.contains("Opened"));

        // Give the child time to exit and the reaper time to collect.
        thread::sleep(std::time::Duration::from_millis(300));
        assert_eq!(zombie_children("true"), 0);
    }

    /// Count direct children of this process named `comm` in state Z
    #[cfg(target_os = "linux")]
    fn zombie_children(comm: &str) -> usize {
        let my_pid = std::process::id().to_string();
        let mut zombies = 0;

        for entry in std::fs::read_dir("/proc").into_iter().flatten().flatten() {
            let name = entry.file_name();
            let Some(pid) = name.to_str().filter(|n| n.bytes().all(|b| b.is_ascii_digit()))
            else {
                continue;
            };
            let Ok(stat) = std::fs::read_to_string(format!("/proc/{}/stat", pid)) else {
                continue;
            };
            // "pid (comm) state ppid ..."; comm may contain spaces.
            let (Some(open), Some(close)) = (stat.find('('), stat.rfind(')')) else {
                continue;
            };
            if &stat[open + 1..close] != comm {
                continue;
            }
            let mut fields = stat[close + 2..].split_whitespace();
            let state = fields.next().unwrap_or("");
            let ppid = fields.next().unwrap_or("");
            if ppid == my_pid && state == "Z" {
                zombies += 1;
            }
        }

        zombies
    }
}

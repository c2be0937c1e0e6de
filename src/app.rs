//! Application state and event handling
//!
//! This is the core of carewheel, managing:
//! - Wiring between the wheel state machine and the host drivers
//! - Event handling (keyboard and mouse)
//! - Per-frame timer updates

use crate::carousel::{CarouselState, WheelAction};
use crate::config::Config;
use crate::navbar::Navbar;
use crate::platform::{self, Buzzer, FullscreenDriver};
use crate::types::CareOption;
use crate::ui::Theme;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

/// Main application state
pub struct App {
    // Core state
    pub should_quit: bool,
    pub config: Config,
    pub theme: Theme,
    pub dry_run: bool,
    pub muted: bool,

    // Interactive state
    pub carousel: CarouselState,
    pub navbar: Navbar,

    // Host drivers
    pub fullscreen: FullscreenDriver,
    /// Whether our own enter/exit calls have the window fullscreen
    pub fullscreen_active: bool,
    pub buzzer: Option<Buzzer>,

    // Flash message (temporary feedback)
    pub flash_message: Option<(String, bool, Instant)>, // (message, is_error, timestamp)
}

impl App {
    /// Create a new App instance
    pub fn new(config: Config, dry_run: bool, muted: bool, windowed: bool) -> Self {
        let theme = Theme::from_name(config.theme);

        let fullscreen = platform::detect_driver();
        log::info!("Fullscreen driver: {}", fullscreen.as_str());

        let buzzer = if config.sound_enabled {
            Buzzer::open()
        } else {
            None
        };

        let mut carousel = CarouselState::new(CareOption::all(), Instant::now());
        carousel.swipe_threshold = config.swipe_threshold;
        if windowed {
            // Skip the fullscreen gate; the first click rotates
            carousel.fullscreen_initiated = true;
        }

        Self {
            should_quit: false,
            config,
            theme,
            dry_run,
            muted,
            carousel,
            navbar: Navbar::new(),
            fullscreen,
            fullscreen_active: false,
            buzzer,
            flash_message: None,
        }
    }

    /// Whether a call would actually make noise right now
    pub fn sound_active(&self) -> bool {
        self.buzzer.is_some() && !self.muted
    }

    /// Handle a key event
    ///
    /// The keyboard surface is for the caregiver, not the resident:
    /// quit, theme, mute and the fullscreen escape hatch.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.leave_fullscreen();
            }
            KeyCode::Char('t') => {
                self.config.theme = self.config.theme.next();
                self.theme = Theme::from_name(self.config.theme);
                if let Err(e) = self.config.save() {
                    log::warn!("Could not save config: {e:#}");
                }
                self.show_flash(&format!("Theme: {}", self.config.theme.as_str()), false);
            }
            KeyCode::Char('m') => {
                self.muted = !self.muted;
                let label = if self.muted { "Sound off" } else { "Sound on" };
                self.show_flash(label, false);
            }
            _ => {}
        }
        Ok(())
    }

    /// Re-arm the fullscreen gate and drop out of fullscreen
    ///
    /// The next click goes back through the gate. The platform exit is
    /// only sent when our own enter went out first: kitty's remote
    /// control is a toggle, and sending it against a windowed terminal
    /// would flip the window into fullscreen and invert every request
    /// after it. Returns whether the driver was called.
    fn leave_fullscreen(&mut self) -> bool {
        let was_active = self.fullscreen_active;
        if was_active {
            log::info!("Leaving fullscreen (Esc)");
            if let Err(e) = platform::fullscreen::exit(&self.fullscreen) {
                log::warn!("Fullscreen exit failed: {e:#}");
            }
            self.fullscreen_active = false;
        }
        self.carousel.exit_fullscreen();
        was_active
    }

    /// Handle a mouse event
    ///
    /// Press and release form one gesture; everything in between
    /// (drag, move) is ignored. The release decides whether it was a
    /// swipe or a click.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let now = Instant::now();
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.carousel.handle_press(mouse.column);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(action) = self.carousel.handle_release(mouse.column, mouse.row, now) {
                    self.run_action(action);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Advance all timers; called once per frame
    pub fn tick(&mut self, now: Instant) {
        self.carousel.tick(now);
        self.navbar.maybe_refresh(now);

        // Clear expired flash messages
        if let Some((_, _, shown_at)) = &self.flash_message {
            if now.duration_since(*shown_at).as_secs() >= 3 {
                self.flash_message = None;
            }
        }
    }

    /// Run a side effect handed back by the wheel
    ///
    /// All of these are best-effort: failures are logged and shown,
    /// never propagated.
    fn run_action(&mut self, action: WheelAction) {
        match action {
            WheelAction::EnterFullscreen => {
                log::info!("Entering fullscreen via {}", self.fullscreen.as_str());
                if let Err(e) = platform::fullscreen::enter(&self.fullscreen) {
                    log::warn!("Fullscreen request failed: {e:#}");
                }
                self.fullscreen_active = true;
                if !self.fullscreen.is_supported() {
                    self.show_flash("Fullscreen is not supported by this terminal", true);
                }
            }
            WheelAction::CallBuzzer(index) => {
                let option = &self.carousel.options[index];
                log::info!("Call: {}", option.label);
                if self.sound_active() {
                    if let Some(buzzer) = &self.buzzer {
                        if let Err(e) = buzzer.play() {
                            log::warn!("Buzzer playback failed: {e:#}");
                        }
                    }
                }
                self.show_flash(&format!("Calling for {}", option.label), false);
            }
            WheelAction::OpenGames => {
                match platform::open_url(&self.config.games_url, self.dry_run) {
                    Ok(msg) => {
                        log::info!("{}", msg);
                        self.show_flash(&msg, false);
                    }
                    Err(e) => {
                        log::warn!("Browser launch failed: {e:#}");
                        self.show_flash("Could not open the games site", true);
                    }
                }
            }
        }
    }

    /// Show a flash message
    fn show_flash(&mut self, message: &str, is_error: bool) {
        self.flash_message = Some((message.into(), is_error, Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// App with the audio device closed and the platform driver stubbed
    fn test_app(windowed: bool) -> App {
        let config = Config {
            sound_enabled: false,
            ..Config::default()
        };
        let mut app = App::new(config, false, false, windowed);
        app.fullscreen = FullscreenDriver::Unsupported;
        app
    }

    #[test]
    fn test_escape_before_fullscreen_skips_platform_exit() {
        // On kitty the exit is the same toggle as the enter; sending
        // it while the window is not fullscreen would enter instead
        // and invert every request after it.
        let mut app = test_app(false);

        assert!(!app.leave_fullscreen());
        assert!(!app.carousel.fullscreen_initiated);

        // A repeat press still has nothing to undo.
        assert!(!app.leave_fullscreen());
    }

    #[test]
    fn test_escape_exits_once_after_enter() {
        let mut app = test_app(false);
        app.carousel.fullscreen_initiated = true;
        app.fullscreen_active = true;

        assert!(app.leave_fullscreen());
        assert!(!app.fullscreen_active);
        assert!(!app.carousel.fullscreen_initiated);

        assert!(!app.leave_fullscreen());
    }

    #[test]
    fn test_windowed_escape_leaves_window_alone() {
        // --windowed pre-arms the gate without touching the window,
        // so Escape is a state reset, not a platform call.
        let mut app = test_app(true);
        assert!(app.carousel.fullscreen_initiated);
        assert!(!app.fullscreen_active);

        assert!(!app.leave_fullscreen());
        assert!(!app.carousel.fullscreen_initiated);
    }

    #[test]
    fn test_escape_key_rearms_gate() {
        let mut app = test_app(true);
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
            .unwrap();

        assert!(!app.carousel.fullscreen_initiated);
        assert!(!app.fullscreen_active);
    }
}

//! Wheel state machine
//!
//! Owns everything the carousel reacts to:
//! - focused index and accumulated rotation angle
//! - the click / double-click disambiguation (Idle → PendingSingle)
//! - swipe classification from press/release pairs
//! - the fullscreen gate on the first click
//! - deadline-based feedback state (ripple, buzzer pulse, overlay)
//!
//! All transitions take `now` as a parameter so the machine can be
//! driven deterministically from tests. Effects that leave the process
//! (fullscreen, audio, browser) are returned as [`WheelAction`] values
//! for the caller to execute.

use crate::types::CareOption;
use std::time::{Duration, Instant};

/// Second click within this window of the first counts as a double click
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);
/// Grace period before a lone click commits to a rotation
pub const SINGLE_CLICK_GRACE: Duration = Duration::from_millis(200);
/// Rotation requests are ignored for this long after a rotation starts
pub const ROTATION_LOCK: Duration = Duration::from_millis(500);
/// How long the click ripple stays on screen
pub const RIPPLE_DURATION: Duration = Duration::from_millis(600);
/// How long the buzzer pulse rings stay on screen
pub const BUZZER_PULSE_DURATION: Duration = Duration::from_millis(800);
/// How long the welcome instructions stay up after launch
pub const INSTRUCTIONS_DURATION: Duration = Duration::from_millis(5000);
/// Minimum horizontal press-to-release distance, in pointer units,
/// for a gesture to count as a swipe rather than a click
pub const SWIPE_THRESHOLD: u16 = 50;

/// Rotation direction of the wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Side effect requested from the host application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelAction {
    /// First-click gate: put the terminal window into fullscreen
    EnterFullscreen,
    /// Sound the buzzer for the option at this index
    CallBuzzer(usize),
    /// Open the games site in the system browser
    OpenGames,
}

/// Transient click feedback at a screen cell
#[derive(Debug, Clone, Copy)]
pub struct Ripple {
    pub x: u16,
    pub y: u16,
    pub shown_at: Instant,
}

/// An in-flight rotation tween
#[derive(Debug, Clone, Copy)]
pub struct Animation {
    /// Rotation angle the tween started from
    pub from_degrees: f64,
    pub started_at: Instant,
}

/// Complete interactive state of the wheel
pub struct CarouselState {
    pub options: &'static [CareOption],
    pub current_index: usize,
    /// Accumulated signed angle; only its modulo-360 value is visible
    pub rotation_degrees: f64,
    /// Whether fullscreen has been requested (optimistic, set on attempt)
    pub fullscreen_initiated: bool,
    pub swipe_threshold: u16,

    // Click disambiguation
    pub last_click: Option<Instant>,
    /// Deadline of the PendingSingle state; None means Idle
    pub pending_rotate_at: Option<Instant>,

    // Gesture in flight
    pub gesture_start_x: Option<u16>,

    // Feedback and timing
    pub ripple: Option<Ripple>,
    pub pulse_started_at: Option<Instant>,
    pub animation: Option<Animation>,
    pub mounted_at: Instant,
    pub instructions_dismissed: bool,
}

impl CarouselState {
    pub fn new(options: &'static [CareOption], now: Instant) -> Self {
        Self {
            options,
            current_index: 0,
            rotation_degrees: 0.0,
            fullscreen_initiated: false,
            swipe_threshold: SWIPE_THRESHOLD,
            last_click: None,
            pending_rotate_at: None,
            gesture_start_x: None,
            ripple: None,
            pulse_started_at: None,
            animation: None,
            mounted_at: now,
            instructions_dismissed: false,
        }
    }

    /// Angle between adjacent ring positions, in degrees
    pub fn angle_per_item(&self) -> f64 {
        360.0 / self.options.len() as f64
    }

    /// The option currently at the front of the wheel
    pub fn current_option(&self) -> &'static CareOption {
        &self.options[self.current_index]
    }

    /// Whether a rotation tween is still running (the rotation lock)
    pub fn is_animating(&self, now: Instant) -> bool {
        self.animation
            .is_some_and(|a| now.duration_since(a.started_at) < ROTATION_LOCK)
    }

    /// Whether the welcome instructions overlay should be drawn
    pub fn show_instructions(&self) -> bool {
        !self.instructions_dismissed
    }

    /// Record the press half of a gesture
    pub fn handle_press(&mut self, x: u16) {
        self.gesture_start_x = Some(x);
    }

    /// Resolve the release half of a gesture
    ///
    /// A horizontal travel beyond the swipe threshold rotates the wheel
    /// directly (right for right-to-left movement). Anything shorter is
    /// a click at the release cell, the same way a short touch on a
    /// touchscreen still lands as a click.
    pub fn handle_release(&mut self, x: u16, y: u16, now: Instant) -> Option<WheelAction> {
        let Some(start_x) = self.gesture_start_x.take() else {
            return None;
        };

        let delta = i32::from(start_x) - i32::from(x);
        if delta.unsigned_abs() > u32::from(self.swipe_threshold) {
            let direction = if delta > 0 {
                Direction::Right
            } else {
                Direction::Left
            };
            self.rotate(direction, now);
            None
        } else {
            self.handle_click(x, y, now)
        }
    }

    /// Apply one click of the disambiguation machine
    ///
    /// The very first click is consumed by the fullscreen gate. After
    /// that, a click either schedules a rotate-right after the grace
    /// window (PendingSingle) or, when it lands within the double-click
    /// window of the previous one, cancels that pending rotation and
    /// fires the select action for the focused option.
    pub fn handle_click(&mut self, x: u16, y: u16, now: Instant) -> Option<WheelAction> {
        if !self.fullscreen_initiated {
            self.fullscreen_initiated = true;
            return Some(WheelAction::EnterFullscreen);
        }

        let is_double = self
            .last_click
            .is_some_and(|previous| now.duration_since(previous) < DOUBLE_CLICK_WINDOW);

        self.ripple = Some(Ripple { x, y, shown_at: now });
        self.last_click = Some(now);

        if is_double {
            self.pending_rotate_at = None;
            Some(self.select_current(now))
        } else {
            self.pending_rotate_at = Some(now + SINGLE_CLICK_GRACE);
            None
        }
    }

    /// Fire the select action for the focused option
    fn select_current(&mut self, now: Instant) -> WheelAction {
        if self.current_option().launches_game() {
            WheelAction::OpenGames
        } else {
            self.pulse_started_at = Some(now);
            WheelAction::CallBuzzer(self.current_index)
        }
    }

    /// Rotate one step, unless the rotation lock is held
    ///
    /// Requests during the lock are dropped, not queued.
    pub fn rotate(&mut self, direction: Direction, now: Instant) {
        if self.is_animating(now) {
            return;
        }

        let from_degrees = self.rotation_degrees;
        let n = self.options.len();
        match direction {
            Direction::Right => {
                self.current_index = (self.current_index + 1) % n;
                self.rotation_degrees -= self.angle_per_item();
            }
            Direction::Left => {
                self.current_index = (self.current_index + n - 1) % n;
                self.rotation_degrees += self.angle_per_item();
            }
        }

        self.animation = Some(Animation {
            from_degrees,
            started_at: now,
        });
    }

    /// Unconditionally drop out of fullscreen (Escape)
    ///
    /// The next click goes back through the fullscreen gate.
    pub fn exit_fullscreen(&mut self) {
        self.fullscreen_initiated = false;
    }

    /// Advance every deadline timer
    ///
    /// Called once per frame from the main loop. A due PendingSingle
    /// deadline is consumed even when the rotation lock swallows the
    /// rotation itself.
    pub fn tick(&mut self, now: Instant) {
        if self.pending_rotate_at.is_some_and(|due| now >= due) {
            self.pending_rotate_at = None;
            self.rotate(Direction::Right, now);
        }

        if self
            .ripple
            .is_some_and(|r| now.duration_since(r.shown_at) >= RIPPLE_DURATION)
        {
            self.ripple = None;
        }

        if self
            .pulse_started_at
            .is_some_and(|started| now.duration_since(started) >= BUZZER_PULSE_DURATION)
        {
            self.pulse_started_at = None;
        }

        if self
            .animation
            .is_some_and(|a| now.duration_since(a.started_at) >= ROTATION_LOCK)
        {
            self.animation = None;
        }

        if !self.instructions_dismissed
            && now.duration_since(self.mounted_at) >= INSTRUCTIONS_DURATION
        {
            self.instructions_dismissed = true;
        }
    }

    /// Rotation angle to draw this frame
    ///
    /// Eases from the pre-rotation angle to the target over the lock
    /// window; outside the window it is exactly the accumulated angle.
    pub fn display_rotation(&self, now: Instant) -> f64 {
        match self.animation {
            Some(anim) => {
                let elapsed = now.duration_since(anim.started_at);
                if elapsed >= ROTATION_LOCK {
                    self.rotation_degrees
                } else {
                    let t = elapsed.as_secs_f64() / ROTATION_LOCK.as_secs_f64();
                    let eased = ease_out_cubic(t);
                    anim.from_degrees + (self.rotation_degrees - anim.from_degrees) * eased
                }
            }
            None => self.rotation_degrees,
        }
    }
}

/// Cubic ease-out: fast start, settles at the target
fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

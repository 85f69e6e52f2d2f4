//! # Motion
//!
//! Animation choreography as plain data. The controller never looks at
//! time; the rendering layer reads these transitions and interpolates
//! between the two discrete states the controller hands it.
//!
//! ```text
//! dropdown   enter 200ms (ease-out-expo-ish), exit 150ms
//! item       fade 150ms, delay = ordinal × 30ms
//! section    enter 250ms, exit 200ms   (mobile accordion, height + fade)
//! panel      250ms both ways           (mobile menu, height + fade)
//! block      500ms ease-out, delay = index × 50ms
//! ```

use std::time::Duration;

/// Timing curve for a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    /// CSS-style cubic bezier with control points `(x1, y1)` and `(x2, y2)`.
    CubicBezier(f32, f32, f32, f32),
}

/// The snappy overshoot-free curve used by every menu surface.
pub const MENU_EASE: Easing = Easing::CubicBezier(0.16, 1.0, 0.3, 1.0);

impl Easing {
    /// Map linear progress `t` in `[0, 1]` to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                // Solve x(s) = t by bisection; x is monotonic for x1, x2 in [0, 1].
                let (mut lo, mut hi) = (0.0f32, 1.0f32);
                let mut s = t;
                for _ in 0..24 {
                    s = (lo + hi) / 2.0;
                    if bezier(s, x1, x2) < t {
                        lo = s;
                    } else {
                        hi = s;
                    }
                }
                bezier(s, y1, y2)
            }
        }
    }
}

fn bezier(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

/// A single timed interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration: Duration::from_millis(duration_ms),
            delay: Duration::ZERO,
            easing,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Eased progress in `[0, 1]` after `elapsed` since the transition was triggered.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if elapsed < self.delay {
            return 0.0;
        }
        let running = elapsed - self.delay;
        if self.duration.is_zero() || running >= self.duration {
            return 1.0;
        }
        self.easing.apply(running.as_secs_f32() / self.duration.as_secs_f32())
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.delay + self.duration
    }
}

pub const DROPDOWN_ENTER: Transition = Transition::new(200, MENU_EASE);
pub const DROPDOWN_EXIT: Transition = Transition::new(150, Easing::Linear);

pub const ITEM_FADE: Transition = Transition::new(150, Easing::Linear);
pub const ITEM_STAGGER: Duration = Duration::from_millis(30);

pub const MOBILE_SECTION_ENTER: Transition = Transition::new(250, MENU_EASE);
pub const MOBILE_SECTION_EXIT: Transition = Transition::new(200, Easing::Linear);

pub const MOBILE_PANEL: Transition = Transition::new(250, MENU_EASE);

pub const BLOCK_ENTER: Transition = Transition::new(500, Easing::EaseOut);
pub const BLOCK_STAGGER: Duration = Duration::from_millis(50);

/// Linear stagger: later ordinals start later, all with the same duration.
pub fn stagger(base: Transition, step: Duration, ordinal: usize) -> Transition {
    base.with_delay(step * ordinal as u32)
}

/// Entrance transition for the `ordinal`-th leaf item of a menu.
pub fn item_entrance(ordinal: usize) -> Transition {
    stagger(ITEM_FADE, ITEM_STAGGER, ordinal)
}

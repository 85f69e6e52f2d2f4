//! # Presence
//!
//! Mount/unmount bookkeeping for anything that animates in and out.
//!
//! The controller flips open state instantly. `Presence` remembers when the
//! currently open key was mounted and keeps recently closed keys around
//! until their exit transition has played, so the render pass can draw
//! both. A new key never waits for an old one to finish leaving.
//!
//! Transitions pick up from whatever visibility the key had when it flipped:
//! a panel closed halfway through its entrance fades out from half, and a
//! key reopened during its exit rises from what is still showing.

use std::time::{Duration, Instant};

use crate::core::motion::Transition;

#[derive(Debug, Clone, PartialEq)]
pub struct Mounted {
    pub key: String,
    pub since: Instant,
    /// Visibility at `since`.
    pub from: f32,
}

impl Mounted {
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.since)
    }
}

#[derive(Debug, Clone)]
pub struct Presence {
    enter: Transition,
    exit: Transition,
    current: Option<Mounted>,
    exiting: Vec<Mounted>,
}

impl Presence {
    pub fn new(enter: Transition, exit: Transition) -> Self {
        Self {
            enter,
            exit,
            current: None,
            exiting: Vec::new(),
        }
    }

    /// Reconcile with the controller's open key and drop finished exits.
    pub fn sync(&mut self, open: Option<&str>, now: Instant) {
        if self.current.as_ref().map(|m| m.key.as_str()) != open {
            if let Some(prev) = self.current.take() {
                let from = self.entering(&prev, now);
                self.exiting.retain(|m| m.key != prev.key);
                self.exiting.push(Mounted { key: prev.key, since: now, from });
            }
            if let Some(key) = open {
                let from = self
                    .exiting
                    .iter()
                    .find(|m| m.key == key)
                    .map_or(0.0, |m| self.exit_progress(m, now));
                self.exiting.retain(|m| m.key != key);
                self.current = Some(Mounted { key: key.to_string(), since: now, from });
            }
        }

        let exit = self.exit;
        self.exiting.retain(|m| !exit.is_finished(m.elapsed(now)));
    }

    pub fn current(&self) -> Option<&Mounted> {
        self.current.as_ref()
    }

    pub fn exiting(&self) -> &[Mounted] {
        &self.exiting
    }

    /// Visibility of the current key in `[0, 1]`.
    pub fn enter_progress(&self, now: Instant) -> f32 {
        self.current.as_ref().map_or(0.0, |m| self.entering(m, now))
    }

    /// Remaining visibility of an exiting key in `[0, 1]`.
    pub fn exit_progress(&self, mounted: &Mounted, now: Instant) -> f32 {
        mounted.from * (1.0 - self.exit.progress(mounted.elapsed(now)))
    }

    fn entering(&self, mounted: &Mounted, now: Instant) -> f32 {
        let t = self.enter.progress(mounted.elapsed(now));
        mounted.from * (1.0 - t) + t
    }

    /// Instant at which every transition tracked here has settled.
    pub fn settles_at(&self) -> Option<Instant> {
        let entering = self
            .current
            .as_ref()
            .map(|m| m.since + self.enter.delay + self.enter.duration);
        let leaving = self
            .exiting
            .iter()
            .map(|m| m.since + self.exit.delay + self.exit.duration);
        entering.into_iter().chain(leaving).max()
    }
}

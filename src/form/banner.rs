//! Transient error banner: show, fade at 3s, clear at 4s.
//!
//! A single banner element is shared by every message. Showing a new
//! message cancels whatever fade/clear pair is still pending, so at most
//! one pair is ever outstanding.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use std::time::Duration;

use super::effect::{Effect, Target, Timer};
use crate::consts::BANNER_FADE_TRANSITION;

#[derive(Debug, Default)]
pub struct Banner {
    fade_pending: bool,
    clear_pending: bool,
}

impl Banner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of banner timers currently outstanding (0..=2).
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        usize::from(self.fade_pending) + usize::from(self.clear_pending)
    }

    /// Display `message` and (re)arm the fade/clear pair.
    pub fn show(&mut self, message: &str, fade_after: Duration, clear_after: Duration, out: &mut Vec<Effect>) {
        out.push(Effect::text(Target::Banner, message));
        out.push(Effect::style(Target::Banner, "opacity", "1"));

        if self.fade_pending {
            out.push(Effect::Cancel(Timer::BannerFade));
        }
        if self.clear_pending {
            out.push(Effect::Cancel(Timer::BannerClear));
        }

        out.push(Effect::Schedule { timer: Timer::BannerFade, after: fade_after });
        out.push(Effect::Schedule { timer: Timer::BannerClear, after: clear_after });
        self.fade_pending = true;
        self.clear_pending = true;
    }

    /// Start the fade-out transition.
    pub fn fade(&mut self, out: &mut Vec<Effect>) {
        self.fade_pending = false;
        out.push(Effect::style(Target::Banner, "transition", BANNER_FADE_TRANSITION));
        out.push(Effect::style(Target::Banner, "opacity", "0"));
    }

    /// Blank the banner and drop the transition.
    pub fn clear(&mut self, out: &mut Vec<Effect>) {
        self.clear_pending = false;
        out.push(Effect::text(Target::Banner, ""));
        out.push(Effect::style(Target::Banner, "transition", ""));
    }
}

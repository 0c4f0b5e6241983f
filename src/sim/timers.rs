//! Deferred effects
//!
//! Banner dismissal, pause auto-resume, the touched cue and the game-over
//! cool-down all happen some wall-clock time after the tick that caused them.
//! They are kept as explicit entries in the session state and fired by the
//! tick once the session clock passes their due time.

use serde::{Deserialize, Serialize};

/// What a timer does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerEvent {
    /// Drop the player's "touched" visual cue
    ClearTouched,
    /// Hide the level banner
    DismissBanner,
    /// Pause for the given number of seconds, then resume
    BeginPause { secs: u32 },
    /// End an automatic pause
    Resume,
    /// Game over summary has been shown long enough; start the cool-down
    GameOverCoolDown,
    /// Cool-down finished; accept a restart
    RestartReady,
}

/// A pending deferred effect
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTimer {
    /// Session clock (ms) at which the effect fires
    pub due_ms: f64,
    pub event: TimerEvent,
}

/// Outstanding timers, kept in scheduling order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timers {
    pending: Vec<ScheduledTimer>,
}

impl Timers {
    /// Schedule `event` to fire `delay_ms` after `now_ms`
    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64, event: TimerEvent) {
        self.pending.push(ScheduledTimer {
            due_ms: now_ms + delay_ms,
            event,
        });
    }

    /// Like `schedule`, but replaces any pending timer for the same event
    pub fn reschedule(&mut self, now_ms: f64, delay_ms: f64, event: TimerEvent) {
        self.cancel(event);
        self.schedule(now_ms, delay_ms, event);
    }

    /// Drop pending timers for `event`
    pub fn cancel(&mut self, event: TimerEvent) {
        self.pending.retain(|t| t.event != event);
    }

    /// Remove and return every timer due at `now_ms`, earliest first.
    /// Timers due at the same instant fire in the order they were scheduled.
    pub fn take_due(&mut self, now_ms: f64) -> Vec<TimerEvent> {
        let mut due: Vec<ScheduledTimer> = Vec::new();
        self.pending.retain(|t| {
            if t.due_ms <= now_ms {
                due.push(*t);
                false
            } else {
                true
            }
        });
        // Stable sort keeps scheduling order for ties
        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms));
        due.into_iter().map(|t| t.event).collect()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Whether a timer for `event` is pending
    pub fn contains(&self, event: TimerEvent) -> bool {
        self.pending.iter().any(|t| t.event == event)
    }
}

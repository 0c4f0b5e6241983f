//! Difficulty levels, pausing and the game-over flow
//!
//! Level transitions are gated on score and on the session clock. Each
//! transition shows a banner and, once the banner is gone, pauses the game
//! for a few seconds before play continues.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GamePhase, GameState};
use super::timers::TimerEvent;
use crate::consts::*;

/// Difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Level {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Level {
    /// 1-based level number
    pub fn number(&self) -> u8 {
        match self {
            Level::Easy => 1,
            Level::Medium => 2,
            Level::Hard => 3,
        }
    }

    /// Difficulty label shown in the HUD
    pub fn label(&self) -> &'static str {
        match self {
            Level::Easy => "Easy",
            Level::Medium => "Medium",
            Level::Hard => "Hard",
        }
    }

    /// Transition banner text
    pub fn banner(&self) -> &'static str {
        match self {
            Level::Easy => "LEVEL 1",
            Level::Medium => "LEVEL 2 BRAVO",
            Level::Hard => "LEVEL 3 BRAVO",
        }
    }

    /// (base, floor) of the enemy spawn interval in ms
    pub fn enemy_interval_bounds(&self) -> (f64, f64) {
        match self {
            Level::Easy => (3000.0, 1000.0),
            Level::Medium => (2000.0, 500.0),
            Level::Hard => (1500.0, 300.0),
        }
    }

    /// Base of the random enemy batch size
    pub fn enemy_batch_base(&self) -> u32 {
        match self {
            Level::Easy => 2,
            Level::Medium => 3,
            Level::Hard => 4,
        }
    }
}

impl GameState {
    /// Flip the pause flag (user action). Works in every phase.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        if self.paused {
            log::info!("Paused");
            self.events.push(GameEvent::Paused);
        } else {
            log::info!("Resumed");
            self.events.push(GameEvent::Resumed);
        }
    }

    /// Pause now and resume unconditionally after `secs`.
    ///
    /// The resume fires even if the pause was toggled in between; the last
    /// writer wins.
    pub fn pause_for(&mut self, secs: u32) {
        self.paused = true;
        self.events.push(GameEvent::Paused);
        self.timers
            .schedule(self.now_ms, f64::from(secs) * 1000.0, TimerEvent::Resume);
        log::debug!("Paused for {}s", secs);
    }

    /// End the run. Freezes the simulation and starts the summary delay.
    pub fn enter_game_over(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.restart_ready = false;
        self.timers
            .schedule(self.now_ms, GAME_OVER_DELAY_MS, TimerEvent::GameOverCoolDown);
        self.events.push(GameEvent::GameOver);
        log::info!(
            "Game over: score {} at {}s on {}",
            self.score,
            self.elapsed_secs(),
            self.level.label()
        );
    }

    /// Apply a deferred effect whose time has come
    pub fn fire_timer(&mut self, event: TimerEvent) {
        log::debug!("Timer fired: {:?} at {:.0}ms", event, self.now_ms);
        match event {
            TimerEvent::ClearTouched => self.player.touched = false,
            TimerEvent::DismissBanner => self.banner = None,
            TimerEvent::BeginPause { secs } => self.pause_for(secs),
            TimerEvent::Resume => {
                self.paused = false;
                self.events.push(GameEvent::Resumed);
            }
            TimerEvent::GameOverCoolDown => {
                self.pause_for(GAME_OVER_COOLDOWN_SECS);
                self.timers.schedule(
                    self.now_ms,
                    f64::from(GAME_OVER_COOLDOWN_SECS) * 1000.0,
                    TimerEvent::RestartReady,
                );
            }
            TimerEvent::RestartReady => {
                self.restart_ready = true;
                self.events.push(GameEvent::RestartReady);
            }
        }
    }

    /// Advance the level or time out, checked once per running tick.
    ///
    /// The advance check runs before the Medium timeout, so a tick that
    /// satisfies both levels up.
    pub fn check_level_transition(&mut self) {
        let elapsed = self.elapsed_secs();
        match self.level {
            Level::Easy if self.score >= LEVEL_2_SCORE && elapsed <= LEVEL_2_DEADLINE_SECS => {
                self.advance_to(Level::Medium);
            }
            Level::Medium if self.score >= LEVEL_3_SCORE && elapsed <= LEVEL_3_DEADLINE_SECS => {
                self.advance_to(Level::Hard);
            }
            Level::Medium if elapsed > LEVEL_3_DEADLINE_SECS => {
                log::info!("Failed to reach {} in time", Level::Hard.label());
                self.enter_game_over();
            }
            _ => {}
        }
    }

    fn advance_to(&mut self, level: Level) {
        self.level = level;
        self.banner = Some(level);
        self.timers
            .reschedule(self.now_ms, BANNER_MS, TimerEvent::DismissBanner);
        self.timers.schedule(
            self.now_ms,
            BANNER_MS,
            TimerEvent::BeginPause {
                secs: LEVEL_PAUSE_SECS,
            },
        );
        self.events.push(GameEvent::LevelUp(level));
        log::info!(
            "Level {} ({}) reached with score {} at {}s",
            level.number(),
            level.label(),
            self.score,
            self.elapsed_secs()
        );
    }
}

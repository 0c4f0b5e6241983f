//! Game state and core simulation types
//!
//! One `GameState` is one play session. Everything the session owns lives here
//! and is thrown away on restart.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::Level;
use super::player::{Direction, Player};
use super::rect::{Bounded, Rect};
use super::timers::Timers;
use crate::consts::*;

/// Whether the session is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay (may still be paused)
    Playing,
    /// Run ended; summary shown until restart
    GameOver,
}

/// A projectile fired by the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity per frame (negative is up)
    pub speed: f32,
}

impl Bullet {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::splat(BULLET_SIZE),
            speed: BULLET_SPEED,
        }
    }

    pub fn advance(&mut self) {
        self.pos.y += self.speed;
    }

    /// Fully above the top edge
    pub fn is_off_screen(&self) -> bool {
        self.pos.y + self.size.y <= 0.0
    }
}

impl Bounded for Bullet {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Standard,
    Scout,
    /// Costs two lives on contact
    Heavy,
    /// Large multi-hit enemy, at most one per session until defeated
    Boss,
}

impl EnemyKind {
    /// Kinds produced by the regular spawner, picked uniformly
    pub const SPAWNABLE: [EnemyKind; 3] = [EnemyKind::Standard, EnemyKind::Scout, EnemyKind::Heavy];

    /// Lives lost when this enemy touches the player
    pub fn contact_damage(&self) -> i32 {
        match self {
            EnemyKind::Heavy => 2,
            _ => 1,
        }
    }
}

/// A falling enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub size: Vec2,
    /// Fall speed per frame
    pub speed: f32,
}

impl Enemy {
    pub fn fall(&mut self) {
        self.pos.y += self.speed;
    }

    pub fn is_boss(&self) -> bool {
        self.kind == EnemyKind::Boss
    }
}

impl Bounded for Enemy {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A collectible poke
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl Item {
    pub fn new(x: f32) -> Self {
        Self {
            pos: Vec2::new(x, -ITEM_SIZE),
            size: Vec2::splat(ITEM_SIZE),
            speed: ITEM_SPEED,
        }
    }

    pub fn fall(&mut self) {
        self.pos.y += self.speed;
    }
}

impl Bounded for Item {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Things that happened during the last tick, for sound/HUD collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    EnemiesSpawned { count: u32 },
    BossSpawned,
    ItemSpawned,
    EnemyDestroyed { kind: EnemyKind },
    BossHit { hp_left: u32 },
    BossDefeated,
    PlayerHit { lives_lost: i32 },
    ItemCaught,
    LevelUp(Level),
    GameOver,
    Paused,
    Resumed,
    RestartReady,
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Uniform random source for spawning
    rng: Pcg32,
    /// Score (never decreases)
    pub score: u32,
    /// Remaining lives (can dip below zero on a heavy hit)
    pub lives: i32,
    /// Milliseconds since session start (keeps running while paused)
    pub now_ms: f64,
    /// Ticks processed since session start
    pub frame: u64,
    pub level: Level,
    pub phase: GamePhase,
    pub paused: bool,
    /// Restart accepted from key input (set after the game-over cool-down)
    pub restart_ready: bool,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub items: Vec<Item>,
    pub boss_appeared: bool,
    pub boss_hp: u32,
    /// Frames left to show the catch message
    pub catch_message_frames: u32,
    /// Level whose banner is currently shown
    pub banner: Option<Level>,
    /// Enemy spawn interval currently in effect
    pub enemy_spawn_interval_ms: f64,
    pub last_enemy_spawn_ms: Option<f64>,
    pub last_item_spawn_ms: Option<f64>,
    /// Pending deferred effects
    pub timers: Timers,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(seed, Pcg32::seed_from_u64(seed))
    }

    fn with_rng(seed: u64, rng: Pcg32) -> Self {
        Self {
            seed,
            rng,
            score: 0,
            lives: INITIAL_LIVES,
            now_ms: 0.0,
            frame: 0,
            level: Level::Easy,
            phase: GamePhase::Playing,
            paused: false,
            restart_ready: false,
            player: Player::new(),
            enemies: Vec::new(),
            items: Vec::new(),
            boss_appeared: false,
            boss_hp: BOSS_HP,
            catch_message_frames: 0,
            banner: None,
            enemy_spawn_interval_ms: INITIAL_ENEMY_SPAWN_INTERVAL_MS,
            last_enemy_spawn_ms: None,
            last_item_spawn_ms: None,
            timers: Timers::default(),
            events: Vec::new(),
        }
    }

    /// Reset every session field and entity store.
    ///
    /// Pending timers are dropped so nothing from the old session fires into
    /// the new one. The RNG keeps its stream so the next run differs.
    pub fn restart(&mut self) {
        let seed = self.seed;
        let rng = self.rng.clone();
        *self = Self::with_rng(seed, rng);
        log::info!("Session restarted");
    }

    /// Restart requested from key input. Only honoured once the game-over
    /// cool-down has finished.
    pub fn try_restart(&mut self) -> bool {
        if self.phase == GamePhase::GameOver && self.restart_ready {
            self.restart();
            true
        } else {
            false
        }
    }

    /// Uniform sample in [0, 1)
    pub fn roll(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    // === Input ===

    pub fn handle_direction_input(&mut self, direction: Direction) {
        self.player.apply_input(direction);
    }

    pub fn release_direction(&mut self, direction: Direction) {
        self.player.release(direction);
    }

    /// Jump key pressed or released. Pressing is ignored after game over.
    pub fn handle_jump_input(&mut self, pressed: bool) {
        if !pressed {
            self.player.jump_held = false;
        } else if !self.is_game_over() && self.player.on_ground {
            self.player.jump_held = true;
        }
    }

    /// Fire a bullet. Ignored while paused or after game over.
    pub fn shoot(&mut self) {
        if self.is_game_over() || self.paused {
            return;
        }
        self.player.shoot();
    }

    // === Accessors ===

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> i32 {
        self.lives
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Whole seconds since session start
    pub fn elapsed_secs(&self) -> u32 {
        (self.now_ms / 1000.0).floor() as u32
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Simulation advances this tick
    pub fn is_running(&self) -> bool {
        !self.paused && !self.is_game_over()
    }

    pub fn banner_text(&self) -> Option<&'static str> {
        self.banner.map(|level| level.banner())
    }

    pub fn catch_message_visible(&self) -> bool {
        self.catch_message_frames > 0
    }

    pub fn restart_ready(&self) -> bool {
        self.restart_ready
    }

    /// HUD view of the session for the DOM layer and the native demo
    pub fn snapshot(&self) -> HudSnapshot {
        HudSnapshot {
            score: self.score,
            lives: self.lives,
            level: self.level.number(),
            difficulty: self.level.label(),
            elapsed_secs: self.elapsed_secs(),
            paused: self.paused,
            game_over: self.is_game_over(),
            restart_ready: self.restart_ready,
            banner: self.banner_text(),
            catch_message: self.catch_message_visible(),
            enemies: self.enemies.len(),
            items: self.items.len(),
            bullets: self.player.bullets.len(),
        }
    }
}

/// Read-only summary of a session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudSnapshot {
    pub score: u32,
    pub lives: i32,
    pub level: u8,
    pub difficulty: &'static str,
    pub elapsed_secs: u32,
    pub paused: bool,
    pub game_over: bool,
    pub restart_ready: bool,
    pub banner: Option<&'static str>,
    pub catch_message: bool,
    pub enemies: usize,
    pub items: usize,
    pub bullets: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::timers::TimerEvent;

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new(1);
        assert_eq!(state.score(), 0);
        assert_eq!(state.lives(), INITIAL_LIVES);
        assert_eq!(state.level(), Level::Easy);
        assert_eq!(state.elapsed_secs(), 0);
        assert!(!state.is_game_over());
        assert!(!state.is_paused());
        assert_eq!(state.banner_text(), None);
        assert_eq!(state.boss_hp, BOSS_HP);
        assert_eq!(state.enemy_spawn_interval_ms, 3000.0);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = GameState::new(7);
        state.score = 123;
        state.lives = -1;
        state.now_ms = 99_000.0;
        state.level = Level::Hard;
        state.phase = GamePhase::GameOver;
        state.paused = true;
        state.boss_appeared = true;
        state.boss_hp = 3;
        state.catch_message_frames = 40;
        state.banner = Some(Level::Hard);
        state.player.pos.x = 10.0;
        state.player.shoot();
        state.items.push(Item::new(100.0));
        state.timers.schedule(0.0, 1000.0, TimerEvent::Resume);

        state.restart();

        let fresh = GameState::new(7);
        assert_eq!(state.snapshot(), fresh.snapshot());
        assert_eq!(state.player.pos, fresh.player.pos);
        assert!(state.timers.is_empty());
        assert!(!state.boss_appeared);
        assert_eq!(state.boss_hp, BOSS_HP);
        assert_eq!(state.last_enemy_spawn_ms, None);
    }

    #[test]
    fn test_try_restart_requires_cooldown() {
        let mut state = GameState::new(3);
        assert!(!state.try_restart());

        state.phase = GamePhase::GameOver;
        assert!(!state.try_restart());
        assert!(state.is_game_over());

        state.restart_ready = true;
        assert!(state.try_restart());
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_shoot_blocked_when_paused_or_over() {
        let mut state = GameState::new(3);
        state.paused = true;
        state.shoot();
        assert!(state.player.bullets.is_empty());

        state.paused = false;
        state.phase = GamePhase::GameOver;
        state.shoot();
        assert!(state.player.bullets.is_empty());

        state.phase = GamePhase::Playing;
        state.shoot();
        assert_eq!(state.player.bullets.len(), 1);
    }

    #[test]
    fn test_jump_input_held_and_released() {
        let mut state = GameState::new(3);
        state.handle_jump_input(true);
        assert!(state.player.jump_held);
        state.handle_jump_input(false);
        assert!(!state.player.jump_held);

        state.phase = GamePhase::GameOver;
        state.handle_jump_input(true);
        assert!(!state.player.jump_held);
    }

    #[test]
    fn test_elapsed_secs_floors() {
        let mut state = GameState::new(3);
        state.now_ms = 59_999.0;
        assert_eq!(state.elapsed_secs(), 59);
        state.now_ms = 60_000.0;
        assert_eq!(state.elapsed_secs(), 60);
    }

    #[test]
    fn test_rolls_are_unit_interval_and_seeded() {
        let mut a = GameState::new(42);
        let mut b = GameState::new(42);
        for _ in 0..100 {
            let x = a.roll();
            assert!((0.0..1.0).contains(&x));
            assert_eq!(x, b.roll());
        }
    }

    #[test]
    fn test_heavy_costs_two_lives() {
        assert_eq!(EnemyKind::Heavy.contact_damage(), 2);
        assert_eq!(EnemyKind::Standard.contact_damage(), 1);
        assert_eq!(EnemyKind::Boss.contact_damage(), 1);
    }
}

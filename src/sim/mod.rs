//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through `tick`'s elapsed milliseconds
//! - Seeded RNG only
//! - Deferred effects are explicit timers, never callbacks
//! - No rendering, DOM or audio dependencies

pub mod autopilot;
pub mod collision;
pub mod level;
pub mod player;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod timers;

pub use autopilot::autopilot;
pub use collision::resolve_collisions;
pub use level::Level;
pub use player::{Direction, Player};
pub use rect::{Bounded, Rect};
pub use spawn::{enemy_spawn_count, enemy_spawn_interval};
pub use state::{
    Bullet, Enemy, EnemyKind, GameEvent, GamePhase, GameState, HudSnapshot, Item,
};
pub use tick::{InputCommand, TickInput, sanitize_elapsed, tick};
pub use timers::{ScheduledTimer, TimerEvent, Timers};

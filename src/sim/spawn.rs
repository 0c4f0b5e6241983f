//! Enemy, boss and item spawning
//!
//! Two independent timers on the session clock. Enemy batches get larger and
//! more frequent as the score grows; the floor depends on the level.

use glam::Vec2;

use super::level::Level;
use super::state::{Enemy, EnemyKind, GameEvent, GameState, Item};
use crate::consts::*;

/// Milliseconds between enemy batches for a level and score
pub fn enemy_spawn_interval(level: Level, score: u32) -> f64 {
    let (base, floor) = level.enemy_interval_bounds();
    let speedup = 50.0 * f64::from(score / 100);
    (base - speedup).max(floor)
}

/// Size of an enemy batch given a uniform roll in [0, 1)
pub fn enemy_spawn_count(level: Level, score: u32, roll: f64) -> u32 {
    let upper = level.enemy_batch_base() + score / 200;
    (roll * f64::from(upper)).ceil() as u32
}

/// Whether a spawn timer has run out. A timer that never fired is always due.
fn timer_elapsed(last_ms: Option<f64>, now_ms: f64, interval_ms: f64) -> bool {
    match last_ms {
        Some(last) => now_ms - last > interval_ms,
        None => true,
    }
}

/// Spawn an enemy batch (and possibly the boss) if the enemy timer is due
pub fn spawn_enemies(state: &mut GameState) {
    if !state.is_running() {
        return;
    }
    if !timer_elapsed(
        state.last_enemy_spawn_ms,
        state.now_ms,
        state.enemy_spawn_interval_ms,
    ) {
        return;
    }

    state.enemy_spawn_interval_ms = enemy_spawn_interval(state.level, state.score);
    let roll = state.roll();
    let count = enemy_spawn_count(state.level, state.score, roll);
    for _ in 0..count {
        let enemy = random_enemy(state);
        state.enemies.push(enemy);
    }
    if count > 0 {
        state.events.push(GameEvent::EnemiesSpawned { count });
    }
    log::debug!(
        "Spawned {} enemies (next batch in {}ms)",
        count,
        state.enemy_spawn_interval_ms
    );

    maybe_spawn_boss(state);
    state.last_enemy_spawn_ms = Some(state.now_ms);
}

fn random_enemy(state: &mut GameState) -> Enemy {
    let x = state.roll() as f32 * (CANVAS_WIDTH - ENEMY_SIZE);
    let speed = state.roll() as f32 * ENEMY_SPEED_RANGE + ENEMY_MIN_SPEED;
    let pick = (state.roll() * EnemyKind::SPAWNABLE.len() as f64) as usize;
    let kind = EnemyKind::SPAWNABLE[pick.min(EnemyKind::SPAWNABLE.len() - 1)];
    Enemy {
        kind,
        pos: Vec2::new(x, -ENEMY_SIZE),
        size: Vec2::splat(ENEMY_SIZE),
        speed,
    }
}

/// The boss joins a batch once per session from Medium on.
///
/// It enters from fully above the canvas: at 600px tall it would otherwise
/// overlap a grounded player on its first frame.
fn maybe_spawn_boss(state: &mut GameState) {
    if state.boss_appeared
        || state.score < BOSS_SCORE_THRESHOLD
        || state.level.number() < Level::Medium.number()
    {
        return;
    }
    let x = state.roll() as f32 * (CANVAS_WIDTH - BOSS_SIZE);
    let speed = state.roll() as f32 * BOSS_SPEED_RANGE + BOSS_MIN_SPEED;
    state.enemies.push(Enemy {
        kind: EnemyKind::Boss,
        pos: Vec2::new(x, -BOSS_SIZE),
        size: Vec2::splat(BOSS_SIZE),
        speed,
    });
    state.boss_appeared = true;
    state.events.push(GameEvent::BossSpawned);
    log::info!("Boss spawned (hp {})", state.boss_hp);
}

/// Drop a poke if the item timer is due
pub fn spawn_items(state: &mut GameState) {
    if !state.is_running() {
        return;
    }
    if !timer_elapsed(state.last_item_spawn_ms, state.now_ms, ITEM_SPAWN_INTERVAL_MS) {
        return;
    }
    let x = state.roll() as f32 * (CANVAS_WIDTH - ITEM_SIZE);
    state.items.push(Item::new(x));
    state.events.push(GameEvent::ItemSpawned);
    state.last_item_spawn_ms = Some(state.now_ms);
}

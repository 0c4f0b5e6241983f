//! Collision resolution and scoring
//!
//! Runs once per running tick, after everything has moved. The three passes
//! are independent: an enemy that survives the bullet pass can still hit the
//! player in the same tick.

use super::rect::Bounded;
use super::state::{GameEvent, GameState};
use super::timers::TimerEvent;
use crate::consts::*;

/// Run every collision pass in order
pub fn resolve_collisions(state: &mut GameState) {
    bullets_vs_enemies(state);
    player_vs_enemies(state);
    player_vs_items(state);
}

/// Each bullet hits at most one enemy: the first one it overlaps.
///
/// Every hit scores a point. The boss absorbs hits until its hit points run
/// out, then pays a bonus and may appear again later.
pub fn bullets_vs_enemies(state: &mut GameState) {
    let mut i = 0;
    while i < state.player.bullets.len() {
        let bullet = &state.player.bullets[i];
        let Some(target) = state.enemies.iter().position(|e| e.overlaps(bullet)) else {
            i += 1;
            continue;
        };

        state.player.bullets.remove(i);
        state.score += 1;

        if state.enemies[target].is_boss() {
            state.boss_hp = state.boss_hp.saturating_sub(1);
            state.events.push(GameEvent::BossHit {
                hp_left: state.boss_hp,
            });
            if state.boss_hp == 0 {
                state.enemies.remove(target);
                state.score += BOSS_BONUS;
                state.boss_appeared = false;
                state.boss_hp = BOSS_HP;
                state.events.push(GameEvent::BossDefeated);
                log::info!("Boss defeated, score {}", state.score);
            }
        } else {
            let enemy = state.enemies.remove(target);
            state.events.push(GameEvent::EnemyDestroyed { kind: enemy.kind });
        }
    }
}

/// Enemies that reach the player are removed and cost lives
pub fn player_vs_enemies(state: &mut GameState) {
    let player = state.player.bounds();
    let mut lives_lost = 0;
    state.enemies.retain(|enemy| {
        if enemy.overlaps(&player) {
            lives_lost += enemy.kind.contact_damage();
            false
        } else {
            true
        }
    });
    if lives_lost == 0 {
        return;
    }

    state.lives -= lives_lost;
    state.player.touched = true;
    state
        .timers
        .reschedule(state.now_ms, TOUCH_CUE_MS, TimerEvent::ClearTouched);
    state.events.push(GameEvent::PlayerHit { lives_lost });
    log::debug!("Player hit: -{} lives ({} left)", lives_lost, state.lives);

    if state.lives <= 0 {
        state.enter_game_over();
    }
}

/// Catching a poke scores and shows the catch message
pub fn player_vs_items(state: &mut GameState) {
    let player = state.player.bounds();
    let before = state.items.len();
    state.items.retain(|item| !item.overlaps(&player));
    let caught = before - state.items.len();

    for _ in 0..caught {
        state.score += ITEM_SCORE;
        state.events.push(GameEvent::ItemCaught);
    }
    if caught > 0 {
        state.catch_message_frames = CATCH_MESSAGE_FRAMES;
    }
}

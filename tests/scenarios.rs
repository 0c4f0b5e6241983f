//! End-to-end gameplay scenarios driven through `tick`

use glam::Vec2;
use poke_shooter::consts::*;
use poke_shooter::sim::{
    Bullet, Direction, Enemy, EnemyKind, GameEvent, GameState, InputCommand, Item, Level,
    TickInput, TimerEvent, resolve_collisions, tick,
};

fn idle() -> TickInput {
    TickInput::default()
}

fn run(state: &mut GameState, frames: usize) {
    for _ in 0..frames {
        tick(state, &idle(), FRAME_MS);
    }
}

fn enemy_on_player(state: &GameState, kind: EnemyKind) -> Enemy {
    Enemy {
        kind,
        pos: state.player.pos,
        size: Vec2::splat(ENEMY_SIZE),
        speed: 0.0,
    }
}

#[test]
fn test_player_runs_into_right_wall() {
    let mut state = GameState::new(3);
    state.player.pos.x = 500.0;

    let right = TickInput::from(vec![InputCommand::Press(Direction::Right)]);
    tick(&mut state, &right, FRAME_MS);
    run(&mut state, 199);

    assert_eq!(state.player.pos.x, CANVAS_WIDTH - PLAYER_WIDTH);
    assert_eq!(state.player.pos.x, 944.0);
    assert!(!state.player.facing_left);
}

#[test]
fn test_release_only_stops_matching_direction() {
    let mut state = GameState::new(3);
    let left = TickInput::from(vec![InputCommand::Press(Direction::Left)]);
    tick(&mut state, &left, FRAME_MS);
    let start = state.player.pos.x;

    // Releasing the other arrow keeps us moving
    let release_right = TickInput::from(vec![InputCommand::Release(Direction::Right)]);
    tick(&mut state, &release_right, FRAME_MS);
    assert!(state.player.pos.x < start);

    let release_left = TickInput::from(vec![InputCommand::Release(Direction::Left)]);
    tick(&mut state, &release_left, FRAME_MS);
    let stopped = state.player.pos.x;
    run(&mut state, 10);
    assert_eq!(state.player.pos.x, stopped);
}

#[test]
fn test_tap_between_frames_does_not_stick() {
    let mut state = GameState::new(3);
    let x0 = state.player.pos.x;

    // Key down and up before the next animation frame
    let tap = TickInput::from(vec![
        InputCommand::Press(Direction::Right),
        InputCommand::Release(Direction::Right),
    ]);
    tick(&mut state, &tap, FRAME_MS);
    run(&mut state, 20);

    assert_eq!(state.player.vel_x, 0.0);
    assert_eq!(state.player.pos.x, x0);
}

#[test]
fn test_switching_direction_within_one_frame() {
    let mut state = GameState::new(3);
    let switch = TickInput::from(vec![
        InputCommand::Press(Direction::Left),
        InputCommand::Press(Direction::Right),
        InputCommand::Release(Direction::Left),
    ]);
    tick(&mut state, &switch, FRAME_MS);
    assert_eq!(state.player.vel_x, PLAYER_SPEED);
}

#[test]
fn test_easy_to_medium_banner_then_pause() {
    let mut state = GameState::new(11);
    state.score = LEVEL_2_SCORE;
    state.now_ms = 30_000.0;

    tick(&mut state, &idle(), FRAME_MS);
    assert_eq!(state.level(), Level::Medium);
    assert_eq!(state.snapshot().difficulty, "Medium");
    assert_eq!(state.banner_text(), Some("LEVEL 2 BRAVO"));
    assert!(state.events.contains(&GameEvent::LevelUp(Level::Medium)));
    assert!(!state.is_paused());

    // Banner shows for three seconds while play continues
    run(&mut state, 170);
    assert!(state.banner_text().is_some());
    assert!(!state.is_paused());

    run(&mut state, 15);
    assert_eq!(state.banner_text(), None);
    assert!(state.is_paused());

    // Then a three second pause
    run(&mut state, 170);
    assert!(state.is_paused());
    run(&mut state, 15);
    assert!(!state.is_paused());
    assert_eq!(state.level(), Level::Medium);
}

#[test]
fn test_medium_timeout_ends_game_with_lives_left() {
    let mut state = GameState::new(5);
    state.level = Level::Medium;
    state.score = 60;
    state.now_ms = 121_000.0;

    tick(&mut state, &idle(), FRAME_MS);
    assert!(state.is_game_over());
    assert!(state.lives() > 0);
    assert_eq!(state.level(), Level::Medium);
}

#[test]
fn test_heavy_costs_two_lives_and_flags_touch() {
    let mut state = GameState::new(5);
    let heavy = enemy_on_player(&state, EnemyKind::Heavy);
    state.enemies.push(heavy);

    resolve_collisions(&mut state);
    assert_eq!(state.lives(), INITIAL_LIVES - 2);
    assert!(state.player.touched);
    assert!(state.timers.contains(TimerEvent::ClearTouched));
    assert!(state.enemies.is_empty());

    // Touch cue clears after two seconds
    run(&mut state, 125);
    assert!(!state.player.touched);
}

#[test]
fn test_catching_item_scores_and_shows_message() {
    let mut state = GameState::new(8);
    let mut item = Item::new(state.player.pos.x);
    item.pos = state.player.pos;
    state.items.push(item);

    tick(&mut state, &idle(), FRAME_MS);
    assert_eq!(state.score(), ITEM_SCORE);
    assert!(state.catch_message_visible());
    assert!(state.events.contains(&GameEvent::ItemCaught));

    run(&mut state, CATCH_MESSAGE_FRAMES as usize);
    assert!(!state.catch_message_visible());
}

#[test]
fn test_boss_takes_ten_hits() {
    let mut state = GameState::new(2);
    state.level = Level::Medium;
    state.score = 60;
    state.boss_appeared = true;
    state.enemies.push(Enemy {
        kind: EnemyKind::Boss,
        pos: Vec2::new(0.0, -500.0),
        size: Vec2::splat(BOSS_SIZE),
        speed: 0.0,
    });

    for hit in 1..=BOSS_HP {
        state.player.bullets.push(Bullet::new(Vec2::new(100.0, 0.0)));
        resolve_collisions(&mut state);
        if hit < BOSS_HP {
            assert_eq!(state.boss_hp, BOSS_HP - hit);
            assert_eq!(state.enemies.len(), 1);
        }
    }

    assert!(state.enemies.is_empty());
    assert_eq!(state.score(), 60 + BOSS_HP + BOSS_BONUS);
    assert_eq!(state.boss_hp, BOSS_HP);
    assert!(!state.boss_appeared);
    assert!(state.events.contains(&GameEvent::BossDefeated));
}

#[test]
fn test_boss_enters_from_above_without_hitting_player() {
    let mut state = GameState::new(9);
    state.level = Level::Medium;
    state.score = 60;

    tick(&mut state, &idle(), FRAME_MS);
    assert!(state.events.contains(&GameEvent::BossSpawned));
    let boss = state
        .enemies
        .iter()
        .find(|e| e.is_boss())
        .expect("boss spawned on the first batch");
    // Spawned above the canvas, then one frame of falling
    assert!(boss.pos.y + boss.size.y < BOSS_MIN_SPEED + BOSS_SPEED_RANGE);
    assert_eq!(state.lives(), INITIAL_LIVES);
    assert!(!state.player.touched);
}

#[test]
fn test_game_over_then_restart_after_cooldown() {
    let mut state = GameState::new(21);
    state.lives = 1;
    let enemy = enemy_on_player(&state, EnemyKind::Standard);
    state.enemies.push(enemy);

    tick(&mut state, &idle(), FRAME_MS);
    assert!(state.is_game_over());
    assert!(state.events.contains(&GameEvent::GameOver));
    let frozen_enemies = state.enemies.len();

    // Keys are ignored until the summary and cool-down have both passed
    let restart = TickInput::from(vec![InputCommand::Restart]);
    tick(&mut state, &restart, FRAME_MS);
    assert!(state.is_game_over());

    run(&mut state, 305);
    assert!(state.is_paused());
    assert!(!state.restart_ready());
    assert_eq!(state.enemies.len(), frozen_enemies);

    run(&mut state, 305);
    assert!(state.restart_ready());

    tick(&mut state, &restart, FRAME_MS);
    assert!(!state.is_game_over());
    assert_eq!(state.score(), 0);
    assert_eq!(state.lives(), INITIAL_LIVES);
    assert_eq!(state.level(), Level::Easy);
    assert!(!state.is_paused());
}

#[test]
fn test_autopilot_survives_a_while() {
    let mut state = GameState::new(1234);
    for _ in 0..600 {
        let input = poke_shooter::sim::autopilot(&state);
        tick(&mut state, &input, FRAME_MS);
    }
    assert!(state.frame > 0);
    assert!(state.lives() <= INITIAL_LIVES);
    assert!(state.snapshot().elapsed_secs >= 9);
}

//! Idle/demo mode - a simple AI that plays the game
//!
//! Produces the same `TickInput` a keyboard would, so the simulation cannot
//! tell the difference.

use super::player::Direction;
use super::rect::Bounded;
use super::state::{EnemyKind, GameState};
use super::tick::{InputCommand, TickInput};
use crate::consts::*;

/// Frames between autopilot shots
const SHOT_CADENCE: u64 = 8;
/// Heavies below this line are dodged rather than fought
const DANGER_LINE: f32 = 300.0;

/// Pick this frame's input for the autopilot
pub fn autopilot(state: &GameState) -> TickInput {
    if state.is_game_over() {
        let mut input = TickInput::default();
        if state.restart_ready() {
            input.push(InputCommand::Restart);
        }
        return input;
    }

    let center = state.player.bounds().center().x;

    // Dodge a low heavy falling into our column
    let threat = state
        .enemies
        .iter()
        .filter(|e| e.kind == EnemyKind::Heavy && e.pos.y > DANGER_LINE)
        .find(|e| {
            let b = e.bounds();
            b.right() > state.player.pos.x - 10.0 && b.left() < state.player.pos.x + PLAYER_WIDTH + 10.0
        });
    if let Some(heavy) = threat {
        let away = if heavy.bounds().center().x > center {
            Direction::Left
        } else {
            Direction::Right
        };
        return TickInput::from(vec![InputCommand::Press(away), InputCommand::Jump(true)]);
    }

    // Lowest poke first, then the lowest enemy
    let target_x = state
        .items
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|item| item.bounds().center().x)
        .or_else(|| {
            state
                .enemies
                .iter()
                .filter(|e| e.pos.y + e.size.y > 0.0)
                .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
                .map(|enemy| enemy.bounds().center().x)
        });

    let direction = match target_x {
        Some(x) if x < center - PLAYER_SPEED => Direction::Left,
        Some(x) if x > center + PLAYER_SPEED => Direction::Right,
        _ => Direction::Stop,
    };

    let mut input = TickInput::from(vec![
        InputCommand::Press(direction),
        InputCommand::Jump(false),
    ]);
    if state.frame % SHOT_CADENCE == 0 {
        input.push(InputCommand::Shoot);
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Enemy, Item};
    use glam::Vec2;

    #[test]
    fn test_chases_item() {
        let mut state = GameState::new(1);
        state.items.push(Item::new(50.0));
        let input = autopilot(&state);
        assert!(input.contains(InputCommand::Press(Direction::Left)));
    }

    #[test]
    fn test_stops_under_target() {
        let mut state = GameState::new(1);
        let center = state.player.bounds().center().x;
        state.items.push(Item::new(center - ITEM_SIZE / 2.0));
        let input = autopilot(&state);
        assert!(input.contains(InputCommand::Press(Direction::Stop)));
    }

    #[test]
    fn test_dodges_low_heavy() {
        let mut state = GameState::new(1);
        state.enemies.push(Enemy {
            kind: EnemyKind::Heavy,
            pos: Vec2::new(state.player.pos.x + 40.0, 350.0),
            size: Vec2::splat(ENEMY_SIZE),
            speed: 2.0,
        });
        let input = autopilot(&state);
        assert_eq!(
            input.commands,
            vec![InputCommand::Press(Direction::Left), InputCommand::Jump(true)]
        );
    }

    #[test]
    fn test_requests_restart_when_ready() {
        let mut state = GameState::new(1);
        state.enter_game_over();
        assert!(!autopilot(&state).contains(InputCommand::Restart));
        state.restart_ready = true;
        assert!(autopilot(&state).contains(InputCommand::Restart));
    }
}

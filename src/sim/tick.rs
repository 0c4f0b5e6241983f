//! Per-frame simulation tick
//!
//! Core game loop entry point. The driver calls `tick` once per display
//! refresh with the wall-clock time since the previous call.

use super::collision::resolve_collisions;
use super::player::Direction;
use super::spawn::{spawn_enemies, spawn_items};
use super::state::GameState;
use crate::consts::CANVAS_HEIGHT;

/// One keyboard (or autopilot) action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Direction key pressed
    Press(Direction),
    /// Direction key released
    Release(Direction),
    /// Jump key pressed (`true`) or released (`false`)
    Jump(bool),
    /// Fire a bullet
    Shoot,
    /// Pause toggle
    TogglePause,
    /// Restart requested (honoured after the game-over cool-down)
    Restart,
}

/// Input commands collected since the previous tick, in arrival order.
///
/// A key that goes down and up between two frames shows up as both commands,
/// so the release is never lost.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    pub commands: Vec<InputCommand>,
}

impl TickInput {
    pub fn push(&mut self, command: InputCommand) {
        self.commands.push(command);
    }

    pub fn contains(&self, command: InputCommand) -> bool {
        self.commands.contains(&command)
    }

    /// Commands that do not steer the player (pause and restart)
    pub fn session_commands(&self) -> impl Iterator<Item = InputCommand> + '_ {
        self.commands
            .iter()
            .copied()
            .filter(|c| matches!(c, InputCommand::TogglePause | InputCommand::Restart))
    }

    /// Drop everything once the tick has consumed it
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl From<Vec<InputCommand>> for TickInput {
    fn from(commands: Vec<InputCommand>) -> Self {
        Self { commands }
    }
}

/// Negative or non-finite frame times count as no time at all
#[inline]
pub fn sanitize_elapsed(elapsed_ms: f64) -> f64 {
    if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
        elapsed_ms
    } else {
        0.0
    }
}

/// Apply input, fire due timers and advance the session by one frame
pub fn tick(state: &mut GameState, input: &TickInput, elapsed_ms: f64) {
    state.events.clear();
    state.now_ms += sanitize_elapsed(elapsed_ms);
    state.frame += 1;

    apply_input(state, input);

    for event in state.timers.take_due(state.now_ms) {
        state.fire_timer(event);
    }

    // Paused or over: the clock and timers keep going, nothing else moves
    if !state.is_running() {
        return;
    }

    state.player.update();

    spawn_enemies(state);
    for enemy in &mut state.enemies {
        enemy.fall();
    }
    state.enemies.retain(|e| e.pos.y < CANVAS_HEIGHT);

    spawn_items(state);
    for item in &mut state.items {
        item.fall();
    }
    state.items.retain(|i| i.pos.y < CANVAS_HEIGHT);

    state.catch_message_frames = state.catch_message_frames.saturating_sub(1);

    resolve_collisions(state);

    if !state.is_game_over() {
        state.check_level_transition();
    }
}

fn apply_input(state: &mut GameState, input: &TickInput) {
    for command in &input.commands {
        match *command {
            InputCommand::Press(direction) => state.handle_direction_input(direction),
            InputCommand::Release(direction) => state.release_direction(direction),
            InputCommand::Jump(pressed) => state.handle_jump_input(pressed),
            InputCommand::Shoot => state.shoot(),
            InputCommand::TogglePause => state.toggle_pause(),
            InputCommand::Restart => {
                // Whatever followed belonged to the old session
                if state.try_restart() {
                    return;
                }
            }
        }
    }
}

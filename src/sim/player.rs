//! The player character
//!
//! Walks along the ground line, jumps with simple ballistic physics and owns
//! the bullets it has fired. All motion is per frame, not per second.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::{Bounded, Rect};
use super::state::Bullet;
use crate::consts::*;
use crate::ground_line;

/// Horizontal movement command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Stop,
}

/// The player's character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal speed magnitude
    pub speed: f32,
    /// Current horizontal velocity (-speed, 0 or +speed)
    pub vel_x: f32,
    /// Current vertical velocity (negative is up)
    pub vel_y: f32,
    pub on_ground: bool,
    pub facing_left: bool,
    /// Jump key currently held (re-jumps on landing)
    pub jump_held: bool,
    /// Recently hit by an enemy (transient visual cue)
    pub touched: bool,
    /// Live bullets, oldest first
    pub bullets: Vec<Bullet>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Player standing on the ground at the horizontal middle of the canvas
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(CANVAS_WIDTH / 2.0, Self::ground_y()),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            speed: PLAYER_SPEED,
            vel_x: 0.0,
            vel_y: 0.0,
            on_ground: true,
            facing_left: false,
            jump_held: false,
            touched: false,
            bullets: Vec::new(),
        }
    }

    /// Y position at which the player's feet rest on the ground line
    #[inline]
    pub fn ground_y() -> f32 {
        ground_line() - PLAYER_HEIGHT
    }

    /// Set horizontal velocity from a direction command
    pub fn apply_input(&mut self, direction: Direction) {
        self.vel_x = match direction {
            Direction::Left => -self.speed,
            Direction::Right => self.speed,
            Direction::Stop => 0.0,
        };
    }

    /// Key released: stop only if still moving that way
    pub fn release(&mut self, direction: Direction) {
        let moving_that_way = match direction {
            Direction::Left => self.vel_x < 0.0,
            Direction::Right => self.vel_x > 0.0,
            Direction::Stop => false,
        };
        if moving_that_way {
            self.vel_x = 0.0;
        }
    }

    /// Start a jump. No-op while airborne.
    pub fn jump(&mut self) {
        if !self.on_ground {
            return;
        }
        self.vel_y = -JUMP_POWER;
        self.on_ground = false;
    }

    /// Fire a bullet from the top-center of the player
    pub fn shoot(&mut self) {
        let size = Vec2::splat(BULLET_SIZE);
        let pos = Vec2::new(self.pos.x + self.size.x / 2.0 - size.x / 2.0, self.pos.y);
        self.bullets.push(Bullet::new(pos));
    }

    /// Advance one frame: horizontal motion, bullets, jump physics, clamping
    pub fn update(&mut self) {
        self.pos.x += self.vel_x;

        for bullet in &mut self.bullets {
            bullet.advance();
        }
        self.bullets.retain(|b| !b.is_off_screen());

        if self.jump_held && self.on_ground {
            self.jump();
        }

        self.pos.y += self.vel_y;
        let ground_y = Self::ground_y();
        if self.pos.y >= ground_y {
            self.pos.y = ground_y;
            self.vel_y = 0.0;
            self.on_ground = true;
        } else {
            self.vel_y += GRAVITY;
        }
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel_y = self.vel_y.max(0.0);
        }

        self.pos.x = self.pos.x.clamp(0.0, CANVAS_WIDTH - self.size.x);

        // Facing persists while standing still
        if self.vel_x < 0.0 {
            self.facing_left = true;
        } else if self.vel_x > 0.0 {
            self.facing_left = false;
        }
    }
}

impl Bounded for Player {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

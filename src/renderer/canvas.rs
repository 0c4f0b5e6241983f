//! Canvas 2D renderer
//!
//! Draws a `GameState` with sprite images. Images that have not finished
//! loading are skipped for that frame.

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::consts::*;
use crate::ground_line;
use crate::sim::{EnemyKind, GameState, Level};

const GROUND_COLOR: &str = "#8B4513";

/// Sprite sheet locations, relative to the page
mod assets {
    pub const BACKGROUNDS: [&str; 3] = [
        "images/back.jpg",
        "images/forest-back.jpg",
        "images/space-back.jpg",
    ];
    pub const PLAYER: &str = "images/head.png";
    pub const PLAYER_TOUCHED: &str = "images/head-touch.png";
    pub const BULLET: &str = "images/bullet.png";
    pub const ITEM: &str = "images/poke.png";
    pub const BOSS: &str = "images/team.png";
    pub const ENEMIES: [&str; 3] = ["images/enemy.png", "images/enemy2.png", "images/enemy3.png"];
}

fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let img = HtmlImageElement::new()?;
    img.set_src(src);
    Ok(img)
}

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    backgrounds: [HtmlImageElement; 3],
    player: HtmlImageElement,
    player_touched: HtmlImageElement,
    bullet: HtmlImageElement,
    item: HtmlImageElement,
    boss: HtmlImageElement,
    enemies: [HtmlImageElement; 3],
}

impl CanvasRenderer {
    /// Start loading every sprite
    pub fn new(ctx: CanvasRenderingContext2d) -> Result<Self, JsValue> {
        let [b0, b1, b2] = assets::BACKGROUNDS;
        let [e0, e1, e2] = assets::ENEMIES;
        Ok(Self {
            ctx,
            backgrounds: [load_image(b0)?, load_image(b1)?, load_image(b2)?],
            player: load_image(assets::PLAYER)?,
            player_touched: load_image(assets::PLAYER_TOUCHED)?,
            bullet: load_image(assets::BULLET)?,
            item: load_image(assets::ITEM)?,
            boss: load_image(assets::BOSS)?,
            enemies: [load_image(e0)?, load_image(e1)?, load_image(e2)?],
        })
    }

    fn background(&self, level: Level) -> &HtmlImageElement {
        &self.backgrounds[usize::from(level.number() - 1)]
    }

    fn enemy_sprite(&self, kind: EnemyKind) -> &HtmlImageElement {
        match kind {
            EnemyKind::Standard => &self.enemies[0],
            EnemyKind::Scout => &self.enemies[1],
            EnemyKind::Heavy => &self.enemies[2],
            EnemyKind::Boss => &self.boss,
        }
    }

    fn draw(&self, img: &HtmlImageElement, x: f32, y: f32, w: f32, h: f32) -> Result<(), JsValue> {
        if !img.complete() || img.natural_width() == 0 {
            return Ok(());
        }
        self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img,
            f64::from(x),
            f64::from(y),
            f64::from(w),
            f64::from(h),
        )
    }

    /// Draw one frame
    pub fn render(&self, state: &GameState) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let (w, h) = (CANVAS_WIDTH, CANVAS_HEIGHT);
        ctx.clear_rect(0.0, 0.0, f64::from(w), f64::from(h));

        self.draw(self.background(state.level), 0.0, 0.0, w, h)?;
        ctx.set_fill_style_str(GROUND_COLOR);
        ctx.fill_rect(
            0.0,
            f64::from(ground_line()),
            f64::from(w),
            f64::from(GROUND_HEIGHT),
        );

        self.render_player(state)?;

        for enemy in &state.enemies {
            let sprite = self.enemy_sprite(enemy.kind);
            self.draw(sprite, enemy.pos.x, enemy.pos.y, enemy.size.x, enemy.size.y)?;
        }
        for item in &state.items {
            self.draw(&self.item, item.pos.x, item.pos.y, item.size.x, item.size.y)?;
        }

        if state.catch_message_visible() {
            ctx.set_font("20px Arial");
            ctx.set_fill_style_str("lime");
            ctx.fill_text("CATCH THEM ALL!", f64::from(w / 2.0 - 100.0), 30.0)?;
        }

        if let Some(text) = state.banner_text() {
            ctx.set_font("48px Arial");
            ctx.set_fill_style_str("gold");
            ctx.fill_text(text, f64::from(w / 2.0 - 170.0), f64::from(h / 3.0))?;
        }

        if state.is_game_over() {
            ctx.set_font("48px Arial");
            ctx.set_fill_style_str("red");
            let x = f64::from(w / 2.0 - 150.0);
            ctx.fill_text("GAME OVER", x, f64::from(h / 2.0 - 20.0))?;
            ctx.fill_text(
                &format!("Final Score: {}", state.score()),
                x,
                f64::from(h / 2.0 + 40.0),
            )?;
            if state.restart_ready() {
                ctx.set_font("20px Arial");
                ctx.fill_text("Press any key to restart", x, f64::from(h / 2.0 + 80.0))?;
            }
        } else if state.is_paused() && state.banner.is_none() {
            ctx.set_font("32px Arial");
            ctx.set_fill_style_str("white");
            ctx.fill_text("PAUSED", f64::from(w / 2.0 - 60.0), f64::from(h / 2.0))?;
        }

        Ok(())
    }

    fn render_player(&self, state: &GameState) -> Result<(), JsValue> {
        let player = &state.player;
        let sprite = if player.touched {
            &self.player_touched
        } else {
            &self.player
        };
        if player.facing_left {
            // Mirror around the player's own box
            self.ctx.save();
            self.ctx.scale(-1.0, 1.0)?;
            let result = self.draw(
                sprite,
                -player.pos.x - player.size.x,
                player.pos.y,
                player.size.x,
                player.size.y,
            );
            self.ctx.restore();
            result?;
        } else {
            self.draw(sprite, player.pos.x, player.pos.y, player.size.x, player.size.y)?;
        }

        for bullet in &player.bullets {
            self.draw(&self.bullet, bullet.pos.x, bullet.pos.y, bullet.size.x, bullet.size.y)?;
        }
        Ok(())
    }
}

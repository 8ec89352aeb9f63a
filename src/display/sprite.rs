//! Text-art sprites from the asset directory.
//!
//! Enemy sprites are per level; a level without one (or past the end of the
//! sprite list) falls back to the primitive disc.

use std::io::Write;

use crossterm::style::Color;

use super::{blit, PrimitiveRenderer, Renderer, Viewport};
use crate::assets::AssetSet;
use crate::entities::{Boss, Bullet, Enemy, Player};

const C_BACKGROUND: Color = Color::DarkGrey;
const C_PLAYER: Color = Color::White;
const C_BULLET: Color = Color::Cyan;
const C_ENEMY: Color = Color::Green;
const C_BOSS: Color = Color::Magenta;

pub struct SpriteRenderer {
    assets: AssetSet,
    fallback: PrimitiveRenderer,
}

impl SpriteRenderer {
    pub fn new(assets: AssetSet) -> Self {
        Self {
            assets,
            fallback: PrimitiveRenderer,
        }
    }
}

impl<W: Write> Renderer<W> for SpriteRenderer {
    fn name(&self) -> &'static str {
        "sprite"
    }

    fn draw_background(&self, out: &mut W, vp: &Viewport) -> std::io::Result<()> {
        match &self.assets.background {
            Some(bg) => blit(out, vp, bg, (0.0, 0.0), C_BACKGROUND),
            None => Renderer::<W>::draw_background(&self.fallback, out, vp),
        }
    }

    fn draw_player(&self, out: &mut W, vp: &Viewport, player: &Player) -> std::io::Result<()> {
        match &self.assets.mech {
            Some(mech) => blit(out, vp, mech, (player.x, player.y), C_PLAYER),
            None => self.fallback.draw_player(out, vp, player),
        }
    }

    fn draw_bullet(&self, out: &mut W, vp: &Viewport, bullet: &Bullet) -> std::io::Result<()> {
        match &self.assets.bullet {
            Some(sprite) => blit(out, vp, sprite, (bullet.x, bullet.y), C_BULLET),
            None => self.fallback.draw_bullet(out, vp, bullet),
        }
    }

    fn draw_enemy(
        &self,
        out: &mut W,
        vp: &Viewport,
        enemy: &Enemy,
        level: u32,
    ) -> std::io::Result<()> {
        match self.assets.enemy_sprite(level) {
            Some(sprite) => blit(out, vp, sprite, (enemy.x, enemy.y), C_ENEMY),
            None => self.fallback.draw_enemy(out, vp, enemy, level),
        }
    }

    fn draw_boss(&self, out: &mut W, vp: &Viewport, boss: &Boss) -> std::io::Result<()> {
        match &self.assets.boss {
            Some(sprite) => blit(out, vp, sprite, (boss.x, boss.y), C_BOSS),
            None => self.fallback.draw_boss(out, vp, boss),
        }
    }
}

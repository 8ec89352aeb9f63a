//! Vector-style fallback: every entity as a solid shape of block glyphs.

use std::io::Write;

use crossterm::style::Color;

use super::{fill_circle, fill_rect, fill_triangle, Renderer, Viewport};
use crate::entities::{Boss, Bullet, Enemy, Player};

const C_PLAYER: Color = Color::Grey;
const C_BULLET: Color = Color::White;
const C_ENEMY: Color = Color::Red;
const C_BOSS: Color = Color::Yellow;

/// Draws without any assets: a triangle for the mech, a bar for each
/// bullet, discs for enemies and the boss.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrimitiveRenderer;

impl<W: Write> Renderer<W> for PrimitiveRenderer {
    fn name(&self) -> &'static str {
        "primitive"
    }

    fn draw_background(&self, _out: &mut W, _vp: &Viewport) -> std::io::Result<()> {
        // The cleared screen is the background.
        Ok(())
    }

    fn draw_player(&self, out: &mut W, vp: &Viewport, player: &Player) -> std::io::Result<()> {
        fill_triangle(
            out,
            vp,
            (player.x, player.y, player.size, player.size),
            '█',
            C_PLAYER,
        )
    }

    fn draw_bullet(&self, out: &mut W, vp: &Viewport, bullet: &Bullet) -> std::io::Result<()> {
        fill_rect(
            out,
            vp,
            (bullet.x, bullet.y, bullet.width, bullet.height),
            '┃',
            C_BULLET,
        )
    }

    fn draw_enemy(
        &self,
        out: &mut W,
        vp: &Viewport,
        enemy: &Enemy,
        _level: u32,
    ) -> std::io::Result<()> {
        fill_circle(out, vp, enemy.center(), enemy.radius, '●', C_ENEMY)
    }

    fn draw_boss(&self, out: &mut W, vp: &Viewport, boss: &Boss) -> std::io::Result<()> {
        fill_circle(out, vp, boss.center(), boss.radius, '█', C_BOSS)
    }
}

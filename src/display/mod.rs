//! Rendering layer.  All terminal I/O for a frame lives here.
//!
//! Renderers receive a mutable writer and an immutable view of the game
//! state.  No game logic is performed; this module only translates world
//! coordinates into terminal cells and cells into crossterm commands.
//!
//! Screen layout:
//!   row 0          HUD
//!   row 1          top border
//!   rows 2..h-2    play area (world is scaled onto it)
//!   row h-2        bottom border
//!   row h-1        controls hint

mod primitive;
mod sprite;

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

pub use primitive::PrimitiveRenderer;
pub use sprite::SpriteRenderer;

use crate::assets::{AssetSet, Sprite};
use crate::config::Rules;
use crate::entities::{Boss, Bullet, Enemy, GameState, Player};
use crate::highscores::HighScores;
use crate::progression::{phase, Phase};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_LEVEL: Color = Color::White;
const C_HUD_KILLS: Color = Color::Yellow;
const C_HUD_BOSS: Color = Color::Red;
const C_HUD_BEST: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;

const FIRST_PLAY_COL: i32 = 1;
const FIRST_PLAY_ROW: i32 = 2;

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps world coordinates (the configured play area) onto the terminal grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    world_width: f32,
    world_height: f32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, rules: &Rules) -> Self {
        Self {
            cols,
            rows,
            world_width: rules.width,
            world_height: rules.height,
        }
    }

    /// Number of columns inside the side walls.
    pub fn play_cols(&self) -> i32 {
        i32::from(self.cols) - 2
    }

    /// Number of rows between the borders.
    pub fn play_rows(&self) -> i32 {
        i32::from(self.rows) - 4
    }

    /// Column that world `x` falls into.  May lie outside the play area.
    pub fn col_of(&self, x: f32) -> i32 {
        FIRST_PLAY_COL + (x / self.world_width * self.play_cols() as f32).floor() as i32
    }

    /// Row that world `y` falls into.  May lie outside the play area.
    pub fn row_of(&self, y: f32) -> i32 {
        FIRST_PLAY_ROW + (y / self.world_height * self.play_rows() as f32).floor() as i32
    }

    pub fn in_play(&self, col: i32, row: i32) -> bool {
        (FIRST_PLAY_COL..FIRST_PLAY_COL + self.play_cols()).contains(&col)
            && (FIRST_PLAY_ROW..FIRST_PLAY_ROW + self.play_rows()).contains(&row)
    }

    /// World coordinates of a cell's centre.
    pub fn cell_center(&self, col: i32, row: i32) -> (f32, f32) {
        let cw = self.world_width / self.play_cols().max(1) as f32;
        let ch = self.world_height / self.play_rows().max(1) as f32;
        (
            (col - FIRST_PLAY_COL) as f32 * cw + cw / 2.0,
            (row - FIRST_PLAY_ROW) as f32 * ch + ch / 2.0,
        )
    }
}

/// Move to a cell known to be on screen.
fn move_to<W: Write>(out: &mut W, col: i32, row: i32) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(col.max(0) as u16, row.max(0) as u16))?;
    Ok(())
}

// ── Shape helpers shared by both renderers ───────────────────────────────────

/// Fill every play cell covering the world rectangle (at least one cell).
fn fill_rect<W: Write>(
    out: &mut W,
    vp: &Viewport,
    (x, y, w, h): (f32, f32, f32, f32),
    glyph: char,
    color: Color,
) -> std::io::Result<()> {
    let (c0, r0) = (vp.col_of(x), vp.row_of(y));
    let c1 = vp.col_of(x + w).max(c0 + 1);
    let r1 = vp.row_of(y + h).max(r0 + 1);
    out.queue(style::SetForegroundColor(color))?;
    for row in r0..r1 {
        for col in c0..c1 {
            if vp.in_play(col, row) {
                move_to(out, col, row)?;
                out.queue(Print(glyph))?;
            }
        }
    }
    Ok(())
}

/// Fill the cells whose centres lie inside the circle.  A circle smaller than
/// a cell still shows up as the cell holding its centre.
fn fill_circle<W: Write>(
    out: &mut W,
    vp: &Viewport,
    (cx, cy): (f32, f32),
    radius: f32,
    glyph: char,
    color: Color,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(color))?;
    let mut drawn = false;
    for row in vp.row_of(cy - radius)..=vp.row_of(cy + radius) {
        for col in vp.col_of(cx - radius)..=vp.col_of(cx + radius) {
            let (wx, wy) = vp.cell_center(col, row);
            if (wx - cx).hypot(wy - cy) <= radius && vp.in_play(col, row) {
                move_to(out, col, row)?;
                out.queue(Print(glyph))?;
                drawn = true;
            }
        }
    }
    let (col, row) = (vp.col_of(cx), vp.row_of(cy));
    if !drawn && vp.in_play(col, row) {
        move_to(out, col, row)?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

/// Upward-pointing triangle filling the world rectangle.
fn fill_triangle<W: Write>(
    out: &mut W,
    vp: &Viewport,
    (x, y, w, h): (f32, f32, f32, f32),
    glyph: char,
    color: Color,
) -> std::io::Result<()> {
    let (c0, r0) = (vp.col_of(x), vp.row_of(y));
    let c1 = vp.col_of(x + w).max(c0 + 1);
    let r1 = vp.row_of(y + h).max(r0 + 1);
    let mid = (c0 + c1) as f32 / 2.0;
    let rows = (r1 - r0) as f32;

    out.queue(style::SetForegroundColor(color))?;
    for row in r0..r1 {
        let half = (c1 - c0) as f32 * ((row - r0 + 1) as f32 / rows) / 2.0;
        for col in c0..c1 {
            let centre = col as f32 + 0.5;
            if (centre - mid).abs() <= half.max(0.5) && vp.in_play(col, row) {
                move_to(out, col, row)?;
                out.queue(Print(glyph))?;
            }
        }
    }
    Ok(())
}

/// Print a sprite with its top-left cell at the world point.  Spaces are
/// transparent and anything outside the play area is clipped.
fn blit<W: Write>(
    out: &mut W,
    vp: &Viewport,
    sprite: &Sprite,
    (x, y): (f32, f32),
    color: Color,
) -> std::io::Result<()> {
    let (c0, r0) = (vp.col_of(x), vp.row_of(y));
    out.queue(style::SetForegroundColor(color))?;
    for (dy, line) in sprite.rows.iter().enumerate() {
        let row = r0 + dy as i32;
        for (dx, ch) in line.chars().enumerate() {
            let col = c0 + dx as i32;
            if ch != ' ' && vp.in_play(col, row) {
                move_to(out, col, row)?;
                out.queue(Print(ch))?;
            }
        }
    }
    Ok(())
}

// ── Renderer capability ───────────────────────────────────────────────────────

/// Everything a renderer needs for one frame.
pub struct Frame<'a> {
    pub state: &'a GameState,
    pub viewport: Viewport,
    pub best_score: u32,
}

/// A way of drawing entities.  Chosen once at startup; the frame skeleton
/// (border, HUD, hint) is shared.
pub trait Renderer<W: Write> {
    fn name(&self) -> &'static str;

    fn draw_background(&self, out: &mut W, vp: &Viewport) -> std::io::Result<()>;
    fn draw_player(&self, out: &mut W, vp: &Viewport, player: &Player) -> std::io::Result<()>;
    fn draw_bullet(&self, out: &mut W, vp: &Viewport, bullet: &Bullet) -> std::io::Result<()>;
    fn draw_enemy(
        &self,
        out: &mut W,
        vp: &Viewport,
        enemy: &Enemy,
        level: u32,
    ) -> std::io::Result<()>;
    fn draw_boss(&self, out: &mut W, vp: &Viewport, boss: &Boss) -> std::io::Result<()>;

    /// Render one complete frame.
    fn render(&self, out: &mut W, frame: &Frame) -> std::io::Result<()> {
        let state = frame.state;
        let vp = &frame.viewport;
        out.queue(terminal::Clear(terminal::ClearType::All))?;

        self.draw_background(out, vp)?;
        draw_border(out, vp)?;

        for enemy in &state.enemies {
            self.draw_enemy(out, vp, enemy, state.level)?;
        }
        if let Some(boss) = &state.boss {
            self.draw_boss(out, vp, boss)?;
        }
        for bullet in &state.bullets {
            self.draw_bullet(out, vp, bullet)?;
        }
        self.draw_player(out, vp, &state.player)?;

        draw_hud(out, frame)?;
        draw_controls_hint(out, vp)?;

        // Park cursor in a harmless spot and flush
        out.queue(style::ResetColor)?;
        out.queue(cursor::MoveTo(0, vp.rows.saturating_sub(1)))?;
        out.flush()?;
        Ok(())
    }
}

/// Pick the renderer for the session: sprites when the core sprites loaded,
/// primitive shapes otherwise.
pub fn select_renderer<W: Write>(assets: AssetSet) -> Box<dyn Renderer<W>> {
    let renderer: Box<dyn Renderer<W>> = if assets.has_core_sprites() {
        Box::new(SpriteRenderer::new(assets))
    } else {
        Box::new(PrimitiveRenderer)
    };
    log::info!("Using {} renderer", renderer.name());
    renderer
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, vp: &Viewport) -> std::io::Result<()> {
    let w = vp.cols as usize;
    let h = vp.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(vp.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, frame: &Frame) -> std::io::Result<()> {
    let state = frame.state;
    let max_levels = state.rules.max_levels;

    // Level and kills — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(format!("Level: {:>2}", state.level.min(max_levels))))?;
    out.queue(style::SetForegroundColor(C_HUD_KILLS))?;
    out.queue(Print(format!("  Kills: {:>5}", state.kills)))?;

    // Phase / boss health — centre
    let (centre, color) = match phase(state) {
        Phase::Wave(_) => (format!("[ {} left ]", state.enemies.len()), C_HUD_LEVEL),
        Phase::BossFight => {
            let left = state
                .boss
                .as_ref()
                .map_or(0, |b| state.rules.boss_hits_to_kill.saturating_sub(b.hits));
            (format!("[ BOSS {left:>3} ]"), C_HUD_BOSS)
        }
        Phase::Finished => ("[ CLEAR ]".to_string(), C_HUD_KILLS),
    };
    let cx = (frame.viewport.cols / 2).saturating_sub(centre.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(cx, 0))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(&centre))?;

    // Best stored score — right
    let best = format!("Best: {}", frame.best_score);
    let rx = frame
        .viewport
        .cols
        .saturating_sub(best.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_BEST))?;
    out.queue(Print(&best))?;

    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, vp: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, vp.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── End-of-session summary ────────────────────────────────────────────────────

/// Full-screen summary shown after the session: outcome, final kills and
/// the updated high-score table.
pub fn render_summary<W: Write>(
    out: &mut W,
    vp: &Viewport,
    state: &GameState,
    table: &HighScores,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (banner, banner_color) = if phase(state) == Phase::Finished {
        ("║  MISSION COMPLETE  ║", Color::Green)
    } else {
        ("║   SESSION  ENDED   ║", Color::Red)
    };
    let kills_line = format!("Final Kills: {}", state.kills);

    let mut lines: Vec<(String, Color)> = vec![
        ("╔════════════════════╗".to_string(), banner_color),
        (banner.to_string(), banner_color),
        ("╚════════════════════╝".to_string(), banner_color),
        (kills_line, Color::Yellow),
        (String::new(), Color::White),
        ("High Scores".to_string(), Color::Cyan),
    ];
    for (rank, score) in table.scores().iter().enumerate() {
        let color = if *score == state.kills && state.kills > 0 {
            Color::Yellow
        } else {
            Color::White
        };
        lines.push((format!("{}. {:>6}", rank + 1, score), color));
    }
    lines.push((String::new(), Color::White));
    lines.push(("Press any key".to_string(), Color::DarkGrey));

    let cx = vp.cols / 2;
    let start_row = (vp.rows / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg))?;
    }

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

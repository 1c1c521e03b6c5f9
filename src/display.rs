//! Rendering layer — all terminal I/O lives here.
//!
//! The world is laid out in pixels; this module scales it onto whatever
//! terminal grid is available.  No game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use space_shooter::assets::{Shape, Sprite, Sprites};
use space_shooter::compute::GameWorld;
use space_shooter::entities::{Entity, GameStatus};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

// ── Field → terminal mapping ──────────────────────────────────────────────────

/// Play area inside the border: columns `1..cols-1`, rows `2..rows-2`.
struct Viewport {
    cols: u16,
    rows: u16,
    field_w: i32,
    field_h: i32,
}

impl Viewport {
    fn new(cols: u16, rows: u16, world: &GameWorld) -> Self {
        let cfg = world.config();
        Viewport { cols, rows, field_w: cfg.screen_width, field_h: cfg.screen_height }
    }

    fn inner_w(&self) -> i32 {
        i32::from(self.cols.saturating_sub(2)).max(1)
    }

    fn inner_h(&self) -> i32 {
        i32::from(self.rows.saturating_sub(4)).max(1)
    }

    /// Top-left cell of a pixel position (may fall outside the play area).
    fn cell(&self, x: i32, y: i32) -> (i32, i32) {
        (
            1 + (x * self.inner_w()).div_euclid(self.field_w),
            2 + (y * self.inner_h()).div_euclid(self.field_h),
        )
    }

    /// Cells covered by a pixel extent; never less than one.
    fn span(&self, w: i32, h: i32) -> (i32, i32) {
        (
            (w * self.inner_w() / self.field_w).max(1),
            (h * self.inner_h() / self.field_h).max(1),
        )
    }

    fn contains(&self, col: i32, row: i32) -> bool {
        col >= 1 && col <= self.inner_w() && row >= 2 && row < 2 + self.inner_h()
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, world: &GameWorld, sprites: &Sprites) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let view = Viewport::new(cols, rows, world);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, &view)?;
    draw_hud(out, world)?;

    for enemy in &world.enemies {
        draw_entity(out, &view, enemy, &sprites.enemy)?;
    }
    for projectile in &world.projectiles {
        draw_entity(out, &view, projectile, &sprites.projectile)?;
    }
    draw_entity(out, &view, &world.player, &sprites.player)?;

    draw_controls_hint(out, &view)?;

    if world.status() == GameStatus::GameOver {
        draw_game_over(out, &view, world.score())?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let h = view.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, world: &GameWorld) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>6}", world.score())))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_entity<W: Write>(
    out: &mut W,
    view: &Viewport,
    entity: &Entity,
    sprite: &Sprite,
) -> std::io::Result<()> {
    let (col, row) = view.cell(entity.x, entity.y);
    out.queue(style::SetForegroundColor(sprite.color))?;

    match &sprite.shape {
        Shape::Art(lines) => {
            for (dy, line) in lines.iter().enumerate() {
                let r = row + dy as i32;
                for (dx, ch) in line.chars().enumerate() {
                    let c = col + dx as i32;
                    if ch != ' ' && view.contains(c, r) {
                        out.queue(cursor::MoveTo(c as u16, r as u16))?;
                        out.queue(Print(ch))?;
                    }
                }
            }
        }
        Shape::Block => {
            let (w, h) = view.span(entity.w, entity.h);
            for r in row..row + h {
                for c in col..col + w {
                    if view.contains(c, r) {
                        out.queue(cursor::MoveTo(c as u16, r as u16))?;
                        out.queue(Print('█'))?;
                    }
                }
            }
        }
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → ↑ ↓ / WASD : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, view: &Viewport, score: u32) -> std::io::Result<()> {
    let score_line = format!("Your Score: {:>6}", score);
    let lines: [(&str, Color); 6] = [
        ("╔════════════════════════╗", Color::Red),
        ("║       GAME  OVER       ║", Color::Red),
        ("╚════════════════════════╝", Color::Red),
        (&score_line, Color::White),
        ("Do you want to play again?", Color::Yellow),
        ("Y / Enter - Yes    N - No", Color::White),
    ];

    let cx = view.cols / 2;
    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}

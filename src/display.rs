//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable snapshot of the
//! game state.  No game logic is performed; this module scales the fixed
//! pixel-space simulation to the current terminal size and translates state
//! into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use coin_collector::compute::game_over;
use coin_collector::entities::{GameState, SpriteKind};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;
const C_ROBOT: Color = Color::White;
const C_COIN: Color = Color::Yellow;
const C_MONSTER: Color = Color::Red;
const C_OVERLAY: Color = Color::Red;

/// Terminal face of each sprite kind: fill glyph + colour.
fn sprite_face(kind: SpriteKind) -> (char, Color) {
    match kind {
        SpriteKind::Robot => ('█', C_ROBOT),
        SpriteKind::Coin => ('●', C_COIN),
        SpriteKind::Monster => ('▓', C_MONSTER),
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hints(out, cols)?;
    draw_hud(out, state, cols)?;

    for object in &state.coins.objects {
        draw_sprite(out, state, SpriteKind::Coin, object.x, object.y, cols, rows)?;
    }
    for object in &state.monsters.objects {
        draw_sprite(out, state, SpriteKind::Monster, object.x, object.y, cols, rows)?;
    }
    draw_sprite(
        out,
        state,
        SpriteKind::Robot,
        state.player.x,
        state.player.y,
        cols,
        rows,
    )?;

    if game_over(state) {
        draw_game_over(out, cols, rows)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Coordinate scaling ────────────────────────────────────────────────────────

/// Map a simulation-pixel coordinate onto terminal cells.
fn scale(v: i32, span: i32, cells: u16) -> i32 {
    (v as i64 * cells as i64 / span as i64) as i32
}

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Draw one sprite as a block of glyphs covering its scaled rect, clipped
/// at the screen edges (freshly spawned objects sit above the top row).
fn draw_sprite<W: Write>(
    out: &mut W,
    state: &GameState,
    kind: SpriteKind,
    x: i32,
    y: i32,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let size = state.sprites.size(kind);
    let (glyph, color) = sprite_face(kind);

    let cx = scale(x, state.width, cols);
    let cy = scale(y, state.height, rows);
    let cw = (scale(x + size.width, state.width, cols) - cx).max(1);
    let ch = (scale(y + size.height, state.height, rows) - cy).max(1);

    out.queue(style::SetForegroundColor(color))?;
    for r in 0..ch {
        let row = cy + r;
        if row < 0 || row >= rows as i32 {
            continue;
        }
        let col = cx.max(0);
        let width = cw.min(cols as i32 - col);
        if width <= 0 {
            continue;
        }
        out.queue(cursor::MoveTo(col as u16, row as u16))?;
        out.queue(Print(glyph.to_string().repeat(width as usize)))?;
    }
    Ok(())
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, cols: u16) -> std::io::Result<()> {
    let score_str = format!("Score: {}", state.score);
    let hearts = "♥ ".repeat(state.player.lives as usize);
    let lives_str = format!("Lives: {}", hearts.trim_end());

    let sx = cols.saturating_sub(score_str.chars().count() as u16 + 2);
    out.queue(cursor::MoveTo(sx, 1))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(&score_str))?;

    let lx = cols.saturating_sub(lives_str.chars().count() as u16 + 2);
    out.queue(cursor::MoveTo(lx, 2))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

/// Key hints, centred on the first and third horizontal quarters.
fn draw_hints<W: Write>(out: &mut W, cols: u16) -> std::io::Result<()> {
    let new_game = "F1 = New game";
    let exit = "Esc = Exit game";

    out.queue(style::SetForegroundColor(C_HINT))?;
    let nx = (cols / 4).saturating_sub(new_game.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(nx, 0))?;
    out.queue(Print(new_game))?;

    let ex = (cols / 4 * 3).saturating_sub(exit.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(ex, 0))?;
    out.queue(Print(exit))?;

    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, cols: u16, rows: u16) -> std::io::Result<()> {
    let lines = [
        "╔══════════════════╗",
        "║    GAME  OVER    ║",
        "╚══════════════════╝",
    ];
    let hint = "F1 - New game   Esc - Quit";

    let cx = cols / 2;
    let start_row = (rows / 2).saturating_sub(2);

    out.queue(style::SetForegroundColor(C_OVERLAY))?;
    for (i, msg) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(*msg))?;
    }

    out.queue(style::SetForegroundColor(Color::White))?;
    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, start_row + lines.len() as u16))?;
    out.queue(Print(hint))?;

    Ok(())
}

/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use starfall::entities::{
    Bullet, BulletOwner, Enemy, GameState, GameStatus, PowerUp, PowerUpKind,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_ENEMY_BASIC: Color = Color::Green;
const C_ENEMY_TOUGH: Color = Color::Red;
const C_BULLET_PLAYER: Color = Color::Cyan;
const C_BULLET_ENEMY: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;
const C_POWER_SHIELD: Color = Color::Green;
const C_POWER_SPEED: Color = Color::Cyan;
const C_POWER_TRIPLE: Color = Color::Yellow;
const C_POWERUP_ACTIVE: Color = Color::Yellow;

/// Nearest cell for a fractional coordinate.
fn cell(v: f32) -> i32 {
    v.round() as i32
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, state)?;
    draw_hud(out, state)?;

    for enemy in &state.enemies {
        draw_enemy(out, enemy, state.height as i32 - 2)?;
    }
    for power_up in &state.power_ups {
        draw_power_up(out, power_up)?;
    }
    for bullet in &state.bullets {
        draw_bullet(out, bullet)?;
    }

    draw_player(out, state)?;
    draw_controls_hint(out, state)?;

    match state.status {
        GameStatus::Paused => draw_paused(out, state)?,
        GameStatus::GameOver => draw_game_over(out, state)?,
        GameStatus::Playing => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, state.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let w = state.width as usize;
    let h = state.height;

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
        out.queue(cursor::MoveTo(state.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    // Score and high score — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    if state.high_score > 0 {
        out.queue(Print(format!(
            "Score:{:>6}  Hi:{:>6}",
            state.score, state.high_score
        )))?;
    } else {
        out.queue(Print(format!("Score:{:>6}", state.score)))?;
    }

    // Wave — centre
    let wave_str = if state.wave > 0 {
        format!("[ WAVE {:>2} ]", state.wave)
    } else {
        "[ GET READY ]".to_string()
    };
    let wave_color = match state.wave {
        0..=2 => Color::Green,
        3..=5 => Color::Yellow,
        _ => Color::Red,
    };
    let wx = (state.width / 2).saturating_sub(wave_str.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(wx, 0))?;
    out.queue(style::SetForegroundColor(wave_color))?;
    out.queue(Print(&wave_str))?;

    // Active power-up indicator + lives — right side, right-aligned
    let power_tag = match &state.player.power_up {
        Some((PowerUpKind::Shield, frames)) => {
            format!("[◆ SHIELD {:>2}s] ", frames / 30 + 1)
        }
        Some((PowerUpKind::SpeedBoost, frames)) => {
            format!("[» SPEED  {:>2}s] ", frames / 30 + 1)
        }
        Some((PowerUpKind::TripleShot, frames)) => {
            format!("[★ TRIPLE {:>2}s] ", frames / 30 + 1)
        }
        None => String::new(),
    };
    let hearts: String = "♥".repeat(state.player.lives as usize);
    let lives_str = format!("Lives:{}", hearts);
    let right_str = format!("{}{}", power_tag, lives_str);

    let rx = state
        .width
        .saturating_sub(right_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;

    if !power_tag.is_empty() {
        out.queue(style::SetForegroundColor(C_POWERUP_ACTIVE))?;
        out.queue(Print(&power_tag))?;
    }
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    // 2-row, 3-col sprite:
    //   ▲       ← tip
    //  /█\      ← fuselage + wings
    let x = cell(state.player.body.x);
    let y = cell(state.player.body.y);
    out.queue(style::SetForegroundColor(C_PLAYER))?;

    out.queue(cursor::MoveTo(x as u16, y as u16))?;
    out.queue(Print("▲"))?;

    let wing_y = y + 1;
    if wing_y < state.height as i32 - 2 {
        out.queue(cursor::MoveTo((x - 1).max(1) as u16, wing_y as u16))?;
        out.queue(Print("/█\\"))?;
    }

    Ok(())
}

fn draw_enemy<W: Write>(
    out: &mut W,
    enemy: &Enemy,
    play_bottom: i32, // bottom border row (= height - 2)
) -> std::io::Result<()> {
    let x = cell(enemy.body.x);
    let y = cell(enemy.body.y);
    if y < 2 || y >= play_bottom {
        return Ok(()); // above the playfield or clipping the bottom border
    }
    let lx = (x - 1).max(0) as u16;
    if enemy.health >= 2 {
        // Tough (later-wave) enemy:
        //   (◎)    ← glowing eye
        //   ╰─╯    ← tentacle arc
        out.queue(style::SetForegroundColor(C_ENEMY_TOUGH))?;
        out.queue(cursor::MoveTo(lx, y as u16))?;
        out.queue(Print("(◎)"))?;
        if y + 1 < play_bottom {
            out.queue(cursor::MoveTo(lx, (y + 1) as u16))?;
            out.queue(Print("╰─╯"))?;
        }
    } else {
        // Basic enemy:
        //   «▼»    ← swept-back wings
        //   ╚═╝    ← engine block
        out.queue(style::SetForegroundColor(C_ENEMY_BASIC))?;
        out.queue(cursor::MoveTo(lx, y as u16))?;
        out.queue(Print("«▼»"))?;
        if y + 1 < play_bottom {
            out.queue(cursor::MoveTo(lx, (y + 1) as u16))?;
            out.queue(Print("╚═╝"))?;
        }
    }
    Ok(())
}

fn draw_bullet<W: Write>(out: &mut W, bullet: &Bullet) -> std::io::Result<()> {
    let x = cell(bullet.body.x);
    let y = cell(bullet.body.y);
    if y < 2 {
        return Ok(());
    }
    out.queue(cursor::MoveTo(x as u16, y as u16))?;
    match bullet.owner {
        BulletOwner::Player => {
            out.queue(style::SetForegroundColor(C_BULLET_PLAYER))?;
            // Outer triple-shot bullets drift sideways; slant them
            let glyph = if bullet.body.vx < 0.0 {
                "\\"
            } else if bullet.body.vx > 0.0 {
                "/"
            } else {
                "║"
            };
            out.queue(Print(glyph))?;
        }
        BulletOwner::Enemy => {
            out.queue(style::SetForegroundColor(C_BULLET_ENEMY))?;
            out.queue(Print("↓"))?;
        }
    }
    Ok(())
}

/// Draw a falling power-up.
///
/// Symbols:
///   ◆  (green)   — Shield:     absorbs all damage
///   »  (cyan)    — SpeedBoost: move 50% faster
///   ★  (yellow)  — TripleShot: 3-way spread fire
fn draw_power_up<W: Write>(out: &mut W, power_up: &PowerUp) -> std::io::Result<()> {
    let x = cell(power_up.body.x);
    let y = cell(power_up.body.y);
    if y < 2 {
        return Ok(());
    }
    out.queue(cursor::MoveTo(x as u16, y as u16))?;
    match power_up.kind {
        PowerUpKind::Shield => {
            out.queue(style::SetForegroundColor(C_POWER_SHIELD))?;
            out.queue(Print("◆"))?;
        }
        PowerUpKind::SpeedBoost => {
            out.queue(style::SetForegroundColor(C_POWER_SPEED))?;
            out.queue(Print("»"))?;
        }
        PowerUpKind::TripleShot => {
            out.queue(style::SetForegroundColor(C_POWER_TRIPLE))?;
            out.queue(Print("★"))?;
        }
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, state.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → ↑ ↓ : Move   SPACE : Shoot   P : Pause   Q : Quit"))?;
    Ok(())
}

// ── Pause overlay ─────────────────────────────────────────────────────────────

fn draw_paused<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let lines: &[&str] = &[
        "╔══════════════╗",
        "║    PAUSED    ║",
        "╚══════════════╝",
    ];
    let cx = state.width / 2;
    let start_row = (state.height / 2).saturating_sub(2);

    out.queue(style::SetForegroundColor(Color::Yellow))?;
    for (i, msg) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(*msg))?;
    }

    let hint = "P - Resume   Q - Quit";
    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, start_row + lines.len() as u16))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>6}", state.score);
    let best_score = state.high_score.max(state.score);
    let new_best = state.score >= state.high_score && state.score > 0;
    let best_line = if new_best {
        format!("★ NEW BEST: {:>6} ★", best_score)
    } else {
        format!("Best Score:  {:>6}", best_score)
    };

    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
    ];
    let best_color = if new_best { Color::Yellow } else { Color::DarkGrey };

    let cx = state.width / 2;
    let total_rows = lines.len() + 3; // 3 box lines + score + best + hint
    let start_row = (state.height / 2).saturating_sub(total_rows as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    let score_row = start_row + lines.len() as u16;
    let col = cx.saturating_sub(score_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&score_line))?;

    let best_row = score_row + 1;
    let col = cx.saturating_sub(best_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, best_row))?;
    out.queue(style::SetForegroundColor(best_color))?;
    out.queue(Print(&best_line))?;

    let hint = "R - Play Again  Q - Quit";
    let hint_row = best_row + 1;
    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, hint_row))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}

/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::entities::{
    Body, Bullet, BulletOwner, Enemy, GameState, GameStatus, Player, PowerUp, PowerUpKind,
};

// ── Tunable constants ────────────────────────────────────────────────────────

/// Columns the player covers per frame while a direction key is held.
pub const PLAYER_SPEED: f32 = 0.8;
/// Movement multiplier while SpeedBoost is active.
pub const SPEED_BOOST_MULT: f32 = 1.5;
/// Frames between player shots.
pub const SHOOT_COOLDOWN: u32 = 8;
/// Frames between player shots while TripleShot is active.
pub const TRIPLE_SHOOT_COOLDOWN: u32 = 5;
/// Frames a collected power-up stays active (≈10 s at 30 FPS).
pub const POWER_UP_DURATION: u32 = 300;
/// Frames between enemy waves.
pub const WAVE_INTERVAL: u32 = 240;
/// Frames before the first wave appears.
pub const FIRST_WAVE_DELAY: u32 = 60;
/// Rows a player bullet climbs per frame.
pub const BULLET_SPEED: f32 = 1.0;
/// Rows an enemy bullet falls per frame.
pub const ENEMY_BULLET_SPEED: f32 = 0.5;
/// Rows a power-up falls per frame.
pub const POWER_UP_FALL_SPEED: f32 = 0.15;
/// Sideways drift of the outer bullets in a triple-shot spread.
pub const TRIPLE_SPREAD_VX: f32 = 0.35;

/// One-in-N chance per frame that a power-up drops from the top.
const POWER_UP_DROP_IN: u32 = 240;

// Collision half-extents.  Player and enemy sprites are 3 cells wide
// and 2 tall; bullets and power-ups occupy a single cell.
const PLAYER_HALF_W: f32 = 1.5;
const PLAYER_HALF_H: f32 = 1.0;
const ENEMY_HALF_W: f32 = 1.5;
const ENEMY_HALF_H: f32 = 1.0;
const BULLET_HALF: f32 = 0.5;
const POWER_UP_HALF: f32 = 0.5;

// ── Difficulty tables ────────────────────────────────────────────────────────

fn wave_enemy_count(wave: u32) -> usize {
    (3 + wave as usize).min(10)
}

fn wave_enemy_health(wave: u32) -> i32 {
    1 + (wave / 4) as i32
}

fn wave_enemy_speed(wave: u32) -> f32 {
    (0.06 + 0.02 * wave as f32).min(0.35)
}

/// Frames an enemy from this wave waits between shots.  Each enemy rolls
/// its own delay so a wave never fires in lockstep.
fn wave_fire_delay(wave: u32, rng: &mut impl Rng) -> u32 {
    let base = 200u32.saturating_sub(wave * 12).max(60);
    rng.gen_range(base / 2..base)
}

/// Score awarded per enemy destroyed, scaled by the wave it spawned in.
fn score_for(wave: u32) -> u32 {
    100 + 25 * wave.saturating_sub(1)
}

// ── Power-up rules ───────────────────────────────────────────────────────────

/// Higher value wins when two effects compete for the single power-up slot.
fn priority(kind: &PowerUpKind) -> u8 {
    match kind {
        PowerUpKind::Shield => 3,
        PowerUpKind::TripleShot => 2,
        PowerUpKind::SpeedBoost => 1,
    }
}

fn has_power(player: &Player, kind: PowerUpKind) -> bool {
    matches!(&player.power_up, Some((k, t)) if *k == kind && *t > 0)
}

/// A new effect takes the slot unless the current one outranks it.
/// Same kind (equal priority) refreshes the timer.
fn grant(
    current: &Option<(PowerUpKind, u32)>,
    kind: PowerUpKind,
    duration: u32,
) -> Option<(PowerUpKind, u32)> {
    match current {
        Some((cur, t)) if *t > 0 && priority(cur) > priority(&kind) => Some((cur.clone(), *t)),
        _ => Some((kind, duration)),
    }
}

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Axis-aligned overlap test on centre positions and half-extents.
fn overlaps(a: &Body, aw: f32, ah: f32, b: &Body, bw: f32, bh: f32) -> bool {
    (a.x - b.x).abs() <= aw + bw && (a.y - b.y).abs() <= ah + bh
}

// The playfield is rows 2..=height-3 inside the border; the player's
// 3×2 sprite keeps its centre one cell clear of the walls.
fn player_x_range(width: u16) -> (f32, f32) {
    (2.0, width as f32 - 3.0)
}

fn player_y_range(height: u16) -> (f32, f32) {
    (2.0, height as f32 - 4.0)
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state for the given terminal dimensions.
pub fn init_state(width: u16, height: u16, high_score: u32) -> GameState {
    GameState {
        player: Player {
            body: Body::at((width / 2) as f32, (height - 4) as f32),
            lives: 3,
            power_up: None,
            shoot_cooldown: 0,
        },
        enemies: Vec::new(),
        bullets: Vec::new(),
        power_ups: Vec::new(),
        score: 0,
        high_score,
        wave: 0,
        next_wave_in: FIRST_WAVE_DELAY,
        status: GameStatus::Playing,
        frame: 0,
        width,
        height,
    }
}

/// Build one wave of enemies, staggered above the top edge so they
/// stream into view rather than appearing all at once.
fn spawn_wave(wave: u32, width: u16, rng: &mut impl Rng) -> Vec<Enemy> {
    (0..wave_enemy_count(wave))
        .map(|i| Enemy {
            body: Body {
                x: rng.gen_range(2..(width as i32 - 2)) as f32,
                y: 2.0 - 3.0 * i as f32,
                vx: 0.0,
                vy: wave_enemy_speed(wave),
            },
            health: wave_enemy_health(wave),
            fire_cooldown: wave_fire_delay(wave, rng),
            wave,
        })
        .collect()
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Directional keys held down this frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Update the player's velocity from the held keys and step its position,
/// clamped to the playfield.  Opposing keys cancel out.
pub fn handle_input(state: &GameState, input: &InputState) -> GameState {
    let speed = if has_power(&state.player, PowerUpKind::SpeedBoost) {
        PLAYER_SPEED * SPEED_BOOST_MULT
    } else {
        PLAYER_SPEED
    };
    let vx = (input.right as i8 - input.left as i8) as f32 * speed;
    let vy = (input.down as i8 - input.up as i8) as f32 * speed;

    let (min_x, max_x) = player_x_range(state.width);
    let (min_y, max_y) = player_y_range(state.height);
    let body = Body {
        x: (state.player.body.x + vx).clamp(min_x, max_x),
        y: (state.player.body.y + vy).clamp(min_y, max_y),
        vx,
        vy,
    };
    GameState {
        player: Player { body, ..state.player.clone() },
        ..state.clone()
    }
}

/// Fire from the player's position if the shoot cooldown has elapsed.
/// Under TripleShot this spawns three bullets in a spread and the
/// cooldown recovers faster.
pub fn player_shoot(state: &GameState) -> GameState {
    if state.player.shoot_cooldown > 0 {
        return state.clone();
    }
    let triple = has_power(&state.player, PowerUpKind::TripleShot);
    let spread: &[f32] = if triple {
        &[-TRIPLE_SPREAD_VX, 0.0, TRIPLE_SPREAD_VX]
    } else {
        &[0.0]
    };

    let mut bullets = state.bullets.clone();
    for &vx in spread {
        bullets.push(Bullet {
            body: Body {
                x: state.player.body.x,
                y: state.player.body.y - 1.0,
                vx,
                vy: -BULLET_SPEED,
            },
            owner: BulletOwner::Player,
            damage: 1,
        });
    }
    let cooldown = if triple { TRIPLE_SHOOT_COOLDOWN } else { SHOOT_COOLDOWN };
    GameState {
        bullets,
        player: Player {
            shoot_cooldown: cooldown,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// Grant a power-up to the player.  An effect already active keeps its
/// slot unless the new one has equal or higher priority
/// (Shield > TripleShot > SpeedBoost).
pub fn apply_powerup(state: &GameState, kind: PowerUpKind, duration: u32) -> GameState {
    let power_up = grant(&state.player.power_up, kind, duration);
    GameState {
        player: Player { power_up, ..state.player.clone() },
        ..state.clone()
    }
}

/// Apply one hit to the player.  Ignored while a shield is active; at
/// zero lives the game is over.
pub fn take_damage(state: &GameState) -> GameState {
    if has_power(&state.player, PowerUpKind::Shield) {
        return state.clone();
    }
    let lives = state.player.lives.saturating_sub(1);
    let status = if lives == 0 {
        GameStatus::GameOver
    } else {
        state.status.clone()
    };
    GameState {
        player: Player { lives, ..state.player.clone() },
        status,
        ..state.clone()
    }
}

/// Playing ↔ Paused.  GameOver is terminal until restart.
pub fn toggle_pause(state: &GameState) -> GameState {
    let status = match state.status {
        GameStatus::Playing => GameStatus::Paused,
        GameStatus::Paused => GameStatus::Playing,
        GameStatus::GameOver => GameStatus::GameOver,
    };
    GameState { status, ..state.clone() }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
/// A no-op unless the game is in the Playing state.
pub fn tick(state: &GameState, rng: &mut impl Rng) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }
    let frame = state.frame + 1;

    // ── 1. Player timers ─────────────────────────────────────────────────────
    let shoot_cooldown = state.player.shoot_cooldown.saturating_sub(1);
    let power_up = match &state.player.power_up {
        Some((kind, t)) if *t > 1 => Some((kind.clone(), t - 1)),
        // Effect reverts to none exactly when the timer reaches zero
        _ => None,
    };

    // ── 2. Wave spawner ──────────────────────────────────────────────────────
    let mut wave = state.wave;
    let mut next_wave_in = state.next_wave_in.saturating_sub(1);
    let mut enemies = state.enemies.clone();
    if next_wave_in == 0 {
        wave += 1;
        enemies.extend(spawn_wave(wave, state.width, rng));
        next_wave_in = WAVE_INTERVAL;
    }

    // ── 3. Power-up drop ─────────────────────────────────────────────────────
    let mut power_ups = state.power_ups.clone();
    if rng.gen_ratio(1, POWER_UP_DROP_IN) {
        let kind = match rng.gen_range(0..3) {
            0 => PowerUpKind::Shield,
            1 => PowerUpKind::SpeedBoost,
            _ => PowerUpKind::TripleShot,
        };
        power_ups.push(PowerUp {
            body: Body {
                x: rng.gen_range(2..(state.width as i32 - 2)) as f32,
                y: 2.0,
                vx: 0.0,
                vy: POWER_UP_FALL_SPEED,
            },
            kind,
        });
    }

    // ── 4. Move bullets ──────────────────────────────────────────────────────
    let bullets: Vec<Bullet> = state
        .bullets
        .iter()
        .filter_map(|b| {
            let body = Body {
                x: b.body.x + b.body.vx,
                y: b.body.y + b.body.vy,
                ..b.body
            };
            // Discard bullets that leave the play area
            // (rows 2 .. height-3, cols 1 .. width-2)
            if body.y < 2.0
                || body.y > state.height as f32 - 3.0
                || body.x < 1.0
                || body.x > state.width as f32 - 2.0
            {
                None
            } else {
                Some(Bullet { body, ..b.clone() })
            }
        })
        .collect();

    // ── 5. Move enemies; each one times its own next shot ────────────────────
    let mut bullets = bullets;
    let mut moved: Vec<Enemy> = Vec::with_capacity(enemies.len());
    for e in &enemies {
        let body = Body {
            x: e.body.x + e.body.vx,
            y: e.body.y + e.body.vy,
            ..e.body
        };
        let mut fire_cooldown = e.fire_cooldown.saturating_sub(1);
        // Hold fire until the enemy has entered the visible playfield
        if fire_cooldown == 0 && body.y >= 2.0 {
            bullets.push(Bullet {
                body: Body {
                    x: body.x,
                    y: body.y + 2.0,
                    vx: 0.0,
                    vy: ENEMY_BULLET_SPEED,
                },
                owner: BulletOwner::Enemy,
                damage: 1,
            });
            fire_cooldown = wave_fire_delay(e.wave, rng);
        }
        moved.push(Enemy { body, fire_cooldown, ..e.clone() });
    }
    // Enemies past the bottom border are gone for good
    let mut enemies: Vec<Enemy> = moved
        .into_iter()
        .filter(|e| e.body.y < state.height as f32 - 2.0)
        .collect();

    // ── 6. Move power-ups ────────────────────────────────────────────────────
    let mut power_ups: Vec<PowerUp> = power_ups
        .iter()
        .filter_map(|p| {
            let body = Body { y: p.body.y + p.body.vy, ..p.body };
            if body.y > state.height as f32 - 3.0 {
                None
            } else {
                Some(PowerUp { body, ..p.clone() })
            }
        })
        .collect();

    // ── 7a. Collision: player bullets ↔ enemies ──────────────────────────────
    let player_body = state.player.body;
    let mut used_bullets: Vec<usize> = Vec::new();
    let mut score_gain: u32 = 0;

    for (bi, bullet) in bullets.iter().enumerate() {
        if bullet.owner != BulletOwner::Player {
            continue;
        }
        for enemy in enemies.iter_mut() {
            if enemy.health > 0
                && overlaps(
                    &bullet.body,
                    BULLET_HALF,
                    BULLET_HALF,
                    &enemy.body,
                    ENEMY_HALF_W,
                    ENEMY_HALF_H,
                )
            {
                enemy.health -= bullet.damage;
                if enemy.health <= 0 {
                    score_gain += score_for(enemy.wave);
                }
                used_bullets.push(bi);
                break; // one bullet hits at most one enemy
            }
        }
    }
    enemies.retain(|e| e.health > 0);

    // ── 7b. Collision: enemy bullets ↔ player ────────────────────────────────
    // Shield state is fixed before power-up collection below, so a shield
    // picked up this frame does not block this frame's hits.
    let shielded = matches!(&power_up, Some((PowerUpKind::Shield, _)));
    let mut hits: u32 = 0;

    for (bi, bullet) in bullets.iter().enumerate() {
        if bullet.owner != BulletOwner::Enemy {
            continue;
        }
        if overlaps(
            &bullet.body,
            BULLET_HALF,
            BULLET_HALF,
            &player_body,
            PLAYER_HALF_W,
            PLAYER_HALF_H,
        ) {
            hits += 1;
            used_bullets.push(bi);
        }
    }

    let bullets: Vec<Bullet> = bullets
        .iter()
        .enumerate()
        .filter(|(i, _)| !used_bullets.contains(i))
        .map(|(_, b)| b.clone())
        .collect();

    // ── 7c. Collision: enemies ↔ player (contact destroys the enemy) ─────────
    let before = enemies.len();
    enemies.retain(|e| {
        !overlaps(
            &e.body,
            ENEMY_HALF_W,
            ENEMY_HALF_H,
            &player_body,
            PLAYER_HALF_W,
            PLAYER_HALF_H,
        )
    });
    hits += (before - enemies.len()) as u32;

    // ── 7d. Collision: player ↔ power-ups ────────────────────────────────────
    let mut power_up = power_up;
    power_ups.retain(|p| {
        if overlaps(
            &p.body,
            POWER_UP_HALF,
            POWER_UP_HALF,
            &player_body,
            PLAYER_HALF_W,
            PLAYER_HALF_H,
        ) {
            power_up = grant(&power_up, p.kind.clone(), POWER_UP_DURATION);
            false
        } else {
            true
        }
    });

    // ── 8. Update player & status ─────────────────────────────────────────────
    let lives = if shielded {
        state.player.lives
    } else {
        state.player.lives.saturating_sub(hits)
    };
    let status = if lives == 0 {
        GameStatus::GameOver
    } else {
        GameStatus::Playing
    };
    let score = state.score + score_gain;

    GameState {
        player: Player {
            body: player_body,
            lives,
            power_up,
            shoot_cooldown,
        },
        enemies,
        bullets,
        power_ups,
        score,
        high_score: state.high_score.max(score),
        wave,
        next_wave_in,
        status,
        frame,
        width: state.width,
        height: state.height,
    }
}

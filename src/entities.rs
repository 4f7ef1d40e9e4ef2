/// All game entity types — pure data, no logic.

/// Shared kinematic base fields, embedded by value in every entity.
/// Positions are fractional cells so slow movers and angled bullets
/// stay smooth; rendering rounds to the nearest cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    /// Horizontal position (fractional columns).
    pub x: f32,
    /// Vertical position (fractional rows).
    pub y: f32,
    /// Horizontal velocity added each frame.
    pub vx: f32,
    /// Vertical velocity added each frame (positive = downward).
    pub vy: f32,
}

impl Body {
    /// A stationary body at the given position.
    pub fn at(x: f32, y: f32) -> Self {
        Body { x, y, vx: 0.0, vy: 0.0 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PowerUpKind {
    /// Absorbs all damage for POWER_UP_DURATION frames.
    Shield,
    /// Player moves 50% faster for POWER_UP_DURATION frames.
    SpeedBoost,
    /// 3-way spread fire with a shorter shoot cooldown for
    /// POWER_UP_DURATION frames.
    TripleShot,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum BulletOwner {
    Player,
    Enemy,
}

#[derive(Clone, Debug)]
pub struct Bullet {
    pub body: Body,
    pub owner: BulletOwner,
    /// Health removed from whatever this bullet hits.
    pub damage: i32,
}

// ── Player, enemy & power-ups ─────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub body: Body,
    pub lives: u32,
    /// Active power-up and the number of frames remaining, if any.
    pub power_up: Option<(PowerUpKind, u32)>,
    /// Frames until the player may shoot again.
    pub shoot_cooldown: u32,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub body: Body,
    pub health: i32,
    /// Frames until this enemy fires its next shot.
    pub fire_cooldown: u32,
    /// The wave this enemy spawned in; drives its point value.
    pub wave: u32,
}

/// A falling collectible granting a timed effect on pickup.
#[derive(Clone, Debug)]
pub struct PowerUp {
    pub body: Body,
    pub kind: PowerUpKind,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    /// Bullets from player and enemies alike, told apart by owner.
    pub bullets: Vec<Bullet>,
    /// Power-up items currently falling through the play area.
    pub power_ups: Vec<PowerUp>,
    pub score: u32,
    /// The highest score seen so far (updated live during play).
    pub high_score: u32,
    /// Number of waves spawned so far; 0 before the first wave.
    pub wave: u32,
    /// Frames until the next wave spawns.
    pub next_wave_in: u32,
    pub status: GameStatus,
    pub frame: u64,
    pub width: u16,
    pub height: u16,
}

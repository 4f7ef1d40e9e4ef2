use starfall::entities::*;

#[test]
fn entity_clone_and_eq() {
    // Enums derive PartialEq — equality comparisons must work
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::Paused);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
    assert_eq!(PowerUpKind::Shield, PowerUpKind::Shield);
    assert_ne!(PowerUpKind::Shield, PowerUpKind::TripleShot);
    assert_eq!(BulletOwner::Player, BulletOwner::Player);
    assert_ne!(BulletOwner::Player, BulletOwner::Enemy);

    // Clone must produce an equal value
    let kind = PowerUpKind::SpeedBoost;
    assert_eq!(kind.clone(), PowerUpKind::SpeedBoost);
}

#[test]
fn body_at_is_stationary() {
    let b = Body::at(3.5, 7.0);
    assert_eq!(b, Body { x: 3.5, y: 7.0, vx: 0.0, vy: 0.0 });
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        player: Player {
            body: Body::at(20.0, 16.0),
            lives: 3,
            power_up: None,
            shoot_cooldown: 0,
        },
        enemies: Vec::new(),
        bullets: Vec::new(),
        power_ups: Vec::new(),
        score: 0,
        high_score: 0,
        wave: 0,
        next_wave_in: 60,
        status: GameStatus::Playing,
        frame: 0,
        width: 40,
        height: 20,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.body.x = 99.0;
    cloned.score = 999;
    cloned.enemies.push(Enemy {
        body: Body::at(5.0, 5.0),
        health: 1,
        fire_cooldown: 100,
        wave: 1,
    });

    assert_eq!(original.player.body.x, 20.0);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
}

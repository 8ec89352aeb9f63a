use mech_shooter::config::Rules;
use mech_shooter::entities::*;

fn make_state() -> GameState {
    GameState {
        player: Player { x: 368.0, y: 536.0, size: 64.0, shoot_timer: 0 },
        bullets: Vec::new(),
        enemies: Vec::new(),
        boss: None,
        level: 1,
        kills: 0,
        status: GameStatus::Playing,
        frame: 0,
        rules: Rules::default(),
    }
}

#[test]
fn entity_clone_and_eq() {
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::Finished);

    let enemy = Enemy { x: 1.0, y: 2.0, radius: 16.0, vx: 0.0, vy: 1.5 };
    assert_eq!(enemy.clone(), enemy);
}

#[test]
fn centers_are_one_radius_in_from_the_corner() {
    let enemy = Enemy { x: 100.0, y: 40.0, radius: 16.0, vx: 0.0, vy: 2.0 };
    assert_eq!(enemy.center(), (116.0, 56.0));

    let boss = Boss { x: 350.0, y: 50.0, radius: 50.0, x_speed: 2.0, phase: 0.0, hits: 0 };
    assert_eq!(boss.center(), (400.0, 100.0));

    let bullet = Bullet { x: 10.0, y: 20.0, width: 8.0, height: 16.0 };
    assert_eq!(bullet.center(), (14.0, 28.0));

    let player = Player { x: 100.0, y: 536.0, size: 64.0, shoot_timer: 0 };
    assert_eq!(player.center_x(), 132.0);
}

#[test]
fn game_state_clone_is_independent() {
    let original = make_state();
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99.0;
    cloned.kills = 999;
    cloned.enemies.push(Enemy { x: 5.0, y: 5.0, radius: 16.0, vx: 1.0, vy: 0.0 });
    cloned.boss = Some(Boss { x: 0.0, y: 0.0, radius: 50.0, x_speed: 2.0, phase: 0.0, hits: 3 });

    assert_eq!(original.player.x, 368.0);
    assert_eq!(original.kills, 0);
    assert!(original.enemies.is_empty());
    assert!(original.boss.is_none());
}

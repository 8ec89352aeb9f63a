use mech_shooter::config::Rules;
use mech_shooter::waves::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── WavePattern ───────────────────────────────────────────────────────────────

#[test]
fn pattern_follows_level_mod_four() {
    assert_eq!(WavePattern::for_level(1), WavePattern::Descending);
    assert_eq!(WavePattern::for_level(2), WavePattern::RightToLeft);
    assert_eq!(WavePattern::for_level(3), WavePattern::Descending);
    assert_eq!(WavePattern::for_level(4), WavePattern::LeftToRight);
    assert_eq!(WavePattern::for_level(5), WavePattern::Descending);
    assert_eq!(WavePattern::for_level(6), WavePattern::RightToLeft);
    assert_eq!(WavePattern::for_level(8), WavePattern::LeftToRight);
    assert_eq!(WavePattern::for_level(9), WavePattern::Descending);
}

// ── spawn_level: waves ────────────────────────────────────────────────────────

#[test]
fn every_wave_level_has_exactly_one_hundred_enemies() {
    let rules = Rules::default();
    let mut rng = seeded_rng();
    for level in 1..rules.max_levels {
        let spawn = spawn_level(&rules, level, &mut rng);
        assert_eq!(spawn.enemies.len(), 100, "level {level}");
        assert!(spawn.boss.is_none(), "level {level}");
        assert!(spawn.enemies.iter().all(|e| e.radius == 16.0));
    }
}

#[test]
fn level_two_enters_from_the_right() {
    let rules = Rules::default();
    let spawn = spawn_level(&rules, 2, &mut seeded_rng());
    assert_eq!(spawn.enemies.len(), 100);
    for e in &spawn.enemies {
        assert!(e.x >= 800.0 && e.x < 900.0, "x = {}", e.x);
        assert!(e.y >= 0.0 && e.y < 300.0, "y = {}", e.y);
        assert!(e.vx >= -3.0 && e.vx < -1.0, "vx = {}", e.vx);
        assert_eq!(e.vy, 0.0);
    }
}

#[test]
fn odd_levels_descend_from_above() {
    let rules = Rules::default();
    let mut rng = seeded_rng();
    for level in [1, 3, 5, 7, 9] {
        for e in spawn_level(&rules, level, &mut rng).enemies {
            assert!(e.x >= 0.0 && e.x < 768.0, "x = {}", e.x);
            assert!(e.y >= -600.0 && e.y < -50.0, "y = {}", e.y);
            assert_eq!(e.vx, 0.0);
            assert!(e.vy >= 1.0 && e.vy < 3.0, "vy = {}", e.vy);
        }
    }
}

#[test]
fn levels_divisible_by_four_enter_from_the_left() {
    let rules = Rules::default();
    let mut rng = seeded_rng();
    for level in [4, 8] {
        for e in spawn_level(&rules, level, &mut rng).enemies {
            assert!(e.x >= -100.0 && e.x < 0.0, "x = {}", e.x);
            assert!(e.y >= 0.0 && e.y < 300.0, "y = {}", e.y);
            assert!(e.vx >= 1.0 && e.vx < 3.0, "vx = {}", e.vx);
            assert_eq!(e.vy, 0.0);
        }
    }
}

#[test]
fn same_seed_same_wave() {
    let rules = Rules::default();
    let a = spawn_level(&rules, 6, &mut StdRng::seed_from_u64(7));
    let b = spawn_level(&rules, 6, &mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
}

#[test]
fn wave_size_is_configurable() {
    let rules = Rules { enemies_per_wave: 12, ..Rules::default() };
    let spawn = spawn_level(&rules, 3, &mut seeded_rng());
    assert_eq!(spawn.enemies.len(), 12);
}

#[test]
fn constant_speed_and_edge_spawns() {
    let rules = Rules {
        enemy_speed_min: 2.0,
        enemy_speed_max: 2.0,
        enemy_spawn_side_margin: 0.0,
        ..Rules::default()
    };
    let mut rng = seeded_rng();
    for level in 1..=4 {
        for e in spawn_level(&rules, level, &mut rng).enemies {
            assert_eq!(e.vx.abs() + e.vy.abs(), 2.0);
            if e.vx < 0.0 {
                assert_eq!(e.x, 800.0);
            } else if e.vx > 0.0 {
                assert_eq!(e.x, 0.0);
            }
        }
    }
}

// ── spawn_level: boss ─────────────────────────────────────────────────────────

#[test]
fn final_level_spawns_the_boss_alone() {
    let rules = Rules::default();
    let spawn = spawn_level(&rules, 10, &mut seeded_rng());
    assert!(spawn.enemies.is_empty());
    let boss = spawn.boss.expect("boss on the final level");
    assert_eq!(boss.x, 350.0); // centred: width/2 - radius
    assert_eq!(boss.y, 50.0);
    assert_eq!(boss.radius, 50.0);
    assert_eq!(boss.x_speed, 2.0);
    assert_eq!(boss.phase, 0.0);
    assert_eq!(boss.hits, 0);
}

#[test]
fn levels_past_the_boss_are_empty() {
    let rules = Rules::default();
    let spawn = spawn_level(&rules, 11, &mut seeded_rng());
    assert!(spawn.enemies.is_empty());
    assert!(spawn.boss.is_none());
}

use std::fs;

use mech_shooter::assets::AssetSet;
use mech_shooter::compute::init_state;
use mech_shooter::config::Rules;
use mech_shooter::display::*;
use mech_shooter::entities::*;
use mech_shooter::highscores::HighScores;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

fn make_state() -> GameState {
    init_state(Rules::default(), &mut StdRng::seed_from_u64(42))
}

fn viewport() -> Viewport {
    // 80×20 play cells: one cell is 10 world units wide, 30 tall
    Viewport::new(82, 24, &Rules::default())
}

fn render_with(renderer: &dyn Renderer<Vec<u8>>, state: &GameState) -> String {
    let mut out = Vec::new();
    let frame = Frame { state, viewport: viewport(), best_score: 123 };
    renderer.render(&mut out, &frame).unwrap();
    String::from_utf8(out).unwrap()
}

// ── Viewport ──────────────────────────────────────────────────────────────────

#[test]
fn viewport_maps_world_corners() {
    let vp = viewport();
    assert_eq!(vp.play_cols(), 80);
    assert_eq!(vp.play_rows(), 20);
    assert_eq!((vp.col_of(0.0), vp.row_of(0.0)), (1, 2));
    assert_eq!((vp.col_of(799.0), vp.row_of(599.0)), (80, 21));
    assert!(vp.in_play(1, 2));
    assert!(vp.in_play(80, 21));
}

#[test]
fn viewport_clips_outside_the_world() {
    let vp = viewport();
    assert!(!vp.in_play(vp.col_of(800.0), 5));
    assert!(!vp.in_play(vp.col_of(-1.0), 5));
    assert!(!vp.in_play(5, vp.row_of(-50.0)));
    assert!(!vp.in_play(5, vp.row_of(600.0)));
}

#[test]
fn cell_center_round_trips() {
    let vp = viewport();
    let (x, y) = vp.cell_center(11, 7);
    assert_eq!((x, y), (105.0, 165.0));
    assert_eq!((vp.col_of(x), vp.row_of(y)), (11, 7));
}

// ── Renderers ─────────────────────────────────────────────────────────────────

#[test]
fn primitive_frame_has_hud_and_shapes() {
    let mut state = make_state();
    state.enemies.push(Enemy { x: 100.0, y: 100.0, radius: 16.0, vx: 0.0, vy: 1.0 });
    state.bullets.push(Bullet { x: 300.0, y: 300.0, width: 8.0, height: 16.0 });
    let text = render_with(&PrimitiveRenderer, &state);
    assert!(text.contains("Level:  1"));
    assert!(text.contains("Kills:"));
    assert!(text.contains("Best: 123"));
    assert!(text.contains('●'));
    assert!(text.contains('┃'));
    assert!(text.contains('█'));
}

#[test]
fn boss_fight_hud_shows_hits_left() {
    let mut state = make_state();
    state.enemies.clear();
    state.level = 10;
    state.boss = Some(Boss { x: 350.0, y: 50.0, radius: 50.0, x_speed: 2.0, phase: 0.0, hits: 37 });
    let text = render_with(&PrimitiveRenderer, &state);
    assert!(text.contains("BOSS  63"));
}

#[test]
fn finished_hud_clamps_level() {
    let mut state = make_state();
    state.enemies.clear();
    state.level = 11;
    state.status = GameStatus::Finished;
    let text = render_with(&PrimitiveRenderer, &state);
    assert!(text.contains("Level: 10"));
    assert!(text.contains("CLEAR"));
}

#[test]
fn tiny_terminal_does_not_fail() {
    let state = make_state();
    let mut out = Vec::new();
    let frame = Frame { state: &state, viewport: Viewport::new(3, 3, &state.rules), best_score: 0 };
    PrimitiveRenderer.render(&mut out, &frame).unwrap();
}

#[test]
fn renderer_selection_depends_on_core_sprites() {
    let primitive = select_renderer::<Vec<u8>>(AssetSet::default());
    assert_eq!(primitive.name(), "primitive");

    let dir = tempdir().unwrap();
    for (name, art) in [("mech", "/^\\"), ("bullet", "!"), ("boss", "<@@>"), ("enemy1", "Y")] {
        fs::write(dir.path().join(format!("{name}.txt")), art).unwrap();
    }
    let sprite = select_renderer::<Vec<u8>>(AssetSet::load(dir.path()));
    assert_eq!(sprite.name(), "sprite");

    let mut state = make_state();
    state.enemies.push(Enemy { x: 100.0, y: 100.0, radius: 16.0, vx: 0.0, vy: 1.0 });
    state.bullets.push(Bullet { x: 300.0, y: 300.0, width: 8.0, height: 16.0 });
    let text = render_with(sprite.as_ref(), &state);
    assert!(text.contains('^'));
    assert!(text.contains('Y'));
    assert!(text.contains('!'));

    // Level 2 has no sprite, so its enemies fall back to discs
    state.level = 2;
    let text = render_with(sprite.as_ref(), &state);
    assert!(text.contains('●'));
}

#[test]
fn summary_lists_the_table() {
    let mut state = make_state();
    state.kills = 321;
    let table = HighScores::from_scores(vec![900, 321, 5]);
    let mut out = Vec::new();
    render_summary(&mut out, &viewport(), &state, &table).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("SESSION  ENDED"));
    assert!(text.contains("Final Kills: 321"));
    assert!(text.contains("High Scores"));
    assert!(text.contains("1.    900"));
    assert!(text.contains("2.    321"));
}

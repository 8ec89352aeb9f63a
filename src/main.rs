//! Terminal front end: sets up the screen, feeds key state into the
//! fixed-rate loop and saves the score when the session ends.

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use mech_shooter::assets::AssetSet;
use mech_shooter::compute::init_state;
use mech_shooter::config::{GameConfig, DEFAULT_CONFIG_FILE};
use mech_shooter::display::{render_summary, select_renderer, Frame, Renderer, Viewport};
use mech_shooter::driver::{step, Controls, FixedTimestep};
use mech_shooter::entities::{GameState, GameStatus};
use mech_shooter::highscores::HighScores;

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so 8 frames (≈133 ms at 60 Hz) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

fn sample_controls(key_frame: &HashMap<KeyCode, u64>, frame: u64) -> Controls {
    Controls {
        left: any_held(
            key_frame,
            &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')],
            frame,
        ),
        right: any_held(
            key_frame,
            &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
            frame,
        ),
        fire: is_held(key_frame, &KeyCode::Char(' '), frame),
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

const LOG_FILE: &str = "mech_shooter.log";

/// Log to a file: the alternate screen owns stdout and stderr.
fn init_logging(path: &Path) {
    match File::create(path) {
        Ok(file) => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        Err(err) => eprintln!("Logging disabled: cannot open {}: {err}", path.display()),
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run ticks until the session finishes, the player quits or the terminal
/// fails.  `state` always holds what the last completed tick produced.
///
/// Input model: we maintain a `key_frame` map that records the frame number
/// of the last press/repeat event for every key and sample it once per tick.
/// Terminals with keyboard enhancement send proper releases; classic ones
/// expire keys after `HOLD_WINDOW` frames of silence.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    renderer: &dyn Renderer<W>,
    best_score: u32,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let clock = FixedTimestep::new(state.rules.tick_rate);
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    while state.status == GameStatus::Playing {
        let frame_start = Instant::now();
        frame += 1;
        let mut quit = false;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = ev
            else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => quit = true,
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            quit = true
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // Quit still completes this tick.
        *state = step(state, sample_controls(&key_frame, frame), &mut rng);

        let (cols, rows) = terminal::size()?;
        let view = Frame {
            state: &*state,
            viewport: Viewport::new(cols, rows, &state.rules),
            best_score,
        };
        renderer.render(out, &view)?;

        if quit {
            log::info!("Quit requested at level {}", state.level);
            break;
        }
        clock.wait(frame_start.elapsed());
    }

    Ok(())
}

/// Block until any key press arrives (or the input thread is gone).
fn wait_for_key(rx: &mpsc::Receiver<Event>) {
    // Skip whatever was typed during the last frames of play.
    while rx.try_recv().is_ok() {}
    while let Ok(ev) = rx.recv() {
        if let Event::Key(KeyEvent {
            kind: KeyEventKind::Press,
            ..
        }) = ev
        {
            break;
        }
    }
}

fn run<W: Write>(
    out: &mut W,
    config: &GameConfig,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut high_scores = HighScores::load(&config.high_score_path);
    let renderer = select_renderer::<W>(AssetSet::load(&config.asset_dir));

    let mut final_state = init_state(config.rules, &mut thread_rng());
    log::info!("Level 1 started with {} enemies", final_state.enemies.len());

    let outcome = game_loop(
        out,
        &mut final_state,
        renderer.as_ref(),
        high_scores.best(),
        rx,
    );

    // Kills count even when the terminal gave out mid-session.
    high_scores.record_session(final_state.kills, &config.high_score_path);
    log::info!("Game over! Final kills: {}", final_state.kills);
    outcome?;

    let (cols, rows) = terminal::size()?;
    render_summary(
        out,
        &Viewport::new(cols, rows, &final_state.rules),
        &final_state,
        &high_scores,
    )?;
    wait_for_key(rx);
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    init_logging(Path::new(LOG_FILE));
    let config = GameConfig::load_or_default(&config_path);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &config, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        log::error!("Session aborted: {err}");
    }
    result
}

mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use coin_collector::compute::{handle_event, new_game, step};
use coin_collector::config::{Config, DEFAULT_DISPLAY_HEIGHT, DEFAULT_DISPLAY_WIDTH};
use coin_collector::entities::{GameKey, InputEvent, LoopSignal};

const FRAME: Duration = Duration::from_micros(16_667); // ≈60 FPS

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── Command line ──────────────────────────────────────────────────────────────

/// Collect the falling coins, dodge the falling monsters.
#[derive(Parser)]
#[command(name = "coin_collector")]
struct Args {
    /// Simulation and render width, in pixels.
    #[arg(long, default_value_t = DEFAULT_DISPLAY_WIDTH)]
    width: i32,

    /// Simulation and render height, in pixels.
    #[arg(long, default_value_t = DEFAULT_DISPLAY_HEIGHT)]
    height: i32,
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the core signals termination (Esc/q, Ctrl-C).
///
/// Input model: a `key_frame` map records the frame number of the last
/// press/repeat event for every key.  Each frame the held state of the
/// movement keys is recomputed and only the *edges* are forwarded to the
/// core as KeyDown/KeyUp events, so classic terminals that never emit
/// key-release events still clear the movement flags once the OS repeats
/// stop.  One-shot keys (restart, quit) are forwarded on press directly.
fn game_loop<W: Write>(
    out: &mut W,
    config: &Config,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut state = new_game(config);

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let mut left_held = false;
    let mut right_held = false;
    let epoch = Instant::now();

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                // Press: record key + forward one-shot actions
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    let one_shot = match code {
                        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                            Some(GameKey::Quit)
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            Some(GameKey::Quit)
                        }
                        KeyCode::F(1) | KeyCode::Char('r') | KeyCode::Char('R') => {
                            Some(GameKey::Restart)
                        }
                        _ => None,
                    };
                    if let Some(key) = one_shot {
                        let (next, signal) = handle_event(&state, &InputEvent::KeyDown(key));
                        state = next;
                        if signal == LoopSignal::Terminate {
                            return Ok(());
                        }
                    }
                }
                // Repeat: refresh timestamp so key stays "held"
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                // Release: remove key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Forward movement-key edges to the core ────────────────────────────
        let left_now = is_held(&key_frame, &KeyCode::Left, frame)
            || is_held(&key_frame, &KeyCode::Char('a'), frame)
            || is_held(&key_frame, &KeyCode::Char('A'), frame);
        let right_now = is_held(&key_frame, &KeyCode::Right, frame)
            || is_held(&key_frame, &KeyCode::Char('d'), frame)
            || is_held(&key_frame, &KeyCode::Char('D'), frame);

        if left_now != left_held {
            let edge = if left_now {
                InputEvent::KeyDown(GameKey::Left)
            } else {
                InputEvent::KeyUp(GameKey::Left)
            };
            state = handle_event(&state, &edge).0;
            left_held = left_now;
        }
        if right_now != right_held {
            let edge = if right_now {
                InputEvent::KeyDown(GameKey::Right)
            } else {
                InputEvent::KeyUp(GameKey::Right)
            };
            state = handle_event(&state, &edge).0;
            right_held = right_now;
        }

        // ── Simulate and render ───────────────────────────────────────────────
        let now_ms = epoch.elapsed().as_millis() as u64;
        state = step(&state, now_ms, &mut rng);

        display::render(out, &state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::new(args.width, args.height)?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &config, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result?;
    Ok(())
}

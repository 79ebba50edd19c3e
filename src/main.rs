use std::io::{stdout, BufWriter, Write};
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
use log::{debug, info};
use rand::thread_rng;

use bug_crossing::compute::{apply_input, init_state, tick};
use bug_crossing::constants::FRAME;
use bug_crossing::display::{render_frame, SpriteSheet};
use bug_crossing::entities::GameState;
use bug_crossing::input::{direction_for_key_code, key_code_for};

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Moves are applied on key-up.  Terminals with keyboard enhancement
/// (Ghostty, kitty, etc.) report `Release` events, so those drive movement.
/// Classic terminals only send `Press` (OS key-repeat shows as repeated
/// `Press`), so there each press counts as the key-up.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    key_release_events: bool,
) -> std::io::Result<()> {
    let sprites = SpriteSheet::load();
    let mut last_time = Instant::now();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };

            if kind == KeyEventKind::Press {
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    _ => {}
                }
            }

            let key_up = if key_release_events {
                kind == KeyEventKind::Release
            } else {
                kind == KeyEventKind::Press
            };
            if !key_up {
                continue;
            }

            if let Some(direction) = key_code_for(&code).and_then(direction_for_key_code) {
                debug!("input {}", direction);
                *state = apply_input(state, direction);
            }
        }

        // ── Update, then render ───────────────────────────────────────────────
        let now = Instant::now();
        let dt = now.duration_since(last_time).as_secs_f64();
        last_time = now;

        *state = tick(state, dt);
        render_frame(out, state, &sprites)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    env_logger::init();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back to Press.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    info!("starting, key release events: {}", keyboard_enhanced);

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

    let mut state = init_state(&mut thread_rng());
    let result = game_loop(&mut out, &mut state, &rx, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("exiting with score {}", state.scoreboard.score);
    result
}

//! Keyboard input from a raw-mode terminal
//!
//! Raw mode turns off echo and line buffering so single key presses arrive
//! immediately; the cursor is hidden while the game runs. Both are restored
//! when [`TerminalInput`] is dropped.

use std::io::{self, Stdout};

use termion::AsyncReader;
use termion::cursor::HideCursor;
use termion::event::Key;
use termion::input::{Keys, TermRead};
use termion::raw::{IntoRawMode, RawTerminal};

use super::input::InputSource;
use crate::sim::TickInput;

/// Non-blocking keyboard reader
///
/// Terminals report key presses, not key state, so a key counts as held only
/// for the tick in which its press was read.
pub struct TerminalInput {
    keys: Keys<AsyncReader>,
    _terminal: RawTerminal<HideCursor<Stdout>>,
}

impl TerminalInput {
    pub fn new() -> io::Result<Self> {
        let terminal = HideCursor::from(io::stdout()).into_raw_mode()?;
        Ok(Self {
            keys: termion::async_stdin().keys(),
            _terminal: terminal,
        })
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> TickInput {
        let mut input = TickInput::default();
        for key in self.keys.by_ref() {
            match key {
                Ok(key) => apply_key(&mut input, key),
                Err(e) => {
                    log::warn!("Failed to read key: {}", e);
                    break;
                }
            }
        }
        input
    }
}

/// Fold one key press into the tick's snapshot
///
/// `w`/`s` drive the left paddle, the arrow keys the right one; `q`, `Esc` and
/// `Ctrl-C` quit.
pub fn apply_key(input: &mut TickInput, key: Key) {
    match key {
        Key::Char('w') | Key::Char('W') => input.left_up = true,
        Key::Char('s') | Key::Char('S') => input.left_down = true,
        Key::Up => input.right_up = true,
        Key::Down => input.right_down = true,
        Key::Char('q') | Key::Char('Q') | Key::Esc | Key::Ctrl('c') => input.quit = true,
        _ => {}
    }
}

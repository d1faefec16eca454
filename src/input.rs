use crossterm::event::{poll, read, Event, KeyCode};
use crossterm::terminal;
use std::io;
use std::time::Duration;

/// how often to look at the keyboard while waiting
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// keys that dismiss the picture
const QUIT_KEYS: [char; 2] = ['q', 'Q'];

/// reads keypresses
pub trait Input {
    /// block until the user asks to leave
    fn wait_for_quit(&mut self) -> Result<(), io::Error>;
}

/// simple implementation of Input, using the terminal in raw mode
pub struct KeyboardInput {
    _raw: RawMode,
}

// restores cooked mode however we leave
struct RawMode;

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

impl KeyboardInput {
    pub fn new() -> Result<Self, io::Error> {
        terminal::enable_raw_mode()?;
        Ok(KeyboardInput { _raw: RawMode })
    }
}

impl Input for KeyboardInput {
    fn wait_for_quit(&mut self) -> Result<(), io::Error> {
        loop {
            if !poll(POLL_INTERVAL)? {
                continue;
            }
            match read()? {
                Event::Key(evt) => match evt.code {
                    KeyCode::Char(c) if QUIT_KEYS.contains(&c) => return Ok(()),
                    KeyCode::Esc => return Ok(()),
                    _ => log::debug!("ignoring key {:?}", evt.code),
                },
                _ => {}
            }
        }
    }
}

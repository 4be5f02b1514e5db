//! Terminal keyboard as a keypad
//!
//! Terminals report key presses, not key state. A key counts as held if its
//! last press or repeat arrived within `HOLD_WINDOW` polls; terminals that
//! support release events drop it immediately.

use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ports::InputSource;
use crate::sim::Buttons;

/// Polls a key may go unseen and still count as held.
/// OS key repeat runs at 15 Hz or faster, so 6 polls at 60 Hz covers it.
pub const HOLD_WINDOW: u64 = 6;

/// Keypad bit for a key, if it maps to one
pub fn button_for(code: KeyCode) -> Option<Buttons> {
    let button = match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Buttons::LEFT,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Buttons::RIGHT,
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Buttons::UP,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Buttons::DOWN,
        KeyCode::Char(' ') | KeyCode::Enter => Buttons::A,
        KeyCode::Char('x') | KeyCode::Char('X') => Buttons::B,
        KeyCode::Tab => Buttons::SELECT,
        KeyCode::Char('p') | KeyCode::Char('P') => Buttons::START,
        _ => return None,
    };
    Some(button)
}

/// Held-key tracker fed by a crossterm event channel
pub struct Keyboard {
    rx: mpsc::Receiver<Event>,
    /// Button -> poll it was last seen on
    last_seen: HashMap<Buttons, u64>,
    polls: u64,
    quit: bool,
}

impl Keyboard {
    /// Start a reader thread on the terminal's event stream
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel::<Event>();
        thread::spawn(move || {
            while let Ok(ev) = event::read() {
                if tx.send(ev).is_err() {
                    break;
                }
            }
        });
        Self::from_receiver(rx)
    }

    pub fn from_receiver(rx: mpsc::Receiver<Event>) -> Self {
        Self {
            rx,
            last_seen: HashMap::new(),
            polls: 0,
            quit: false,
        }
    }

    /// Q, Esc or Ctrl-C was pressed
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    fn handle(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.quit = true;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
                return;
            }
            _ => {}
        }

        let Some(button) = button_for(key.code) else {
            return;
        };
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen.insert(button, self.polls);
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&button);
            }
        }
    }

    /// Buttons seen within the hold window
    pub fn held(&self) -> Buttons {
        self.last_seen
            .iter()
            .filter(|&(_, &seen)| self.polls.saturating_sub(seen) <= HOLD_WINDOW)
            .fold(Buttons::empty(), |acc, (&b, _)| acc | b)
    }
}

impl InputSource for Keyboard {
    fn poll(&mut self) -> u16 {
        self.polls += 1;
        while let Ok(ev) = self.rx.try_recv() {
            if let Event::Key(key) = ev {
                self.handle(key);
            }
        }
        let polls = self.polls;
        self.last_seen
            .retain(|_, seen| polls.saturating_sub(*seen) <= HOLD_WINDOW);
        self.held().to_active_low()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_press_holds_for_window() {
        let (tx, rx) = mpsc::channel();
        let mut kb = Keyboard::from_receiver(rx);
        tx.send(key(KeyCode::Right, KeyEventKind::Press)).unwrap();

        let raw = kb.poll();
        assert_eq!(Buttons::from_active_low(raw), Buttons::RIGHT);
        for _ in 0..HOLD_WINDOW - 1 {
            assert!(Buttons::from_active_low(kb.poll()).contains(Buttons::RIGHT));
        }
        kb.poll();
        assert_eq!(kb.poll(), 0xFFFF);
    }

    #[test]
    fn test_release_drops_immediately() {
        let (tx, rx) = mpsc::channel();
        let mut kb = Keyboard::from_receiver(rx);
        tx.send(key(KeyCode::Char(' '), KeyEventKind::Press)).unwrap();
        tx.send(key(KeyCode::Char('w'), KeyEventKind::Press)).unwrap();
        assert_eq!(Buttons::from_active_low(kb.poll()), Buttons::A | Buttons::UP);

        tx.send(key(KeyCode::Char(' '), KeyEventKind::Release)).unwrap();
        assert_eq!(Buttons::from_active_low(kb.poll()), Buttons::UP);
    }

    #[test]
    fn test_quit_keys() {
        let (tx, rx) = mpsc::channel();
        let mut kb = Keyboard::from_receiver(rx);
        tx.send(key(KeyCode::Char('z'), KeyEventKind::Press)).unwrap();
        kb.poll();
        assert!(!kb.quit_requested());

        tx.send(Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)))
            .unwrap();
        kb.poll();
        assert!(kb.quit_requested());
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        assert_eq!(button_for(KeyCode::Char('z')), None);
        assert_eq!(button_for(KeyCode::Enter), Some(Buttons::A));
    }
}

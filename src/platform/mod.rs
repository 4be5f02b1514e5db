//! Native terminal host
//!
//! Provides the real-world ends of the ports:
//! - `FixedRateClock`: paces the loop at the configured refresh rate
//! - `Keyboard`: crossterm key events folded into a held-button mask
//! - `Terminal`: character-cell rendering of the tile maps and sprites

pub mod clock;
pub mod keyboard;
pub mod terminal;

pub use clock::FixedRateClock;
pub use keyboard::Keyboard;
pub use terminal::{Terminal, TerminalSession};

//! Built-in subscription sources.
//!
//! - **Terminal events** ([`terminal_events`]) -- key presses, resizes, and
//!   pasted text from the terminal.
//! - **Timers** ([`Every`]) -- repeating ticks, used for spinner animation.

mod terminal;
mod timer;

pub use terminal::*;
pub use timer::*;

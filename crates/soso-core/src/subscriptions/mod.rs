//! Built-in subscription sources.
//!
//! - **Terminal events** ([`terminal_events`]) -- keyboard and resize events
//!   from the terminal.

mod terminal;

pub use terminal::*;

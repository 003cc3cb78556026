//! Human-readable output for scorecards.

mod console;

pub use console::*;

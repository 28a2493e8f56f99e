//! Huesmith CLI library
//!
//! The command-line counterpart of the palette form: argument parsing,
//! console output and the commands that drive the core session, the relay
//! and the streaming consumer.

mod args;
mod commands;
mod console;
mod router;

pub use args::{Cli, Commands, ConfigAction};
pub use console::Console;
pub use router::route;

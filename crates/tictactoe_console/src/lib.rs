//! Terminal front-end for the tic-tac-toe engine.
//!
//! - **ConsoleView**: renders engine notifications as text
//! - **Interactive**: stdin-driven play for two humans at one keyboard
//! - **Autoplay**: random self-play, for demos and smoke tests
//! - **Settings**: config file loading for the binary

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod autoplay;
mod console_view;
mod interactive;
mod settings;

pub use autoplay::{
    AutoplaySummary, PlayedGame, RandomMover, play_out, run_autoplay, write_json_lines,
};
pub use console_view::ConsoleView;
pub use interactive::{Command, ParseError, run_interactive};
pub use settings::load_config;

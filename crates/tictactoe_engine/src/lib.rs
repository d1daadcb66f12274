//! Tic-tac-toe game engine.
//!
//! Board state, win/draw detection and turn sequencing, with rendering left
//! to an external [`GameView`].
//!
//! # Architecture
//!
//! - **Board**: N x N grid; validates and applies marks, evaluates the game
//!   condition
//! - **Rules**: pure line scanning over a board (rows, columns, diagonals)
//! - **TurnController**: owns the players and whose turn it is, drives the
//!   board and notifies the view
//! - **StarterPicker**: injectable source for the random starting player
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{EventLog, FixedStarter, GameConfig, Seat, TurnController, TurnOutcome};
//!
//! let mut game = TurnController::new(GameConfig::default(), EventLog::new(), FixedStarter(Seat::First));
//! game.start_game("John", "Anna");
//! for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     assert_eq!(game.make_turn(x, y), TurnOutcome::Continue);
//! }
//! assert!(matches!(game.make_turn(0, 2), TurnOutcome::Won(_)));
//! assert!(game.is_stopped());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod condition;
mod config;
mod controller;
mod error;
mod player;
pub mod rules;
mod starter;
mod types;
mod view;

// Crate-level exports - Board and cells
pub use board::{Board, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
pub use types::{Cell, Marker, Seat};

// Crate-level exports - Game condition
pub use condition::{GameCondition, Line, LineKind};

// Crate-level exports - Players and turn sequencing
pub use controller::{Phase, TurnController, TurnOutcome};
pub use player::Player;
pub use starter::{FixedStarter, RandomStarter, ScriptedStarter, StarterPicker};

// Crate-level exports - View interface
pub use view::{EventLog, GameView, ViewEvent};

// Crate-level exports - Configuration and errors
pub use config::{ConfigError, GameConfig, MarkerAssets, MarkerSymbols};
pub use error::{BoardShapeError, MarkError, StartError};

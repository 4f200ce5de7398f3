//! Tic-Tac-Toe game engine.
//!
//! This crate provides the core game logic for a mobile Tic-Tac-Toe game,
//! including:
//! - Grid coordinate system for the 3x3 board
//! - Board representation with cell marks
//! - Pure win/draw evaluation
//! - Game state machine with strict turn alternation and reset
//!
//! # Architecture
//!
//! The engine is designed to be platform-agnostic. It can be compiled to:
//! - Native Rust for embedding in a desktop or test harness
//! - WebAssembly for the JavaScript/mobile rendering layer
//!
//! All presentation concerns (layout, animation, responsive sizing,
//! disabling touched cells) live in the rendering layer; the engine
//! communicates with it through actions, events, and JSON-friendly state
//! snapshots.
//!
//! # Modules
//!
//! - [`grid`]: Coordinates and win lines on the 3x3 board
//! - [`board`]: The grid of cell marks
//! - [`player`]: Player marks and alternation
//! - [`rules`]: Pure win/draw evaluator
//! - [`actions`]: Action/event vocabulary for the rendering layer
//! - [`game`]: Game state machine

pub mod actions;
pub mod board;
pub mod game;
pub mod grid;
pub mod player;
pub mod rules;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use actions::{GameAction, GameEvent};
pub use board::{Board, BoardJson, CellJson};
pub use game::{GameState, GameStateJson, GameStatus};
pub use grid::{Coord, Line, ALL_LINES, CELL_COUNT, GRID_SIZE};
pub use player::Mark;
pub use rules::{evaluate, Outcome};

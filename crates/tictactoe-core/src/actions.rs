//! Game actions and the events they produce.
//!
//! This is the vocabulary exchanged with the rendering layer: the renderer
//! sends actions in response to taps, and the engine answers with the
//! events that actually happened so the renderer can drive notifications
//! without diffing state snapshots.

use crate::grid::Coord;
use crate::player::Mark;
use serde::{Deserialize, Serialize};

/// All actions the rendering layer can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Place the current player's mark at a cell (a cell tap)
    PlaceMark(Coord),
    /// Reinitialize to the empty board with X to move (the reset button)
    Reset,
}

/// Events that occur as a result of actions.
///
/// Ignored input (occupied cell, move after the game ended) produces no
/// events at all; it is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was placed on the board
    MarkPlaced { mark: Mark, at: Coord },

    /// The game continues and the turn passed to the other player
    TurnPassed { next: Mark },

    /// The placed mark completed a line of three
    GameWon { winner: Mark },

    /// The board filled with no winner
    GameDrawn,

    /// The board was cleared and play restarted
    BoardReset,
}

//! Core game state machine.
//!
//! This module contains the main `GameState` struct: the 3x3 board, the
//! player to move, and the game status. Moves arrive from the rendering
//! layer as discrete taps; each transition is synchronous and atomic.
//!
//! Invalid input is deliberately a no-op rather than an error (see the
//! event contract on [`GameState::apply_move`]): the renderer disables
//! marked cells and terminal boards anyway, so a stray tap simply does
//! nothing.

use crate::actions::{GameAction, GameEvent};
use crate::board::{Board, BoardJson};
use crate::grid::Coord;
use crate::player::Mark;
use crate::rules::{self, Outcome};
use serde::{Deserialize, Serialize};

/// Current status of the game.
///
/// Transitions only move forward (`InProgress` to a terminal state);
/// only [`GameState::reset`] goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing
    InProgress,
    /// A player completed a line of three
    Won { winner: Mark },
    /// The board filled with no winner
    Drawn,
}

/// The complete game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The game board
    pub board: Board,
    /// Player whose turn it is (meaningless once terminal)
    pub current_player: Mark,
    /// Current game status
    pub status: GameStatus,
    /// Number of marks placed since the last reset
    pub move_count: u32,
}

impl GameState {
    /// Create a new game: empty board, X to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            status: GameStatus::InProgress,
            move_count: 0,
        }
    }

    /// Whether the game has ended
    pub fn is_finished(&self) -> bool {
        !matches!(self.status, GameStatus::InProgress)
    }

    /// The winner, if the game ended in a win
    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::Won { winner } => Some(winner),
            _ => None,
        }
    }

    /// Whether a tap on this cell would currently place a mark.
    ///
    /// This is the predicate the renderer uses to disable cells: it is
    /// false once the game is over or the cell is marked.
    pub fn can_place(&self, coord: Coord) -> bool {
        !self.is_finished() && self.board.is_empty_cell(coord)
    }

    /// All currently valid actions.
    ///
    /// One `PlaceMark` per empty cell while the game is in progress;
    /// `Reset` is always valid.
    pub fn valid_actions(&self) -> Vec<GameAction> {
        let mut actions = Vec::new();

        if !self.is_finished() {
            actions.extend(self.board.empty_cells().map(GameAction::PlaceMark));
        }
        actions.push(GameAction::Reset);

        actions
    }

    /// Apply an action, returning the events it produced
    pub fn apply_action(&mut self, action: GameAction) -> Vec<GameEvent> {
        match action {
            GameAction::PlaceMark(coord) => self.place(coord),
            GameAction::Reset => self.reset(),
        }
    }

    /// Place the current player's mark at `(row, col)`.
    ///
    /// Out-of-range coordinates, taps on marked cells, and taps after the
    /// game has ended are all no-ops and return an empty event list.
    /// Otherwise the mark is placed and the resulting events describe the
    /// transition: `MarkPlaced` followed by `TurnPassed`, `GameWon`, or
    /// `GameDrawn`.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Vec<GameEvent> {
        match Coord::from_indices(row, col) {
            Some(coord) => self.place(coord),
            None => Vec::new(),
        }
    }

    /// Unconditionally reinitialize: empty board, X to move, in progress
    pub fn reset(&mut self) -> Vec<GameEvent> {
        *self = Self::new();
        vec![GameEvent::BoardReset]
    }

    /// Convert to a JSON-friendly snapshot for the rendering layer
    pub fn to_json_friendly(&self) -> GameStateJson {
        GameStateJson {
            board: self.board.to_json_friendly(),
            current_player: self.current_player,
            status: self.status,
            move_count: self.move_count,
        }
    }

    fn place(&mut self, coord: Coord) -> Vec<GameEvent> {
        if self.is_finished() {
            return Vec::new();
        }

        let mark = self.current_player;
        if !self.board.place(coord, mark) {
            return Vec::new();
        }
        self.move_count += 1;

        let mut events = vec![GameEvent::MarkPlaced { mark, at: coord }];

        match rules::evaluate(&self.board, coord, mark) {
            Outcome::Win => {
                self.status = GameStatus::Won { winner: mark };
                events.push(GameEvent::GameWon { winner: mark });
            }
            Outcome::Draw => {
                self.status = GameStatus::Drawn;
                events.push(GameEvent::GameDrawn);
            }
            Outcome::Continue => {
                self.current_player = mark.opponent();
                events.push(GameEvent::TurnPassed {
                    next: self.current_player,
                });
            }
        }

        events
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON-friendly snapshot of the full game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStateJson {
    pub board: BoardJson,
    pub current_player: Mark,
    pub status: GameStatus,
    pub move_count: u32,
}

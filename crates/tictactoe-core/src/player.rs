//! Player marks and turn alternation.
//!
//! There are exactly two players, identified by the mark they place.
//! `X` always moves first after a reset.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The symbol a player places in a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// First player (moves first after every reset)
    X,
    /// Second player
    O,
}

impl Mark {
    /// Both marks, in play order
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    /// The mark that moves next after this one
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Display glyph for UI rendering.
    ///
    /// The circle is the large-circle glyph the mobile UI draws, not the
    /// letter O.
    pub const fn glyph(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => '◯',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

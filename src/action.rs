use std::fmt::{self, Display};

use crate::player::Player;

/// A single step applied to a score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Delta {
    Plus,
    Minus,
}

impl Delta {
    pub const fn value(self) -> i32 {
        match self {
            Delta::Plus => 1,
            Delta::Minus => -1,
        }
    }
}

// Doubles as the button label.
impl Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delta::Plus => f.write_str("+"),
            Delta::Minus => f.write_str("-"),
        }
    }
}

/// Everything the view can ask the game to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    StartGame,
    Adjust(Player, Delta),
}

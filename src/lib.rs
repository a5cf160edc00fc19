pub mod action;
pub mod game_state;
pub mod options;
pub mod player;

pub use action::{Action, Delta};
pub use game_state::{GamePhase, GameState};
pub use options::{GameOptions, OptionsError};
pub use player::Player;

/// Window title and page heading.
pub const TITLE: &str = "Magic The Gather Game Counter";

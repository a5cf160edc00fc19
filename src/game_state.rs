use log::{debug, info};

use crate::action::{Action, Delta};
use crate::options::GameOptions;
use crate::player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// No game has been started yet.
    Idle,
    Active,
    Won(Player),
}

/// Both scores and the win flags derived from them.
///
/// The flags are recomputed at the end of every mutating method, so they are
/// always consistent with the scores. While either flag is set, `adjust` does
/// nothing until the next `start_game`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    red_points: i32,
    blue_points: i32,
    red_won: bool,
    blue_won: bool,
    started: bool,
    starting_points: i32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameOptions::default())
    }
}

/// True when `own` wins against `opponent`.
pub const fn won(own: i32, opponent: i32) -> bool {
    opponent <= 0 && own > 0
}

impl GameState {
    pub fn new(options: GameOptions) -> Self {
        Self {
            red_points: 0,
            blue_points: 0,
            red_won: false,
            blue_won: false,
            started: false,
            starting_points: options.starting_points,
        }
    }

    /// Reset both scores to the starting points. Allowed at any time.
    pub fn start_game(&mut self) {
        self.red_points = self.starting_points;
        self.blue_points = self.starting_points;
        self.started = true;
        self.recompute();
        info!("Game started with {} points each", self.starting_points);
    }

    /// Move `player`'s score by one step. Ignored once someone has won.
    pub fn adjust(&mut self, player: Player, delta: Delta) {
        if self.is_frozen() {
            debug!("Ignoring {delta}1 for {player}: game is over");
            return;
        }

        let points = self.points_mut(player);
        *points = points.saturating_add(delta.value());
        debug!("{player} {delta}1 -> {}", *points);

        self.recompute();
        if let Some(winner) = self.winner() {
            info!(
                "{winner} wins ({} to {})",
                self.points(winner),
                self.points(winner.opponent())
            );
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::StartGame => self.start_game(),
            Action::Adjust(player, delta) => self.adjust(player, delta),
        }
    }

    pub fn points(&self, player: Player) -> i32 {
        match player {
            Player::Red => self.red_points,
            Player::Blue => self.blue_points,
        }
    }

    pub fn has_won(&self, player: Player) -> bool {
        match player {
            Player::Red => self.red_won,
            Player::Blue => self.blue_won,
        }
    }

    pub fn red_won(&self) -> bool {
        self.red_won
    }

    pub fn blue_won(&self) -> bool {
        self.blue_won
    }

    pub fn winner(&self) -> Option<Player> {
        if self.red_won {
            Some(Player::Red)
        } else if self.blue_won {
            Some(Player::Blue)
        } else {
            None
        }
    }

    /// True while a win is showing and score changes are refused.
    pub fn is_frozen(&self) -> bool {
        self.red_won || self.blue_won
    }

    pub fn phase(&self) -> GamePhase {
        match self.winner() {
            Some(winner) => GamePhase::Won(winner),
            None if self.started => GamePhase::Active,
            None => GamePhase::Idle,
        }
    }

    fn points_mut(&mut self, player: Player) -> &mut i32 {
        match player {
            Player::Red => &mut self.red_points,
            Player::Blue => &mut self.blue_points,
        }
    }

    fn recompute(&mut self) {
        self.blue_won = won(self.blue_points, self.red_points);
        self.red_won = won(self.red_points, self.blue_points);
    }
}

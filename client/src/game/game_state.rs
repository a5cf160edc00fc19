use counter::{Action, GameState, Player};
use log::debug;

pub trait GameStateExt {
    fn process<I: IntoIterator<Item = Action>>(&mut self, actions: I);

    fn banner(&self, player: Player) -> Option<String>;
}

impl GameStateExt for GameState {
    /// Apply the actions clicked during a frame, in click order
    fn process<I: IntoIterator<Item = Action>>(&mut self, actions: I) {
        for action in actions {
            debug!("Processing {action:?}");
            self.apply(action);
        }
    }

    /// "<Player> Wins" while that player has won, otherwise nothing
    fn banner(&self, player: Player) -> Option<String> {
        self.has_won(player).then(|| format!("{player} Wins"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use counter::Delta;

    #[test]
    fn process_applies_in_order() {
        let mut state = GameState::default();
        let mut actions = vec![Action::StartGame];
        actions.extend(std::iter::repeat(Action::Adjust(Player::Blue, Delta::Minus)).take(20));
        // Frozen by now, so neither of these lands.
        actions.push(Action::Adjust(Player::Blue, Delta::Plus));
        actions.push(Action::Adjust(Player::Red, Delta::Minus));

        state.process(actions);

        assert_eq!(state.points(Player::Red), 20);
        assert_eq!(state.points(Player::Blue), 0);
        assert!(state.red_won());
    }

    #[test]
    fn start_at_end_of_batch_resets() {
        let mut state = GameState::default();
        state.process([
            Action::StartGame,
            Action::Adjust(Player::Red, Delta::Plus),
            Action::StartGame,
        ]);
        assert_eq!(state.points(Player::Red), 20);
    }

    #[test]
    fn banner_only_for_the_winner() {
        let mut state = GameState::default();
        assert_eq!(state.banner(Player::Red), None);
        assert_eq!(state.banner(Player::Blue), None);

        state.start_game();
        for _ in 0..20 {
            state.adjust(Player::Red, Delta::Minus);
        }
        assert_eq!(state.banner(Player::Blue).as_deref(), Some("Blue Wins"));
        assert_eq!(state.banner(Player::Red), None);
    }
}

use egui::Color32;
use strum::{Display, EnumCount, EnumIter};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    pub const fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// Colour used for this player's score and banner.
    pub fn color(self) -> Color32 {
        match self {
            Player::Red => Color32::from_rgb(0xd2, 0x2b, 0x2b),
            Player::Blue => Color32::from_rgb(0x2b, 0x5c, 0xd2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn opponents_are_symmetric() {
        for player in Player::iter() {
            assert_ne!(player, player.opponent());
            assert_eq!(player, player.opponent().opponent());
        }
    }

    #[test]
    fn iteration_order_is_red_then_blue() {
        let players: Vec<_> = Player::iter().collect();
        assert_eq!(players, vec![Player::Red, Player::Blue]);
        assert_eq!(players.len(), Player::COUNT);
    }

    #[test]
    fn display_names() {
        assert_eq!(Player::Red.to_string(), "Red");
        assert_eq!(Player::Blue.to_string(), "Blue");
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    /// The other player's mark. None for `Empty`, which belongs to no player.
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Decisive result of a finished board. A board that is still being
/// played has no `Outcome`; the draw sentinel is a separate variant and
/// can never collide with a player mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    XWon,
    OWon,
    Draw,
}

impl Outcome {
    pub fn won_by(mark: Mark) -> Outcome {
        match mark {
            Mark::X => Outcome::XWon,
            Mark::O => Outcome::OWon,
            Mark::Empty => unreachable!("empty cells cannot win"),
        }
    }

    pub fn winning_mark(&self) -> Option<Mark> {
        match self {
            Outcome::XWon => Some(Mark::X),
            Outcome::OWon => Some(Mark::O),
            Outcome::Draw => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Over,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotDifficulty {
    Easy,
    Medium,
    Difficult,
}

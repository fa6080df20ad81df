use std::fmt;

/// The goal of Hog is to score 100 points.
pub const GOAL_SCORE: u32 = 100;

/// Upper bound on the number of dice a player may roll in one turn.
pub const MAX_ROLLS: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Zero,
    One,
}

impl Player {
    pub fn other(&self) -> Self {
        match self {
            Player::Zero => Player::One,
            Player::One => Player::Zero,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Player::Zero => 0,
            Player::One => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.index())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiceKind {
    FourSided,
    SixSided,
}

impl DiceKind {
    pub fn sides(&self) -> u32 {
        match self {
            DiceKind::FourSided => 4,
            DiceKind::SixSided => 6,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress(Player),
    Finished,
}

/// What a single turn of the game loop did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnRecord {
    pub player: Player,
    pub num_rolls: u32,
    pub dice: DiceKind,
    pub gain: u32,
    pub swapped: bool,
    /// Scores after the turn, player 0 first.
    pub scores: (u32, u32),
}

use crate::domain::models::{GOAL_SCORE, GameStatus, Player};
use crate::domain::rules::is_swap;

/// The Game Aggregate Root.
/// It owns both scores, whose turn it is, and the goal that ends the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    scores: [u32; 2],
    turn: Player,
    goal: u32,
}

impl Game {
    pub fn new() -> Self {
        Self::with_scores(0, 0, GOAL_SCORE)
    }

    pub fn with_scores(score0: u32, score1: u32, goal: u32) -> Self {
        Self {
            scores: [score0, score1],
            turn: Player::Zero,
            goal,
        }
    }

    pub fn status(&self) -> GameStatus {
        if self.scores.iter().any(|&s| s >= self.goal) {
            GameStatus::Finished
        } else {
            GameStatus::InProgress(self.turn)
        }
    }

    pub fn is_over(&self) -> bool {
        self.status() == GameStatus::Finished
    }

    /// Score of the player about to move, then the opponent's.
    pub fn perspective(&self) -> (u32, u32) {
        (
            self.scores[self.turn.index()],
            self.scores[self.turn.other().index()],
        )
    }

    /// Add `gain` to the active player's score, swap if the new scores are
    /// digit reversals of each other, and pass the turn. Returns whether a
    /// swap happened.
    pub fn apply_gain(&mut self, gain: u32) -> bool {
        let me = self.turn.index();
        let them = self.turn.other().index();

        let score = self.scores[me] + gain;
        let opponent_score = self.scores[them];
        let swapped = is_swap(score, opponent_score);
        if swapped {
            self.scores[me] = opponent_score;
            self.scores[them] = score;
        } else {
            self.scores[me] = score;
        }

        self.turn = self.turn.other();
        swapped
    }

    pub fn current_turn(&self) -> Player {
        self.turn
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.scores[0], self.scores[1])
    }

    pub fn goal(&self) -> u32 {
        self.goal
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

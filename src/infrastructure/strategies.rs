use crate::domain::models::GOAL_SCORE;
use crate::domain::rules::{free_bacon, is_swap};
use crate::domain::services::Strategy;

/// Rolls the same number of dice every turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlwaysRoll(pub u32);

pub fn always_roll(n: u32) -> AlwaysRoll {
    AlwaysRoll(n)
}

impl Strategy for AlwaysRoll {
    fn num_rolls(&self, _score: u32, _opponent_score: u32) -> u32 {
        self.0
    }
}

/// Rolls 0 dice if free bacon gives at least `margin` points, and
/// `num_rolls` otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaconStrategy {
    pub margin: u32,
    pub num_rolls: u32,
}

impl BaconStrategy {
    pub fn new(margin: u32, num_rolls: u32) -> Self {
        Self { margin, num_rolls }
    }
}

impl Default for BaconStrategy {
    fn default() -> Self {
        Self::new(8, 5)
    }
}

impl Strategy for BaconStrategy {
    fn num_rolls(&self, _score: u32, opponent_score: u32) -> u32 {
        if free_bacon(opponent_score) >= self.margin {
            0
        } else {
            self.num_rolls
        }
    }
}

/// Rolls 0 dice when free bacon leads to a beneficial swap and `num_rolls`
/// when it leads to a harmful one. Otherwise behaves like [`BaconStrategy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapStrategy {
    pub margin: u32,
    pub num_rolls: u32,
}

impl SwapStrategy {
    pub fn new(margin: u32, num_rolls: u32) -> Self {
        Self { margin, num_rolls }
    }
}

impl Default for SwapStrategy {
    fn default() -> Self {
        Self::new(8, 5)
    }
}

impl Strategy for SwapStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        let score_with_bacon = score + free_bacon(opponent_score);
        if is_swap(score_with_bacon, opponent_score) && score_with_bacon != opponent_score {
            if score_with_bacon < opponent_score {
                0
            } else {
                self.num_rolls
            }
        } else {
            BaconStrategy::new(self.margin, self.num_rolls).num_rolls(score, opponent_score)
        }
    }
}

/// Swap strategy tuned by how far along the player is.
///
/// Below a quarter of the goal there is little to lose, so it rolls 8 dice
/// unless free bacon is worth 9. Between a quarter and three quarters it keeps
/// the high margin but rolls 5. Above three quarters only a few points are
/// needed, so it takes free bacon at 3 and otherwise rolls 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinalStrategy {
    pub goal: u32,
}

impl FinalStrategy {
    pub fn new(goal: u32) -> Self {
        Self { goal }
    }

    fn params(&self, score: u32) -> SwapStrategy {
        let score = f64::from(score);
        let goal = f64::from(self.goal);
        if score < goal * 0.25 {
            SwapStrategy::new(9, 8)
        } else if score <= goal * 0.75 {
            SwapStrategy::new(9, 5)
        } else {
            SwapStrategy::new(3, 3)
        }
    }
}

impl Default for FinalStrategy {
    fn default() -> Self {
        Self::new(GOAL_SCORE)
    }
}

impl Strategy for FinalStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        self.params(score).num_rolls(score, opponent_score)
    }
}

use crate::domain::models::{DiceKind, MAX_ROLLS};
use crate::domain::services::Dice;
use crate::error::{HogError, Result};

/// Roll `num_rolls` dice and return the turn score.
///
/// Every die is rolled even after a 1 shows up; if any of them is a 1 the
/// turn is a pig out and scores exactly 1.
pub fn roll_dice<D: Dice + ?Sized>(num_rolls: u32, dice: &mut D) -> Result<u32> {
    if num_rolls == 0 {
        return Err(HogError::NoRolls);
    }

    let mut total = 0;
    let mut pig_out = false;
    for _ in 0..num_rolls {
        let outcome = dice.roll()?;
        if outcome == 1 {
            pig_out = true;
        }
        total += outcome;
    }

    Ok(if pig_out { 1 } else { total })
}

/// Points for rolling zero dice: one more than the largest of the last two
/// digits of the opponent's score.
pub fn free_bacon(opponent_score: u32) -> u32 {
    let ones = opponent_score % 10;
    let tens = (opponent_score / 10) % 10;
    ones.max(tens) + 1
}

/// Resolve one turn. Zero rolls takes free bacon and leaves `dice` untouched.
pub fn take_turn<D: Dice + ?Sized>(
    num_rolls: u32,
    opponent_score: u32,
    dice: &mut D,
    goal: u32,
) -> Result<u32> {
    if num_rolls > MAX_ROLLS {
        return Err(HogError::TooManyRolls(num_rolls));
    }
    if opponent_score >= goal {
        return Err(HogError::GameOver {
            opponent_score,
            goal,
        });
    }

    if num_rolls > 0 {
        roll_dice(num_rolls, dice)
    } else {
        Ok(free_bacon(opponent_score))
    }
}

/// Hog wild: four-sided dice whenever the combined score is a multiple of 7.
pub fn select_dice(score: u32, opponent_score: u32) -> DiceKind {
    if (score + opponent_score) % 7 == 0 {
        DiceKind::FourSided
    } else {
        DiceKind::SixSided
    }
}

/// True when the last two digits of `score0` are the reverse of the last two
/// digits of `score1`.
pub fn is_swap(score0: u32, score1: u32) -> bool {
    (score0 / 10) % 10 == score1 % 10 && (score1 / 10) % 10 == score0 % 10
}

use crate::error::Result;

/// A source of dice outcomes.
pub trait Dice {
    fn roll(&mut self) -> Result<u32>;
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn roll(&mut self) -> Result<u32> {
        (**self).roll()
    }
}

impl<D: Dice + ?Sized> Dice for Box<D> {
    fn roll(&mut self) -> Result<u32> {
        (**self).roll()
    }
}

/// Chooses how many dice to roll given the current player's score and the
/// opponent's score. Strategies hold no memory between turns.
pub trait Strategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32;
}

impl<F> Strategy for F
where
    F: Fn(u32, u32) -> u32,
{
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        self(score, opponent_score)
    }
}

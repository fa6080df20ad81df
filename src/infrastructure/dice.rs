use crate::domain::models::DiceKind;
use crate::domain::services::Dice;
use crate::error::{HogError, Result};
use rand::Rng;
use rand::rngs::ThreadRng;

/// Uniformly random dice over `1..=sides`.
#[derive(Clone, Debug)]
pub struct FairDice<R: Rng = ThreadRng> {
    sides: u32,
    rng: R,
}

impl FairDice<ThreadRng> {
    pub fn new(sides: u32) -> Self {
        Self::with_rng(sides, rand::thread_rng())
    }

    pub fn six_sided() -> Self {
        Self::new(6)
    }

    pub fn four_sided() -> Self {
        Self::new(4)
    }

    pub fn of_kind(kind: DiceKind) -> Self {
        Self::new(kind.sides())
    }
}

impl<R: Rng> FairDice<R> {
    pub fn with_rng(sides: u32, rng: R) -> Self {
        Self {
            sides: sides.max(1),
            rng,
        }
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }
}

impl<R: Rng> Dice for FairDice<R> {
    fn roll(&mut self) -> Result<u32> {
        Ok(self.rng.gen_range(1..=self.sides))
    }
}

/// Dice that replay a fixed sequence of outcomes, for deterministic tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestDice {
    outcomes: Vec<u32>,
    cursor: usize,
    cycle: bool,
}

impl TestDice {
    /// Fails with `DiceExhausted` once every outcome has been rolled.
    pub fn scripted(outcomes: Vec<u32>) -> Result<Self> {
        Self::build(outcomes, false)
    }

    /// Starts over from the first outcome after the last one.
    pub fn cycling(outcomes: Vec<u32>) -> Result<Self> {
        Self::build(outcomes, true)
    }

    fn build(outcomes: Vec<u32>, cycle: bool) -> Result<Self> {
        if outcomes.is_empty() {
            return Err(HogError::EmptyDice);
        }
        Ok(Self {
            outcomes,
            cursor: 0,
            cycle,
        })
    }

    /// Number of outcomes handed out so far.
    pub fn rolls(&self) -> usize {
        self.cursor
    }
}

impl Dice for TestDice {
    fn roll(&mut self) -> Result<u32> {
        let len = self.outcomes.len();
        if !self.cycle && self.cursor >= len {
            return Err(HogError::DiceExhausted(len));
        }
        let outcome = self.outcomes[self.cursor % len];
        self.cursor += 1;
        Ok(outcome)
    }
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HogError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HogError {
    #[error("cannot roll more than 10 dice (asked for {0})")]
    TooManyRolls(u32),

    #[error("must roll at least once")]
    NoRolls,

    #[error("the game should be over: opponent score {opponent_score} has reached goal {goal}")]
    GameOver { opponent_score: u32, goal: u32 },

    #[error("test dice exhausted after {0} rolls")]
    DiceExhausted(usize),

    #[error("test dice need at least one outcome")]
    EmptyDice,

    #[error("configuration error: {0}")]
    Config(String),
}

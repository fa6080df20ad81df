pub mod dice;
pub mod strategies;

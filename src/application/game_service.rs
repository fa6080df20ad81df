use crate::domain::game::Game;
use crate::domain::models::{DiceKind, GOAL_SCORE, GameStatus, Player, TurnRecord};
use crate::domain::rules::{select_dice, take_turn};
use crate::domain::services::{Dice, Strategy};
use crate::error::Result;
use crate::infrastructure::dice::FairDice;
use tracing::debug;

/// Runs a game of Hog between two strategies.
pub struct GameService<'a> {
    game: Game,
    strategy0: &'a dyn Strategy,
    strategy1: &'a dyn Strategy,
    four_sided: Box<dyn Dice + 'a>,
    six_sided: Box<dyn Dice + 'a>,
}

impl<'a> GameService<'a> {
    pub fn new(strategy0: &'a dyn Strategy, strategy1: &'a dyn Strategy) -> Self {
        GameService {
            game: Game::new(),
            strategy0,
            strategy1,
            four_sided: Box::new(FairDice::of_kind(DiceKind::FourSided)),
            six_sided: Box::new(FairDice::of_kind(DiceKind::SixSided)),
        }
    }

    pub fn with_scores(mut self, score0: u32, score1: u32) -> Self {
        self.game = Game::with_scores(score0, score1, self.game.goal());
        self
    }

    pub fn with_goal(mut self, goal: u32) -> Self {
        let (score0, score1) = self.game.scores();
        self.game = Game::with_scores(score0, score1, goal);
        self
    }

    /// Replace both dice sources, e.g. with test dice.
    pub fn with_dice(
        mut self,
        four_sided: impl Dice + 'a,
        six_sided: impl Dice + 'a,
    ) -> Self {
        self.four_sided = Box::new(four_sided);
        self.six_sided = Box::new(six_sided);
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn is_game_over(&self) -> bool {
        self.game.is_over()
    }

    /// Take the next turn. Returns `None` once either player has reached the
    /// goal.
    pub fn perform_next_turn(&mut self) -> Result<Option<TurnRecord>> {
        let player = match self.game.status() {
            GameStatus::Finished => return Ok(None),
            GameStatus::InProgress(player) => player,
        };

        let strategy = match player {
            Player::Zero => self.strategy0,
            Player::One => self.strategy1,
        };

        let (score, opponent_score) = self.game.perspective();
        let num_rolls = strategy.num_rolls(score, opponent_score);
        let kind = select_dice(score, opponent_score);
        let dice = match kind {
            DiceKind::FourSided => &mut self.four_sided,
            DiceKind::SixSided => &mut self.six_sided,
        };

        let gain = take_turn(num_rolls, opponent_score, dice, self.game.goal())?;
        let swapped = self.game.apply_gain(gain);

        let record = TurnRecord {
            player,
            num_rolls,
            dice: kind,
            gain,
            swapped,
            scores: self.game.scores(),
        };
        debug!(?record, "turn taken");
        Ok(Some(record))
    }

    /// Play until the game is over and return the final scores, player 0 first.
    pub fn run(&mut self) -> Result<(u32, u32)> {
        while self.perform_next_turn()?.is_some() {}
        Ok(self.game.scores())
    }
}

/// Simulate a game from 0-0 to the standard goal with fair dice and return
/// the final scores, player 0 first.
pub fn play<S0, S1>(strategy0: &S0, strategy1: &S1) -> Result<(u32, u32)>
where
    S0: Strategy,
    S1: Strategy,
{
    play_to(strategy0, strategy1, GOAL_SCORE)
}

/// [`play`] to an arbitrary goal.
pub fn play_to<S0, S1>(strategy0: &S0, strategy1: &S1, goal: u32) -> Result<(u32, u32)>
where
    S0: Strategy,
    S1: Strategy,
{
    GameService::new(strategy0, strategy1).with_goal(goal).run()
}

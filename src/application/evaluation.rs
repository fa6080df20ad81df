use crate::application::game_service::play_to;
use crate::config::AppConfig;
use crate::domain::models::{GOAL_SCORE, MAX_ROLLS, Player};
use crate::domain::rules::roll_dice;
use crate::domain::services::{Dice, Strategy};
use crate::error::Result;
use crate::infrastructure::strategies::{FinalStrategy, always_roll};
use rayon::prelude::*;
use tracing::{debug, info};

pub const DEFAULT_NUM_SAMPLES: usize = 1000;

/// A function wrapped so that each call returns the mean of many calls.
pub struct Averaged<F> {
    f: F,
    num_samples: usize,
}

/// Wrap `f` so that [`Averaged::call`] invokes it `num_samples` times with
/// the same arguments and returns the mean result. A sample count of 0 is
/// treated as 1.
pub fn make_averaged<F>(f: F, num_samples: usize) -> Averaged<F> {
    Averaged {
        f,
        num_samples: num_samples.max(1),
    }
}

impl<F> Averaged<F> {
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    pub fn call<A, T>(&mut self, args: A) -> Result<f64>
    where
        A: Clone,
        F: FnMut(A) -> Result<T>,
        T: Into<f64>,
    {
        let mut total = 0.0;
        for _ in 0..self.num_samples {
            let sample: f64 = (self.f)(args.clone())?.into();
            total += sample;
        }
        Ok(total / self.num_samples as f64)
    }
}

/// The number of dice in `1..=10` with the highest average turn score for
/// `dice`. Ties go to the smaller count.
pub fn max_scoring_num_rolls<D: Dice + ?Sized>(dice: &mut D, num_samples: usize) -> Result<u32> {
    let mut averaged = make_averaged(|num_rolls: u32| roll_dice(num_rolls, &mut *dice), num_samples);

    let mut best = (0, 0.0);
    for num_rolls in 1..=MAX_ROLLS {
        let average = averaged.call(num_rolls)?;
        debug!(num_rolls, average, "averaged turn score");
        if average > best.1 {
            best = (num_rolls, average);
        }
    }
    Ok(best.0)
}

/// Play one game and report who won. Ties go to player 1.
pub fn winner<S0, S1>(strategy0: &S0, strategy1: &S1) -> Result<Player>
where
    S0: Strategy,
    S1: Strategy,
{
    winner_to(strategy0, strategy1, GOAL_SCORE)
}

pub fn winner_to<S0, S1>(strategy0: &S0, strategy1: &S1, goal: u32) -> Result<Player>
where
    S0: Strategy,
    S1: Strategy,
{
    let (score0, score1) = play_to(strategy0, strategy1, goal)?;
    Ok(if score0 > score1 {
        Player::Zero
    } else {
        Player::One
    })
}

/// How a win rate is sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinRateSettings {
    pub goal: u32,
    pub num_samples: usize,
    pub parallel: bool,
}

impl Default for WinRateSettings {
    fn default() -> Self {
        Self {
            goal: GOAL_SCORE,
            num_samples: DEFAULT_NUM_SAMPLES,
            parallel: false,
        }
    }
}

impl From<&AppConfig> for WinRateSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            goal: config.game.goal,
            num_samples: config.evaluation.num_samples,
            parallel: config.evaluation.parallel,
        }
    }
}

/// Fraction of games player 1 wins, sampled sequentially.
fn player_one_win_rate<S0, S1>(strategy0: &S0, strategy1: &S1, goal: u32, num_samples: usize) -> Result<f64>
where
    S0: Strategy,
    S1: Strategy,
{
    make_averaged(
        |()| winner_to(strategy0, strategy1, goal).map(|p| p.index() as u32),
        num_samples,
    )
    .call(())
}

/// Fraction of games player 1 wins, sampled across the rayon pool.
fn player_one_win_rate_parallel<S0, S1>(
    strategy0: &S0,
    strategy1: &S1,
    goal: u32,
    num_samples: usize,
) -> Result<f64>
where
    S0: Strategy + Sync,
    S1: Strategy + Sync,
{
    let num_samples = num_samples.max(1);
    let wins = (0..num_samples)
        .into_par_iter()
        .map(|_| winner_to(strategy0, strategy1, goal).map(|p| p.index() as u32))
        .collect::<Result<Vec<u32>>>()?;

    let total: u32 = wins.into_iter().sum();
    Ok(f64::from(total) / num_samples as f64)
}

/// Win rate (0 to 1) of `strategy` against `baseline`, averaged over playing
/// first and playing second so the first-move advantage cancels out.
pub fn average_win_rate<S, B>(strategy: &S, baseline: &B, num_samples: usize) -> Result<f64>
where
    S: Strategy,
    B: Strategy,
{
    let as_player_0 = 1.0 - player_one_win_rate(strategy, baseline, GOAL_SCORE, num_samples)?;
    let as_player_1 = player_one_win_rate(baseline, strategy, GOAL_SCORE, num_samples)?;
    Ok((as_player_0 + as_player_1) / 2.0)
}

/// [`average_win_rate`] with the games spread over a thread pool.
pub fn average_win_rate_parallel<S, B>(strategy: &S, baseline: &B, num_samples: usize) -> Result<f64>
where
    S: Strategy + Sync,
    B: Strategy + Sync,
{
    estimate_win_rate(
        strategy,
        baseline,
        WinRateSettings {
            num_samples,
            parallel: true,
            ..WinRateSettings::default()
        },
    )
}

pub fn estimate_win_rate<S, B>(strategy: &S, baseline: &B, settings: WinRateSettings) -> Result<f64>
where
    S: Strategy + Sync,
    B: Strategy + Sync,
{
    let WinRateSettings {
        goal,
        num_samples,
        parallel,
    } = settings;

    let (as_player_0, as_player_1) = if parallel {
        (
            1.0 - player_one_win_rate_parallel(strategy, baseline, goal, num_samples)?,
            player_one_win_rate_parallel(baseline, strategy, goal, num_samples)?,
        )
    } else {
        (
            1.0 - player_one_win_rate(strategy, baseline, goal, num_samples)?,
            player_one_win_rate(baseline, strategy, goal, num_samples)?,
        )
    };

    let rate = (as_player_0 + as_player_1) / 2.0;
    info!(
        goal,
        num_samples,
        parallel,
        as_player_0,
        as_player_1,
        rate,
        "estimated win rate"
    );
    Ok(rate)
}

/// Win rate of the final strategy against rolling the configured baseline
/// number of dice every turn.
pub fn final_win_rate(config: &AppConfig) -> Result<f64> {
    let settings = WinRateSettings::from(config);
    estimate_win_rate(
        &FinalStrategy::new(settings.goal),
        &always_roll(config.evaluation.baseline_rolls),
        settings,
    )
}

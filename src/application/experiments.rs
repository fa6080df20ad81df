use crate::application::evaluation::{WinRateSettings, estimate_win_rate, max_scoring_num_rolls};
use crate::config::AppConfig;
use crate::domain::services::Strategy;
use crate::error::Result;
use crate::infrastructure::dice::FairDice;
use crate::infrastructure::strategies::{
    BaconStrategy, FinalStrategy, SwapStrategy, always_roll,
};
use tracing::info;

/// One line of experiment output.
#[derive(Clone, Debug, PartialEq)]
pub enum ExperimentResult {
    MaxScoringNumRolls { sides: u32, num_rolls: u32 },
    WinRate { strategy: &'static str, rate: f64 },
}

/// Best roll count for fair dice with the given number of sides.
pub fn max_scoring_experiment(sides: u32, num_samples: usize) -> Result<ExperimentResult> {
    let mut dice = FairDice::new(sides);
    let num_rolls = max_scoring_num_rolls(&mut dice, num_samples)?;
    Ok(ExperimentResult::MaxScoringNumRolls { sides, num_rolls })
}

/// Win rate of `strategy` against the configured baseline.
pub fn win_rate_experiment<S>(
    name: &'static str,
    strategy: &S,
    config: &AppConfig,
) -> Result<ExperimentResult>
where
    S: Strategy + Sync,
{
    let baseline = always_roll(config.evaluation.baseline_rolls);
    let rate = estimate_win_rate(strategy, &baseline, WinRateSettings::from(config))?;
    Ok(ExperimentResult::WinRate {
        strategy: name,
        rate,
    })
}

/// Run every experiment switched on in `config.experiments`, in a fixed order.
pub fn run_experiments(config: &AppConfig) -> Result<Vec<ExperimentResult>> {
    let enabled = &config.experiments;
    let num_samples = config.evaluation.num_samples;
    let mut results = Vec::new();

    if enabled.max_scoring_num_rolls {
        results.push(max_scoring_experiment(6, num_samples)?);
        results.push(max_scoring_experiment(4, num_samples)?);
    }
    if enabled.always_roll_8 {
        results.push(win_rate_experiment("always_roll(8)", &always_roll(8), config)?);
    }
    if enabled.bacon_strategy {
        results.push(win_rate_experiment(
            "bacon_strategy",
            &BaconStrategy::default(),
            config,
        )?);
    }
    if enabled.swap_strategy {
        results.push(win_rate_experiment(
            "swap_strategy",
            &SwapStrategy::default(),
            config,
        )?);
    }
    if enabled.final_strategy {
        results.push(win_rate_experiment(
            "final_strategy",
            &FinalStrategy::new(config.game.goal),
            config,
        )?);
    }

    info!(count = results.len(), "experiments finished");
    Ok(results)
}

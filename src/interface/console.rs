use crate::application::evaluation::final_win_rate;
use crate::application::experiments::{ExperimentResult, run_experiments};
use crate::config::AppConfig;
use crate::error::Result;

pub struct ConsoleInterface;

impl ConsoleInterface {
    pub fn run_final(config: &AppConfig) -> Result<()> {
        let win_rate = final_win_rate(config)?;
        println!("{}", format_final_win_rate(win_rate));
        Ok(())
    }

    pub fn run_experiments(config: &AppConfig) -> Result<()> {
        for result in run_experiments(config)? {
            println!("{}", format_experiment(&result));
        }
        Ok(())
    }
}

/// Rate as a decimal, then as a percentage rounded to two places.
pub fn format_final_win_rate(win_rate: f64) -> String {
    let percent = (win_rate * 100.0 * 100.0).round() / 100.0;
    format!("Your final_strategy win rate is\n     {win_rate:?}\n(or {percent:?}%)")
}

pub fn format_experiment(result: &ExperimentResult) -> String {
    match result {
        ExperimentResult::MaxScoringNumRolls { sides, num_rolls } => {
            let name = match *sides {
                4 => "four",
                6 => "six",
                _ => return format!("Max scoring num rolls for {sides}-sided dice: {num_rolls}"),
            };
            format!("Max scoring num rolls for {name}-sided dice: {num_rolls}")
        }
        ExperimentResult::WinRate { strategy, rate } => {
            format!("{strategy} win rate: {rate:?}")
        }
    }
}

use hog::application::experiments::{ExperimentResult, run_experiments};
use hog::config::AppConfig;

#[test]
fn test_no_experiments_by_default() {
    let config = AppConfig::default();
    assert!(run_experiments(&config).unwrap().is_empty());
}

#[test]
fn test_enabled_experiments_run_in_order() {
    let mut config = AppConfig::default();
    config.evaluation.num_samples = 20;
    config.experiments.max_scoring_num_rolls = true;
    config.experiments.bacon_strategy = true;
    config.experiments.final_strategy = true;

    let results = run_experiments(&config).unwrap();
    assert_eq!(results.len(), 4);

    match &results[0] {
        ExperimentResult::MaxScoringNumRolls { sides, num_rolls } => {
            assert_eq!(*sides, 6);
            assert!((1..=10).contains(num_rolls));
        }
        other => panic!("unexpected result {:?}", other),
    }
    match &results[1] {
        ExperimentResult::MaxScoringNumRolls { sides, .. } => assert_eq!(*sides, 4),
        other => panic!("unexpected result {:?}", other),
    }
    match &results[2] {
        ExperimentResult::WinRate { strategy, rate } => {
            assert_eq!(*strategy, "bacon_strategy");
            assert!((0.0..=1.0).contains(rate));
        }
        other => panic!("unexpected result {:?}", other),
    }
    match &results[3] {
        ExperimentResult::WinRate { strategy, .. } => assert_eq!(*strategy, "final_strategy"),
        other => panic!("unexpected result {:?}", other),
    }
}

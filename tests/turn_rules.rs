use hog::HogError;
use hog::domain::models::{DiceKind, GOAL_SCORE};
use hog::domain::rules::{free_bacon, is_swap, roll_dice, select_dice, take_turn};
use hog::infrastructure::dice::TestDice;

#[test]
fn test_free_bacon_uses_larger_digit() {
    assert_eq!(free_bacon(0), 1);
    assert_eq!(free_bacon(48), 9);
    assert_eq!(free_bacon(84), 9);
    assert_eq!(free_bacon(70), 8);
    assert_eq!(free_bacon(7), 8);
}

#[test]
fn test_zero_rolls_takes_free_bacon_for_every_score() {
    let mut dice = TestDice::scripted(vec![6]).unwrap();
    for opponent_score in 0..GOAL_SCORE {
        let expected = 1 + (opponent_score % 10).max((opponent_score / 10) % 10);
        let gain = take_turn(0, opponent_score, &mut dice, GOAL_SCORE).unwrap();
        assert_eq!(gain, expected, "opponent score {}", opponent_score);
    }
    assert_eq!(dice.rolls(), 0, "free bacon must not roll");
}

#[test]
fn test_pig_out_scores_one() {
    let mut dice = TestDice::scripted(vec![3, 1]).unwrap();
    assert_eq!(roll_dice(2, &mut dice).unwrap(), 1);
}

#[test]
fn test_pig_out_still_rolls_every_die() {
    let mut dice = TestDice::scripted(vec![1, 6, 6, 4]).unwrap();
    assert_eq!(roll_dice(3, &mut dice).unwrap(), 1);
    assert_eq!(dice.rolls(), 3);
    assert_eq!(roll_dice(1, &mut dice).unwrap(), 4);
}

#[test]
fn test_no_ones_sums_outcomes() {
    let mut dice = TestDice::scripted(vec![5, 6]).unwrap();
    assert_eq!(take_turn(2, 0, &mut dice, GOAL_SCORE).unwrap(), 11);

    let mut dice = TestDice::cycling(vec![2, 3, 4]).unwrap();
    assert_eq!(roll_dice(10, &mut dice).unwrap(), 2 + 3 + 4 + 2 + 3 + 4 + 2 + 3 + 4 + 2);
}

#[test]
fn test_roll_count_preconditions() {
    let mut dice = TestDice::cycling(vec![4]).unwrap();
    assert_eq!(roll_dice(0, &mut dice), Err(HogError::NoRolls));
    assert_eq!(
        take_turn(11, 0, &mut dice, GOAL_SCORE),
        Err(HogError::TooManyRolls(11))
    );
    assert_eq!(take_turn(10, 0, &mut dice, GOAL_SCORE).unwrap(), 40);
}

#[test]
fn test_turn_after_goal_is_rejected() {
    let mut dice = TestDice::cycling(vec![4]).unwrap();
    assert_eq!(
        take_turn(1, 100, &mut dice, GOAL_SCORE),
        Err(HogError::GameOver {
            opponent_score: 100,
            goal: 100
        })
    );
    assert_eq!(take_turn(0, 99, &mut dice, GOAL_SCORE).unwrap(), 10);
    assert!(take_turn(0, 30, &mut dice, 30).is_err());
}

#[test]
fn test_exhausted_dice_fail_the_turn() {
    let mut dice = TestDice::scripted(vec![2]).unwrap();
    assert_eq!(roll_dice(2, &mut dice), Err(HogError::DiceExhausted(1)));
}

#[test]
fn test_hog_wild_selects_four_sided() {
    assert_eq!(select_dice(3, 4), DiceKind::FourSided);
    assert_eq!(select_dice(3, 5), DiceKind::SixSided);
    assert_eq!(select_dice(0, 0), DiceKind::FourSided);
    assert_eq!(select_dice(50, 20), DiceKind::FourSided);
    assert_eq!(select_dice(50, 21), DiceKind::SixSided);
}

#[test]
fn test_swap_needs_both_digits_reversed() {
    assert!(is_swap(23, 32));
    assert!(is_swap(32, 23));
    assert!(!is_swap(23, 33));
    assert!(is_swap(5, 50));
    assert!(is_swap(11, 11));
    assert!(!is_swap(19, 48));
    assert!(is_swap(123, 32));
}

use hog::HogError;
use hog::domain::services::Dice;
use hog::infrastructure::dice::{FairDice, TestDice};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_fair_dice_stay_in_range() {
    for sides in [4, 6] {
        let mut dice = FairDice::with_rng(sides, StdRng::seed_from_u64(7));
        let mut seen = vec![false; sides as usize];
        for _ in 0..1000 {
            let outcome = dice.roll().unwrap();
            assert!((1..=sides).contains(&outcome));
            seen[(outcome - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "every face of a d{} shows up", sides);
    }
}

#[test]
fn test_seeded_dice_are_reproducible() {
    let mut a = FairDice::with_rng(6, StdRng::seed_from_u64(42));
    let mut b = FairDice::with_rng(6, StdRng::seed_from_u64(42));
    for _ in 0..50 {
        assert_eq!(a.roll().unwrap(), b.roll().unwrap());
    }
}

#[test]
fn test_standard_dice_sides() {
    assert_eq!(FairDice::six_sided().sides(), 6);
    assert_eq!(FairDice::four_sided().sides(), 4);
}

#[test]
fn test_scripted_dice_replay_then_exhaust() {
    let mut dice = TestDice::scripted(vec![4, 1, 2]).unwrap();
    assert_eq!(dice.roll().unwrap(), 4);
    assert_eq!(dice.roll().unwrap(), 1);
    assert_eq!(dice.roll().unwrap(), 2);
    assert_eq!(dice.roll(), Err(HogError::DiceExhausted(3)));
}

#[test]
fn test_cycling_dice_wrap_around() {
    let mut dice = TestDice::cycling(vec![3, 1, 5, 6]).unwrap();
    let outcomes: Vec<u32> = (0..6).map(|_| dice.roll().unwrap()).collect();
    assert_eq!(outcomes, vec![3, 1, 5, 6, 3, 1]);
    assert_eq!(dice.rolls(), 6);
}

#[test]
fn test_empty_test_dice_rejected() {
    assert_eq!(TestDice::scripted(Vec::new()), Err(HogError::EmptyDice));
    assert_eq!(TestDice::cycling(Vec::new()), Err(HogError::EmptyDice));
}

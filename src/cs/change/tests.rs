use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cs::change::{
    min_coins_to_total, BreadthFirstChange, ChangeOutcome, ChangeSolver, SolverConfig,
};
use crate::cs::dynamic::{min_coins_for_change, DynamicProgrammingChange};

const AUSTRALIAN: [usize; 8] = [1, 2, 5, 10, 20, 50, 100, 200];

fn bfs(leap_forward: bool) -> BreadthFirstChange {
    BreadthFirstChange::new(SolverConfig::default().with_leap_forward(leap_forward))
}

fn count(solver: &impl ChangeSolver, coins: &[usize], target: usize) -> Option<usize> {
    let mut coins = coins.to_vec();
    let report = solver.make_change(&mut coins, target).unwrap();
    if let ChangeOutcome::Solved(change) = &report.outcome {
        assert_eq!(change.target(), target, "multiset must sum to the target");
        for (coin, _) in change.iter() {
            assert!(coins.contains(&coin), "{} is not a denomination", coin);
        }
    }
    report.outcome.coin_count()
}

fn assert_matches_reference(coins: &[usize], max_target: usize) {
    for target in 1..=max_target {
        let expected = min_coins_for_change(coins, target);
        assert_eq!(
            count(&bfs(true), coins, target),
            expected,
            "leap on, coins {:?}, target {}",
            coins,
            target
        );
        assert_eq!(
            count(&bfs(false), coins, target),
            expected,
            "leap off, coins {:?}, target {}",
            coins,
            target
        );
        assert_eq!(
            count(&DynamicProgrammingChange::default(), coins, target),
            expected,
            "dp solver, coins {:?}, target {}",
            coins,
            target
        );
    }
}

#[test]
fn test_scenario_thirteen() {
    let mut coins = AUSTRALIAN;
    let outcome = min_coins_to_total(&mut coins, 13).unwrap();
    let change = outcome.multiset().unwrap();
    assert_eq!(change.coin_count(), 3);
    assert_eq!(change.coins(), vec![1, 2, 10]);
    assert_eq!(change.to_string(), "1x1 + 1x2 + 1x10 = 13");
}

#[test]
fn test_scenario_one() {
    let mut coins = AUSTRALIAN;
    let outcome = min_coins_to_total(&mut coins, 1).unwrap();
    assert_eq!(outcome.multiset().unwrap().coins(), vec![1]);
}

#[test]
fn test_scenario_unsatisfiable_even_coins() {
    let mut coins = [2, 4, 6];
    assert_eq!(
        min_coins_to_total(&mut coins, 7).unwrap(),
        ChangeOutcome::Unsatisfiable { target: 7 }
    );
    for target in (1..200).step_by(2) {
        assert_eq!(count(&bfs(true), &[6, 4, 2], target), None);
    }
}

#[test]
fn test_scenario_single_unit_coin_large_target() {
    let mut coins = [1];
    let report = bfs(true).make_change(&mut coins, 1_000_000).unwrap();
    let change = report.outcome.multiset().unwrap();
    assert_eq!(change.coin_count(), 1_000_000);
    assert_eq!(change.multiplicity(1), 1_000_000);
    assert_eq!(report.stats.seed, None);
}

#[test]
fn test_scenario_three_and_seven() {
    // 11 = 3a + 7b has no solution; let the reference decide
    assert_eq!(min_coins_for_change(&[3, 7], 11), None);
    assert_eq!(count(&bfs(true), &[3, 7], 11), None);
    assert_eq!(count(&bfs(false), &[3, 7], 11), None);

    assert_eq!(min_coins_for_change(&[3, 7], 13), Some(3));
    assert_eq!(count(&bfs(true), &[3, 7], 13), Some(3));
    assert_matches_reference(&[3, 7], 200);
}

#[test]
fn test_matches_reference_for_currency() {
    assert_matches_reference(&AUSTRALIAN, 500);
}

#[test]
fn test_matches_reference_for_non_canonical_sets() {
    // Greedy by largest coin is wrong for all of these
    assert_matches_reference(&[1, 3, 4], 500);
    assert_matches_reference(&[1, 5, 7], 500);
    assert_matches_reference(&[1, 7, 10], 500);
    assert_matches_reference(&[6, 10, 15, 30], 500);
    assert_matches_reference(&[1, 6, 10, 15, 30], 500);
    assert_matches_reference(&[2, 9, 11, 25], 500);
}

#[test]
fn test_matches_reference_for_random_sets() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
    for _ in 0..25 {
        let len = rng.gen_range(2..=5);
        let mut coins: Vec<usize> = (0..len).map(|_| rng.gen_range(1..=40)).collect();
        if rng.gen_bool(0.5) {
            coins.push(1);
        }
        assert_matches_reference(&coins, 300);
    }
}

#[test]
fn test_leap_forward_is_invisible_for_currency() {
    for target in (1..20_000).step_by(97) {
        let mut with_leap = AUSTRALIAN;
        let mut without = AUSTRALIAN;
        assert_eq!(
            bfs(true).make_change(&mut with_leap, target).unwrap().outcome,
            bfs(false).make_change(&mut without, target).unwrap().outcome,
            "target {}",
            target
        );
    }
}

#[test]
fn test_large_target_non_canonical_leap() {
    let coins = [1, 3, 4];
    let target = 100_003;
    // 25_000 fours plus a 3
    assert_eq!(count(&bfs(true), &coins, target), Some(25_001));
    assert_eq!(count(&bfs(false), &coins, target), Some(25_001));
    assert_eq!(min_coins_for_change(&coins, target), Some(25_001));
}

#[test]
fn test_idempotent_after_sorting() {
    let mut coins = vec![50, 1, 200, 20, 5, 100, 2, 10];
    let first = bfs(true).make_change(&mut coins, 388).unwrap();
    assert_eq!(coins, AUSTRALIAN.to_vec());

    let second = bfs(true).make_change(&mut coins, 388).unwrap();
    assert_eq!(first, second);
    assert_eq!(coins, AUSTRALIAN.to_vec());
}

#[test]
fn test_duplicates_do_not_change_result() {
    let plain = count(&bfs(true), &[1, 3, 4], 64);
    assert_eq!(count(&bfs(true), &[4, 1, 3, 4, 1, 3], 64), plain);
}

#[test]
fn test_denomination_equal_to_target_is_kept() {
    assert_eq!(count(&bfs(true), &[3, 10, 25], 10), Some(1));
    assert_eq!(count(&bfs(true), &[25, 10], 10), Some(1));
}

#[test]
fn test_every_denomination_above_target() {
    assert_eq!(count(&bfs(true), &[5, 10], 3), None);
}

#[test]
fn test_stats_are_per_call() {
    let solver = bfs(false);
    let a = solver.make_change(&mut AUSTRALIAN.to_vec(), 77).unwrap();
    let b = solver.make_change(&mut AUSTRALIAN.to_vec(), 77).unwrap();
    assert_eq!(a.stats, b.stats);
    assert!(a.stats.compares > 0);
}

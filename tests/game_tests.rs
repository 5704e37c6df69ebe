use battleship_ai::{Difficulty, Duel, GameStatus, Side, TileState};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn run_duel(first: Difficulty, second: Difficulty, seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut duel = Duel::new(first, second, &mut rng).unwrap();
    let winner = duel.run(&mut rng).unwrap();

    assert_eq!(duel.status(winner), GameStatus::Won);
    assert_eq!(duel.status(winner.opponent()), GameStatus::Lost);
    // Every shot resolves a fresh tile, so neither side can need more than
    // the whole board.
    let shots = duel.shots();
    assert!(shots[0] <= 100 && shots[1] <= 100, "shots: {:?}", shots);
    // Seventeen ship cells must fall before a fleet dies.
    assert!(shots[winner.index()] >= 17);
}

#[test]
fn easy_vs_easy_terminates() {
    for seed in 0..4 {
        run_duel(Difficulty::Easy, Difficulty::Easy, seed);
    }
}

#[test]
fn medium_vs_medium_terminates() {
    for seed in 0..4 {
        run_duel(Difficulty::Medium, Difficulty::Medium, seed);
    }
}

#[test]
fn hard_vs_hard_terminates() {
    for seed in 0..4 {
        run_duel(Difficulty::Hard, Difficulty::Hard, seed);
    }
}

#[test]
fn mixed_tiers_terminate() {
    run_duel(Difficulty::Easy, Difficulty::Hard, 7);
    run_duel(Difficulty::Hard, Difficulty::Medium, 8);
    run_duel(Difficulty::Medium, Difficulty::Easy, 9);
}

#[test]
fn knowledge_grid_never_contains_ship() {
    // The attacker only ever learns miss/hit/sunk; unfired enemy positions
    // stay unknown.
    let mut rng = SmallRng::seed_from_u64(77);
    let mut duel = Duel::new(Difficulty::Hard, Difficulty::Medium, &mut rng).unwrap();
    for _ in 0..30 {
        if duel.play_turn(Side::First, &mut rng).unwrap() {
            break;
        }
        if duel.play_turn(Side::Second, &mut rng).unwrap() {
            break;
        }
        for side in [Side::First, Side::Second] {
            let knowledge = duel.strategist(side).knowledge();
            assert_eq!(knowledge.count(TileState::Ship), 0);
        }
    }
}

#[test]
fn both_sides_are_addressable() {
    let mut rng = SmallRng::seed_from_u64(3);
    let duel = Duel::new(Difficulty::Easy, Difficulty::Medium, &mut rng).unwrap();
    for side in [Side::First, Side::Second] {
        assert_eq!(duel.status(side), GameStatus::InProgress);
        assert_eq!(duel.board(side).fleet().len(), 5);
        assert_eq!(side.opponent().opponent(), side);
    }
    assert_eq!(duel.strategist(Side::First).difficulty(), Difficulty::Easy);
    assert_eq!(duel.strategist(Side::Second).difficulty(), Difficulty::Medium);
}

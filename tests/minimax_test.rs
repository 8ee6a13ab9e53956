//! Exhaustive play against the minimax opponent.

use unbeatable_tictactoe::{GameEngine, Outcome, Phase, Searcher, Side, Sides};

#[derive(Debug, Default)]
struct Tally {
    draws: usize,
    opponent_wins: usize,
    player_wins: usize,
}

/// Tries every legal player move from `engine`, recursively.
fn explore(engine: &GameEngine, tally: &mut Tally) {
    if let Phase::GameOver(outcome) = engine.phase() {
        match outcome {
            Outcome::Draw => tally.draws += 1,
            Outcome::Win(side) if side == engine.sides().opponent() => tally.opponent_wins += 1,
            Outcome::Win(_) => tally.player_wins += 1,
        }
        return;
    }

    for index in engine.board().empty_indices() {
        let mut next = engine.clone();
        next.place_mark(index).expect("empty cell on player's turn");
        explore(&next, tally);
    }
}

#[test]
fn test_opponent_never_loses_moving_second() {
    let engine = GameEngine::start_game(Side::X, Side::O).expect("valid sides");
    let mut tally = Tally::default();
    explore(&engine, &mut tally);

    assert_eq!(tally.player_wins, 0, "{:?}", tally);
    assert!(tally.draws > 0);
    assert!(tally.opponent_wins > 0);
}

#[test]
fn test_opponent_never_loses_moving_first() {
    let engine = GameEngine::start_game(Side::O, Side::X).expect("valid sides");
    let mut tally = Tally::default();
    explore(&engine, &mut tally);

    assert_eq!(tally.player_wins, 0, "{:?}", tally);
    assert!(tally.draws > 0);
}

/// Follows every best-scoring player move, returning the outcome of each
/// line played to the end.
fn optimal_lines(engine: &GameEngine, outcomes: &mut Vec<Outcome>) {
    if let Phase::GameOver(outcome) = engine.phase() {
        outcomes.push(outcome);
        return;
    }

    // Scored from the player's side, so lower is better for the player.
    let candidates = Searcher::new(engine.sides().swapped()).score_moves(engine.board());
    let best = candidates
        .iter()
        .map(|c| c.score)
        .min()
        .expect("player has a move");
    for candidate in candidates.iter().filter(|c| c.score == best) {
        let mut next = engine.clone();
        next.place_mark(candidate.index).expect("search picks an empty cell");
        optimal_lines(&next, outcomes);
    }
}

#[test]
fn test_every_optimal_line_draws() {
    for (player, opponent, expected_lines) in [(Side::X, Side::O, 183), (Side::O, Side::X, 2)] {
        let engine = GameEngine::start_game(player, opponent).expect("valid sides");
        let mut outcomes = Vec::new();
        optimal_lines(&engine, &mut outcomes);

        assert_eq!(outcomes.len(), expected_lines, "player {}", player);
        assert!(
            outcomes.iter().all(|&outcome| outcome == Outcome::Draw),
            "player {} lost or won a line: {:?}",
            player,
            outcomes
        );
    }
}

#[test]
fn test_search_is_deterministic() {
    let sides = Sides::new(Side::X, Side::O).expect("valid sides");
    let searcher = Searcher::new(sides);
    let board = "X...O...X".parse().expect("valid board");
    let first = searcher.score_moves(&board);
    assert_eq!(first, searcher.score_moves(&board));
    assert_eq!(searcher.find_best_move(&board), Searcher::pick(&first));
}

#[test]
fn test_opposite_corners_answered_on_edge() {
    // X holds opposite corners around O's center: a corner reply loses.
    let sides = Sides::new(Side::X, Side::O).expect("valid sides");
    let searcher = Searcher::new(sides);
    let board = "X...O...X".parse().expect("valid board");
    let best = searcher.find_best_move(&board).expect("a move");
    assert!([1, 3, 5, 7].contains(&best), "chose {}", best);
}

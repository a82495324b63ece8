//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for validating move generation against published counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{GameState, Move};

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(GameState::new(), depth)
}

fn leaves_below(state: GameState, depth: u64) -> u64 {
    // Leaf node for this depth, or a finished game.
    if depth == 0 || state.is_terminal() {
        return 1;
    }

    if state.need_pass() {
        let next = state.apply_move(Move::Pass).expect("pass is legal here");
        return leaves_below(next, depth - 1);
    }

    state
        .legal_moves()
        .map(|loc| {
            let next = state
                .apply_move(Move::Piece(loc))
                .expect("move came from the legal list");
            leaves_below(next, depth - 1)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), 8200);
}

#[test]
fn perft_07() {
    assert_eq!(run_perft(7), 55092);
}

#[test]
fn perft_08() {
    assert_eq!(run_perft(8), 390216);
}

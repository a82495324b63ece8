//! Implements game-level logic: players, moves, outcomes, and the safe
//! [`GameState`] wrapper.
//!
//! For correctness, this higher-level interface is preferred; hot-loop code
//! may use [`crate::Position`] or [`crate::bitboard`] directly.

use crate::bitboard::Bitboard;
use crate::location::{Location, MoveList, ParseLocationError};
use crate::position::Position;
use crate::render;
use crate::{NUM_ACTIONS, NUM_SPACES, PASS_INDEX};
use derive_more::{Display, Error};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// The opposing player. Total and involutive.
    #[inline]
    pub const fn rival(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    fn not(self) -> Self {
        self.rival()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

/// An action available to the side to move: place on a cell, or pass.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Move {
    Piece(Location),
    Pass,
}

impl Move {
    /// Decode a 65-slot action index: cells `0..=63`, pass at
    /// [`PASS_INDEX`]. Returns None for anything past the pass slot.
    pub fn from_action(index: usize) -> Option<Self> {
        match index {
            PASS_INDEX => Some(Move::Pass),
            i if i < NUM_SPACES => Some(Move::Piece(Location::from_index(i as u8))),
            _ => None,
        }
    }

    /// Encode as a 65-slot action index.
    pub fn to_action(self) -> usize {
        match self {
            Move::Piece(loc) => loc.to_index() as usize,
            Move::Pass => PASS_INDEX,
        }
    }
}

impl From<Location> for Move {
    fn from(loc: Location) -> Self {
        Move::Piece(loc)
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "cannot parse move notation")]
pub struct ParseMoveError;

impl From<ParseLocationError> for ParseMoveError {
    fn from(_: ParseLocationError) -> Self {
        ParseMoveError
    }
}

/// Build a [`Move`] from notation: a cell like "D3", or "pass" in any case.
impl std::str::FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("pass") {
            return Ok(Move::Pass);
        }
        Ok(Move::Piece(s.parse()?))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Piece(loc) => fmt::Display::fmt(loc, f),
            Move::Pass => f.write_str("PASS"),
        }
    }
}

/// The result of a finished game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    BlackWin,
    WhiteWin,
    Tie,
}

impl Outcome {
    /// The winning player, or None for a tie.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::BlackWin => Some(Player::Black),
            Outcome::WhiteWin => Some(Player::White),
            Outcome::Tie => None,
        }
    }

    /// Score convention used by evaluation code: +1 for a black win,
    /// -1 for a white win, 0 for a tie.
    pub fn score(self) -> i8 {
        match self {
            Outcome::BlackWin => 1,
            Outcome::WhiteWin => -1,
            Outcome::Tie => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::BlackWin => f.write_str("Black wins"),
            Outcome::WhiteWin => f.write_str("White wins"),
            Outcome::Tie => f.write_str("Tie"),
        }
    }
}

/// Returned when a submitted move is not in the current legal set.
/// The game state it was submitted to is left untouched.
#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "move is not legal in this position")]
pub struct IllegalMoveError;

/// The complete state of a game: a board plus the side to move.
///
/// An immutable value type; every transition returns a new state.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct GameState {
    position: Position,
    to_play: Player,
}

impl Default for GameState {
    /// Gets the starting state: the central layout, black to move.
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The standard starting position, black to move.
    pub const fn new() -> Self {
        Self {
            position: Position::new(),
            to_play: Player::Black,
        }
    }

    /// Wrap an arbitrary position with a side to move.
    pub const fn from_parts(position: Position, to_play: Player) -> Self {
        Self { position, to_play }
    }

    /// The board state.
    #[inline]
    pub fn position(self) -> Position {
        self.position
    }

    /// The side to move.
    #[inline]
    pub fn to_play(self) -> Player {
        self.to_play
    }

    /// Cell moves available to the side to move.
    #[inline]
    pub fn legal_moves(self) -> MoveList {
        self.position.legal_moves(self.to_play)
    }

    /// 65-slot action indicator: one slot per cell plus the pass slot,
    /// which is set exactly when no cell move exists.
    pub fn legal_actions(self) -> [bool; NUM_ACTIONS] {
        let moves = self.legal_moves();
        let mut actions = [false; NUM_ACTIONS];
        for loc in moves {
            actions[loc.to_index() as usize] = true;
        }
        actions[PASS_INDEX] = moves.is_empty();
        actions
    }

    /// Whether `mv` may be submitted in this state.
    pub fn is_legal(self, mv: Move) -> bool {
        match mv {
            Move::Pass => self.need_pass(),
            Move::Piece(loc) => self.legal_moves().contains(loc),
        }
    }

    /// True when the side to move has no cell move and must pass.
    #[inline]
    pub fn need_pass(self) -> bool {
        self.legal_moves().is_empty()
    }

    /// True when the board is full or neither side has a cell move.
    pub fn is_terminal(self) -> bool {
        self.position.is_full()
            || (self.position.legal_moves(Player::Black).is_empty()
                && self.position.legal_moves(Player::White).is_empty())
    }

    /// Submit a move for the side to move.
    ///
    /// Rejects anything outside [`GameState::legal_actions`]: a cell move
    /// that captures nothing, and a pass while a cell move exists. On
    /// rejection nothing is mutated; the caller keeps its prior state.
    pub fn apply_move(self, mv: Move) -> Result<Self, IllegalMoveError> {
        if !self.is_legal(mv) {
            return Err(IllegalMoveError);
        }

        let position = match mv {
            Move::Pass => self.position,
            Move::Piece(loc) => self.position.apply(self.to_play, loc),
        };

        Ok(Self {
            position,
            to_play: self.to_play.rival(),
        })
    }

    /// The game result, or None while the game is still live.
    pub fn outcome(self) -> Option<Outcome> {
        if !self.is_terminal() {
            return None;
        }

        let black = self.position.stone_count(Player::Black);
        let white = self.position.stone_count(Player::White);
        Some(if black > white {
            Outcome::BlackWin
        } else if white > black {
            Outcome::WhiteWin
        } else {
            Outcome::Tie
        })
    }

    /// The winning player, or None for a tie or a live game.
    /// Use [`GameState::outcome`] to tell those two apart.
    pub fn winner(self) -> Option<Player> {
        self.outcome().and_then(Outcome::winner)
    }

    /// +1 for a black win, -1 for a white win, 0 for a tie or a live game.
    pub fn winner_score(self) -> i8 {
        self.outcome().map_or(0, Outcome::score)
    }

    /// Sign convention for evaluation code: +1 when black is to move,
    /// -1 when white is.
    pub fn to_play_factor(self) -> i8 {
        match self.to_play {
            Player::Black => 1,
            Player::White => -1,
        }
    }

    /// One-ply stable stones for `player`; see [`Position::stable_stones`].
    pub fn stable_stones(self, player: Player) -> Bitboard {
        self.position.stable_stones(player)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::board_text_with_moves(
            self.position,
            self.to_play,
            &render::Glyphs::ASCII,
        ))?;
        write!(f, "\n{} to play.", self.to_play)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn loc(s: &str) -> Location {
        Location::from_str(s).unwrap()
    }

    /// Black E1 walled in by white A1..D1: black has no cell move, but
    /// white can still capture eastward.
    fn must_pass_state() -> GameState {
        let position = Position::from_bitboards(
            Bitboard::from(1u64 << 4),
            Bitboard::from(0b1111u64),
        );
        GameState::from_parts(position, Player::Black)
    }

    #[test]
    fn rival_is_involutive() {
        assert_eq!(Player::Black.rival(), Player::White);
        assert_eq!(Player::White.rival().rival(), Player::White);
        assert_eq!(!Player::Black, Player::White);
    }

    #[test]
    fn four_opening_moves() {
        let state = GameState::new();
        let moves: Vec<String> = state.legal_moves().map(|mv| mv.to_string()).collect();
        assert_eq!(moves, vec!["D3", "C4", "F5", "E6"]);
    }

    #[test]
    fn opening_actions_have_no_pass() {
        let actions = GameState::new().legal_actions();
        assert_eq!(actions.iter().filter(|&&a| a).count(), 4);
        assert!(actions[loc("D3").to_index() as usize]);
        assert!(!actions[PASS_INDEX]);
    }

    #[test]
    fn opening_capture_flips_one_stone() {
        let state = GameState::new();
        let next = state.apply_move(Move::Piece(loc("D3"))).unwrap();
        assert_eq!(next.position().stone_count(Player::Black), 4);
        assert_eq!(next.position().stone_count(Player::White), 1);
        assert_eq!(next.to_play(), Player::White);
    }

    #[test]
    fn illegal_moves_are_rejected_without_mutation() {
        let state = GameState::new();
        assert_eq!(state.apply_move(Move::Pass), Err(IllegalMoveError));
        assert_eq!(
            state.apply_move(Move::Piece(loc("A1"))),
            Err(IllegalMoveError)
        );
        // Occupied cell.
        assert_eq!(
            state.apply_move(Move::Piece(loc("D4"))),
            Err(IllegalMoveError)
        );
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn pass_is_legal_exactly_when_no_cell_move_exists() {
        let state = must_pass_state();
        assert!(state.need_pass());
        assert!(!state.is_terminal());

        let actions = state.legal_actions();
        assert!(actions[PASS_INDEX]);
        assert_eq!(actions.iter().filter(|&&a| a).count(), 1);

        let next = state.apply_move(Move::Pass).unwrap();
        assert_eq!(next.position(), state.position());
        assert_eq!(next.to_play(), Player::White);
        assert!(!next.need_pass());
    }

    #[test]
    fn double_empty_move_sets_are_terminal() {
        // Two lone stones out of contact: nobody can move.
        let position = Position::from_bitboards(
            Bitboard::from(1u64),
            Bitboard::from(1u64 << 2),
        );
        let state = GameState::from_parts(position, Player::Black);
        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(Outcome::Tie));
        assert_eq!(state.winner_score(), 0);
    }

    #[test]
    fn full_board_outcomes() {
        let black_major = Position::from_bitboards(
            Bitboard::from(!0u64 << 16),
            Bitboard::from(0xffffu64),
        );
        let state = GameState::from_parts(black_major, Player::Black);
        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(Outcome::BlackWin));
        assert_eq!(state.winner_score(), 1);

        let white_major = Position::from_bitboards(
            Bitboard::from(0xffffu64),
            Bitboard::from(!0u64 << 16),
        );
        let state = GameState::from_parts(white_major, Player::White);
        assert_eq!(state.outcome(), Some(Outcome::WhiteWin));
        assert_eq!(state.winner(), Some(Player::White));
        assert_eq!(state.winner_score(), -1);

        let split = Position::from_bitboards(
            Bitboard::from(0xffff_ffffu64),
            Bitboard::from(!0u64 << 32),
        );
        let state = GameState::from_parts(split, Player::Black);
        assert_eq!(state.outcome(), Some(Outcome::Tie));
        assert_eq!(state.outcome().unwrap().winner(), None);
    }

    #[test]
    fn live_games_have_no_outcome() {
        assert_eq!(GameState::new().outcome(), None);
        assert_eq!(GameState::new().winner_score(), 0);
    }

    #[test]
    fn to_play_factor_signs() {
        let state = GameState::new();
        assert_eq!(state.to_play_factor(), 1);
        let next = state.apply_move(Move::Piece(loc("D3"))).unwrap();
        assert_eq!(next.to_play_factor(), -1);
    }

    #[test]
    fn action_index_round_trip() {
        assert_eq!(Move::from_action(19), Some(Move::Piece(loc("D3"))));
        assert_eq!(Move::from_action(PASS_INDEX), Some(Move::Pass));
        assert_eq!(Move::from_action(NUM_ACTIONS), None);
        assert_eq!(Move::Piece(loc("D3")).to_action(), 19);
        assert_eq!(Move::Pass.to_action(), PASS_INDEX);
    }

    #[test]
    fn move_notation() {
        assert_eq!(Move::from_str("D3"), Ok(Move::Piece(loc("D3"))));
        assert_eq!(Move::from_str("pass"), Ok(Move::Pass));
        assert_eq!(Move::from_str("PASS"), Ok(Move::Pass));
        assert_eq!(Move::from_str("Z9"), Err(ParseMoveError));
        assert_eq!(Move::Pass.to_string(), "PASS");
        assert_eq!(Move::Piece(loc("C4")).to_string(), "C4");
    }

    /// Walk the opening tree checking the invariants every legal move
    /// must uphold: disjoint stone sets, own count up by one plus the
    /// flips, rival count down by exactly the flips.
    #[test]
    fn move_application_invariants_hold_in_the_opening_tree() {
        fn walk(state: GameState, depth: u32) {
            if depth == 0 || state.is_terminal() {
                return;
            }
            if state.need_pass() {
                walk(state.apply_move(Move::Pass).unwrap(), depth - 1);
                return;
            }
            for mv in state.legal_moves() {
                let next = state.apply_move(Move::Piece(mv)).unwrap();
                let own = state.to_play();
                let rival = own.rival();

                let position = next.position();
                assert!((position.stones(Player::Black) & position.stones(Player::White))
                    .is_empty());

                let own_gain = position.stone_count(own) as i32
                    - state.position().stone_count(own) as i32;
                let rival_loss = state.position().stone_count(rival) as i32
                    - position.stone_count(rival) as i32;
                assert_eq!(own_gain, rival_loss + 1);
                assert!(rival_loss >= 1);

                walk(next, depth - 1);
            }
        }

        walk(GameState::new(), 5);
    }
}

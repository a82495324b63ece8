//! `flipstone` is a bitboard Reversi (Othello) rules engine for agents and UIs.
//!
//! This crate implements three levels of abstraction:
//!
//!  - [`bitboard`] contains the raw, unchecked operations for working with
//!    whole boards at once: directional shifts, rival-run searches, legal-move
//!    and flip computation.
//!  - [`Position`] owns the two stone sets and implements board dynamics in
//!    the same fast, unchecked way. This is suitable for use with engines.
//!  - [`GameState`] is the safe interface: it layers turn order, pass
//!    handling, scoring and terminal detection on top of [`Position`], and
//!    rejects illegal moves instead of corrupting the board.
//!
//! [`render`] is a read-only text view over a [`Position`], used by UIs and
//! the interactive driver in [`test_utils`].

pub mod bitboard;
pub mod render;
pub mod test_utils;

mod game;
mod location;
mod position;
mod utils;

pub use game::*;
pub use location::*;
pub use position::*;

/// The number of cells on one edge of the board.
pub const EDGE_LENGTH: usize = 8;

/// The number of cells on the board.
pub const NUM_SPACES: usize = 64;

/// Action-vector slot reserved for the pass move.
pub const PASS_INDEX: usize = NUM_SPACES;

/// Size of an action vector: one slot per cell plus the pass slot.
pub const NUM_ACTIONS: usize = NUM_SPACES + 1;

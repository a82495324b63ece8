//! Miscellaneous project utilities.

use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter};

/// Lay 64 cell glyphs out as a labeled grid.
/// `glyphs` must yield exactly 64 items.
pub fn format_grid<T: Iterator<Item = char>>(mut glyphs: T, f: &mut Formatter) -> fmt::Result {
    write!(f, "   A B C D E F G H")?;

    for row in 0..EDGE_LENGTH {
        write!(f, "\n {} ", row + 1)?;
        for _ in 0..EDGE_LENGTH {
            write!(f, "{} ", glyphs.next().ok_or(fmt::Error)?)?;
        }
    }

    match glyphs.next() {
        None => Ok(()),
        Some(_) => Err(fmt::Error),
    }
}

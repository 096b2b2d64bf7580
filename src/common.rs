//! Common types for a replayed match: coordinates, cell states, shot results
//! and the error enums shared by the parser, the board and the resolver.

#[cfg(not(feature = "std"))]
use alloc::string::String;
use core::fmt;
use core::num::ParseIntError;

use crate::config::{EMPTY_GLYPH, HIT_GLYPH, MISS_GLYPH, SHIP_GLYPH};

/// A single cell address, `(0, 0)` being the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// State of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Nothing docked, never targeted.
    Empty,
    /// Ship segment not hit yet.
    Ship,
    /// Destroyed ship segment.
    Hit,
    /// Targeted cell without a ship.
    Miss,
}

impl Cell {
    /// Glyph used when rendering the board.
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => EMPTY_GLYPH,
            Cell::Ship => SHIP_GLYPH,
            Cell::Hit => HIT_GLYPH,
            Cell::Miss => MISS_GLYPH,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Result of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Shot landed on an undamaged ship segment.
    Hit,
    /// Shot landed on water, or on a cell already targeted.
    Miss,
}

/// Numeric field of a match script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    GridSize,
    TotalShips,
    TotalMissiles,
    Row,
    Column,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::GridSize => "grid size",
            Field::TotalShips => "total ships",
            Field::TotalMissiles => "total missiles",
            Field::Row => "row",
            Field::Column => "column",
        };
        f.write_str(name)
    }
}

/// Errors returned while parsing a match script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Fewer lines than a script needs.
    IncompleteInput { expected: usize, found: usize },
    /// A numeric field is not a base-10 unsigned integer.
    InvalidNumber {
        field: Field,
        value: String,
        source: ParseIntError,
    },
    /// A coordinate token does not split into exactly `row:col`.
    InvalidLocation(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::IncompleteInput { expected, found } => write!(
                f,
                "incomplete input: expected {} lines, found {}",
                expected, found
            ),
            ParseError::InvalidNumber {
                field,
                value,
                source,
            } => write!(f, "invalid {} {:?}: {}", field, value, source),
            ParseError::InvalidLocation(token) => write!(f, "not a valid location - {}", token),
        }
    }
}

/// Errors returned by board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the `grid_size`×`grid_size` grid.
    OutOfBounds { at: Coordinate, grid_size: usize },
    /// `grid_size * grid_size` overflows `usize`.
    GridTooLarge { grid_size: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { at, grid_size } => write!(
                f,
                "location {} is outside the {}x{} board",
                at, grid_size, grid_size
            ),
            BoardError::GridTooLarge { grid_size } => {
                write!(f, "grid size {} is too large", grid_size)
            }
        }
    }
}

/// Any failure while playing a scripted match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Parse(ParseError),
    Board(BoardError),
}

impl From<ParseError> for GameError {
    fn from(err: ParseError) -> Self {
        GameError::Parse(err)
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Parse(e) => write!(f, "parse error: {}", e),
            GameError::Board(e) => write!(f, "board error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::InvalidNumber { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Parse(e) => Some(e),
            GameError::Board(e) => Some(e),
        }
    }
}

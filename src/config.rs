//! Fixed layout of a match script and the glyphs used when rendering boards.

/// Number of lines a match script must provide.
pub const SCRIPT_LINES: usize = 7;

/// Line positions inside a match script.
pub const GRID_SIZE_LINE: usize = 0;
pub const TOTAL_SHIPS_LINE: usize = 1;
pub const P1_SHIPS_LINE: usize = 2;
pub const P2_SHIPS_LINE: usize = 3;
pub const TOTAL_MISSILES_LINE: usize = 4;
pub const P1_MOVES_LINE: usize = 5;
pub const P2_MOVES_LINE: usize = 6;

/// Separator between coordinates in a list.
pub const LIST_SEPARATOR: char = ',';
/// Separator between row and column of a single coordinate.
pub const COORD_SEPARATOR: char = ':';

pub const EMPTY_GLYPH: char = '_';
pub const SHIP_GLYPH: char = 'B';
pub const HIT_GLYPH: char = 'X';
pub const MISS_GLYPH: char = 'O';

pub const PLAYER1_WINS: &str = "Player1 wins";
pub const PLAYER2_WINS: &str = "Player2 wins";
pub const DRAW: &str = "It is a draw";

/// Environment variable consulted for the log level.
pub const LOG_ENV_VAR: &str = "BATTLESHIP_LOG";

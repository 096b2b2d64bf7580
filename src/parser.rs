//! Parsing of the seven-line match script into two players.
//!
//! The script is positional:
//!
//! ```text
//! 5                      grid size
//! 5                      total ships per player
//! 1:1,2:0,2:3,3:4,4:3    player 1 ships
//! 0:1,2:3,3:0,3:4,4:1    player 2 ships
//! 5                      total missiles per player
//! 0:1,4:3,2:3,3:1,4:1    player 1 moves (at player 2)
//! 0:1,0:0,1:2,2:3,4:3    player 2 moves (at player 1)
//! ```

#[cfg(not(feature = "std"))]
use alloc::{string::ToString, vec::Vec};

use crate::{
    board::Board,
    common::{Coordinate, Field, GameError, ParseError},
    config::{
        COORD_SEPARATOR, GRID_SIZE_LINE, LIST_SEPARATOR, P1_MOVES_LINE, P1_SHIPS_LINE,
        P2_MOVES_LINE, P2_SHIPS_LINE, SCRIPT_LINES, TOTAL_MISSILES_LINE, TOTAL_SHIPS_LINE,
    },
    player::Player,
};

fn parse_number(field: Field, value: &str) -> Result<usize, ParseError> {
    value.parse().map_err(|source| ParseError::InvalidNumber {
        field,
        value: value.to_string(),
        source,
    })
}

/// Parse a single `row:col` token.
pub fn parse_coordinate(token: &str) -> Result<Coordinate, ParseError> {
    let mut parts = token.split(COORD_SEPARATOR);
    let (row, col) = match (parts.next(), parts.next(), parts.next()) {
        (Some(row), Some(col), None) => (row, col),
        _ => return Err(ParseError::InvalidLocation(token.to_string())),
    };
    Ok(Coordinate::new(
        parse_number(Field::Row, row)?,
        parse_number(Field::Column, col)?,
    ))
}

/// Parse a comma-separated list of `row:col` tokens.
///
/// An empty list is a single empty token and is rejected.
pub fn parse_coordinates(list: &str) -> Result<Vec<Coordinate>, ParseError> {
    list.split(LIST_SEPARATOR).map(parse_coordinate).collect()
}

fn parse_player(
    ships: &str,
    moves: &str,
    grid_size: usize,
    total_ships: usize,
    total_missiles: usize,
) -> Result<Player, GameError> {
    let ship_positions = parse_coordinates(ships)?;
    if ship_positions.len() != total_ships {
        log::warn!(
            "declared {} ships but {} positions were given",
            total_ships,
            ship_positions.len()
        );
    }
    let board = Board::new(grid_size, total_ships, ship_positions)?;

    let moves = parse_coordinates(moves)?;
    if moves.len() != total_missiles {
        log::warn!(
            "declared {} missiles but {} moves were given",
            total_missiles,
            moves.len()
        );
    }
    Ok(Player::new(board, moves, total_missiles))
}

/// Parse the two players of a match script.
///
/// Lines are trimmed; lines past the seventh are ignored.
pub fn parse_players<S: AsRef<str>>(lines: &[S]) -> Result<(Player, Player), GameError> {
    if lines.len() < SCRIPT_LINES {
        return Err(ParseError::IncompleteInput {
            expected: SCRIPT_LINES,
            found: lines.len(),
        }
        .into());
    }
    if lines.len() > SCRIPT_LINES {
        log::debug!("ignoring {} trailing lines", lines.len() - SCRIPT_LINES);
    }
    let line = |idx: usize| lines[idx].as_ref().trim();

    let grid_size = parse_number(Field::GridSize, line(GRID_SIZE_LINE))?;
    let total_ships = parse_number(Field::TotalShips, line(TOTAL_SHIPS_LINE))?;
    let total_missiles = parse_number(Field::TotalMissiles, line(TOTAL_MISSILES_LINE))?;

    let p1 = parse_player(
        line(P1_SHIPS_LINE),
        line(P1_MOVES_LINE),
        grid_size,
        total_ships,
        total_missiles,
    )?;
    let p2 = parse_player(
        line(P2_SHIPS_LINE),
        line(P2_MOVES_LINE),
        grid_size,
        total_ships,
        total_missiles,
    )?;
    Ok((p1, p2))
}

//! Commonly used types and functions for ease of import.

pub use crate::{
    parse_coordinate, parse_coordinates, parse_players, play_game, render_report, resolve, Board,
    Cell, Coordinate, GameError, GuessResult, MatchResult, Player, Verdict,
};

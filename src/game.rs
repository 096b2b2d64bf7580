//! Match resolution: replay both move lists and decide the winner.

#[cfg(not(feature = "std"))]
use alloc::string::String;
use core::{cmp::Ordering, fmt};

use crate::{
    common::{BoardError, GameError},
    config::{DRAW, PLAYER1_WINS, PLAYER2_WINS},
    parser::parse_players,
    player::Player,
};

/// Outcome of a match, decided on hit counts alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Verdict {
    #[cfg_attr(feature = "std", serde(rename = "Player1 wins"))]
    Player1Wins,
    #[cfg_attr(feature = "std", serde(rename = "Player2 wins"))]
    Player2Wins,
    #[cfg_attr(feature = "std", serde(rename = "It is a draw"))]
    Draw,
}

impl Verdict {
    pub fn from_hits(player1_hits: usize, player2_hits: usize) -> Self {
        match player1_hits.cmp(&player2_hits) {
            Ordering::Greater => Verdict::Player1Wins,
            Ordering::Less => Verdict::Player2Wins,
            Ordering::Equal => Verdict::Draw,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Player1Wins => PLAYER1_WINS,
            Verdict::Player2Wins => PLAYER2_WINS,
            Verdict::Draw => DRAW,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final state of a match.
///
/// Boards are rendered after the opponent's moves were applied; hit counts
/// are the hits each player scored on the other.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchResult {
    pub player1_board: String,
    pub player2_board: String,
    pub player1_hits: usize,
    pub player2_hits: usize,
    pub verdict: Verdict,
}

/// Replay each player's moves against the other's board.
pub fn resolve(mut p1: Player, mut p2: Player) -> Result<MatchResult, BoardError> {
    let player1_hits = p2.take_fire(p1.moves())?;
    let player2_hits = p1.take_fire(p2.moves())?;
    let verdict = Verdict::from_hits(player1_hits, player2_hits);
    log::info!(
        "P1: {} hits, P2: {} hits, {}",
        player1_hits,
        player2_hits,
        verdict
    );

    Ok(MatchResult {
        player1_board: p1.board().render(),
        player2_board: p2.board().render(),
        player1_hits,
        player2_hits,
        verdict,
    })
}

/// Parse a match script and resolve it.
pub fn play_game<S: AsRef<str>>(lines: &[S]) -> Result<MatchResult, GameError> {
    let (p1, p2) = parse_players(lines)?;
    log::debug!(
        "grid {}x{}, {} ships, {} missiles per player",
        p1.board().grid_size(),
        p1.board().grid_size(),
        p1.board().total_ships(),
        p1.total_missiles()
    );
    Ok(resolve(p1, p2)?)
}

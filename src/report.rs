//! Output layouts for a resolved match.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

use crate::game::MatchResult;

/// Text report written to the result file.
///
/// ```text
/// Player1
/// O B _ _ _
/// ...
///
/// Player2
/// ...
///
///
/// P1: 3
/// P2: 2
/// Player1 wins
/// ```
///
/// Every board row ends with a newline; nothing follows the verdict.
pub fn render_report(result: &MatchResult) -> String {
    format!(
        "Player1\n{}\nPlayer2\n{}\n\nP1: {}\nP2: {}\n{}",
        result.player1_board,
        result.player2_board,
        result.player1_hits,
        result.player2_hits,
        result.verdict
    )
}

/// JSON form of the result, boards kept as rendered text.
#[cfg(feature = "std")]
pub fn render_json(result: &MatchResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

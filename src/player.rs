#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{
    board::Board,
    common::{BoardError, Coordinate},
};

/// One side of a scripted match: its own board and the shots it fires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    board: Board,
    moves: Vec<Coordinate>,
    total_missiles: usize,
}

impl Player {
    /// `total_missiles` is informational and never caps the replayed moves.
    pub fn new(board: Board, moves: Vec<Coordinate>, total_missiles: usize) -> Self {
        Self {
            board,
            moves,
            total_missiles,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Shots this player fires at the opponent, in script order.
    pub fn moves(&self) -> &[Coordinate] {
        &self.moves
    }

    pub fn total_missiles(&self) -> usize {
        self.total_missiles
    }

    /// Apply the opponent's shots to this player's board and return how many hit.
    pub fn take_fire(&mut self, opponent_moves: &[Coordinate]) -> Result<usize, BoardError> {
        self.board.receive_salvo(opponent_moves)
    }
}

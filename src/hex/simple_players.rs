use crate::game::common::Move;
use crate::hex::hex_board::Board;
use crate::hex::HexPlayer;
use rand::prelude::*;

/// Plays uniformly at random among the free cells, and on its second turn
/// claims the swap with probability 1/2.
pub struct PlayerRand<R: Rng = StdRng> {
    rand: R,
}

impl Default for PlayerRand<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerRand<StdRng> {
    pub fn new() -> Self {
        Self::from_seed(rand::thread_rng().gen())
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rand: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> PlayerRand<R> {
    pub fn with_rng(rand: R) -> Self {
        Self { rand }
    }
}

impl<R: Rng> HexPlayer for PlayerRand<R> {
    fn claim_swap(&mut self, turn: u32) -> bool {
        // the second message we receive is the only swap window
        turn == 2 && self.rand.gen::<bool>()
    }

    fn next_move(&mut self, board: &Board) -> Option<Move> {
        let choices = board.empty_tiles();
        if choices.is_empty() {
            return None;
        }
        let (row, column) = choices[self.rand.gen_range(0..choices.len())];
        Some(Move::place(row, column))
    }
}

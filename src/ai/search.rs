use crate::ai::eval::PositionalEvaluator;
use crate::board::Board;

/// Search bound in plies.
pub const DEFAULT_DEPTH: u8 = 3;

/// Fixed-depth minimax searcher with alpha-beta pruning.
///
/// The root is always a maximizer for the side invoking the search;
/// leaves are scored from that side's perspective regardless of whose
/// turn it is at the leaf, so maximize/minimize alternation is decided
/// by depth parity alone. Purely synchronous recursion: every frame
/// owns its own board snapshot, nothing is memoized or shared.
pub struct Searcher<'a> {
    evaluator: &'a PositionalEvaluator,
    max_depth: u8,
}

impl<'a> Searcher<'a> {
    pub fn new(evaluator: &'a PositionalEvaluator) -> Self {
        Self::with_depth(evaluator, DEFAULT_DEPTH)
    }

    pub fn with_depth(evaluator: &'a PositionalEvaluator, max_depth: u8) -> Self {
        Self {
            evaluator,
            max_depth,
        }
    }

    /// Searches the best placement for the given side.
    ///
    /// Returns `None` when the side has no legal move; a returned
    /// square is always a member of `board.legal_moves(is_black)`.
    pub fn search(&self, board: &Board, is_black: bool) -> Option<usize> {
        let moves = bitboard_to_positions(board.legal_moves(is_black));
        let mut candidates = moves.into_iter();
        let mut best_move = candidates.next()?;

        let mut best_score = self.score_candidate(board, best_move, is_black);
        for mv in candidates {
            let score = self.score_candidate(board, mv, is_black);
            // Strictly greater: ties keep the earliest candidate in
            // ascending square order.
            if score > best_score {
                best_score = score;
                best_move = mv;
            }
        }

        Some(best_move)
    }

    /// Applies one root candidate and scores the reply tree. Each root
    /// candidate gets a fresh full alpha-beta window.
    fn score_candidate(&self, board: &Board, mv: usize, is_black: bool) -> i32 {
        let mut next = *board;
        let _ = next.place(mv, is_black);
        self.minimax(&next, !is_black, 1, i32::MIN, i32::MAX, is_black)
    }

    fn minimax(
        &self,
        board: &Board,
        to_move_is_black: bool,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        root_is_black: bool,
    ) -> i32 {
        let legal = board.legal_moves(to_move_is_black);
        if depth >= self.max_depth || legal == 0 {
            return self.evaluator.evaluate(board, root_is_black);
        }

        // Even depths are the root side's own turns.
        let maximizing = depth % 2 == 0;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for mv in bitboard_to_positions(legal) {
            let mut next = *board;
            let _ = next.place(mv, to_move_is_black);
            let score = self.minimax(
                &next,
                !to_move_is_black,
                depth + 1,
                alpha,
                beta,
                root_is_black,
            );

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
                if alpha >= beta {
                    return alpha;
                }
            } else {
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    return beta;
                }
            }
        }

        best
    }
}

fn bitboard_to_positions(mut mask: u64) -> Vec<usize> {
    let mut out = Vec::new();
    while mask != 0 {
        out.push(mask.trailing_zeros() as usize);
        mask &= mask - 1;
    }
    out
}

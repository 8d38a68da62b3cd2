use crate::ai::eval::default_evaluator;
use crate::ai::search::Searcher;
use crate::board::Board;
use crate::types::{GameResult, GameState, Position};

const BOARD_WIDTH: usize = 8;
const BOARD_LEN: usize = BOARD_WIDTH * BOARD_WIDTH;
pub const PLAYER_BLACK: u8 = 1;
pub const PLAYER_WHITE: u8 = 2;

/// Seam between the game loop and a decision engine: one board state
/// and side in, one square (or no-move) out.
pub trait MoveSelector: Send + Sync {
    fn select_move(&self, board: &Board, is_black: bool, depth: u8) -> Option<usize>;
}

/// Selector backed by the fixed-depth alpha-beta searcher.
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchMoveSelector;

impl MoveSelector for SearchMoveSelector {
    fn select_move(&self, board: &Board, is_black: bool, depth: u8) -> Option<usize> {
        Searcher::with_depth(default_evaluator(), depth).search(board, is_black)
    }
}

pub struct GameInstance {
    board: Board,
    pub current_player: u8,
    pub depth: u8,
    pub is_game_over: bool,
    pub is_pass: bool,
    pub flipped: Vec<u8>,
    selector: Box<dyn MoveSelector>,
}

impl GameInstance {
    pub fn new(depth: u8, selector: Box<dyn MoveSelector>) -> Self {
        Self {
            board: Board::new(),
            current_player: PLAYER_BLACK,
            depth,
            is_game_over: false,
            is_pass: false,
            flipped: Vec::new(),
            selector,
        }
    }

    pub fn new_with_search_selector(depth: u8) -> Self {
        Self::new(depth, Box::new(SearchMoveSelector))
    }

    /// Places a stone for the external (black) side.
    pub fn place(&mut self, row: u8, col: u8) -> Result<(), String> {
        if self.is_game_over {
            return Err("game is already over".to_string());
        }
        if self.current_player != PLAYER_BLACK {
            return Err("it is not the player's turn".to_string());
        }

        let pos = row_col_to_pos(row, col)?;
        self.apply_move(pos, true)
    }

    pub fn has_legal_moves_for_current(&self) -> bool {
        self.board.legal_moves(self.current_player == PLAYER_BLACK) != 0
    }

    pub fn pass(&mut self) {
        self.is_pass = true;
        self.flipped.clear();
        self.current_player = opponent_of(self.current_player);
    }

    pub fn end_game(&mut self) {
        self.is_game_over = true;
    }

    /// Asks the selector for the engine (white) side's move and applies
    /// it. A selector answer is validated against the legal move mask
    /// before touching the board.
    pub fn do_ai_move(&mut self) -> Result<(), String> {
        if self.is_game_over {
            return Err("game is already over".to_string());
        }
        if self.current_player != PLAYER_WHITE {
            return Err("it is not AI's turn".to_string());
        }

        let legal = self.board.legal_moves(false);
        if legal == 0 {
            return Err("AI has no legal moves".to_string());
        }

        let selected = self
            .selector
            .select_move(&self.board, false, self.depth)
            .ok_or_else(|| "AI could not select a move".to_string())?;

        if selected >= BOARD_LEN {
            return Err("AI selected an out-of-range move".to_string());
        }
        if (legal & (1u64 << selected)) == 0 {
            return Err("AI selected an illegal move".to_string());
        }

        self.apply_move(selected, false)
    }

    pub fn get_legal_moves(&self) -> Vec<Position> {
        let legal = self.board.legal_moves(self.current_player == PLAYER_BLACK);
        bitmask_to_indices(legal)
            .into_iter()
            .map(|idx| Position {
                row: idx / BOARD_WIDTH as u8,
                col: idx % BOARD_WIDTH as u8,
            })
            .collect()
    }

    pub fn to_game_state(&self) -> GameState {
        let (black_count, white_count) = self.board.count();
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player,
            black_count,
            white_count,
            is_game_over: self.is_game_over,
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let (black_count, white_count) = self.board.count();
        GameResult {
            winner: if black_count > white_count {
                PLAYER_BLACK
            } else if white_count > black_count {
                PLAYER_WHITE
            } else {
                0
            },
            black_count,
            white_count,
        }
    }

    fn apply_move(&mut self, pos: usize, is_black: bool) -> Result<(), String> {
        let legal = self.board.legal_moves(is_black);
        if (legal & (1u64 << pos)) == 0 {
            return Err("illegal move".to_string());
        }

        let flips = self.board.place(pos, is_black);
        if flips == 0 {
            return Err("illegal move".to_string());
        }

        self.is_pass = false;
        self.flipped = bitmask_to_indices(flips);
        self.current_player = if is_black { PLAYER_WHITE } else { PLAYER_BLACK };

        if self.board.empty_count() == 0 {
            self.end_game();
        }

        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn set_board_for_test(&mut self, board: Board, current_player: u8) {
        self.board = board;
        self.current_player = current_player;
        self.is_game_over = false;
        self.is_pass = false;
        self.flipped.clear();
    }
}

fn row_col_to_pos(row: u8, col: u8) -> Result<usize, String> {
    if row >= BOARD_WIDTH as u8 || col >= BOARD_WIDTH as u8 {
        return Err("row/col out of range".to_string());
    }
    Ok((row as usize) * BOARD_WIDTH + col as usize)
}

fn bitmask_to_indices(mask: u64) -> Vec<u8> {
    let mut bits = mask;
    let mut out = Vec::new();

    while bits != 0 {
        out.push(bits.trailing_zeros() as u8);
        bits &= bits - 1;
    }

    out
}

fn opponent_of(player: u8) -> u8 {
    match player {
        PLAYER_BLACK => PLAYER_WHITE,
        PLAYER_WHITE => PLAYER_BLACK,
        _ => unreachable!("invalid player value: {}", player),
    }
}

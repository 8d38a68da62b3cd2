const BOARD_SIZE: usize = 8;
const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// The 8 compass directions as (row delta, col delta).
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Othello board state represented by two bitboards.
///
/// Square `pos` (0..=63) maps to row `pos / 8`, column `pos % 8`.
/// `Board` is `Copy`; search and game code take snapshots instead of
/// sharing a mutable board across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Board {
    /// Creates the canonical opening position:
    /// d4=white, e4=black, d5=black, e5=white.
    pub fn new() -> Self {
        Self {
            black: bit(28) | bit(35),
            white: bit(27) | bit(36),
        }
    }

    /// Builds a board directly from raw bitboards.
    /// Overlapping bits are a caller error; black wins the overlap.
    pub fn from_bitboards(black: u64, white: u64) -> Self {
        Self {
            black,
            white: white & !black,
        }
    }

    /// Builds a board from 64 cell values (0=empty, 1=black, 2=white).
    /// Any other value is treated as empty.
    pub fn from_array(cells: &[u8; NUM_SQUARES]) -> Self {
        let mut black = 0u64;
        let mut white = 0u64;
        for (pos, &cell) in cells.iter().enumerate() {
            match cell {
                1 => black |= bit(pos),
                2 => white |= bit(pos),
                _ => {}
            }
        }
        Self { black, white }
    }

    /// Bitboard of the given side's own stones.
    pub fn side_bits(&self, is_black: bool) -> u64 {
        if is_black { self.black } else { self.white }
    }

    /// Returns the legal move mask for the given side.
    ///
    /// A square is legal iff it is empty and at least one direction
    /// crosses a contiguous run of opponent stones ending on an own
    /// stone. The mask representation deduplicates captures reached
    /// from several directions for free.
    pub fn legal_moves(&self, is_black: bool) -> u64 {
        let (me, opp) = self.split(is_black);
        let occupied = me | opp;
        let mut legal = 0u64;

        for pos in 0..NUM_SQUARES {
            if (occupied & bit(pos)) != 0 {
                continue;
            }
            if Self::flips_for(pos, me, opp) != 0 {
                legal |= bit(pos);
            }
        }

        legal
    }

    /// Places one stone for the given side and flips every captured
    /// stone. Returns the flip mask (placement bit not included).
    ///
    /// An illegal placement returns 0 and leaves the board unchanged;
    /// legality is the caller's contract, not detected here as an error.
    pub fn place(&mut self, pos: usize, is_black: bool) -> u64 {
        let (me, opp) = self.split(is_black);
        let flips = Self::flips_for(pos, me, opp);
        if flips == 0 {
            return 0;
        }

        let next_me = me | bit(pos) | flips;
        let next_opp = opp & !flips;
        if is_black {
            self.black = next_me;
            self.white = next_opp;
        } else {
            self.white = next_me;
            self.black = next_opp;
        }

        flips
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.black.count_ones() as u8, self.white.count_ones() as u8)
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        NUM_SQUARES as u8 - (self.black | self.white).count_ones() as u8
    }

    /// Converts to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut cells = [0u8; NUM_SQUARES];
        for (pos, cell) in cells.iter_mut().enumerate() {
            if (self.black & bit(pos)) != 0 {
                *cell = 1;
            } else if (self.white & bit(pos)) != 0 {
                *cell = 2;
            }
        }
        cells
    }

    fn split(&self, is_black: bool) -> (u64, u64) {
        if is_black {
            (self.black, self.white)
        } else {
            (self.white, self.black)
        }
    }

    /// Captured-stone mask for placing on `pos` with stones `me` against
    /// `opp`. Walks each direction over opponent stones; the run flips
    /// only when it terminates on an own stone inside the board.
    fn flips_for(pos: usize, me: u64, opp: u64) -> u64 {
        if pos >= NUM_SQUARES || ((me | opp) & bit(pos)) != 0 {
            return 0;
        }

        let row = (pos / BOARD_SIZE) as i32;
        let col = (pos % BOARD_SIZE) as i32;
        let mut flips = 0u64;

        for (dr, dc) in DIRECTIONS {
            let mut r = row + dr;
            let mut c = col + dc;
            let mut run = 0u64;

            while in_bounds(r, c) {
                let square = bit((r * BOARD_SIZE as i32 + c) as usize);
                if (opp & square) != 0 {
                    run |= square;
                } else {
                    if (me & square) != 0 {
                        flips |= run;
                    }
                    break;
                }
                r += dr;
                c += dc;
            }
        }

        flips
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn bit(pos: usize) -> u64 {
    if pos < NUM_SQUARES { 1u64 << pos } else { 0 }
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

use once_cell::sync::Lazy;

use crate::board::Board;

const MAGIC: &[u8; 4] = b"PSWT";
const VERSION: u32 = 1;
const HEADER_SIZE: usize = 16;
const BOARD_SIZE: usize = 8;
const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Static positional weights, row-major. Corners dominate; the squares
/// diagonally adjacent to a corner hand corner access to the opponent
/// and carry the heaviest penalty.
const DEFAULT_WEIGHTS: [i32; BOARD_CELLS] = [
    50, -3, 7, 2, 2, 7, -3, 50, //
    -3, -12, 1, 1, 1, 1, -12, -3, //
    7, 1, 1, 1, 1, 1, 1, 7, //
    2, 1, 1, 1, 1, 1, 1, 2, //
    2, 1, 1, 1, 1, 1, 1, 2, //
    7, 1, 1, 1, 1, 1, 1, 7, //
    -3, -12, 1, 1, 1, 1, -12, -3, //
    50, -3, 7, 2, 2, 7, -3, 50, //
];

static DEFAULT_EVALUATOR: Lazy<PositionalEvaluator> = Lazy::new(PositionalEvaluator::default);

/// Shared instance carrying the built-in weight table.
pub fn default_evaluator() -> &'static PositionalEvaluator {
    &DEFAULT_EVALUATOR
}

/// Zero-lookahead positional evaluator over a fixed 8x8 weight table.
#[derive(Debug, Clone)]
pub struct PositionalEvaluator {
    weights: [i32; BOARD_CELLS],
}

impl Default for PositionalEvaluator {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
        }
    }
}

impl PositionalEvaluator {
    /// Deserialize an alternative weight table from the `PSWT` blob
    /// format: magic, version, CRC32 of the payload, then 64
    /// little-endian `i32` weights.
    pub fn from_bytes(data: &[u8]) -> Result<Self, String> {
        if data.len() < HEADER_SIZE {
            return Err(format!(
                "weights data too short: expected at least {HEADER_SIZE} bytes, got {}",
                data.len()
            ));
        }

        if &data[0..4] != MAGIC {
            return Err("invalid weights magic (expected PSWT)".to_string());
        }

        let version = read_u32_le(data, 4)?;
        if version != VERSION {
            return Err(format!(
                "unsupported weights version: expected {VERSION}, got {version}"
            ));
        }

        let expected_crc = read_u32_le(data, 8)?;
        let payload = &data[HEADER_SIZE..];

        let actual_crc = crc32fast::hash(payload);
        if actual_crc != expected_crc {
            return Err(format!(
                "CRC32 mismatch: expected {expected_crc:#010x}, got {actual_crc:#010x}"
            ));
        }

        if payload.len() != BOARD_CELLS * 4 {
            return Err(format!(
                "weights payload must be exactly {} bytes, got {}",
                BOARD_CELLS * 4,
                payload.len()
            ));
        }

        let mut weights = [0i32; BOARD_CELLS];
        for (i, weight) in weights.iter_mut().enumerate() {
            let mut chunk = [0u8; 4];
            chunk.copy_from_slice(&payload[i * 4..i * 4 + 4]);
            *weight = i32::from_le_bytes(chunk);
        }

        Ok(Self { weights })
    }

    /// Weighted positional sum for `is_black`'s side minus the same sum
    /// for the opponent; empty squares contribute zero. Never inspects
    /// legal moves or future states.
    pub fn evaluate(&self, board: &Board, is_black: bool) -> i32 {
        let me = board.side_bits(is_black);
        let opp = board.side_bits(!is_black);
        let mut score = 0i32;

        for (pos, &weight) in self.weights.iter().enumerate() {
            let square = 1u64 << pos;
            if (me & square) != 0 {
                score += weight;
            } else if (opp & square) != 0 {
                score -= weight;
            }
        }

        score
    }
}

fn read_u32_le(data: &[u8], offset: usize) -> Result<u32, String> {
    if offset + 4 > data.len() {
        return Err("unexpected EOF while reading u32".to_string());
    }
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&data[offset..offset + 4]);
    Ok(u32::from_le_bytes(bytes))
}

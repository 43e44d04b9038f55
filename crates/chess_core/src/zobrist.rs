//! Zobrist keys used to recognise repeated positions.
//!
//! A key XORs one random value per (piece, square) pair plus values for the
//! side to move, each castling right and the en-passant file. Two positions
//! that are equal for repetition purposes always share a key.

use crate::board::Position;
use crate::types::{Color, Piece, file_of};

const PIECE_SQUARES: usize = 12 * 64;

pub struct ZobristKeys {
    /// Indexed by `(color * 6 + kind) * 64 + square`.
    pieces: [u64; PIECE_SQUARES],
    black_to_move: u64,
    /// [wk, wq, bk, bq]
    castling: [u64; 4],
    en_passant_file: [u64; 8],
}

impl ZobristKeys {
    /// Builds the table at compile time from a fixed splitmix64 stream.
    pub const fn new() -> Self {
        const fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            z ^ (z >> 31)
        }

        let mut state = 0x2545_F491_4F6C_DD1Du64;

        let mut pieces = [0u64; PIECE_SQUARES];
        let mut i = 0;
        while i < PIECE_SQUARES {
            pieces[i] = splitmix64(&mut state);
            i += 1;
        }

        let black_to_move = splitmix64(&mut state);

        let mut castling = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            castling[i] = splitmix64(&mut state);
            i += 1;
        }

        let mut en_passant_file = [0u64; 8];
        let mut i = 0;
        while i < 8 {
            en_passant_file[i] = splitmix64(&mut state);
            i += 1;
        }

        ZobristKeys {
            pieces,
            black_to_move,
            castling,
            en_passant_file,
        }
    }

    #[inline]
    pub fn piece_key(&self, piece: Piece, sq: u8) -> u64 {
        self.pieces[(piece.color.idx() * 6 + piece.kind.idx()) * 64 + sq as usize]
    }

    pub fn hash(&self, pos: &Position) -> u64 {
        let mut h = pos
            .pieces()
            .fold(0u64, |h, (s, pc)| h ^ self.piece_key(pc, s));

        if pos.side_to_move == Color::Black {
            h ^= self.black_to_move;
        }
        let rights = [
            pos.castling.wk,
            pos.castling.wq,
            pos.castling.bk,
            pos.castling.bq,
        ];
        for (key, on) in self.castling.iter().zip(rights) {
            if on {
                h ^= key;
            }
        }
        if let Some(ep) = pos.en_passant {
            h ^= self.en_passant_file[file_of(ep) as usize];
        }
        h
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;

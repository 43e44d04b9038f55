use crate::error::FenError;
use crate::types::*;
use crate::zobrist::ZOBRIST;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        wk: true,
        wq: true,
        bk: true,
        bq: true,
    };

    pub fn kingside(&self, c: Color) -> bool {
        match c {
            Color::White => self.wk,
            Color::Black => self.bk,
        }
    }

    pub fn queenside(&self, c: Color) -> bool {
        match c {
            Color::White => self.wq,
            Color::Black => self.bq,
        }
    }

    /// Drops every right that depends on a piece standing on `sq`.
    /// Called for both the origin and destination of each move, which covers
    /// king moves, rook moves and rooks captured on their home square.
    fn touch(&mut self, sq: u8) {
        match sq {
            0 => self.wq = false,
            7 => self.wk = false,
            4 => {
                self.wk = false;
                self.wq = false;
            }
            56 => self.bq = false,
            63 => self.bk = false,
            60 => {
                self.bk = false;
                self.bq = false;
            }
            _ => {}
        }
    }

    fn to_fen(self) -> String {
        let mut s = String::new();
        for (flag, ch) in [(self.wk, 'K'), (self.wq, 'Q'), (self.bk, 'k'), (self.bq, 'q')] {
            if flag {
                s.push(ch);
            }
        }
        if s.is_empty() {
            s.push('-');
        }
        s
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// Everything `unmake_move` needs to restore the previous position.
#[derive(Clone, Debug)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub moved_piece: Piece,
    pub rook_move: Option<(u8, u8)>, // (rook_from, rook_to) for castling
    pub ep_captured_sq: Option<u8>,  // square actually emptied by en passant
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn startpos() -> Self {
        const BACK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = [None; 64];
        for (file, kind) in BACK.into_iter().enumerate() {
            board[file] = Some(Piece::new(Color::White, kind));
            board[8 + file] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board[48 + file] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board[56 + file] = Some(Piece::new(Color::Black, kind));
        }

        Position {
            board,
            side_to_move: Color::White,
            castling: CastlingRights::ALL,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Parses a FEN string. The two move counters are optional and default
    /// to `0 1`.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(FenError::MissingFields(fields.len()));
        }

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        let mut board = [None; 64];
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as i8; // FEN lists rank 8 first
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    file += skip as i8;
                } else {
                    let piece = Piece::from_fen_char(ch).ok_or(FenError::InvalidPiece(ch))?;
                    let s = sq(file, rank).ok_or(FenError::RankWidth { rank: rank_idx })?;
                    board[s as usize] = Some(piece);
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::RankWidth { rank: rank_idx });
                }
            }
            if file != 8 {
                return Err(FenError::RankWidth { rank: rank_idx });
            }
        }

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidSideToMove(other.to_string())),
        };

        let mut castling = CastlingRights::default();
        if fields[2] != "-" {
            for c in fields[2].chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => return Err(FenError::InvalidCastling(fields[2].to_string())),
                }
            }
        }

        let en_passant = match fields[3] {
            "-" => None,
            coord => {
                let bad = || FenError::InvalidEnPassant(coord.to_string());
                let ep = coord_to_sq(coord).ok_or_else(bad)?;
                // Target sits behind an enemy pawn that just double-pushed.
                let expected_rank = match side_to_move {
                    Color::White => 5,
                    Color::Black => 2,
                };
                let pusher = offset(ep, (0, -side_to_move.forward())).ok_or_else(bad)?;
                let just_pushed = board[pusher as usize]
                    == Some(Piece::new(side_to_move.other(), PieceKind::Pawn));
                if rank_of(ep) != expected_rank || board[ep as usize].is_some() || !just_pushed {
                    return Err(bad());
                }
                Some(ep)
            }
        };

        let counter = |idx: usize, default: u32| -> Result<u32, FenError> {
            match fields.get(idx) {
                Some(raw) => raw
                    .parse()
                    .map_err(|_| FenError::InvalidCounter(raw.to_string())),
                None => Ok(default),
            }
        };
        let halfmove_clock = counter(4, 0)?;
        let fullmove_number = counter(5, 1)?;

        let pos = Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        };

        for c in Color::BOTH {
            let kings = pos
                .pieces()
                .filter(|(_, pc)| pc.color == c && pc.kind == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(FenError::KingCount(c));
            }
        }

        Ok(pos)
    }

    pub fn to_fen(&self) -> String {
        let mut placement = String::with_capacity(72);
        for rank in (0..8i8).rev() {
            let mut empty = 0;
            for file in 0..8i8 {
                match self.board[(rank * 8 + file) as usize] {
                    Some(pc) => {
                        if empty > 0 {
                            placement.push_str(&empty.to_string());
                            empty = 0;
                        }
                        placement.push(pc.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
            if rank > 0 {
                placement.push('/');
            }
        }

        let side = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant
            .map(sq_to_coord)
            .unwrap_or_else(|| "-".to_string());

        format!(
            "{placement} {side} {} {ep} {} {}",
            self.castling.to_fen(),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Iterates over occupied squares in a1..h8 order.
    pub fn pieces(&self) -> impl Iterator<Item = (u8, Piece)> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter_map(|(i, pc)| pc.map(|pc| (i as u8, pc)))
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        self.pieces()
            .find(|(_, pc)| pc.color == c && pc.kind == PieceKind::King)
            .map(|(s, _)| s)
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }

    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(ksq) => self.is_square_attacked(ksq, c.other()),
            None => false,
        }
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        let holds = |s: Option<u8>, kind: PieceKind| {
            s.and_then(|s| self.piece_at(s)) == Some(Piece::new(by, kind))
        };

        // A pawn of `by` attacks diagonally forward, so look one rank behind.
        let back = -by.forward();
        if holds(offset(target, (-1, back)), PieceKind::Pawn)
            || holds(offset(target, (1, back)), PieceKind::Pawn)
        {
            return true;
        }
        if KNIGHT_DELTAS
            .iter()
            .any(|&d| holds(offset(target, d), PieceKind::Knight))
        {
            return true;
        }
        if KING_DELTAS
            .iter()
            .any(|&d| holds(offset(target, d), PieceKind::King))
        {
            return true;
        }

        let slider_hits = |dirs: &[(i8, i8)], kind: PieceKind| {
            dirs.iter().any(|&d| {
                matches!(
                    self.first_piece_along(target, d),
                    Some(pc) if pc.color == by && (pc.kind == kind || pc.kind == PieceKind::Queen)
                )
            })
        };
        slider_hits(&DIAGONALS, PieceKind::Bishop) || slider_hits(&ORTHOGONALS, PieceKind::Rook)
    }

    fn first_piece_along(&self, from: u8, dir: (i8, i8)) -> Option<Piece> {
        let mut cur = from;
        while let Some(next) = offset(cur, dir) {
            if let Some(pc) = self.piece_at(next) {
                return Some(pc);
            }
            cur = next;
        }
        None
    }

    pub fn make_move(&mut self, mv: Move) -> Undo {
        let moved = self.board[mv.from as usize].expect("make_move: no piece on from-square");
        let mover = moved.color;

        let mut undo = Undo {
            captured: None,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            moved_piece: moved,
            rook_move: None,
            ep_captured_sq: None,
        };

        if mv.is_en_passant {
            let cap_sq = offset(mv.to, (0, -mover.forward()))
                .expect("en-passant target always has a square behind it");
            undo.captured = self.board[cap_sq as usize].take();
            undo.ep_captured_sq = Some(cap_sq);
        } else {
            undo.captured = self.board[mv.to as usize].take();
        }

        self.board[mv.from as usize] = None;
        let promotes = moved.kind == PieceKind::Pawn && rank_of(mv.to) == mover.other().back_rank();
        let placed = if promotes {
            Piece::new(mover, mv.promo.unwrap_or(PieceKind::Queen))
        } else {
            moved
        };
        self.board[mv.to as usize] = Some(placed);

        if mv.is_castle {
            let base = (mover.back_rank() * 8) as u8;
            let (rook_from, rook_to) = if file_of(mv.to) == 6 {
                (base + 7, base + 5)
            } else {
                (base, base + 3)
            };
            let rook = self.board[rook_from as usize].take();
            self.board[rook_to as usize] = rook;
            undo.rook_move = Some((rook_from, rook_to));
        }

        self.castling.touch(mv.from);
        self.castling.touch(mv.to);

        self.en_passant = None;
        if moved.kind == PieceKind::Pawn && (rank_of(mv.to) - rank_of(mv.from)).abs() == 2 {
            self.en_passant = offset(mv.from, (0, mover.forward()));
        }

        if moved.kind == PieceKind::Pawn || undo.captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if mover == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = mover.other();

        undo
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        if let Some((rook_from, rook_to)) = undo.rook_move {
            let rook = self.board[rook_to as usize].take();
            self.board[rook_from as usize] = rook;
        }

        // moved_piece is the pre-promotion piece, so promotions revert here too.
        self.board[mv.to as usize] = None;
        self.board[mv.from as usize] = Some(undo.moved_piece);

        match undo.ep_captured_sq {
            Some(cap_sq) => self.board[cap_sq as usize] = undo.captured,
            None => self.board[mv.to as usize] = undo.captured,
        }
    }

    /// Half-move clock has reached 100 plies without a capture or pawn move.
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// Neither side can deliver mate with the material on the board.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors: Vec<(Color, PieceKind, u8)> = Vec::with_capacity(2);
        for (s, pc) in self.pieces() {
            match pc.kind {
                PieceKind::King => {}
                PieceKind::Knight | PieceKind::Bishop => {
                    if minors.len() == 2 {
                        return false;
                    }
                    minors.push((pc.color, pc.kind, s));
                }
                _ => return false,
            }
        }

        let shade = |s: u8| (file_of(s) + rank_of(s)) % 2;
        match minors.as_slice() {
            [] | [_] => true,
            [
                (c1, PieceKind::Bishop, s1),
                (c2, PieceKind::Bishop, s2),
            ] => c1 != c2 && shade(*s1) == shade(*s2),
            _ => false,
        }
    }

    /// Same position with colours swapped and the board flipped vertically.
    pub fn mirrored(&self) -> Position {
        let mut board = [None; 64];
        for (s, pc) in self.pieces() {
            board[(s ^ 56) as usize] = Some(Piece::new(pc.color.other(), pc.kind));
        }
        Position {
            board,
            side_to_move: self.side_to_move.other(),
            castling: CastlingRights {
                wk: self.castling.bk,
                wq: self.castling.bq,
                bk: self.castling.wk,
                bq: self.castling.wq,
            },
            en_passant: self.en_passant.map(|s| s ^ 56),
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        }
    }

    /// Zobrist key over placement, side to move, castling and en passant.
    pub fn zobrist_key(&self) -> u64 {
        ZOBRIST.hash(self)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;

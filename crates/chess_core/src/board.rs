use tracing::debug;

use crate::error::SetupError;
use crate::square::Square;
use crate::types::*;

/// Sparse square -> piece mapping. Empty squares hold nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    pub fn standard() -> Self {
        let mut board = Board::empty();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for color in [Color::White, Color::Black] {
            for (col, &kind) in back.iter().enumerate() {
                board.set(Square::at(color.home_row(), col as u8), Piece::new(kind, color));
                board.set(
                    Square::at(color.pawn_row(), col as u8),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        board
    }

    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Place a piece, returning whatever stood there before.
    pub fn set(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.squares[sq.index()].replace(piece)
    }

    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Occupied squares in board order (a8 .. h1).
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(i, pc)| pc.map(|p| (Square::from_index(i), p)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.iter().filter(move |(_, pc)| pc.color == color)
    }

    pub fn len(&self) -> usize {
        self.squares.iter().filter(|pc| pc.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.iter()
            .find(|(_, pc)| pc.color == color && pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub fn rook_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    pub fn rook_dest_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    pub fn king_dest_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// Columns between king and rook that must be empty.
    pub(crate) fn between_cols(self) -> &'static [u8] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[1, 2, 3],
        }
    }

    /// Columns the king starts on, crosses and lands on; none may be attacked.
    pub(crate) fn king_path_cols(self) -> &'static [u8] {
        match self {
            CastleSide::KingSide => &[4, 5, 6],
            CastleSide::QueenSide => &[2, 3, 4],
        }
    }

    /// The side whose rook starts on `sq`, if `sq` is one of `color`'s corners.
    pub fn of_rook_home(color: Color, sq: Square) -> Option<CastleSide> {
        if sq.row() != color.home_row() {
            return None;
        }
        match sq.col() {
            0 => Some(CastleSide::QueenSide),
            7 => Some(CastleSide::KingSide),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        }
    }

    pub fn none() -> Self {
        Self {
            wk: false,
            wq: false,
            bk: false,
            bq: false,
        }
    }

    pub fn get(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => self.wk,
            (Color::White, CastleSide::QueenSide) => self.wq,
            (Color::Black, CastleSide::KingSide) => self.bk,
            (Color::Black, CastleSide::QueenSide) => self.bq,
        }
    }

    /// Rights are only ever revoked; there is no way to grant one back.
    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => self.wk = false,
            (Color::White, CastleSide::QueenSide) => self.wq = false,
            (Color::Black, CastleSide::KingSide) => self.bk = false,
            (Color::Black, CastleSide::QueenSide) => self.bq = false,
        }
    }

    pub fn revoke_all(&mut self, color: Color) {
        self.revoke(color, CastleSide::KingSide);
        self.revoke(color, CastleSide::QueenSide);
    }
}

/// What made a move more than "lift piece, drop piece".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Special {
    None,
    Castle { rook_from: Square, rook_to: Square },
    EnPassant { captured_on: Square },
    Promotion,
}

/// One executed move, with enough detail to put the pieces back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The piece that moved, before any promotion.
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub special: Special,
}

impl MoveRecord {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Reversible record used around legality probes: placement plus prior
/// auxiliary state.
#[derive(Clone, Copy, Debug)]
pub struct Undo {
    pub record: MoveRecord,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// Board contents plus the auxiliary state that the rules depend on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) turn: Color,
    pub(crate) castling: CastlingRights,
    /// Square behind a pawn that just advanced two, for one ply only.
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn startpos() -> Self {
        Position {
            board: Board::standard(),
            turn: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn builder() -> PositionBuilder {
        PositionBuilder::new()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn turn(&self) -> Color {
        self.turn
    }
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.get(sq)
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// Three or fewer pieces, all kings or minor pieces.
    pub fn is_insufficient_material(&self) -> bool {
        self.board.len() <= 3 && self.board.iter().all(|(_, pc)| pc.kind.is_minor_or_king())
    }

    /// The enemy pawn an en-passant capture from `from` onto `to` would take.
    ///
    /// `None` unless `to` is the current target, is empty, and an enemy pawn
    /// stands beside the mover one rank behind it. A stale target left over
    /// from an undone move never qualifies.
    pub(crate) fn en_passant_victim(
        &self,
        from: Square,
        to: Square,
        mover: Color,
    ) -> Option<Square> {
        if self.en_passant != Some(to) || self.board.is_occupied(to) {
            return None;
        }
        let victim = Square::new(from.row(), to.col())?;
        let enemy_pawn = Piece::new(PieceKind::Pawn, mover.other());
        (self.board.get(victim) == Some(enemy_pawn)).then_some(victim)
    }

    fn classify(&self, from: Square, to: Square, piece: Piece) -> Special {
        match piece.kind {
            PieceKind::King if from.col().abs_diff(to.col()) == 2 => {
                let side = if to.col() > from.col() {
                    CastleSide::KingSide
                } else {
                    CastleSide::QueenSide
                };
                Special::Castle {
                    rook_from: Square::at(from.row(), side.rook_col()),
                    rook_to: Square::at(from.row(), side.rook_dest_col()),
                }
            }
            PieceKind::Pawn if from.col() != to.col() => {
                match self.en_passant_victim(from, to, piece.color) {
                    Some(captured_on) => Special::EnPassant { captured_on },
                    None if to.row() == piece.color.promotion_row() => Special::Promotion,
                    None => Special::None,
                }
            }
            PieceKind::Pawn if to.row() == piece.color.promotion_row() => Special::Promotion,
            _ => Special::None,
        }
    }

    /// Move pieces on the board only. Auxiliary state is left alone.
    pub(crate) fn place(&mut self, from: Square, to: Square, piece: Piece) -> MoveRecord {
        let special = self.classify(from, to, piece);
        let mut captured = self.board.remove(to);

        match special {
            Special::Castle { rook_from, rook_to } => {
                if let Some(rook) = self.board.remove(rook_from) {
                    self.board.set(rook_to, rook);
                }
            }
            Special::EnPassant { captured_on } => {
                captured = self.board.remove(captured_on);
            }
            Special::None | Special::Promotion => {}
        }

        self.board.remove(from);
        let landed = match special {
            Special::Promotion => Piece::new(PieceKind::Queen, piece.color),
            _ => piece,
        };
        self.board.set(to, landed);

        MoveRecord {
            from,
            to,
            piece,
            captured,
            special,
        }
    }

    /// Exact inverse of [`Position::place`].
    pub(crate) fn unplace(&mut self, record: &MoveRecord) {
        self.board.remove(record.to);
        self.board.set(record.from, record.piece);

        match record.special {
            Special::Castle { rook_from, rook_to } => {
                if let Some(rook) = self.board.remove(rook_to) {
                    self.board.set(rook_from, rook);
                }
            }
            Special::EnPassant { captured_on } => {
                if let Some(pawn) = record.captured {
                    self.board.set(captured_on, pawn);
                }
            }
            Special::None | Special::Promotion => {
                if let Some(cp) = record.captured {
                    self.board.set(record.to, cp);
                }
            }
        }
    }

    /// Execute a move that the caller has already validated, updating all
    /// auxiliary state. Returns what is needed to take it back.
    pub(crate) fn apply(&mut self, from: Square, to: Square, piece: Piece) -> Undo {
        let undo_castling = self.castling;
        let undo_ep = self.en_passant;
        let undo_hmc = self.halfmove_clock;
        let undo_fmn = self.fullmove_number;

        let record = self.place(from, to, piece);
        let color = piece.color;

        match piece.kind {
            PieceKind::King => self.castling.revoke_all(color),
            PieceKind::Rook => {
                if let Some(side) = CastleSide::of_rook_home(color, from) {
                    self.castling.revoke(color, side);
                }
            }
            _ => {}
        }
        // A rook taken on its corner can no longer castle either.
        if let Some(cp) = record.captured
            && cp.kind == PieceKind::Rook
            && let Some(side) = CastleSide::of_rook_home(cp.color, to)
        {
            self.castling.revoke(cp.color, side);
        }

        self.en_passant = if piece.kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2 {
            Square::new((from.row() + to.row()) / 2, from.col())
        } else {
            None
        };

        self.halfmove_clock = if record.is_capture() || piece.kind == PieceKind::Pawn {
            0
        } else {
            self.halfmove_clock + 1
        };

        if color == Color::Black {
            self.fullmove_number += 1;
        }
        self.turn = self.turn.other();

        Undo {
            record,
            castling: undo_castling,
            en_passant: undo_ep,
            halfmove_clock: undo_hmc,
            fullmove_number: undo_fmn,
        }
    }

    pub(crate) fn revert(&mut self, undo: &Undo) {
        self.unplace(&undo.record);
        self.turn = self.turn.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;
    }
}

/// Assembles a custom position on an empty board.
///
/// Castling rights start revoked and must be granted explicitly.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    position: Position,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    pub fn new() -> Self {
        Self {
            position: Position {
                board: Board::empty(),
                turn: Color::White,
                castling: CastlingRights::none(),
                en_passant: None,
                halfmove_clock: 0,
                fullmove_number: 1,
            },
        }
    }

    pub fn piece(mut self, sq: Square, kind: PieceKind, color: Color) -> Self {
        self.position.board.set(sq, Piece::new(kind, color));
        self
    }

    pub fn turn(mut self, color: Color) -> Self {
        self.position.turn = color;
        self
    }

    pub fn castling(mut self, rights: CastlingRights) -> Self {
        self.position.castling = rights;
        self
    }

    pub fn en_passant(mut self, target: Option<Square>) -> Self {
        self.position.en_passant = target;
        self
    }

    pub fn halfmove_clock(mut self, plies: u32) -> Self {
        self.position.halfmove_clock = plies;
        self
    }

    pub fn fullmove_number(mut self, number: u32) -> Self {
        self.position.fullmove_number = number;
        self
    }

    /// Validate and finish. Each side needs exactly one king, no pawn may
    /// stand on the first or last rank, and an en-passant target must lie on
    /// the rank behind the opponent's double push.
    pub fn build(self) -> Result<Position, SetupError> {
        let board = &self.position.board;
        for color in [Color::White, Color::Black] {
            let count = board
                .pieces_of(color)
                .filter(|(_, pc)| pc.kind == PieceKind::King)
                .count();
            if count != 1 {
                return Err(SetupError::KingCount { color, count });
            }
        }
        if let Some((square, pc)) = board
            .iter()
            .find(|(sq, pc)| pc.kind == PieceKind::Pawn && (sq.row() == 0 || sq.row() == 7))
        {
            return Err(SetupError::PawnOnBackRank {
                color: pc.color,
                square,
            });
        }
        if let Some(square) = self.position.en_passant {
            // The side that just moved is the one whose pawn could have skipped `square`.
            let pusher = self.position.turn.other();
            if square.row() != pusher.en_passant_row() {
                return Err(SetupError::EnPassantRank { square, pusher });
            }
        }
        debug!(pieces = board.len(), turn = %self.position.turn, "custom position built");
        Ok(self.position)
    }
}

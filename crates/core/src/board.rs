//! The board aggregate and its FEN codec
//!
//! <https://en.wikipedia.org/wiki/Forsyth%E2%80%93Edwards_Notation>
//!
//! Only the placement and side-to-move fields carry information here; the
//! castling, en-passant and move-counter fields are ignored on decode and
//! emitted as the fixed placeholder `- - 0 1` on encode.

use crate::error::{Error, Result};
use crate::piece::{BoardPiece, Color, Notation, Piece, PieceType};
use crate::position::BoardPosition;

/// A bag of pieces plus whose turn it is. This is a notation container,
/// not a rules engine: any placement is accepted, including illegal ones.
/// Callers are expected to keep squares singly occupied.
#[derive(Debug, Clone, PartialEq)]
pub struct ChessBoard {
    pieces: Vec<BoardPiece>,
    white_to_move: bool,
    info: String,
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new()
    }
}

const LISTING_ORDER: [PieceType; 6] = [
    PieceType::King,
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Pawn,
];

impl ChessBoard {
    pub fn new() -> Self {
        Self {
            pieces: Vec::new(),
            white_to_move: true,
            info: String::new(),
        }
    }

    /// Decodes a FEN string. The placement field must have exactly 8
    /// slash-separated ranks, rank 8 first. A second field equal to `"w"`
    /// means White to move, any other value means Black; with no second
    /// field the side to move defaults to White. Remaining fields are
    /// ignored.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let parts: Vec<&str> = fen.split(' ').collect();

        let mut board = Self::new();
        board.white_to_move = parts.len() < 2 || parts[1] == "w";

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(Error::InvalidArgument(format!(
                "there must be 8 ranks in the FEN, found {}",
                ranks.len()
            )));
        }

        let mut rank = 8;
        for rank_str in ranks {
            if rank_str.len() > 8 {
                return Err(Error::InvalidArgument(format!(
                    "FEN rank must have at most 8 files, has {}",
                    rank_str.len()
                )));
            }

            let mut file = 1;
            for c in rank_str.chars() {
                if c.is_ascii_digit() {
                    if c == '0' {
                        return Err(Error::InvalidArgument(
                            "FEN empty-file count must be 1-8".to_string(),
                        ));
                    }
                    file += c as i32 - '0' as i32;
                    if file > 9 {
                        return Err(Error::InvalidArgument(format!(
                            "FEN rank {} overflows 8 files",
                            rank
                        )));
                    }
                    continue;
                }

                if file > 8 {
                    return Err(Error::InvalidArgument(format!(
                        "FEN rank {} overflows 8 files",
                        rank
                    )));
                }

                let piece = Piece::from_fen_char(c)?;
                board.pieces.push(BoardPiece::new(
                    piece,
                    BoardPosition::new(file, rank),
                ));
                file += 1;
            }
            rank -= 1;
        }

        Ok(board)
    }

    /// Encodes the position back into FEN. A square occupied twice in the
    /// piece list is resolved last-write-wins rather than rejected.
    pub fn fen(&self) -> String {
        let mut grid = [[None::<Piece>; 8]; 8];
        for bp in &self.pieces {
            let row = (8 - bp.position.rank) as usize;
            let col = (bp.position.file - 1) as usize;
            grid[row][col] = Some(bp.piece);
        }

        let mut rank_strings = Vec::with_capacity(8);
        for row in &grid {
            let mut rank_str = String::new();
            let mut empty = 0;
            for square in row {
                match square {
                    Some(piece) => {
                        if empty > 0 {
                            rank_str.push_str(&empty.to_string());
                            empty = 0;
                        }
                        rank_str.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                rank_str.push_str(&empty.to_string());
            }
            rank_strings.push(rank_str);
        }

        let to_play = if self.white_to_move { "w" } else { "b" };
        format!("{} {} - - 0 1", rank_strings.join("/"), to_play)
    }

    /// Piece on the given square, first match wins.
    pub fn at(&self, position: BoardPosition) -> Option<Piece> {
        self.pieces
            .iter()
            .find(|bp| bp.position == position)
            .map(|bp| bp.piece)
    }

    /// Changes the board by:
    /// 1) rotating the position of every piece 180 degrees,
    /// 2) swapping every piece's color,
    /// 3) flipping whose turn it is to play.
    ///
    /// Applying it twice restores the original board.
    pub fn rotate(&mut self) {
        self.white_to_move = !self.white_to_move;

        for bp in &mut self.pieces {
            bp.position.rank = 9 - bp.position.rank;
            bp.position.file = 9 - bp.position.file;
            bp.piece.color = bp.piece.color.opposite();
        }
    }

    pub fn pieces(&self) -> &[BoardPiece] {
        &self.pieces
    }

    pub fn push_piece(&mut self, piece: BoardPiece) {
        self.pieces.push(piece);
    }

    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    pub fn set_white_to_move(&mut self, white_to_move: bool) {
        self.white_to_move = white_to_move;
    }

    pub fn set_info(&mut self, info: impl Into<String>) {
        self.info = info.into();
    }

    pub fn info(&self) -> &str {
        &self.info
    }

    /// Lichess analysis link for the current position.
    pub fn analysis_url(&self) -> String {
        format!(
            "https://lichess.org/analysis/{}?color=white",
            self.fen().replace(' ', "_")
        )
    }

    /// One comma-joined token list per piece type present, in
    /// K, Q, R, B, N, P order.
    pub fn piece_lines(&self, color: Color, notation: Notation) -> Vec<String> {
        LISTING_ORDER
            .iter()
            .filter_map(|&piece_type| {
                let tokens: Vec<String> = self
                    .pieces
                    .iter()
                    .filter(|bp| {
                        bp.piece.piece_type == piece_type && bp.piece.color == color
                    })
                    .map(|bp| bp.token(notation))
                    .collect();
                if tokens.is_empty() {
                    None
                } else {
                    Some(tokens.join(", "))
                }
            })
            .collect()
    }

    /// Text summary of the position, the form the trainers show while the
    /// user memorizes a board.
    pub fn describe(&self, show_info: bool, notation: Notation) -> String {
        let mut out = format!("FEN: {}\n", self.fen());

        out.push_str("White:\n");
        for line in self.piece_lines(Color::White, notation) {
            out.push_str(" - ");
            out.push_str(&line);
            out.push('\n');
        }

        out.push_str("Black:\n");
        for line in self.piece_lines(Color::Black, notation) {
            out.push_str(" - ");
            out.push_str(&line);
            out.push('\n');
        }

        if self.white_to_move {
            out.push_str("White to move\n");
        } else {
            out.push_str("Black to move\n");
        }

        if show_info && !self.info.is_empty() {
            out.push_str("Info: ");
            out.push_str(&self.info);
            out.push('\n');
        }

        out.push_str("Analysis: ");
        out.push_str(&self.analysis_url());
        out.push('\n');

        out
    }
}

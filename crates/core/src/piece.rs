//! Piece identities and their textual notations

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::position::BoardPosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
    Pawn,
}

/// Notation style used when rendering a piece type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    English,
    Spanish,
    Unicode,
    EnglishFull,
}

impl PieceType {
    /// Uppercase English piece letter, also the FEN letter for White.
    pub fn letter(self) -> char {
        match self {
            PieceType::Rook => 'R',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
            PieceType::Pawn => 'P',
        }
    }

    pub fn notation(self, notation: Notation) -> &'static str {
        match notation {
            Notation::English => match self {
                PieceType::Rook => "R",
                PieceType::Knight => "N",
                PieceType::Bishop => "B",
                PieceType::Queen => "Q",
                PieceType::King => "K",
                PieceType::Pawn => "P",
            },
            Notation::Spanish => match self {
                PieceType::Rook => "T",
                PieceType::Knight => "C",
                PieceType::Bishop => "A",
                PieceType::Queen => "D",
                PieceType::King => "R",
                PieceType::Pawn => "P",
            },
            Notation::Unicode => match self {
                PieceType::Rook => "🨂 ",
                PieceType::Knight => "🨄 ",
                PieceType::Bishop => "🨃 ",
                PieceType::Queen => "🨁 ",
                PieceType::King => "🨀 ",
                PieceType::Pawn => "🨅 ",
            },
            Notation::EnglishFull => match self {
                PieceType::Rook => "rook",
                PieceType::Knight => "knight",
                PieceType::Bishop => "bishop",
                PieceType::Queen => "queen",
                PieceType::King => "king",
                PieceType::Pawn => "pawn",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    pub fn new(piece_type: PieceType, color: Color) -> Self {
        Self { piece_type, color }
    }

    /// Parses a FEN piece letter; uppercase is White, lowercase Black.
    pub fn from_fen_char(c: char) -> Result<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        let piece_type = match c.to_ascii_lowercase() {
            'r' => PieceType::Rook,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            'p' => PieceType::Pawn,
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "invalid FEN piece type: '{}'",
                    c
                )))
            }
        };

        Ok(Self { piece_type, color })
    }

    /// FEN letter with color encoded in the case.
    pub fn fen_char(self) -> char {
        match self.color {
            Color::White => self.piece_type.letter(),
            Color::Black => self.piece_type.letter().to_ascii_lowercase(),
        }
    }
}

/// A piece standing on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardPiece {
    pub piece: Piece,
    pub position: BoardPosition,
}

impl BoardPiece {
    pub fn new(piece: Piece, position: BoardPosition) -> Self {
        Self { piece, position }
    }

    /// Renders the piece-square token in the given notation. Black tokens
    /// are lowercased whole, which is only meaningful for the single-letter
    /// notations; glyphs and full words pass through unchanged.
    pub fn token(&self, notation: Notation) -> String {
        let mut out = format!(
            "{}{}",
            self.piece.piece_type.notation(notation),
            self.position
        );
        if self.piece.color == Color::Black {
            out.make_ascii_lowercase();
        }
        out
    }
}

impl FromStr for BoardPiece {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() != 3 || !s.is_ascii() {
            return Err(Error::InvalidArgument(
                "board piece token must consist of three characters".to_string(),
            ));
        }

        let piece = Piece::from_fen_char(s.as_bytes()[0] as char)?;
        let position = s[1..].parse::<BoardPosition>()?;

        Ok(Self { piece, position })
    }
}

impl fmt::Display for BoardPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token(Notation::English))
    }
}

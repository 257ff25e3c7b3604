//! Chess Trainer Core Library
//!
//! Board/position model with a FEN codec, the canonical square ordering
//! used to grade free-form answers, bishop-diagonal geometry, and the pure
//! drill logic behind the interactive trainers.

pub mod board;
pub mod error;
pub mod geometry;
pub mod piece;
pub mod position;
pub mod problems;
pub mod training;

pub use board::ChessBoard;
pub use error::{Error, Result};
pub use geometry::{bishop_intersections, diagonal_endpoints};
pub use piece::{BoardPiece, Color, Notation, Piece, PieceType};
pub use position::{join_positions, normalize, parse_positions, BoardPosition};
pub use problems::{load_problem_file, parse_problems};
pub use training::{EndpointsDrill, InterceptDrill, MemoryDrill, MemoryQuestion, SquareColorDrill};

/// Creates the standard starting position
pub fn starting_position() -> ChessBoard {
    // The canonical FEN always parses, so the error path is unreachable.
    ChessBoard::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
        .unwrap_or_default()
}

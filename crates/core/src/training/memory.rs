//! Board-recall drills over a memorized position

use rand::Rng;

use crate::board::ChessBoard;
use crate::error::{Error, Result};
use crate::piece::{BoardPiece, Notation, Piece};
use crate::position::BoardPosition;

use super::random_position;

/// One recall question about the memorized board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryQuestion {
    /// What stands on this square?
    SpotCheck(BoardPosition),
    /// Which pieces stand on this rank?
    RankContents(i32),
}

impl MemoryQuestion {
    pub fn prompt(&self) -> String {
        match self {
            MemoryQuestion::SpotCheck(pos) => format!("What is on {}?", pos),
            MemoryQuestion::RankContents(rank) => {
                format!("What's on rank number {}?", rank)
            }
        }
    }
}

/// Outcome of grading one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradedAnswer {
    pub correct: bool,
    /// Rendering of the expected answer, shown when the user was wrong.
    pub expected: String,
}

pub struct MemoryDrill {
    board: ChessBoard,
}

impl MemoryDrill {
    pub fn new(board: ChessBoard) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &ChessBoard {
        &self.board
    }

    /// Picks the next question. Spot checks are biased toward occupied
    /// squares so most rounds ask about an actual piece.
    pub fn next_question(&self, rng: &mut impl Rng) -> MemoryQuestion {
        if rng.random_range(0..2) == 0 {
            let pieces = self.board.pieces();
            let position = if !pieces.is_empty() && rng.random_bool(0.75) {
                pieces[rng.random_range(0..pieces.len())].position
            } else {
                random_position(rng)
            };
            MemoryQuestion::SpotCheck(position)
        } else {
            MemoryQuestion::RankContents(rng.random_range(1..=8))
        }
    }

    /// Grades a spot-check answer: a single piece letter, or
    /// "none"/"empty"/"nothing"/blank for an empty square.
    pub fn grade_spot_check(
        &self,
        position: BoardPosition,
        answer: &str,
    ) -> Result<GradedAnswer> {
        let answer = answer.trim();
        let answered: Option<Piece> = if answer.is_empty()
            || answer.eq_ignore_ascii_case("none")
            || answer.eq_ignore_ascii_case("empty")
            || answer.eq_ignore_ascii_case("nothing")
        {
            None
        } else {
            let mut chars = answer.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(Piece::from_fen_char(c)?),
                _ => {
                    return Err(Error::InvalidArgument(format!(
                        "expected a single piece letter, got '{}'",
                        answer
                    )))
                }
            }
        };

        let actual = self.board.at(position);
        let expected = match actual {
            Some(piece) => format!(
                "a {} {}",
                piece.color.name(),
                piece.piece_type.notation(Notation::EnglishFull)
            ),
            None => "none".to_string(),
        };

        Ok(GradedAnswer {
            correct: answered == actual,
            expected,
        })
    }

    /// Pieces on one rank, sorted left to right.
    pub fn rank_contents(&self, rank: i32) -> Vec<BoardPiece> {
        let mut pieces: Vec<BoardPiece> = self
            .board
            .pieces()
            .iter()
            .copied()
            .filter(|bp| bp.position.rank == rank)
            .collect();
        pieces.sort_by(|a, b| a.position.cmp(&b.position));
        pieces
    }

    /// Grades a rank answer given as whitespace-separated piece-square
    /// tokens, compared position by position.
    pub fn grade_rank_contents(&self, rank: i32, answer: &str) -> Result<GradedAnswer> {
        let mut answered = answer
            .split_whitespace()
            .map(str::parse::<BoardPiece>)
            .collect::<Result<Vec<_>>>()?;
        answered.sort_by(|a, b| a.position.cmp(&b.position));

        let actual = self.rank_contents(rank);
        let expected = actual
            .iter()
            .map(BoardPiece::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        Ok(GradedAnswer {
            correct: answered == actual,
            expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drill() -> MemoryDrill {
        let board =
            ChessBoard::from_fen("3q1rk1/5pbp/5Qp1/8/8/2B5/5PPP/6K1 w - - 0 1").unwrap();
        MemoryDrill::new(board)
    }

    #[test]
    fn test_spot_check_occupied_square() {
        let d = drill();
        let g1 = "g1".parse().unwrap();

        let graded = d.grade_spot_check(g1, "K").unwrap();
        assert!(graded.correct);

        let graded = d.grade_spot_check(g1, "k").unwrap();
        assert!(!graded.correct);
        assert_eq!(graded.expected, "a white king");

        let graded = d.grade_spot_check(g1, "none").unwrap();
        assert!(!graded.correct);
    }

    #[test]
    fn test_spot_check_empty_square() {
        let d = drill();
        let e4 = "e4".parse().unwrap();

        for answer in ["none", "empty", "nothing", "", "  "] {
            let graded = d.grade_spot_check(e4, answer).unwrap();
            assert!(graded.correct, "answer {:?} should be correct", answer);
            assert_eq!(graded.expected, "none");
        }

        assert!(!d.grade_spot_check(e4, "Q").unwrap().correct);
    }

    #[test]
    fn test_spot_check_rejects_bad_answers() {
        let d = drill();
        let g1 = "g1".parse().unwrap();
        assert!(d.grade_spot_check(g1, "Kg1").is_err());
        assert!(d.grade_spot_check(g1, "x").is_err());
    }

    #[test]
    fn test_rank_contents_sorted_by_file() {
        let d = drill();
        let rank8 = d.rank_contents(8);
        let tokens: Vec<String> = rank8.iter().map(BoardPiece::to_string).collect();
        assert_eq!(tokens, vec!["qd8", "rf8", "kg8"]);

        assert!(d.rank_contents(5).is_empty());
    }

    #[test]
    fn test_grade_rank_contents() {
        let d = drill();

        let graded = d.grade_rank_contents(8, "kg8 qd8 rf8").unwrap();
        assert!(graded.correct);

        let graded = d.grade_rank_contents(8, "qd8 rf8").unwrap();
        assert!(!graded.correct);
        assert_eq!(graded.expected, "qd8 rf8 kg8");

        // Wrong color on a right square.
        let graded = d.grade_rank_contents(8, "Qd8 rf8 kg8").unwrap();
        assert!(!graded.correct);

        // Empty rank needs an empty answer.
        assert!(d.grade_rank_contents(5, "").unwrap().correct);
        assert!(!d.grade_rank_contents(5, "qd5").unwrap().correct);
    }

    #[test]
    fn test_grade_rank_contents_rejects_bad_tokens() {
        let d = drill();
        assert!(d.grade_rank_contents(8, "qd8 xf8").is_err());
        assert!(d.grade_rank_contents(8, "qd").is_err());
    }

    #[test]
    fn test_next_question_is_well_formed() {
        let d = drill();
        let mut rng = rand::rng();
        for _ in 0..50 {
            match d.next_question(&mut rng) {
                MemoryQuestion::SpotCheck(pos) => assert!(pos.is_valid()),
                MemoryQuestion::RankContents(rank) => {
                    assert!((1..=8).contains(&rank))
                }
            }
        }
    }
}

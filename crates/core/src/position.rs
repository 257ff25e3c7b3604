//! Board squares and the canonical square ordering

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::piece::Color;

/// A square on the board. `file` and `rank` are 1-based; values outside
/// [1,8] can show up transiently (diagonal arithmetic runs off the board)
/// and are filtered out by [`normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardPosition {
    pub file: i32,
    pub rank: i32,
}

impl BoardPosition {
    pub fn new(file: i32, rank: i32) -> Self {
        Self { file, rank }
    }

    pub fn is_valid(&self) -> bool {
        self.file >= 1 && self.file <= 8 && self.rank >= 1 && self.rank <= 8
    }

    /// Color of the square itself, not of any piece standing on it.
    pub fn square_color(&self) -> Color {
        if (self.file + self.rank) % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }
}

// Rank 8 first, then files left to right, matching the order a board is
// read from White's side of the table.
impl Ord for BoardPosition {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .rank
            .cmp(&self.rank)
            .then_with(|| self.file.cmp(&other.file))
    }
}

impl PartialOrd for BoardPosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for BoardPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(Error::InvalidArgument(
                "position must consist of exactly two characters".to_string(),
            ));
        }

        let pos = BoardPosition {
            file: 1 + bytes[0] as i32 - 'a' as i32,
            rank: bytes[1] as i32 - '0' as i32,
        };

        if !pos.is_valid() {
            return Err(Error::InvalidArgument(format!(
                "invalid position string '{}'",
                s
            )));
        }

        Ok(pos)
    }
}

impl fmt::Display for BoardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + (self.file - 1) as u8) as char;
        write!(f, "{}{}", file, self.rank)
    }
}

/// Sorts and removes duplicates and invalid positions. Two independently
/// produced square sets compare equal exactly when their normalized forms
/// are identical, which is how user answers are graded.
pub fn normalize(positions: &mut Vec<BoardPosition>) {
    positions.sort();
    positions.dedup();
    positions.retain(|p| p.is_valid());
}

/// Parses a space-separated list of squares, failing on the first bad token.
pub fn parse_positions(input: &str) -> Result<Vec<BoardPosition>> {
    input.split(' ').map(BoardPosition::from_str).collect()
}

pub fn join_positions(positions: &[BoardPosition], separator: &str) -> String {
    positions
        .iter()
        .map(BoardPosition::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_squares() {
        let pos: BoardPosition = "e4".parse().unwrap();
        assert_eq!(pos, BoardPosition::new(5, 4));

        let pos: BoardPosition = "a1".parse().unwrap();
        assert_eq!(pos, BoardPosition::new(1, 1));

        let pos: BoardPosition = "h8".parse().unwrap();
        assert_eq!(pos, BoardPosition::new(8, 8));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("".parse::<BoardPosition>().is_err());
        assert!("e".parse::<BoardPosition>().is_err());
        assert!("e44".parse::<BoardPosition>().is_err());
        assert!("i1".parse::<BoardPosition>().is_err());
        assert!("a9".parse::<BoardPosition>().is_err());
        assert!("a0".parse::<BoardPosition>().is_err());
        assert!("4e".parse::<BoardPosition>().is_err());
    }

    #[test]
    fn test_round_trip_all_squares() {
        for file in 1..=8 {
            for rank in 1..=8 {
                let pos = BoardPosition::new(file, rank);
                let parsed: BoardPosition = pos.to_string().parse().unwrap();
                assert_eq!(parsed, pos);
            }
        }
    }

    #[test]
    fn test_square_color() {
        // a1 is a dark square, h1 a light one.
        assert_eq!(BoardPosition::new(1, 1).square_color(), Color::White);
        assert_eq!(BoardPosition::new(8, 1).square_color(), Color::Black);
        assert_eq!(BoardPosition::new(4, 4).square_color(), Color::White);
        assert_eq!(BoardPosition::new(4, 5).square_color(), Color::Black);
    }

    #[test]
    fn test_ordering_reads_board_top_down() {
        let mut positions = vec![
            BoardPosition::new(3, 1),
            BoardPosition::new(1, 8),
            BoardPosition::new(5, 8),
            BoardPosition::new(1, 1),
        ];
        positions.sort();
        assert_eq!(
            positions,
            vec![
                BoardPosition::new(1, 8),
                BoardPosition::new(5, 8),
                BoardPosition::new(1, 1),
                BoardPosition::new(3, 1),
            ]
        );
    }

    #[test]
    fn test_normalize_sorts_dedupes_and_filters() {
        let mut positions = vec![
            BoardPosition::new(9, 1),
            BoardPosition::new(2, 2),
            BoardPosition::new(2, 2),
            BoardPosition::new(1, 5),
            BoardPosition::new(0, 3),
        ];
        normalize(&mut positions);
        assert_eq!(
            positions,
            vec![BoardPosition::new(1, 5), BoardPosition::new(2, 2)]
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut positions = vec![
            BoardPosition::new(4, 4),
            BoardPosition::new(4, 4),
            BoardPosition::new(-1, 2),
            BoardPosition::new(8, 8),
        ];
        normalize(&mut positions);
        let once = positions.clone();
        normalize(&mut positions);
        assert_eq!(positions, once);
    }

    #[test]
    fn test_parse_positions_list() {
        let positions = parse_positions("a1 e4 h8").unwrap();
        assert_eq!(positions.len(), 3);
        assert_eq!(positions[1], BoardPosition::new(5, 4));

        assert!(parse_positions("a1 x9").is_err());
        assert!(parse_positions("").is_err());
    }

    #[test]
    fn test_join_positions() {
        let positions = vec![BoardPosition::new(1, 1), BoardPosition::new(5, 4)];
        assert_eq!(join_positions(&positions, " "), "a1 e4");
        assert_eq!(join_positions(&[], " "), "");
    }
}

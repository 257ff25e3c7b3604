//! Problem-file loading
//!
//! A problem file is a JSON document with a `problems` array; each entry
//! carries a `fen` and, optionally, a free-text `info` annotation.

use std::path::Path;

use serde::Deserialize;

use crate::board::ChessBoard;
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct ProblemFile {
    problems: Vec<ProblemEntry>,
}

#[derive(Debug, Deserialize)]
struct ProblemEntry {
    fen: String,
    #[serde(default)]
    info: Option<String>,
}

/// Parses a problem document into boards. Any malformed FEN aborts the
/// whole load.
pub fn parse_problems(json: &str) -> Result<Vec<ChessBoard>> {
    let file: ProblemFile = serde_json::from_str(json)?;

    let mut boards = Vec::with_capacity(file.problems.len());
    for problem in file.problems {
        let mut board = ChessBoard::from_fen(&problem.fen)?;
        if let Some(info) = problem.info {
            board.set_info(info);
        }
        boards.push(board);
    }

    Ok(boards)
}

pub fn load_problem_file(path: impl AsRef<Path>) -> Result<Vec<ChessBoard>> {
    let text = std::fs::read_to_string(path)?;
    parse_problems(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "problems": [
            { "fen": "3q1rk1/5pbp/5Qp1/8/8/2B5/5PPP/6K1 w - - 0 1", "info": "mate in 2" },
            { "fen": "8/3pkP2/4p3/8/8/3K4/8/5R2 b - - 0 1" }
        ]
    }"#;

    #[test]
    fn test_parse_problems() {
        let boards = parse_problems(SAMPLE).unwrap();
        assert_eq!(boards.len(), 2);

        assert_eq!(boards[0].info(), "mate in 2");
        assert!(boards[0].white_to_move());

        assert_eq!(boards[1].info(), "");
        assert!(!boards[1].white_to_move());
        assert_eq!(boards[1].pieces().len(), 6);
    }

    #[test]
    fn test_bad_fen_aborts_the_load() {
        let json = r#"{ "problems": [ { "fen": "not a fen" } ] }"#;
        assert!(parse_problems(json).is_err());
    }

    #[test]
    fn test_bad_json_is_reported() {
        assert!(parse_problems("{ problems: oops").is_err());
        assert!(parse_problems(r#"{ "problems": [ { } ] }"#).is_err());
    }
}

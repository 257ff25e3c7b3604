//! Bishop geometry drills

use rand::Rng;

use crate::error::Result;
use crate::geometry::{bishop_intersections, diagonal_endpoints};
use crate::piece::Color;
use crate::position::{join_positions, normalize, parse_positions, BoardPosition};

use super::random_position;

/// Grades a free-form square list against an answer key. An empty answer
/// or a lone "none" means the empty set; anything else must parse as
/// squares. Both sides are compared in normalized form.
fn grade_square_list(input: &str, expected: &[BoardPosition]) -> Result<bool> {
    let input = input.trim();

    let mut answered = if input.is_empty() || input.eq_ignore_ascii_case("none") {
        Vec::new()
    } else {
        parse_positions(input)?
    };
    normalize(&mut answered);

    Ok(answered == expected)
}

/// From which squares can a bishop post itself to attack a target?
pub struct InterceptDrill {
    bishop: BoardPosition,
    target: BoardPosition,
    solutions: Vec<BoardPosition>,
}

impl InterceptDrill {
    pub fn generate(rng: &mut impl Rng) -> Self {
        let bishop = random_position(rng);
        let mut target = random_position(rng);
        while target == bishop {
            target = random_position(rng);
        }

        let solutions = bishop_intersections(bishop, target);
        Self {
            bishop,
            target,
            solutions,
        }
    }

    pub fn question(&self) -> String {
        format!(
            "You have a bishop on {}. From which accessible squares does it attack {}?",
            self.bishop, self.target
        )
    }

    pub fn solutions(&self) -> &[BoardPosition] {
        &self.solutions
    }

    pub fn solution_text(&self) -> String {
        if self.solutions.is_empty() {
            "None".to_string()
        } else {
            join_positions(&self.solutions, " ")
        }
    }

    pub fn grade(&self, answer: &str) -> Result<bool> {
        grade_square_list(answer, &self.solutions)
    }
}

/// Is a given square light or dark?
pub struct SquareColorDrill {
    square: BoardPosition,
}

impl SquareColorDrill {
    pub fn generate(rng: &mut impl Rng) -> Self {
        Self {
            square: random_position(rng),
        }
    }

    pub fn question(&self) -> String {
        format!("Guess the color of the square {}:", self.square)
    }

    pub fn answer(&self) -> Color {
        self.square.square_color()
    }

    pub fn grade(&self, guess: Color) -> bool {
        guess == self.answer()
    }
}

/// Where do the diagonals through a square hit the board edge?
pub struct EndpointsDrill {
    square: BoardPosition,
    endpoints: Vec<BoardPosition>,
}

impl EndpointsDrill {
    pub fn generate(rng: &mut impl Rng) -> Self {
        let square = random_position(rng);
        let endpoints = diagonal_endpoints(square);
        Self { square, endpoints }
    }

    pub fn question(&self) -> String {
        format!("What are the endpoints of B{}?", self.square)
    }

    pub fn endpoints(&self) -> &[BoardPosition] {
        &self.endpoints
    }

    pub fn solution_text(&self) -> String {
        join_positions(&self.endpoints, " ")
    }

    pub fn grade(&self, answer: &str) -> Result<bool> {
        grade_square_list(answer, &self.endpoints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> BoardPosition {
        s.parse().unwrap()
    }

    fn drill(bishop: &str, target: &str) -> InterceptDrill {
        let bishop = pos(bishop);
        let target = pos(target);
        InterceptDrill {
            bishop,
            target,
            solutions: bishop_intersections(bishop, target),
        }
    }

    #[test]
    fn test_generate_never_repeats_the_square() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let d = InterceptDrill::generate(&mut rng);
            assert_ne!(d.bishop, d.target);
            assert!(d.bishop.is_valid());
            assert!(d.target.is_valid());
        }
    }

    #[test]
    fn test_intercept_grading_accepts_any_order() {
        let d = drill("d4", "f4");
        assert!(d.grade("e5 e3").unwrap());
        assert!(d.grade("e3 e5").unwrap());
        assert!(d.grade("e3 e5 e3").unwrap());
        assert!(!d.grade("e3").unwrap());
        assert!(!d.grade("none").unwrap());
    }

    #[test]
    fn test_intercept_grading_empty_answers() {
        let d = drill("a1", "b1");
        assert_eq!(d.solution_text(), "None");
        assert!(d.grade("none").unwrap());
        assert!(d.grade("None").unwrap());
        assert!(d.grade("").unwrap());
        assert!(!d.grade("a1").unwrap());
    }

    #[test]
    fn test_intercept_grading_rejects_garbage() {
        let d = drill("d4", "f4");
        assert!(d.grade("e5 x9").is_err());
        assert!(d.grade("e5,e3").is_err());
    }

    #[test]
    fn test_intercept_solution_text() {
        assert_eq!(drill("a1", "a3").solution_text(), "b2");
        assert_eq!(drill("d4", "f4").solution_text(), "e5 e3");
        assert_eq!(drill("a1", "h8").solution_text(), "a1");
    }

    #[test]
    fn test_square_color_grading() {
        let d = SquareColorDrill { square: pos("a1") };
        assert!(d.grade(Color::White));
        assert!(!d.grade(Color::Black));

        let d = SquareColorDrill { square: pos("h1") };
        assert!(d.grade(Color::Black));
    }

    #[test]
    fn test_endpoints_grading() {
        let d = EndpointsDrill {
            square: pos("e4"),
            endpoints: diagonal_endpoints(pos("e4")),
        };
        assert_eq!(d.solution_text(), "a8 h7 b1 h1");
        assert!(d.grade("h1 b1 h7 a8").unwrap());
        assert!(!d.grade("h1 b1 h7").unwrap());
        assert!(d.grade("b1 h1 h7 a8 b1").unwrap());
    }
}

//! Drill logic for the interactive trainers
//!
//! Everything here is pure question generation and grading; randomness
//! comes in through an explicit `Rng` and all I/O stays in the caller.

pub mod bishop;
pub mod memory;

pub use bishop::{EndpointsDrill, InterceptDrill, SquareColorDrill};
pub use memory::{MemoryDrill, MemoryQuestion};

use rand::Rng;

use crate::position::BoardPosition;

pub fn random_position(rng: &mut impl Rng) -> BoardPosition {
    BoardPosition::new(rng.random_range(1..=8), rng.random_range(1..=8))
}

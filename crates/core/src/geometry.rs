//! Bishop-diagonal geometry on the 8x8 board

use crate::position::{normalize, BoardPosition};

/// Squares from which a bishop simultaneously stands on a diagonal through
/// `a` and a diagonal through `b`, i.e. the squares where a bishop on `a`
/// can post itself to attack `b`.
///
/// Writing the displacement as `(dx,dy) = s(1,1) + t(1,-1)` has integer
/// solutions exactly when `dx+dy` is even; an odd sum means the squares sit
/// on opposite diagonal parities and no intersection exists. With `s == 0`
/// or `t == 0` the squares share a diagonal and the bishop already attacks
/// `b` from `a` itself. Otherwise the two crossing points are `a + (s,s)`
/// and `a + (t,-t)`, of which either may fall off the board.
pub fn bishop_intersections(a: BoardPosition, b: BoardPosition) -> Vec<BoardPosition> {
    let dx = b.file - a.file;
    let dy = b.rank - a.rank;

    if (dx + dy) % 2 != 0 {
        return Vec::new();
    }

    let s = (dx + dy) / 2;
    let t = (dx - dy) / 2;

    if s == 0 || t == 0 {
        return vec![a];
    }

    let mut solutions = vec![
        BoardPosition::new(a.file + s, a.rank + s),
        BoardPosition::new(a.file + t, a.rank - t),
    ];
    normalize(&mut solutions);
    solutions
}

/// Board-edge endpoints of the two diagonals through `position`. Each
/// diagonal is intersected with all four edges; off-board and duplicate
/// candidates fall out in normalization, leaving up to four squares.
pub fn diagonal_endpoints(position: BoardPosition) -> Vec<BoardPosition> {
    let BoardPosition { file, rank } = position;

    let mut endpoints = vec![
        BoardPosition::new(1, rank - (file - 1)),
        BoardPosition::new(1, rank + (file - 1)),
        BoardPosition::new(8, rank - (file - 8)),
        BoardPosition::new(8, rank + (file - 8)),
        BoardPosition::new(file - (rank - 1), 1),
        BoardPosition::new(file + (rank - 1), 1),
        BoardPosition::new(file - (rank - 8), 8),
        BoardPosition::new(file + (rank - 8), 8),
    ];
    normalize(&mut endpoints);
    endpoints
}

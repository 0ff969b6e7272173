//! Destination generation for each piece kind.
//!
//! Step pieces (knight, king) test a fixed offset list once each. Sliding
//! pieces (bishop, rook, queen) walk each ray one square at a time until the
//! board edge or the first occupied square, which is included only when it
//! holds an opposing piece. Pawns advance toward the far side of their color
//! and capture diagonally forward.

use std::collections::BTreeSet;
use std::fmt;

use chess_core::{Color, PieceKind, Square};

use crate::{Board, Piece};

/// Knight offsets as (row delta, col delta).
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// All eight unit directions; king steps and queen rays.
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
];

/// The set of squares a piece can reach.
///
/// Iteration order follows [`Square`] ordering (rank 8 first, then file).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveSet {
    squares: BTreeSet<Square>,
}

impl MoveSet {
    /// Creates an empty move set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a destination.
    #[inline]
    pub fn insert(&mut self, square: Square) {
        self.squares.insert(square);
    }

    /// Returns true if the destination is in the set.
    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        self.squares.contains(&square)
    }

    /// Returns the number of destinations.
    #[inline]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Returns true if there are no destinations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Iterates the destinations in order.
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.squares.iter().copied()
    }

    /// Returns the destinations in algebraic notation.
    pub fn to_algebraic(&self) -> Vec<String> {
        self.iter().map(Square::to_algebraic).collect()
    }
}

impl FromIterator<Square> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        MoveSet {
            squares: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MoveSet {
    type Item = Square;
    type IntoIter = std::collections::btree_set::IntoIter<Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.into_iter()
    }
}

impl fmt::Debug for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.squares.iter()).finish()
    }
}

/// Renders as `[e3, e4]`.
impl fmt::Display for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, square) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", square)?;
        }
        write!(f, "]")
    }
}

/// Generates every destination reachable by `piece` on `board`.
///
/// Computed fresh from the current occupancy on every call.
pub fn piece_moves(board: &Board, piece: &Piece) -> MoveSet {
    let mut moves = MoveSet::new();

    match piece.kind() {
        PieceKind::Pawn => generate_pawn_moves(board, piece, &mut moves),
        PieceKind::Knight => generate_step_moves(board, piece, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::Bishop => generate_ray_moves(board, piece, &DIAGONAL, &mut moves),
        PieceKind::Rook => generate_ray_moves(board, piece, &ORTHOGONAL, &mut moves),
        PieceKind::Queen => generate_ray_moves(board, piece, &ALL_DIRECTIONS, &mut moves),
        PieceKind::King => generate_step_moves(board, piece, &ALL_DIRECTIONS, &mut moves),
    }

    moves
}

/// Returns true if a piece of `color` may land on `square`: it is empty or
/// holds an opposing piece.
#[inline]
fn can_land(board: &Board, color: Color, square: Square) -> bool {
    board
        .piece_at(square)
        .map_or(true, |occupant| occupant.color() != color)
}

/// Returns true if `square` holds a piece of the opposite color.
#[inline]
fn is_enemy(board: &Board, color: Color, square: Square) -> bool {
    board
        .piece_at(square)
        .is_some_and(|occupant| occupant.color() != color)
}

/// Single forward push, first-move double push, and diagonal captures.
///
/// A pawn reports nothing while the other side is to move.
fn generate_pawn_moves(board: &Board, piece: &Piece, moves: &mut MoveSet) {
    let us = piece.color();
    if board.side_to_move() != us {
        return;
    }

    let from = piece.square();
    let forward = us.forward();

    if let Some(one) = from.offset(forward, 0) {
        if board.piece_at(one).is_none() {
            moves.insert(one);

            if piece.move_count() == 0 {
                if let Some(two) = from.offset(2 * forward, 0) {
                    if board.piece_at(two).is_none() {
                        moves.insert(two);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        if let Some(target) = from.offset(forward, d_col) {
            if is_enemy(board, us, target) {
                moves.insert(target);
            }
        }
    }
}

/// Fixed offsets, each tested once; nothing blocks a step.
fn generate_step_moves(board: &Board, piece: &Piece, offsets: &[(i8, i8)], moves: &mut MoveSet) {
    let from = piece.square();
    for &(d_row, d_col) in offsets {
        if let Some(target) = from.offset(d_row, d_col) {
            if can_land(board, piece.color(), target) {
                moves.insert(target);
            }
        }
    }
}

/// Walks each ray until the edge or the first occupied square.
fn generate_ray_moves(
    board: &Board,
    piece: &Piece,
    directions: &[(i8, i8)],
    moves: &mut MoveSet,
) {
    let us = piece.color();
    for &(d_row, d_col) in directions {
        let mut current = piece.square();
        while let Some(next) = current.offset(d_row, d_col) {
            match board.piece_at(next) {
                None => moves.insert(next),
                Some(occupant) => {
                    if occupant.color() != us {
                        moves.insert(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

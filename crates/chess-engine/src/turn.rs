//! Turn enforcement policy.

use serde::{Deserialize, Serialize};

/// How the board enforces alternating turns.
///
/// Pawns never report destinations when it is not their color's turn. The
/// other kinds carry no such gate, so under [`TurnOrder::PawnOnly`] a knight,
/// bishop, rook, queen, or king may be moved out of turn. [`TurnOrder::Strict`]
/// adds the ownership check to [`Board::move_piece`](crate::Board::move_piece)
/// for every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TurnOrder {
    /// Only pawns are gated on the side to move.
    #[default]
    PawnOnly,
    /// Every move must be made by the side to move.
    Strict,
}

impl std::fmt::Display for TurnOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnOrder::PawnOnly => write!(f, "pawn-only"),
            TurnOrder::Strict => write!(f, "strict"),
        }
    }
}

// Motor Movimento - Enumeração de lances com bloqueio por obstáculos

pub mod types;
pub mod error;
pub mod boundary;
pub mod moves;
pub mod policy;
pub mod obstacles;
pub mod pattern;
pub mod diagnostics;
pub mod pieces;
pub mod enumeration;

pub use types::*;
pub use error::{MovementError, Result};
pub use boundary::{distance_to_boundary, BoundaryDistances};
pub use pattern::{compute_moves, MovementPattern, MovementSpec, Ray};
pub use diagnostics::{MoveTracer, NoopTracer, StdoutTracer};
pub use pieces::{Piece, PieceKind};

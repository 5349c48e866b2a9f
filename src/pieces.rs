// Ficheiro: src/pieces.rs
// Descrição: Padrões de movimento das peças de xadrez, construídos sobre `MovementSpec`.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pattern::{compute_moves, MovementSpec};
use crate::types::{Direction, DistancePolicy, Square};

// Enum para representar o tipo de uma peça de xadrez.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];
}

/// Especificações de movimento de cada peça. O peão tem duas: avanço e diagonal.
pub fn movement_specs(kind: PieceKind) -> Result<Vec<MovementSpec>> {
    let specs = match kind {
        PieceKind::Pawn => vec![
            MovementSpec::new([Direction::Up], DistancePolicy::Fixed(2))?,
            MovementSpec::new([Direction::UpLeft, Direction::UpRight], DistancePolicy::Fixed(1))?,
        ],
        PieceKind::Knight => vec![MovementSpec::new(Direction::L_SHAPED, DistancePolicy::Fixed(1))?],
        PieceKind::Bishop => vec![MovementSpec::new(Direction::DIAGONALS, DistancePolicy::ToBoundary)?],
        PieceKind::Rook => vec![MovementSpec::new(Direction::ORTHOGONALS, DistancePolicy::ToBoundary)?],
        // Direções da dama: torre + bispo
        PieceKind::Queen => vec![MovementSpec::new(Direction::PRINCIPAL, DistancePolicy::ToBoundary)?],
        PieceKind::King => vec![MovementSpec::new(Direction::PRINCIPAL, DistancePolicy::Fixed(1))?],
    };
    Ok(specs)
}

/// Destinos de uma peça: união das suas especificações, sem casas repetidas.
pub fn piece_moves(kind: PieceKind, origin: Square, obstacles: &[Square]) -> Result<Vec<Square>> {
    let mut moves = Vec::with_capacity(32); // Pre-aloca para reduzir realocações
    for spec in movement_specs(kind)? {
        for square in compute_moves(&spec, origin, obstacles)? {
            if !moves.contains(&square) {
                moves.push(square);
            }
        }
    }
    Ok(moves)
}

// Uma peça numa casa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub position: Square,
}

impl Piece {
    pub fn new(kind: PieceKind, position: Square) -> Self {
        Piece { kind, position }
    }

    pub fn possible_moves(&self, obstacles: &[Square]) -> Result<Vec<Square>> {
        piece_moves(self.kind, self.position, obstacles)
    }
}

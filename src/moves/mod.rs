// Ficheiro: src/moves/mod.rs
// Descrição: Tabela direção -> comportamento e despacho para as calculadoras de cada família.

pub mod diagonal;
pub mod l_shaped;
pub mod orthogonal;

use crate::error::{MovementError, Result};
use crate::types::{Direction, DirectionFamily, Square};

/// Calculadora de deslocamento: `(origem, direção, passos) -> casa`.
pub type Calculator = fn(Square, Direction, u8) -> Result<Square>;

/// Comportamento associado a uma direção.
#[derive(Debug, Clone, Copy)]
pub struct DirectionBehaviour {
    pub family: DirectionFamily,
    // Vetor unitário para deslizantes, deslocamento fixo para saltos em L.
    pub delta: (i8, i8),
    pub calculator: Calculator,
}

const fn diag(dx: i8, dy: i8) -> DirectionBehaviour {
    DirectionBehaviour {
        family: DirectionFamily::Diagonal,
        delta: (dx, dy),
        calculator: diagonal::displace,
    }
}

const fn ortho(dx: i8, dy: i8) -> DirectionBehaviour {
    DirectionBehaviour {
        family: DirectionFamily::Orthogonal,
        delta: (dx, dy),
        calculator: orthogonal::displace,
    }
}

const fn hop(dx: i8, dy: i8) -> DirectionBehaviour {
    DirectionBehaviour {
        family: DirectionFamily::LShaped,
        delta: (dx, dy),
        calculator: l_shaped::displace_units,
    }
}

// Indexada pelo discriminante de `Direction`; a ordem tem de acompanhar o enum.
static DIRECTION_TABLE: [DirectionBehaviour; Direction::COUNT] = [
    diag(1, 1),   // UpRight
    diag(-1, 1),  // UpLeft
    diag(1, -1),  // DownRight
    diag(-1, -1), // DownLeft
    ortho(0, 1),  // Up
    ortho(0, -1), // Down
    ortho(-1, 0), // Left
    ortho(1, 0),  // Right
    hop(-1, 2),   // LShapedUpLeft
    hop(1, 2),    // LShapedUpRight
    hop(-1, -2),  // LShapedDownLeft
    hop(1, -2),   // LShapedDownRight
    hop(-2, 1),   // LShapedLeftUp
    hop(-2, -1),  // LShapedLeftDown
    hop(2, 1),    // LShapedRightUp
    hop(2, -1),   // LShapedRightDown
];

#[inline]
pub fn behaviour(direction: Direction) -> &'static DirectionBehaviour {
    &DIRECTION_TABLE[direction.index()]
}

/// Deslocamento direto, sem resolução de distância até à borda.
///
/// Escolhe a calculadora pela tabela; pode devolver `OutOfBounds`.
pub fn displace(origin: Square, direction: Direction, units: u8) -> Result<Square> {
    (behaviour(direction).calculator)(origin, direction, units)
}

// Partilhado pelas calculadoras diagonal e ortogonal.
pub(crate) fn slide(
    origin: Square,
    direction: Direction,
    units: u8,
    family: DirectionFamily,
) -> Result<Square> {
    let entry = behaviour(direction);
    if entry.family != family {
        return Err(MovementError::InvalidDirection { direction, family });
    }
    if units == 0 {
        return Err(MovementError::InvalidUnits { units });
    }
    let (dx, dy) = entry.delta;
    let units = units as i16;
    origin.offset(dx as i16 * units, dy as i16 * units)
}

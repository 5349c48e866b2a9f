// Ficheiro: src/moves/l_shaped.rs
// Descrição: Saltos em L (cavalo). Um único salto por direção, nunca bloqueado.

use lazy_static::lazy_static;

use crate::error::{MovementError, Result};
use crate::types::{Direction, DirectionFamily, Square, SQUARE_COUNT};

lazy_static! {
    // Para cada casa, os saltos que ficam dentro do tabuleiro, na ordem de `Direction::L_SHAPED`.
    static ref HOP_TABLE: Vec<Vec<(Direction, Square)>> = Square::all()
        .map(|origin| {
            Direction::L_SHAPED
                .iter()
                .filter_map(|&direction| displace(origin, direction).ok().map(|to| (direction, to)))
                .collect()
        })
        .collect();
}

/// Casa atingida por um salto em L a partir de `origin`.
pub fn displace(origin: Square, direction: Direction) -> Result<Square> {
    let entry = super::behaviour(direction);
    if entry.family != DirectionFamily::LShaped {
        return Err(MovementError::InvalidDirection {
            direction,
            family: DirectionFamily::LShaped,
        });
    }
    let (dx, dy) = entry.delta;
    origin.offset(dx as i16, dy as i16)
}

// Assinatura uniforme para a tabela de direções; `units` não tem significado aqui.
pub(crate) fn displace_units(origin: Square, direction: Direction, _units: u8) -> Result<Square> {
    displace(origin, direction)
}

/// Saltos válidos a partir de `origin` (tabela pré-calculada).
pub fn hops_from(origin: Square) -> &'static [(Direction, Square)] {
    debug_assert_eq!(HOP_TABLE.len(), SQUARE_COUNT);
    &HOP_TABLE[origin.index()]
}

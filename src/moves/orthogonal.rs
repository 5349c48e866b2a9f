// Ficheiro: src/moves/orthogonal.rs
// Descrição: Calculadora de deslocamentos horizontais e verticais.

use crate::error::Result;
use crate::types::{Direction, DirectionFamily, Square};

/// Casa a `units` passos na direção ortogonal `direction`.
///
/// LEFT/RIGHT só mexem em `x`, UP/DOWN só mexem em `y`. `units` tem de ser
/// positivo.
pub fn displace(origin: Square, direction: Direction, units: u8) -> Result<Square> {
    super::slide(origin, direction, units, DirectionFamily::Orthogonal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MovementError;

    fn sq(x: i8, y: i8) -> Square {
        Square::new(x, y).unwrap()
    }

    #[test]
    fn test_only_matching_axis_changes() {
        let origin = sq(4, 2);
        assert_eq!(displace(origin, Direction::Right, 3).unwrap(), sq(7, 2));
        assert_eq!(displace(origin, Direction::Left, 4).unwrap(), sq(0, 2));
        assert_eq!(displace(origin, Direction::Up, 5).unwrap(), sq(4, 7));
        assert_eq!(displace(origin, Direction::Down, 2).unwrap(), sq(4, 0));
    }

    #[test]
    fn test_zero_units_rejected() {
        assert_eq!(
            displace(sq(4, 2), Direction::Up, 0),
            Err(MovementError::InvalidUnits { units: 0 })
        );
    }

    #[test]
    fn test_overflow_on_each_edge() {
        assert_eq!(
            displace(sq(7, 3), Direction::Right, 1),
            Err(MovementError::OutOfBounds { x: 8, y: 3 })
        );
        assert_eq!(
            displace(sq(0, 3), Direction::Left, 1),
            Err(MovementError::OutOfBounds { x: -1, y: 3 })
        );
        assert_eq!(
            displace(sq(3, 0), Direction::Down, 2),
            Err(MovementError::OutOfBounds { x: 3, y: -2 })
        );
    }

    #[test]
    fn test_rejects_diagonals() {
        assert_eq!(
            displace(sq(3, 3), Direction::UpLeft, 1),
            Err(MovementError::InvalidDirection {
                direction: Direction::UpLeft,
                family: DirectionFamily::Orthogonal,
            })
        );
    }
}

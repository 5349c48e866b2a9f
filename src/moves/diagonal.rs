// Ficheiro: src/moves/diagonal.rs
// Descrição: Calculadora de deslocamentos diagonais.

use crate::error::Result;
use crate::types::{Direction, DirectionFamily, Square};

/// Casa a `units` passos na diagonal `direction`.
///
/// O delta é `(±units, ±units)` conforme os sinais da direção. Falha com
/// `OutOfBounds` se sair do tabuleiro e com `InvalidDirection` se a direção
/// não for diagonal.
pub fn displace(origin: Square, direction: Direction, units: u8) -> Result<Square> {
    super::slide(origin, direction, units, DirectionFamily::Diagonal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MovementError;

    fn sq(x: i8, y: i8) -> Square {
        Square::new(x, y).unwrap()
    }

    #[test]
    fn test_each_diagonal_sign() {
        let origin = sq(3, 3);
        assert_eq!(displace(origin, Direction::UpRight, 2).unwrap(), sq(5, 5));
        assert_eq!(displace(origin, Direction::UpLeft, 2).unwrap(), sq(1, 5));
        assert_eq!(displace(origin, Direction::DownRight, 2).unwrap(), sq(5, 1));
        assert_eq!(displace(origin, Direction::DownLeft, 3).unwrap(), sq(0, 0));
    }

    #[test]
    fn test_out_of_bounds_is_an_error() {
        assert_eq!(
            displace(sq(2, 0), Direction::DownLeft, 1),
            Err(MovementError::OutOfBounds { x: 1, y: -1 })
        );
        assert_eq!(
            displace(sq(6, 6), Direction::UpRight, 2),
            Err(MovementError::OutOfBounds { x: 8, y: 8 })
        );
    }

    #[test]
    fn test_rejects_other_families() {
        assert_eq!(
            displace(sq(3, 3), Direction::Up, 1),
            Err(MovementError::InvalidDirection {
                direction: Direction::Up,
                family: DirectionFamily::Diagonal,
            })
        );
        assert!(displace(sq(3, 3), Direction::LShapedUpRight, 1).is_err());
    }
}

// Ficheiro: src/types.rs
// Descrição: Módulo para as definições de tipos de dados fundamentais do motor de movimento.

use serde::{Deserialize, Serialize};

use crate::error::{MovementError, Result};

// Última coordenada válida em cada eixo. O tabuleiro tem 8x8 casas: 0..=7.
pub const BOUNDARY: i8 = 7;

// Número total de casas do tabuleiro.
pub const SQUARE_COUNT: usize = ((BOUNDARY as usize) + 1) * ((BOUNDARY as usize) + 1);

/// Uma casa do tabuleiro. Só pode ser construída dentro de `[0, BOUNDARY]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(i8, i8)", into = "(i8, i8)")]
pub struct Square {
    x: i8,
    y: i8,
}

impl Square {
    /// Cria uma casa validada.
    pub fn new(x: i8, y: i8) -> Result<Self> {
        if Self::in_bounds(x, y) {
            Ok(Square { x, y })
        } else {
            Err(MovementError::InvalidSquare { x, y })
        }
    }

    #[inline]
    pub fn x(self) -> i8 {
        self.x
    }

    #[inline]
    pub fn y(self) -> i8 {
        self.y
    }

    #[inline]
    pub fn in_bounds(x: i8, y: i8) -> bool {
        (0..=BOUNDARY).contains(&x) && (0..=BOUNDARY).contains(&y)
    }

    /// Índice 0..64 (a1 = 0, h8 = 63), o mesmo layout dos bitboards.
    #[inline]
    pub fn index(self) -> usize {
        (self.y as usize) * ((BOUNDARY as usize) + 1) + self.x as usize
    }

    /// Inverso de `index`.
    pub fn from_index(index: usize) -> Result<Self> {
        let width = (BOUNDARY as usize) + 1;
        if index >= SQUARE_COUNT {
            return Err(MovementError::InvalidSquare {
                x: (index % width) as i8,
                y: (index / width) as i8,
            });
        }
        Ok(Square {
            x: (index % width) as i8,
            y: (index / width) as i8,
        })
    }

    /// Todas as casas do tabuleiro, por ordem de índice.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT).map(|i| {
            let width = (BOUNDARY as usize) + 1;
            Square {
                x: (i % width) as i8,
                y: (i / width) as i8,
            }
        })
    }

    /// Desloca a casa; devolve `OutOfBounds` em vez de saturar ou dar a volta.
    pub(crate) fn offset(self, dx: i16, dy: i16) -> Result<Self> {
        let x = self.x as i16 + dx;
        let y = self.y as i16 + dy;
        let bound = BOUNDARY as i16;
        if (0..=bound).contains(&x) && (0..=bound).contains(&y) {
            Ok(Square { x: x as i8, y: y as i8 })
        } else {
            Err(MovementError::OutOfBounds { x, y })
        }
    }
}

impl TryFrom<(i8, i8)> for Square {
    type Error = MovementError;

    fn try_from((x, y): (i8, i8)) -> Result<Self> {
        Square::new(x, y)
    }
}

impl From<Square> for (i8, i8) {
    fn from(square: Square) -> Self {
        (square.x, square.y)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// Família de movimento de uma direção. Cada família tem a sua calculadora.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirectionFamily {
    Diagonal,
    Orthogonal,
    LShaped,
}

impl DirectionFamily {
    /// Peças deslizantes podem ser bloqueadas; saltos em L não.
    #[inline]
    pub fn is_sliding(self) -> bool {
        !matches!(self, DirectionFamily::LShaped)
    }
}

impl std::fmt::Display for DirectionFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DirectionFamily::Diagonal => "diagonal",
            DirectionFamily::Orthogonal => "orthogonal",
            DirectionFamily::LShaped => "l-shaped",
        };
        f.write_str(name)
    }
}

/// Direções de deslocamento. São apenas dados: o comportamento de cada uma
/// vive na tabela de `moves::behaviour`, indexada pelo discriminante.
///
/// Os nomes dos saltos em L seguem "eixo longo primeiro": `LShapedUpRight`
/// sobe duas casas e anda uma para a direita, `LShapedRightUp` anda duas
/// para a direita e sobe uma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    UpRight = 0,
    UpLeft = 1,
    DownRight = 2,
    DownLeft = 3,
    Up = 4,
    Down = 5,
    Left = 6,
    Right = 7,
    LShapedUpLeft = 8,
    LShapedUpRight = 9,
    LShapedDownLeft = 10,
    LShapedDownRight = 11,
    LShapedLeftUp = 12,
    LShapedLeftDown = 13,
    LShapedRightUp = 14,
    LShapedRightDown = 15,
}

impl Direction {
    pub const COUNT: usize = 16;

    pub const DIAGONALS: [Direction; 4] = [
        Direction::UpRight,
        Direction::UpLeft,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    pub const ORTHOGONALS: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    // Direções principais (não em L), as únicas com distância até à borda.
    pub const PRINCIPAL: [Direction; 8] = [
        Direction::UpRight,
        Direction::UpLeft,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub const L_SHAPED: [Direction; 8] = [
        Direction::LShapedUpLeft,
        Direction::LShapedUpRight,
        Direction::LShapedDownLeft,
        Direction::LShapedDownRight,
        Direction::LShapedLeftUp,
        Direction::LShapedLeftDown,
        Direction::LShapedRightUp,
        Direction::LShapedRightDown,
    ];

    pub const ALL: [Direction; Direction::COUNT] = [
        Direction::UpRight,
        Direction::UpLeft,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::LShapedUpLeft,
        Direction::LShapedUpRight,
        Direction::LShapedDownLeft,
        Direction::LShapedDownRight,
        Direction::LShapedLeftUp,
        Direction::LShapedLeftDown,
        Direction::LShapedRightUp,
        Direction::LShapedRightDown,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn family(self) -> DirectionFamily {
        crate::moves::behaviour(self).family
    }

    /// Vetor unitário (deslizantes) ou deslocamento fixo (saltos em L).
    #[inline]
    pub fn delta(self) -> (i8, i8) {
        crate::moves::behaviour(self).delta
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::UpRight => "UP_RIGHT",
            Direction::UpLeft => "UP_LEFT",
            Direction::DownRight => "DOWN_RIGHT",
            Direction::DownLeft => "DOWN_LEFT",
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
            Direction::LShapedUpLeft => "L_SHAPED_UP_LEFT",
            Direction::LShapedUpRight => "L_SHAPED_UP_RIGHT",
            Direction::LShapedDownLeft => "L_SHAPED_DOWN_LEFT",
            Direction::LShapedDownRight => "L_SHAPED_DOWN_RIGHT",
            Direction::LShapedLeftUp => "L_SHAPED_LEFT_UP",
            Direction::LShapedLeftDown => "L_SHAPED_LEFT_DOWN",
            Direction::LShapedRightUp => "L_SHAPED_RIGHT_UP",
            Direction::LShapedRightDown => "L_SHAPED_RIGHT_DOWN",
        };
        f.write_str(name)
    }
}

/// Política de distância: quantas casas tentar numa direção.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistancePolicy {
    /// Exatamente `n` passos (o raio inclui os passos 1..=n).
    Fixed(u8),
    /// Tantos passos quantos o tabuleiro permitir.
    ToBoundary,
}

impl std::fmt::Display for DistancePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistancePolicy::Fixed(n) => write!(f, "Fixed({})", n),
            DistancePolicy::ToBoundary => f.write_str("ToBoundary"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_validation() {
        assert!(Square::new(0, 0).is_ok());
        assert!(Square::new(7, 7).is_ok());
        assert_eq!(Square::new(8, 0), Err(MovementError::InvalidSquare { x: 8, y: 0 }));
        assert_eq!(Square::new(3, -1), Err(MovementError::InvalidSquare { x: 3, y: -1 }));
    }

    #[test]
    fn test_square_index_roundtrip() {
        for square in Square::all() {
            assert_eq!(Square::from_index(square.index()).unwrap(), square);
        }
        assert_eq!(Square::all().count(), 64);
        assert!(Square::from_index(64).is_err());
    }

    #[test]
    fn test_offset_never_clamps() {
        let corner = Square::new(7, 7).unwrap();
        assert_eq!(corner.offset(1, 0), Err(MovementError::OutOfBounds { x: 8, y: 7 }));
        assert_eq!(corner.offset(-1, -1).unwrap(), Square::new(6, 6).unwrap());
    }

    #[test]
    fn test_direction_table_matches_discriminants() {
        for (i, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(direction.index(), i);
        }
    }

    #[test]
    fn test_square_serde_rejects_off_board() {
        let ok: Square = serde_json::from_str("[2, 0]").unwrap();
        assert_eq!(ok, Square::new(2, 0).unwrap());
        assert!(serde_json::from_str::<Square>("[9, 0]").is_err());
    }
}

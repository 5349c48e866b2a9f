// Ficheiro: src/error.rs
// Descrição: Erros do motor de movimento. Todos são erros de programação
// (configuração mal formada), nunca condições transitórias.

use thiserror::Error;

use crate::types::{Direction, DirectionFamily, DistancePolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MovementError {
    /// Um deslocamento direto sairia do tabuleiro.
    #[error("move out of bounds: ({x}, {y}) is outside the board boundaries")]
    OutOfBounds { x: i16, y: i16 },

    /// A direção não pertence à família da calculadora chamada.
    #[error("invalid movement direction {direction} for the {family} calculator")]
    InvalidDirection {
        direction: Direction,
        family: DirectionFamily,
    },

    #[error("unsupported distance policy: {policy}")]
    InvalidPolicy { policy: DistancePolicy },

    /// Calculadoras de peças deslizantes exigem pelo menos um passo.
    #[error("a sliding displacement needs a positive number of units, got {units}")]
    InvalidUnits { units: u8 },

    #[error("square ({x}, {y}) is not on the board")]
    InvalidSquare { x: i8, y: i8 },
}

pub type Result<T> = std::result::Result<T, MovementError>;

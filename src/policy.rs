// Ficheiro: src/policy.rs
// Descrição: Resolve uma política de distância num número concreto de passos.

use crate::boundary::distance_to_boundary;
use crate::error::{MovementError, Result};
use crate::moves::l_shaped;
use crate::types::{Direction, DistancePolicy, Square};

/// Rejeita políticas que não podem gerar nenhum passo (`Fixed(0)`).
pub fn validate(policy: DistancePolicy) -> Result<()> {
    match policy {
        DistancePolicy::Fixed(0) => Err(MovementError::InvalidPolicy { policy }),
        DistancePolicy::Fixed(_) | DistancePolicy::ToBoundary => Ok(()),
    }
}

/// Número de passos a tentar na direção `direction` a partir de `origin`.
///
/// `Fixed(n)` devolve `n` sem olhar para o tabuleiro. `ToBoundary` devolve a
/// distância até à borda; `0` é válido e significa um raio vazio. Para saltos
/// em L a "borda" é o próprio salto: 1 se cair no tabuleiro, 0 caso contrário.
pub fn resolve_units(policy: DistancePolicy, direction: Direction, origin: Square) -> Result<u8> {
    validate(policy)?;
    match policy {
        DistancePolicy::Fixed(n) => Ok(n),
        DistancePolicy::ToBoundary => match distance_to_boundary(origin).get(direction) {
            Some(steps) => Ok(steps),
            None => Ok(l_shaped::displace(origin, direction).map_or(0, |_| 1)),
        },
    }
}

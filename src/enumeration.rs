// Ficheiro: src/enumeration.rs
// Descrição: Enumeração em lote. Cada cálculo é independente, por isso os
// lotes grandes correm em paralelo com rayon.

use rayon::prelude::*;

use crate::error::Result;
use crate::pattern::{compute_moves, MovementSpec};
use crate::types::{Square, SQUARE_COUNT};

// Abaixo disto o custo de distribuir pelas threads não compensa.
const PARALLEL_THRESHOLD: usize = 16;

/// Um pedido de `compute_moves`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub spec: MovementSpec,
    pub origin: Square,
    pub obstacles: Vec<Square>,
}

/// Resultados na mesma ordem dos pedidos. O primeiro erro aborta o lote.
pub fn compute_moves_batch(requests: &[MoveRequest]) -> Result<Vec<Vec<Square>>> {
    let run = |request: &MoveRequest| compute_moves(&request.spec, request.origin, &request.obstacles);
    if requests.len() > PARALLEL_THRESHOLD {
        requests.par_iter().map(run).collect()
    } else {
        requests.iter().map(run).collect()
    }
}

/// Soma do número de destinos de `spec` a partir de todas as casas do tabuleiro.
pub fn count_destinations(spec: &MovementSpec, obstacles: &[Square]) -> Result<u64> {
    let counts = (0..SQUARE_COUNT)
        .into_par_iter()
        .map(|index| -> Result<u64> {
            let origin = Square::from_index(index)?;
            Ok(compute_moves(spec, origin, obstacles)?.len() as u64)
        })
        .collect::<Result<Vec<u64>>>()?;
    Ok(counts.into_iter().sum())
}

/// Conta os destinos e imprime o tempo gasto.
pub fn run_enumeration(name: &str, spec: &MovementSpec, obstacles: &[Square]) -> Result<u64> {
    println!("A enumerar destinos para {}", name);
    let start_time = std::time::Instant::now();
    let total = count_destinations(spec, obstacles)?;
    let duration = start_time.elapsed();
    println!("Destinos totais: {}", total);
    println!("Tempo decorrido: {:?}", duration);
    Ok(total)
}

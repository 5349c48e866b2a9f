// Ficheiro: src/main.rs
// Descrição: Ponto de entrada principal da aplicação.

use motor_movimento::enumeration::run_enumeration;
use motor_movimento::pieces::{movement_specs, PieceKind};
use motor_movimento::{Direction, DistancePolicy, MovementPattern, MovementSpec, Square, StdoutTracer};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("--- A INICIAR ENUMERAÇÃO ---");

    // Os totais num tabuleiro vazio devem ser 896 (torre), 560 (bispo), 336 (cavalo) e 420 (rei).
    for kind in [PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight, PieceKind::King] {
        for spec in movement_specs(kind)? {
            run_enumeration(&format!("{:?}", kind), &spec, &[])?;
        }
    }

    // Bispo em c1 com dois obstáculos na mesma diagonal, com diagnóstico ligado.
    let bishop = MovementSpec::new(Direction::DIAGONALS, DistancePolicy::ToBoundary)?;
    let pattern = MovementPattern::new(bishop).with_tracer(Arc::new(StdoutTracer));
    let obstacles = [Square::new(4, 2)?, Square::new(3, 1)?];
    let moves = pattern.compute_moves(Square::new(2, 0)?, &obstacles)?;
    let rendered: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
    println!("Lances do bispo: {}", rendered.join(" "));

    Ok(())
}

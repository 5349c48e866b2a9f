// Ficheiro: src/boundary.rs
// Descrição: Modelo de coordenadas e distâncias até à borda do tabuleiro.

use lazy_static::lazy_static;

use crate::types::{Direction, Square, BOUNDARY};

/// Passos disponíveis em cada uma das oito direções principais antes de sair do tabuleiro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryDistances {
    // Indexado pelo discriminante das direções principais (0..8).
    steps: [u8; 8],
}

impl BoundaryDistances {
    fn compute(origin: Square) -> Self {
        let mut steps = [0u8; 8];
        for direction in Direction::PRINCIPAL {
            let (dx, dy) = direction.delta();
            let x_room = axis_room(origin.x(), dx);
            let y_room = axis_room(origin.y(), dy);
            // Diagonais: mínimo das duas distâncias ortogonais.
            steps[direction.index()] = match (x_room, y_room) {
                (Some(a), Some(b)) => a.min(b),
                (Some(a), None) | (None, Some(a)) => a,
                (None, None) => 0,
            };
        }
        BoundaryDistances { steps }
    }

    /// Distância até à borda; `None` para direções em L, que não têm borda própria.
    #[inline]
    pub fn get(&self, direction: Direction) -> Option<u8> {
        self.steps.get(direction.index()).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, u8)> + '_ {
        Direction::PRINCIPAL
            .iter()
            .map(move |&direction| (direction, self.steps[direction.index()]))
    }
}

// Espaço livre num eixo para um passo com sinal `d`; `None` se o eixo não se mexe.
fn axis_room(coord: i8, d: i8) -> Option<u8> {
    match d.signum() {
        1 => Some((BOUNDARY - coord) as u8),
        -1 => Some(coord as u8),
        _ => None,
    }
}

lazy_static! {
    static ref BOUNDARY_TABLE: Vec<BoundaryDistances> =
        Square::all().map(BoundaryDistances::compute).collect();
}

/// Distâncias até à borda a partir de `origin` (tabela pré-calculada).
pub fn distance_to_boundary(origin: Square) -> BoundaryDistances {
    BOUNDARY_TABLE[origin.index()]
}

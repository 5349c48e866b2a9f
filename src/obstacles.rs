// Ficheiro: src/obstacles.rs
// Descrição: Resolução de obstáculos. Para cada direção encontra o obstáculo
// mais próximo no raio e corta o raio antes dele.

use crate::diagnostics::MoveTracer;
use crate::types::{Direction, Square};

/// Ordem "mais perto da origem" ao longo de uma direção, derivada dos sinais
/// `(dx, dy)` da direção. Um eixo com sinal 0 não entra na comparação.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstacleOrdering {
    sx: i8,
    sy: i8,
}

impl ObstacleOrdering {
    pub fn for_direction(direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        ObstacleOrdering {
            sx: dx.signum(),
            sy: dy.signum(),
        }
    }

    /// `candidate` está estritamente mais perto da origem do que `current`.
    ///
    /// Para UP_RIGHT: `candidate.x < current.x && candidate.y < current.y`.
    #[inline]
    pub fn is_closer(&self, candidate: Square, current: Square) -> bool {
        axis_closer(self.sx, candidate.x(), current.x())
            && axis_closer(self.sy, candidate.y(), current.y())
    }
}

#[inline]
fn axis_closer(sign: i8, candidate: i8, current: i8) -> bool {
    sign == 0 || sign * (candidate - current) < 0
}

/// Obstáculo do raio mais próximo da origem, se existir.
pub fn closest_obstacle(direction: Direction, ray: &[Square], obstacles: &[Square]) -> Option<Square> {
    let ordering = ObstacleOrdering::for_direction(direction);
    obstacles
        .iter()
        .copied()
        .filter(|obstacle| ray.contains(obstacle))
        .fold(None, |closest, current| match closest {
            Some(c) if !ordering.is_closer(current, c) => Some(c),
            _ => Some(current),
        })
}

/// Corta `ray` (ordenado do mais perto para o mais longe) antes do obstáculo
/// mais próximo. O próprio obstáculo nunca é destino.
pub fn resolve(
    direction: Direction,
    mut ray: Vec<Square>,
    obstacles: &[Square],
    tracer: &dyn MoveTracer,
) -> Vec<Square> {
    let closest = match closest_obstacle(direction, &ray, obstacles) {
        Some(closest) => closest,
        None => return ray,
    };
    tracer.closest_obstacle(direction, closest);

    let ordering = ObstacleOrdering::for_direction(direction);
    let before = ray.len();
    ray.retain(|&square| ordering.is_closer(square, closest));
    tracer.ray_truncated(direction, ray.len(), before - ray.len());
    ray
}

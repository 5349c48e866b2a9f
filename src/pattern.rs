// Ficheiro: src/pattern.rs
// Descrição: Padrão de movimento. Junta direções permitidas, política de
// distância, calculadoras e resolução de obstáculos num único cálculo.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::boundary::distance_to_boundary;
use crate::diagnostics::{MoveTracer, NoopTracer};
use crate::error::{MovementError, Result};
use crate::moves::{self, l_shaped};
use crate::obstacles;
use crate::policy;
use crate::types::{Direction, DistancePolicy, Square};

/// Capacidade de deslocamento de uma peça: direções permitidas + política de distância.
///
/// Imutável depois de construída. As direções não se repetem e mantêm a
/// ordem em que foram dadas, que é a ordem do resultado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MovementSpecConfig", into = "MovementSpecConfig")]
pub struct MovementSpec {
    directions: Vec<Direction>,
    policy: DistancePolicy,
}

// Forma serializada de `MovementSpec`; passa pela validação de `MovementSpec::new`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MovementSpecConfig {
    allowed_directions: Vec<Direction>,
    distance_policy: DistancePolicy,
}

impl MovementSpec {
    pub fn new<I>(directions: I, policy: DistancePolicy) -> Result<Self>
    where
        I: IntoIterator<Item = Direction>,
    {
        policy::validate(policy)?;
        let mut unique = Vec::with_capacity(Direction::COUNT);
        for direction in directions {
            if !unique.contains(&direction) {
                unique.push(direction);
            }
        }
        Ok(MovementSpec {
            directions: unique,
            policy,
        })
    }

    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    pub fn policy(&self) -> DistancePolicy {
        self.policy
    }
}

impl TryFrom<MovementSpecConfig> for MovementSpec {
    type Error = MovementError;

    fn try_from(config: MovementSpecConfig) -> Result<Self> {
        MovementSpec::new(config.allowed_directions, config.distance_policy)
    }
}

impl From<MovementSpec> for MovementSpecConfig {
    fn from(spec: MovementSpec) -> Self {
        MovementSpecConfig {
            allowed_directions: spec.directions,
            distance_policy: spec.policy,
        }
    }
}

/// Casas de destino numa direção, da mais próxima para a mais distante.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ray {
    pub direction: Direction,
    pub squares: Vec<Square>,
}

/// Lances de destino para `spec` a partir de `origin`, com `obstacles` a bloquear.
///
/// O resultado segue a ordem direção-depois-distância. Casas repetidas entre
/// direções diferentes não são removidas.
pub fn compute_moves(spec: &MovementSpec, origin: Square, obstacles: &[Square]) -> Result<Vec<Square>> {
    compute_moves_traced(spec, origin, obstacles, &NoopTracer)
}

pub fn compute_moves_traced(
    spec: &MovementSpec,
    origin: Square,
    obstacles: &[Square],
    tracer: &dyn MoveTracer,
) -> Result<Vec<Square>> {
    let rays = compute_rays_traced(spec, origin, obstacles, tracer)?;
    Ok(rays.into_iter().flat_map(|ray| ray.squares).collect())
}

/// Um raio por direção permitida (raios vazios incluídos).
pub fn compute_rays_traced(
    spec: &MovementSpec,
    origin: Square,
    obstacles: &[Square],
    tracer: &dyn MoveTracer,
) -> Result<Vec<Ray>> {
    spec.directions
        .iter()
        .map(|&direction| {
            ray_towards(spec.policy, direction, origin, obstacles, tracer)
                .map(|squares| Ray { direction, squares })
        })
        .collect()
}

fn ray_towards(
    policy: DistancePolicy,
    direction: Direction,
    origin: Square,
    obstacles: &[Square],
    tracer: &dyn MoveTracer,
) -> Result<Vec<Square>> {
    // Saltos em L: um único salto, nunca bloqueado pelo caminho.
    if !direction.family().is_sliding() {
        policy::validate(policy)?;
        let ray: Vec<Square> = l_shaped::hops_from(origin)
            .iter()
            .filter(|(hop, _)| *hop == direction)
            .map(|&(_, to)| to)
            .collect();
        tracer.ray_generated(origin, direction, &ray);
        return Ok(ray);
    }

    let units = policy::resolve_units(policy, direction, origin)?;
    // Fixed(n) também fica limitado pela borda, por isso o caminho composto nunca sai do tabuleiro.
    let reach = distance_to_boundary(origin).get(direction).unwrap_or(0);
    let units = units.min(reach);
    if units == 0 {
        return Ok(Vec::new());
    }

    let ray = (1..=units)
        .map(|step| moves::displace(origin, direction, step))
        .collect::<Result<Vec<_>>>()?;
    tracer.ray_generated(origin, direction, &ray);

    Ok(obstacles::resolve(direction, ray, obstacles, tracer))
}

/// `MovementSpec` com um canal de diagnóstico injetado.
#[derive(Clone)]
pub struct MovementPattern {
    spec: MovementSpec,
    tracer: Arc<dyn MoveTracer>,
}

impl MovementPattern {
    pub fn new(spec: MovementSpec) -> Self {
        MovementPattern {
            spec,
            tracer: Arc::new(NoopTracer),
        }
    }

    pub fn with_tracer(mut self, tracer: Arc<dyn MoveTracer>) -> Self {
        self.tracer = tracer;
        self
    }

    pub fn spec(&self) -> &MovementSpec {
        &self.spec
    }

    pub fn compute_moves(&self, origin: Square, obstacles: &[Square]) -> Result<Vec<Square>> {
        compute_moves_traced(&self.spec, origin, obstacles, self.tracer.as_ref())
    }

    pub fn compute_rays(&self, origin: Square, obstacles: &[Square]) -> Result<Vec<Ray>> {
        compute_rays_traced(&self.spec, origin, obstacles, self.tracer.as_ref())
    }
}

impl std::fmt::Debug for MovementPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovementPattern").field("spec", &self.spec).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{RecordingTracer, TraceEvent};

    fn sq(x: i8, y: i8) -> Square {
        Square::new(x, y).unwrap()
    }

    fn diagonal_slider() -> MovementSpec {
        MovementSpec::new(Direction::DIAGONALS, DistancePolicy::ToBoundary).unwrap()
    }

    #[test]
    fn test_unblocked_diagonal_slider() {
        let moves = compute_moves(&diagonal_slider(), sq(2, 0), &[]).unwrap();
        assert_eq!(
            moves,
            vec![sq(3, 1), sq(4, 2), sq(5, 3), sq(6, 4), sq(7, 5), sq(1, 1), sq(0, 2)]
        );
    }

    #[test]
    fn test_single_obstacle_blocks_ray() {
        let moves = compute_moves(&diagonal_slider(), sq(2, 0), &[sq(3, 1)]).unwrap();
        assert_eq!(moves, vec![sq(1, 1), sq(0, 2)]);
    }

    #[test]
    fn test_closest_of_many_obstacles() {
        let moves = compute_moves(&diagonal_slider(), sq(2, 0), &[sq(4, 2), sq(3, 1)]).unwrap();
        assert_eq!(moves, vec![sq(1, 1), sq(0, 2)]);
    }

    #[test]
    fn test_fixed_single_step_restricted_directions() {
        let spec = MovementSpec::new([Direction::UpRight, Direction::UpLeft], DistancePolicy::Fixed(1)).unwrap();
        let moves = compute_moves(&spec, sq(1, 0), &[sq(5, 5), sq(1, 1)]).unwrap();
        assert_eq!(moves, vec![sq(2, 1), sq(0, 1)]);
    }

    #[test]
    fn test_edge_square_yields_empty_ray() {
        let spec = MovementSpec::new([Direction::UpRight], DistancePolicy::ToBoundary).unwrap();
        assert!(compute_moves(&spec, sq(7, 7), &[]).unwrap().is_empty());
    }

    #[test]
    fn test_orthogonal_blocking() {
        let rook = MovementSpec::new(Direction::ORTHOGONALS, DistancePolicy::ToBoundary).unwrap();
        let rays = compute_rays_traced(&rook, sq(3, 3), &[sq(3, 6), sq(3, 5), sq(1, 3)], &NoopTracer).unwrap();
        let by_direction = |d: Direction| rays.iter().find(|r| r.direction == d).unwrap().squares.clone();
        assert_eq!(by_direction(Direction::Up), vec![sq(3, 4)]);
        assert_eq!(by_direction(Direction::Down), vec![sq(3, 2), sq(3, 1), sq(3, 0)]);
        assert_eq!(by_direction(Direction::Left), vec![sq(2, 3)]);
        assert_eq!(by_direction(Direction::Right), vec![sq(4, 3), sq(5, 3), sq(6, 3), sq(7, 3)]);
    }

    #[test]
    fn test_fixed_policy_is_clamped_at_edge() {
        let push = MovementSpec::new([Direction::Up], DistancePolicy::Fixed(2)).unwrap();
        assert_eq!(compute_moves(&push, sq(4, 1), &[]).unwrap(), vec![sq(4, 2), sq(4, 3)]);
        assert_eq!(compute_moves(&push, sq(4, 6), &[]).unwrap(), vec![sq(4, 7)]);
        assert!(compute_moves(&push, sq(4, 7), &[]).unwrap().is_empty());
    }

    #[test]
    fn test_l_shaped_ignores_obstacles() {
        let knight = MovementSpec::new(Direction::L_SHAPED, DistancePolicy::Fixed(1)).unwrap();
        let surrounded: Vec<Square> = Direction::PRINCIPAL
            .iter()
            .map(|&d| moves::displace(sq(1, 0), d, 1))
            .filter_map(|r| r.ok())
            .collect();
        let mut moves = compute_moves(&knight, sq(1, 0), &surrounded).unwrap();
        moves.sort();
        assert_eq!(moves, vec![sq(0, 2), sq(2, 2), sq(3, 1)]);
    }

    #[test]
    fn test_spec_deduplicates_directions() {
        let spec = MovementSpec::new(
            [Direction::Up, Direction::Left, Direction::Up],
            DistancePolicy::ToBoundary,
        )
        .unwrap();
        assert_eq!(spec.directions(), &[Direction::Up, Direction::Left]);
    }

    #[test]
    fn test_spec_rejects_fixed_zero() {
        assert_eq!(
            MovementSpec::new([Direction::Up], DistancePolicy::Fixed(0)),
            Err(MovementError::InvalidPolicy { policy: DistancePolicy::Fixed(0) })
        );
    }

    #[test]
    fn test_pattern_reports_to_injected_tracer() {
        let tracer = Arc::new(RecordingTracer::new());
        let pattern = MovementPattern::new(diagonal_slider()).with_tracer(tracer.clone());
        let moves = pattern.compute_moves(sq(2, 0), &[sq(4, 2)]).unwrap();
        assert_eq!(moves, vec![sq(3, 1), sq(1, 1), sq(0, 2)]);

        let events = tracer.events();
        assert!(events.contains(&TraceEvent::ClosestObstacle {
            direction: Direction::UpRight,
            obstacle: sq(4, 2),
        }));
        let generated = events
            .iter()
            .filter(|e| matches!(e, TraceEvent::RayGenerated { .. }))
            .count();
        // DOWN_RIGHT e DOWN_LEFT têm raio vazio e não chegam a ser gerados.
        assert_eq!(generated, 2);
    }
}

// Ficheiro: src/diagnostics.rs
// Descrição: Canal de diagnóstico opcional, injetado no padrão de movimento.
// Nenhum resultado depende dele.

use std::sync::Mutex;

use crate::types::{Direction, Square};

/// Recebe eventos do cálculo de lances. Todos os métodos são opcionais.
pub trait MoveTracer: Send + Sync {
    fn ray_generated(&self, _origin: Square, _direction: Direction, _ray: &[Square]) {}

    fn closest_obstacle(&self, _direction: Direction, _obstacle: Square) {}

    fn ray_truncated(&self, _direction: Direction, _kept: usize, _dropped: usize) {}
}

/// Não faz nada. É o canal por omissão.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracer;

impl MoveTracer for NoopTracer {}

/// Escreve os eventos no stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutTracer;

impl MoveTracer for StdoutTracer {
    fn ray_generated(&self, origin: Square, direction: Direction, ray: &[Square]) {
        println!("Raio {} a partir de {}: {} casas", direction, origin, ray.len());
    }

    fn closest_obstacle(&self, direction: Direction, obstacle: Square) {
        println!("Obstáculo mais próximo na direção {}: {}", direction, obstacle);
    }

    fn ray_truncated(&self, direction: Direction, kept: usize, dropped: usize) {
        println!("Raio {} truncado: {} mantidas, {} removidas", direction, kept, dropped);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    RayGenerated {
        origin: Square,
        direction: Direction,
        ray: Vec<Square>,
    },
    ClosestObstacle {
        direction: Direction,
        obstacle: Square,
    },
    RayTruncated {
        direction: Direction,
        kept: usize,
        dropped: usize,
    },
}

/// Guarda os eventos em memória (útil em testes e ferramentas de depuração).
#[derive(Debug, Default)]
pub struct RecordingTracer {
    events: Mutex<Vec<TraceEvent>>,
}

impl RecordingTracer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TraceEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }

    fn record(&self, event: TraceEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl MoveTracer for RecordingTracer {
    fn ray_generated(&self, origin: Square, direction: Direction, ray: &[Square]) {
        self.record(TraceEvent::RayGenerated {
            origin,
            direction,
            ray: ray.to_vec(),
        });
    }

    fn closest_obstacle(&self, direction: Direction, obstacle: Square) {
        self.record(TraceEvent::ClosestObstacle { direction, obstacle });
    }

    fn ray_truncated(&self, direction: Direction, kept: usize, dropped: usize) {
        self.record(TraceEvent::RayTruncated {
            direction,
            kept,
            dropped,
        });
    }
}

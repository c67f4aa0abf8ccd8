use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::aircraft::PhaseTransition;

/// Raised whenever an aircraft's flight phase changes.
///
/// Landed and crashed transitions are the hook for anything that persists results.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PhaseChangeEvent {
    pub entity: Entity,
    pub transition: PhaseTransition,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResetKind {
    /// Parked at the runway centre
    #[default]
    Standard,
    /// On final approach to the runway
    PracticeLanding,
}

/// Asks for aircraft to be re-initialised. `entity: None` resets every aircraft.
#[derive(Event, Debug, Clone, Copy, Default, PartialEq)]
pub struct ResetRequestEvent {
    pub entity: Option<Entity>,
    pub kind: ResetKind,
}

impl ResetRequestEvent {
    pub fn all(kind: ResetKind) -> Self {
        Self { entity: None, kind }
    }
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PickupEvent {
    pub entity: Entity,
    pub points: u32,
    pub position: Vector3<f64>,
}

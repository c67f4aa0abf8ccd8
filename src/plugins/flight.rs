use bevy::prelude::*;

use crate::{
    components::aircraft::{ControlInput, FlightModel},
    plugins::{PhaseChangeEvent, PickupEvent, ResetRequestEvent},
    resources::{CollectibleField, Score, SimulationConfig, WorldGeometry},
    systems::{
        collectible_pickup_system, flight_step_system, obstacle_collision_system,
        reset_request_system, sync_transform_system,
    },
    utils::{to_render_transform, Result, RngManager},
};

/// Ordering of the per-frame flight work.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Reset,
    Physics,
    Collision,
    Pickup,
    Sync,
}

/// Runs one player aircraft through the world on `Update`.
pub struct FlightPlugin {
    config: SimulationConfig,
    world: WorldGeometry,
}

impl FlightPlugin {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            world: WorldGeometry::airport(),
        }
    }

    /// Like [`FlightPlugin::new`], but rejects a config that fails validation.
    pub fn try_new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn with_world(mut self, world: WorldGeometry) -> Self {
        self.world = world;
        self
    }

    fn spawn_aircraft(mut commands: Commands, config: Res<SimulationConfig>) {
        let model = FlightModel::new(config.flight.clone());
        let transform = to_render_transform(model.position(), model.orientation());
        info!("Spawning aircraft at {:?}", model.position());

        commands.spawn((
            model,
            ControlInput::default(),
            transform,
            Name::new("Aircraft"),
        ));
    }

    fn spawn_collectibles(
        mut commands: Commands,
        config: Res<SimulationConfig>,
        rngs: Res<RngManager>,
    ) {
        let field = CollectibleField::seeded(&rngs, &config.collectibles, 0);
        info!("Placed {} collectibles", field.len());
        commands.insert_resource(field);
    }
}

impl Default for FlightPlugin {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        let config = match self.config.validate() {
            Ok(()) => self.config.clone(),
            Err(err) => {
                warn!("Invalid flight config ({}), using defaults", err);
                SimulationConfig::default()
            }
        };

        app.insert_resource(RngManager::new(config.seed))
            .insert_resource(config)
            .insert_resource(self.world.clone())
            .init_resource::<CollectibleField>()
            .init_resource::<Score>()
            .add_event::<PhaseChangeEvent>()
            .add_event::<ResetRequestEvent>()
            .add_event::<PickupEvent>()
            .configure_sets(
                Update,
                (
                    FlightSet::Reset,
                    FlightSet::Physics,
                    FlightSet::Collision,
                    FlightSet::Pickup,
                    FlightSet::Sync,
                )
                    .chain(),
            )
            .add_systems(Startup, (Self::spawn_aircraft, Self::spawn_collectibles))
            .add_systems(
                Update,
                (
                    reset_request_system.in_set(FlightSet::Reset),
                    flight_step_system.in_set(FlightSet::Physics),
                    obstacle_collision_system.in_set(FlightSet::Collision),
                    collectible_pickup_system.in_set(FlightSet::Pickup),
                    sync_transform_system.in_set(FlightSet::Sync),
                ),
            );
    }
}

use bevy::prelude::*;
use aerobat::{
    components::{
        AircraftState, Collectible, ControlInput, FlightConfig, FlightModel, Obstacle,
        TerrainSampler,
    },
    plugins::{FlightPlugin, PhaseChangeEvent, PickupEvent, ResetKind, ResetRequestEvent},
    resources::{CollectibleField, SimulationConfig, WorldGeometry},
};

/// Every phase change seen since the app was built.
#[derive(Resource, Debug, Default)]
pub struct PhaseLog(pub Vec<PhaseChangeEvent>);

#[derive(Resource, Debug, Default)]
pub struct PickupLog(pub Vec<PickupEvent>);

fn record_phase_changes(mut events: EventReader<PhaseChangeEvent>, mut log: ResMut<PhaseLog>) {
    log.0.extend(events.read().copied());
}

fn record_pickups(mut events: EventReader<PickupEvent>, mut log: ResMut<PickupLog>) {
    log.0.extend(events.read().copied());
}

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    config: SimulationConfig,
    world: WorldGeometry,
    collectibles: Option<Vec<Collectible>>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
            world: WorldGeometry::airport(),
            collectibles: None,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_flight(mut self, flight: FlightConfig) -> Self {
        self.config.flight = flight;
        self
    }

    pub fn with_terrain<T>(mut self, terrain: T) -> Self
    where
        T: TerrainSampler + Send + Sync + 'static,
    {
        self.world = self.world.with_terrain(terrain);
        self
    }

    pub fn with_obstacles(mut self, obstacles: Vec<Obstacle>) -> Self {
        self.world.obstacles = obstacles;
        self
    }

    pub fn with_collectibles(mut self, items: Vec<Collectible>) -> Self {
        self.collectibles = Some(items);
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .add_plugins(FlightPlugin::new(self.config).with_world(self.world))
            .init_resource::<PhaseLog>()
            .init_resource::<PickupLog>()
            .add_systems(Last, (record_phase_changes, record_pickups));

        // Run an initial update to spawn the aircraft
        app.update();

        if let Some(items) = self.collectibles {
            app.insert_resource(CollectibleField::from_items(items));
        }

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    /// Runs until `done` holds for the aircraft, up to `max_steps` frames.
    pub fn run_until<F>(&mut self, max_steps: usize, mut done: F) -> bool
    where
        F: FnMut(&FlightModel) -> bool,
    {
        for _ in 0..max_steps {
            self.app.update();
            if self.aircraft().is_some_and(&mut done) {
                return true;
            }
        }
        false
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn get_state_mut<T: Resource>(&mut self) -> Option<Mut<T>> {
        self.app.world_mut().get_resource_mut::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    pub fn aircraft(&mut self) -> Option<&FlightModel> {
        self.query_single::<FlightModel>()
    }

    pub fn aircraft_entity(&mut self) -> Option<Entity> {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<Entity, With<FlightModel>>();
        query.get_single(world).ok()
    }

    /// Replaces the aircraft's state, keeping its configuration.
    pub fn place_aircraft(&mut self, state: AircraftState) {
        if let Some(mut model) = self.query_single_mut::<FlightModel>() {
            let config = model.config().clone();
            *model = FlightModel::with_state(config, state);
        }
    }

    pub fn set_controls(&mut self, input: ControlInput) {
        if let Some(mut controls) = self.query_single_mut::<ControlInput>() {
            *controls = input;
        }
    }

    pub fn request_reset(&mut self, kind: ResetKind) {
        self.app
            .world_mut()
            .send_event(ResetRequestEvent::all(kind));
    }

    pub fn phase_log(&self) -> &[PhaseChangeEvent] {
        self.get_state::<PhaseLog>()
            .map(|log| log.0.as_slice())
            .unwrap_or_default()
    }

    pub fn pickups(&self) -> &[PickupEvent] {
        self.get_state::<PickupLog>()
            .map(|log| log.0.as_slice())
            .unwrap_or_default()
    }
}

use bevy::prelude::*;

use crate::{
    components::aircraft::{ControlInput, FlightModel},
    plugins::PhaseChangeEvent,
    resources::{SimulationConfig, WorldGeometry},
};

/// Advances every active aircraft by one frame.
pub fn flight_step_system(
    mut query: Query<(Entity, &mut FlightModel, &ControlInput)>,
    world: Res<WorldGeometry>,
    config: Res<SimulationConfig>,
    time: Res<Time>,
    mut phase_events: EventWriter<PhaseChangeEvent>,
) {
    let dt = config.step_length(time.delta_secs_f64());

    for (entity, mut model, input) in query.iter_mut() {
        if model.phase().is_terminal() {
            continue;
        }

        let outcome = model.step(dt, input, &world.terrain);
        debug!(
            "Aircraft {:?}: pos {:?}, speed {:.1}, phase {}",
            entity, outcome.position, outcome.speed, outcome.phase
        );

        for transition in outcome.transitions {
            phase_events.send(PhaseChangeEvent { entity, transition });
        }
    }
}

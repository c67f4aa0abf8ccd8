use bevy::prelude::*;

use crate::{
    components::aircraft::FlightModel, plugins::PhaseChangeEvent, resources::WorldGeometry,
};

pub fn obstacle_collision_system(
    mut query: Query<(Entity, &mut FlightModel)>,
    world: Res<WorldGeometry>,
    mut phase_events: EventWriter<PhaseChangeEvent>,
) {
    if world.obstacles.is_empty() {
        return;
    }

    for (entity, mut model) in query.iter_mut() {
        if model.phase().is_terminal() {
            continue;
        }
        // A miss leaves the model untouched, so only a hit marks it changed
        let hit = model
            .bypass_change_detection()
            .resolve_collisions(&world.obstacles);
        if let Some(transition) = hit {
            model.set_changed();
            warn!("Aircraft {:?} hit an obstacle at {:?}", entity, model.position());
            phase_events.send(PhaseChangeEvent { entity, transition });
        }
    }
}

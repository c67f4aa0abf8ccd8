use bevy::prelude::*;

use crate::{
    components::aircraft::FlightModel,
    plugins::PickupEvent,
    resources::{CollectibleField, Score, SimulationConfig},
};

pub fn collectible_pickup_system(
    query: Query<(Entity, &FlightModel)>,
    mut field: ResMut<CollectibleField>,
    mut score: ResMut<Score>,
    config: Res<SimulationConfig>,
    mut pickups: EventWriter<PickupEvent>,
) {
    if field.is_empty() {
        return;
    }

    for (entity, model) in query.iter() {
        if model.phase().is_terminal() {
            continue;
        }

        for item in field.collect(model.position(), config.collectibles.pickup_radius) {
            score.add(item.points);
            info!("Collected {} points, total {}", item.points, score.points);
            pickups.send(PickupEvent {
                entity,
                points: item.points,
                position: item.position,
            });
        }
    }
}

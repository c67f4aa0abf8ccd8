use bevy::prelude::*;

use crate::{
    components::aircraft::{ControlInput, FlightModel},
    plugins::{PhaseChangeEvent, ResetKind, ResetRequestEvent},
    resources::{CollectibleField, Score, SimulationConfig},
    utils::RngManager,
};

/// Re-initialises aircraft on request and lays out a fresh set of collectibles.
pub fn reset_request_system(
    mut requests: EventReader<ResetRequestEvent>,
    mut query: Query<(Entity, &mut FlightModel, &mut ControlInput)>,
    mut field: ResMut<CollectibleField>,
    mut score: ResMut<Score>,
    config: Res<SimulationConfig>,
    rngs: Res<RngManager>,
    mut generation: Local<u64>,
    mut phase_events: EventWriter<PhaseChangeEvent>,
) {
    for request in requests.read() {
        for (entity, mut model, mut input) in query.iter_mut() {
            if request.entity.is_some_and(|target| target != entity) {
                continue;
            }

            let transition = match request.kind {
                ResetKind::Standard => model.reset(),
                ResetKind::PracticeLanding => model.setup_practice_landing(),
            };
            *input = ControlInput::default();

            if let Some(transition) = transition {
                phase_events.send(PhaseChangeEvent { entity, transition });
            }
        }

        *generation += 1;
        *field = CollectibleField::seeded(&rngs, &config.collectibles, *generation);
        *score = Score::default();
        info!(
            "Reset ({:?}): {} collectibles placed",
            request.kind,
            field.len()
        );
    }
}

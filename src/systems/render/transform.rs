use bevy::prelude::*;

use crate::{components::aircraft::FlightModel, utils::to_render_transform};

/// Mirrors the simulated pose onto the render transform.
pub fn sync_transform_system(
    mut query: Query<(&FlightModel, &mut Transform), Changed<FlightModel>>,
) {
    for (model, mut transform) in query.iter_mut() {
        let pose = to_render_transform(model.position(), model.orientation());
        transform.translation = pose.translation;
        transform.rotation = pose.rotation;
    }
}

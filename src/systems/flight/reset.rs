use bevy::prelude::*;

use crate::components::{GliderConfig, GliderState, ResetRequest};

/// Puts gliders back at their spawn state on request.
pub fn glider_reset_system(
    mut requests: EventReader<ResetRequest>,
    mut query: Query<(Entity, &mut GliderState, &GliderConfig)>,
) {
    for request in requests.read() {
        for (entity, mut state, config) in query.iter_mut() {
            if request.entity.is_some_and(|target| target != entity) {
                continue;
            }
            state.reset(config);
            info!("{} reset to spawn", config.name);
        }
    }
}

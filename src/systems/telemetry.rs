use bevy::prelude::*;

use crate::components::{GliderState, GliderTelemetry};

/// Refreshes each glider's readout from its state.
pub fn telemetry_system(
    mut query: Query<(&GliderState, &mut GliderTelemetry), Changed<GliderState>>,
) {
    for (state, mut telemetry) in query.iter_mut() {
        *telemetry = GliderTelemetry::from_state(state);
    }
}

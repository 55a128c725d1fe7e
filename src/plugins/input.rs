use bevy::prelude::*;

use crate::{
    plugins::GliderSet,
    resources::{InputAxes, InputConfig, PointerDrag},
    systems::{apply_input_system, pilot_input_system, pointer_drag_system},
};

/// Keyboard, mouse and touch piloting for the player's glider.
#[derive(Default)]
pub struct PilotInputPlugin {
    config: InputConfig,
}

impl PilotInputPlugin {
    pub fn new(config: InputConfig) -> Self {
        Self { config }
    }
}

impl Plugin for PilotInputPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .init_resource::<InputAxes>()
            .init_resource::<PointerDrag>()
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<ButtonInput<MouseButton>>()
            .add_systems(
                Update,
                (pointer_drag_system, pilot_input_system, apply_input_system)
                    .chain()
                    .in_set(GliderSet::Input),
            );
    }
}

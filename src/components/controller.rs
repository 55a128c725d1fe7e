use bevy::prelude::*;

/// Marks the glider that local keyboard and pointer input is routed to.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerController {
    /// Inactive controllers leave the glider's controls alone.
    pub active: bool,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self { active: true }
    }
}

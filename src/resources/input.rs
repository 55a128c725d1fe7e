use bevy::prelude::*;

/// Resolved pilot input for the current tick.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct InputAxes {
    pub pitch: f64,
    pub roll: f64,
}

/// An in-progress mouse or touch drag, in screen pixels.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerDrag {
    pub active: Option<DragSpan>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSpan {
    pub origin: Vec2,
    pub current: Vec2,
}

impl DragSpan {
    pub fn displacement(&self) -> Vec2 {
        self.current - self.origin
    }
}

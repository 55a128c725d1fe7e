use bevy::{prelude::*, window::PrimaryWindow};

use crate::{
    components::{GliderControls, PlayerController, ResetRequest},
    resources::{DragSpan, InputAxes, InputConfig, PointerDrag},
};

/// Moves `current` one step toward the held direction, or decays it when neither
/// (or both) directions are held.
pub fn ramp_axis(current: f64, positive: bool, negative: bool, config: &InputConfig) -> f64 {
    match (positive, negative) {
        (true, false) => (current + config.key_step).min(1.0),
        (false, true) => (current - config.key_step).max(-1.0),
        _ => current * config.decay,
    }
}

/// Maps a drag displacement in screen pixels to `(pitch, roll)`.
///
/// Dragging down pulls the nose up, dragging right banks right. Full deflection is
/// reached at `pointer_window` pixels.
pub fn drag_axes(displacement: Vec2, config: &InputConfig) -> (f64, f64) {
    let window = config.pointer_window;
    let pitch = (displacement.y as f64 / window).clamp(-1.0, 1.0);
    let roll = (displacement.x as f64 / window).clamp(-1.0, 1.0);
    (pitch, roll)
}

/// Resolves keyboard state and any active drag into [`InputAxes`].
pub fn resolve_axes(
    current: InputAxes,
    keys: &ButtonInput<KeyCode>,
    drag: &PointerDrag,
    config: &InputConfig,
) -> InputAxes {
    if let Some(span) = drag.active {
        let (pitch, roll) = drag_axes(span.displacement(), config);
        return InputAxes { pitch, roll };
    }

    let nose_up = keys.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]);
    let nose_down = keys.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]);
    let bank_right = keys.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]);
    let bank_left = keys.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]);

    InputAxes {
        pitch: ramp_axis(current.pitch, nose_up, nose_down, config),
        roll: ramp_axis(current.roll, bank_right, bank_left, config),
    }
}

/// Tracks the primary mouse button or first touch as a drag gesture.
pub fn pointer_drag_system(
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Option<Res<Touches>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut drag: ResMut<PointerDrag>,
) {
    if let Some(touch) = touches.as_ref().and_then(|t| t.iter().next()) {
        drag.active = Some(DragSpan {
            origin: touch.start_position(),
            current: touch.position(),
        });
        return;
    }

    let cursor = windows.get_single().ok().and_then(Window::cursor_position);
    drag.active = match (mouse.pressed(MouseButton::Left), cursor, drag.active) {
        (true, Some(position), Some(span)) => Some(DragSpan {
            current: position,
            ..span
        }),
        (true, Some(position), None) if mouse.just_pressed(MouseButton::Left) => Some(DragSpan {
            origin: position,
            current: position,
        }),
        (true, None, span) => span,
        _ => None,
    };
}

/// Updates [`InputAxes`] from the keyboard and pointer once per tick.
pub fn pilot_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    drag: Res<PointerDrag>,
    config: Res<InputConfig>,
    mut axes: ResMut<InputAxes>,
    mut resets: EventWriter<ResetRequest>,
) {
    *axes = resolve_axes(*axes, &keys, &drag, &config);

    if keys.just_pressed(KeyCode::KeyR) {
        resets.send(ResetRequest { entity: None });
    }
}

/// Hands the resolved axes to the player's glider.
pub fn apply_input_system(
    axes: Res<InputAxes>,
    mut query: Query<(&mut GliderControls, &PlayerController)>,
) {
    for (mut controls, controller) in query.iter_mut() {
        if controller.active {
            controls.pitch = axes.pitch;
            controls.roll = axes.roll;
        }
    }
}

pub mod controller;
pub mod glider;

pub use controller::PlayerController;
pub use glider::{
    attitude_from_euler, normalize_angle, CrashEvent, FlightMode, GliderConfig, GliderControls,
    GliderState, GliderTelemetry, ResetRequest, MAX_PITCH, MAX_ROLL,
};

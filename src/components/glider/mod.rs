pub mod config;
pub mod controls;
pub mod events;
pub mod state;
pub mod telemetry;

pub use config::GliderConfig;
pub use controls::GliderControls;
pub use events::{CrashEvent, ResetRequest};
pub use state::{
    attitude_from_euler, normalize_angle, FlightMode, GliderState, MAX_PITCH, MAX_ROLL,
};
pub use telemetry::GliderTelemetry;

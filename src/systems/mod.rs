pub mod boundary;
pub mod flight;
pub mod input;
mod telemetry;

pub use boundary::{boundary_system, check_and_correct};
pub use flight::{glider_dynamics_system, glider_reset_system, step_glider, StepOutcome};
pub use input::{apply_input_system, pilot_input_system, pointer_drag_system};
pub use telemetry::telemetry_system;

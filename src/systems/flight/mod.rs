mod dynamics;
mod reset;

pub use dynamics::{glider_dynamics_system, step_glider, StepOutcome};
pub use reset::glider_reset_system;

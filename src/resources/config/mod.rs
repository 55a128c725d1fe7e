pub mod boundary;
pub mod input;
pub mod physics;
pub mod simulation;

pub use boundary::BoundaryConfig;
pub use input::InputConfig;
pub use physics::PhysicsConfig;
pub use simulation::SimulationConfig;

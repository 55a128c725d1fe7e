mod assertions;
mod fixtures;
mod test_app;

pub use assertions::{assert_glider_state_valid, assert_position_eq};
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};

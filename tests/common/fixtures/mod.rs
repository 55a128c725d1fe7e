mod glider;
mod terrain;

pub use glider::*;
pub use terrain::*;

//! Shooting module - shot resolver and trajectory animator.

mod components;
mod plugin;
mod systems;

pub use components::{Ball, BallFlight, FlightStep};
pub use plugin::ShootingPlugin;
pub use systems::ShootSet;

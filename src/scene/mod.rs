//! Static scene - pitch, goal frame, lights, starfield, and camera intro.

mod plugin;
mod systems;

pub use plugin::ScenePlugin;
pub use systems::CameraFlight;

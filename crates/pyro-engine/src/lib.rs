pub mod config;
pub mod core;
pub mod input;
pub mod render;
pub mod sim;

// Re-export key types at crate root for convenience
pub use config::{ShowConfig, ShowError};
pub use core::color::{jitter_hue, Hsla};
pub use core::rng::Rng;
pub use input::{InputEvent, InputQueue, PointerState};
pub use render::{NullSurface, Surface};
pub use sim::{burst_count, spawn_burst, Firework, Impact, Particle, ShowState, SpawnGovernor};

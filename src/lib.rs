pub mod config;
pub mod events;
pub mod input;
pub mod palette;
pub mod recording;
pub mod render;
pub mod tracking;

pub type Point2D = (f32, f32);

/// Identity of a touch contact, assigned by the input system and reused
/// once the contact has fully ended
pub type PointerId = u64;

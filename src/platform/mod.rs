//! Platform abstraction layer
//!
//! Handles the pieces the simulation never touches directly:
//! - Input polling (keyboard, pointer, window close)
//! - Tick pacing

pub mod input;
pub mod pacer;

pub use input::poll_input;
pub use pacer::FramePacer;

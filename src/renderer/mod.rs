//! macroquad rendering
//!
//! Draws one frame of a [`SimState`]; owns no state of its own.

pub mod scene;

pub use scene::draw_frame;

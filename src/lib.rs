//! Raycast-driven 2D platformer character controller.

pub mod content;
pub mod movement;

//! Gameplay core for a camera-controlled snake: fingertip trail, collision
//! rules, and the frame-driven session loop.

pub mod game;
pub mod runtime;
pub mod tracker;

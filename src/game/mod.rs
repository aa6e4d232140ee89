pub mod collision;
pub mod config;
pub mod constants;
pub mod food;
pub mod math;
pub mod render;
pub mod session;
pub mod trail;
pub mod types;

use super::config::GameConfig;
use super::math::within;
use super::trail::TrailManager;
use super::types::{Food, Point};

/// True when the live tip touches the trail beyond the grace window.
///
/// The `grace_nodes` nodes nearest the head are exempt: during a sharp turn
/// the tip passes close to nodes it just created, and without the exemption
/// every tight turn would read as a death. A trail no longer than the grace
/// window cannot self-collide at all.
pub fn self_collision(tip: Point, trail: &TrailManager, config: &GameConfig) -> bool {
    if trail.len() <= config.grace_nodes {
        return false;
    }
    trail
        .iter()
        .skip(config.grace_nodes)
        .any(|node| within(tip, node, config.snake_radius))
}

/// Food pickup. Strict `<`, so the exact threshold distance is a miss.
pub fn food_collision(tip: Point, food: &Food, config: &GameConfig) -> bool {
    within(tip, food.position(), config.collision_threshold)
}

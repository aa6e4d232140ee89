use serde::{Deserialize, Serialize};

use super::constants::{
    COLLISION_THRESHOLD, FOOD_RADIUS, GRACE_NODES, GROWTH_PER_FOOD, INITIAL_LENGTH,
    MIN_NODE_DISTANCE, SNAKE_RADIUS, SPAWN_PADDING,
};

/// Gameplay tuning. Observed builds of the game disagreed on the exact
/// values, so everything is configurable with one documented default set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Minimum fingertip travel (px) from the trail head before a node commits.
    pub min_node_distance: f64,
    /// Trail length at score zero.
    pub initial_length: usize,
    /// Extra trail nodes granted per food consumed.
    pub growth_per_food: usize,
    /// Leading nodes exempt from self-collision checks.
    pub grace_nodes: usize,
    /// Self-collision contact radius (px).
    pub snake_radius: f64,
    /// Food pickup radius (px).
    pub collision_threshold: f64,
    /// Inset (px) from the canvas edges when spawning food.
    pub spawn_padding: f64,
    /// Food disc radius (px), render only.
    pub food_radius: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_node_distance: MIN_NODE_DISTANCE,
            initial_length: INITIAL_LENGTH,
            growth_per_food: GROWTH_PER_FOOD,
            grace_nodes: GRACE_NODES,
            snake_radius: SNAKE_RADIUS,
            collision_threshold: COLLISION_THRESHOLD,
            spawn_padding: SPAWN_PADDING,
            food_radius: FOOD_RADIUS,
        }
    }
}

impl GameConfig {
    /// Length the trail is trimmed to at the given score.
    pub fn target_length(&self, score: u32) -> usize {
        self.initial_length + score as usize * self.growth_per_food
    }
}

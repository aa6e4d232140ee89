use rand::Rng;

use super::config::GameConfig;
use super::types::{CanvasSize, Food, FoodColor};

/// Spawns a food target uniformly within the padded canvas bounds, with a
/// color picked uniformly from the palette.
///
/// Precondition: both canvas dimensions exceed `2 * spawn_padding`. Callers
/// guarantee a positive play area; this is not a runtime error.
pub fn spawn_food(canvas: CanvasSize, config: &GameConfig) -> Food {
    debug_assert!(canvas.width > config.spawn_padding * 2.0);
    debug_assert!(canvas.height > config.spawn_padding * 2.0);

    let mut rng = rand::thread_rng();
    let x = rng.gen_range(config.spawn_padding..=canvas.width - config.spawn_padding);
    let y = rng.gen_range(config.spawn_padding..=canvas.height - config.spawn_padding);
    let color = FoodColor::ALL[rng.gen_range(0..FoodColor::ALL.len())];
    Food { x, y, color }
}

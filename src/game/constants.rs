/// Minimum fingertip travel (px) from the trail head before a node commits.
pub const MIN_NODE_DISTANCE: f64 = 10.0;
/// Trail length at score zero.
pub const INITIAL_LENGTH: usize = 10;
/// Extra trail nodes granted per food consumed.
pub const GROWTH_PER_FOOD: usize = 4;
/// Leading nodes exempt from self-collision checks.
pub const GRACE_NODES: usize = 12;
/// Self-collision contact radius (px). Strict on purpose.
pub const SNAKE_RADIUS: f64 = 16.0;
/// Food pickup radius (px). Larger than SNAKE_RADIUS so eating is forgiving.
pub const COLLISION_THRESHOLD: f64 = 30.0;
/// Inset (px) from the canvas edges when spawning food.
pub const SPAWN_PADDING: f64 = 60.0;
/// Food disc radius (px), render only.
pub const FOOD_RADIUS: f64 = 12.0;

pub const BACKGROUND_COLOR: &str = "#0b1020";
pub const SNAKE_COLOR: &str = "#20c997";
pub const EYE_COLOR: &str = "#102027";
pub const HIGHLIGHT_COLOR: &str = "#ffffff";

pub const HINT_TEXT: &str = "Show your hand to the camera";
pub const PAUSED_TEXT: &str = "Camera paused";

use std::collections::VecDeque;

use super::config::GameConfig;
use super::math::distance;
use super::types::Point;

/// Ordered history of committed fingertip positions, head first (index 0 is
/// the newest node). Exclusively owned and mutated here; the collision and
/// render paths only read it.
#[derive(Debug, Default)]
pub struct TrailManager {
    nodes: VecDeque<Point>,
}

impl TrailManager {
    pub fn new() -> Self {
        Self {
            nodes: VecDeque::new(),
        }
    }

    /// Clears the trail for a new game.
    pub fn reset(&mut self) {
        self.nodes.clear();
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn head(&self) -> Option<Point> {
        self.nodes.front().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().copied()
    }

    /// Advances the trail by one frame.
    ///
    /// An absent tip freezes the trail entirely: losing tracking never moves
    /// or shrinks the snake, it only halts growth. A present tip bootstraps
    /// an empty trail, and otherwise commits a new head only once it has
    /// moved more than `min_node_distance` from the current head, so a still
    /// hand never churns insert/trim cycles. Trimming runs only after an
    /// insertion, pacing it by actual head travel rather than elapsed frames.
    pub fn tick(&mut self, live_tip: Option<Point>, score: u32, config: &GameConfig) {
        let Some(tip) = live_tip else { return };

        let inserted = match self.nodes.front() {
            None => {
                self.nodes.push_front(tip);
                true
            }
            Some(head) if distance(tip, *head) > config.min_node_distance => {
                self.nodes.push_front(tip);
                true
            }
            Some(_) => false,
        };

        if inserted {
            let target = config.target_length(score);
            while self.nodes.len() > target {
                self.nodes.pop_back();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn point(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    fn trail_of(points: &[(f64, f64)]) -> TrailManager {
        let mut trail = TrailManager::new();
        trail.nodes = points.iter().map(|(x, y)| point(*x, *y)).collect();
        trail
    }

    #[test]
    fn first_tip_bootstraps_the_trail() {
        let config = GameConfig::default();
        let mut trail = TrailManager::new();
        trail.tick(Some(point(320.0, 240.0)), 0, &config);
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.head(), Some(point(320.0, 240.0)));
    }

    #[test]
    fn short_moves_are_gated() {
        let config = GameConfig::default();
        let mut trail = trail_of(&[(100.0, 100.0)]);
        trail.tick(Some(point(105.0, 100.0)), 0, &config);
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.head(), Some(point(100.0, 100.0)));
    }

    #[test]
    fn stationary_tip_is_idempotent() {
        let config = GameConfig::default();
        let mut trail = trail_of(&[(100.0, 100.0), (120.0, 100.0)]);
        for _ in 0..50 {
            trail.tick(Some(point(100.0, 100.0)), 0, &config);
        }
        assert_eq!(trail.len(), 2);
        assert_eq!(trail.head(), Some(point(100.0, 100.0)));
    }

    #[test]
    fn absent_tip_freezes_the_trail() {
        let config = GameConfig::default();
        let mut trail = trail_of(&[(100.0, 100.0), (120.0, 100.0), (140.0, 100.0)]);
        for _ in 0..10 {
            trail.tick(None, 0, &config);
        }
        assert_eq!(trail.len(), 3);
        assert_eq!(trail.head(), Some(point(100.0, 100.0)));
    }

    #[test]
    fn overlong_trail_trims_to_target_after_insertion() {
        let config = GameConfig::default();
        let nodes: Vec<(f64, f64)> = (0..15).map(|i| (100.0 + i as f64 * 20.0, 100.0)).collect();
        let mut trail = trail_of(&nodes);
        assert_eq!(trail.len(), 15);

        // Distant tip inserts a node, then the tail trims to target length.
        trail.tick(Some(point(60.0, 100.0)), 0, &config);
        assert_eq!(trail.len(), config.target_length(0));
        assert_eq!(trail.head(), Some(point(60.0, 100.0)));
    }

    #[test]
    fn oldest_nodes_are_the_ones_trimmed() {
        let config = GameConfig {
            initial_length: 3,
            ..GameConfig::default()
        };
        let mut trail = TrailManager::new();
        for i in 0..6 {
            trail.tick(Some(point(i as f64 * 20.0, 0.0)), 0, &config);
        }
        let xs: Vec<f64> = trail.iter().map(|node| node.x).collect();
        assert_eq!(xs, vec![100.0, 80.0, 60.0]);
    }

    #[test]
    fn length_never_exceeds_target_across_random_ticks() {
        let config = GameConfig::default();
        let mut rng = rand::thread_rng();
        let mut trail = TrailManager::new();
        let mut tip = point(500.0, 500.0);
        for step in 0..2000 {
            let score = (step / 200) as u32;
            let live = if rng.gen_bool(0.9) {
                tip.x += rng.gen_range(-30.0..30.0);
                tip.y += rng.gen_range(-30.0..30.0);
                Some(tip)
            } else {
                None
            };
            trail.tick(live, score, &config);
            assert!(trail.len() <= config.target_length(score));
        }
    }
}

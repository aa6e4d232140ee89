use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

use super::collision::{food_collision, self_collision};
use super::config::GameConfig;
use super::food::spawn_food;
use super::render::{compose_frame, compose_paused, DrawCommand};
use super::trail::TrailManager;
use super::types::{CanvasSize, Food, GamePhase, Point};
use crate::tracker::HandTracker;

/// Events surfaced to the host: the score observer, the phase observer, and
/// the haptic signal on self-collision.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ScoreChanged(u32),
    PhaseChanged(GamePhase),
    SelfCollision,
}

/// One game session: the per-frame state machine plus everything it owns
/// (trail, food, score, live tip). Hosts create one per play surface;
/// independent sessions share nothing.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    canvas: CanvasSize,
    phase: GamePhase,
    status: Option<String>,
    trail: TrailManager,
    food: Option<Food>,
    score: u32,
    live_tip: Option<Point>,
    last_timestamp: Option<f64>,
    events: UnboundedSender<GameEvent>,
}

impl GameSession {
    pub fn new(config: GameConfig, canvas: CanvasSize, events: UnboundedSender<GameEvent>) -> Self {
        Self {
            config,
            canvas,
            phase: GamePhase::Loading,
            status: None,
            trail: TrailManager::new(),
            food: None,
            score: 0,
            live_tip: None,
            last_timestamp: None,
            events,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Human-readable setup failure, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn trail(&self) -> &TrailManager {
        &self.trail
    }

    pub fn food(&self) -> Option<&Food> {
        self.food.as_ref()
    }

    /// Dimensions may change between games (camera resolution switch).
    /// Existing trail and food positions are intentionally not rescaled.
    pub fn set_canvas(&mut self, canvas: CanvasSize) {
        self.canvas = canvas;
    }

    /// `Loading -> Menu`, once the external tracker reports ready.
    pub fn tracker_ready(&mut self) {
        if self.phase == GamePhase::Loading && self.status.is_none() {
            self.set_phase(GamePhase::Menu);
        }
    }

    /// Terminal for the session: the loop keeps rendering the status text,
    /// but nothing leaves `Loading` again. No retry; the host must reload.
    pub fn tracker_failed(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("tracker init failed: {message}");
        self.status = Some(message);
    }

    /// Camera permission failure aborts the pending `Menu -> Playing`
    /// transition; the session stays in `Menu` with the status text.
    pub fn camera_denied(&mut self, message: impl Into<String>) {
        if self.phase == GamePhase::Menu {
            self.status = Some(message.into());
        }
    }

    /// Starts a round: `Menu -> Playing`, and the restart path from
    /// `Playing` and `GameOver`. Every entry resets trail and score and
    /// spawns a fresh food. Returns false from `Loading`.
    pub fn start(&mut self) -> bool {
        if self.phase == GamePhase::Loading {
            return false;
        }
        self.trail.reset();
        self.score = 0;
        self.status = None;
        self.live_tip = None;
        self.last_timestamp = None;
        self.food = Some(spawn_food(self.canvas, &self.config));
        let _ = self.events.send(GameEvent::ScoreChanged(0));
        self.set_phase(GamePhase::Playing);
        true
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            info!(from = ?self.phase, to = ?phase, "phase transition");
            self.phase = phase;
            let _ = self.events.send(GameEvent::PhaseChanged(phase));
        }
    }

    fn render(&self) -> Vec<DrawCommand> {
        compose_frame(
            self.phase,
            &self.trail,
            self.food.as_ref(),
            self.live_tip,
            self.canvas,
            &self.config,
        )
    }

    /// Runs one frame: exactly one call per rendering frame, run to
    /// completion, always returning the draw list for that frame.
    ///
    /// Outside `Playing` this only renders; in `GameOver` the scene stays
    /// frozen at the moment of collision. No per-tick condition can abort
    /// the loop: everything resolves to a transition or a no-op.
    pub fn tick(
        &mut self,
        tracker: &mut dyn HandTracker,
        timestamp: f64,
        paused: bool,
    ) -> Vec<DrawCommand> {
        if self.phase != GamePhase::Playing {
            return self.render();
        }
        if paused {
            return compose_paused(self.canvas);
        }

        // One detection per frame slot: a repeated timestamp keeps the
        // previous tip instead of re-running the detector.
        if self.last_timestamp != Some(timestamp) {
            self.last_timestamp = Some(timestamp);
            self.live_tip = tracker
                .detect(timestamp)
                .map(|tip| tip.to_canvas(self.canvas));
        }

        self.trail.tick(self.live_tip, self.score, &self.config);

        if let Some(tip) = self.live_tip {
            if self_collision(tip, &self.trail, &self.config) {
                debug!(score = self.score, "self collision");
                let _ = self.events.send(GameEvent::SelfCollision);
                self.set_phase(GamePhase::GameOver);
            } else if self
                .food
                .as_ref()
                .is_some_and(|food| food_collision(tip, food, &self.config))
            {
                self.score += 1;
                info!(score = self.score, "food consumed");
                let _ = self.events.send(GameEvent::ScoreChanged(self.score));
                self.food = Some(spawn_food(self.canvas, &self.config));
            }
        }

        self.render()
    }
}

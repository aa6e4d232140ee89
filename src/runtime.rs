use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::info;

use crate::game::config::GameConfig;
use crate::game::render::DrawCommand;
use crate::game::session::{GameEvent, GameSession};
use crate::game::types::CanvasSize;
use crate::tracker::HandTracker;

/// Host-provided "next frame" primitive. `None` means the host stopped
/// presenting frames and the loop must wind down.
#[async_trait]
pub trait FrameClock: Send {
    /// Waits for the next frame; returns its timestamp in milliseconds.
    async fn next_frame(&mut self) -> Option<f64>;
}

/// Fixed-rate clock for hosts without a vsync callback.
pub struct IntervalClock {
    interval: tokio::time::Interval,
    started: Instant,
}

impl IntervalClock {
    pub fn new(fps: u32) -> Self {
        let period = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        Self {
            interval: tokio::time::interval(period),
            started: Instant::now(),
        }
    }
}

#[async_trait]
impl FrameClock for IntervalClock {
    async fn next_frame(&mut self) -> Option<f64> {
        self.interval.tick().await;
        Some(self.started.elapsed().as_secs_f64() * 1000.0)
    }
}

/// Control actions the host pushes into the running loop. Drained at the top
/// of each frame, so they apply before that frame's tick.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlCommand {
    /// Start a round, or restart after game over.
    Start,
    /// External camera toggle.
    SetPaused(bool),
    /// Camera permission was denied while starting.
    CameraDenied(String),
    /// Camera resolution changed.
    SetCanvas(CanvasSize),
}

/// Cancels the frame loop from outside. Checked every frame, so a stopped
/// runtime never fires a tick after teardown.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Drives one `GameSession` at one tick per frame: initializes the tracker,
/// then runs ticks off the frame clock, forwarding draw lists to the render
/// side and game events to the host.
pub struct GameRuntime<C, T> {
    session: GameSession,
    tracker: T,
    clock: C,
    controls: UnboundedReceiver<ControlCommand>,
    frames: UnboundedSender<Vec<DrawCommand>>,
    stop: StopHandle,
    paused: bool,
}

impl<C: FrameClock, T: HandTracker> GameRuntime<C, T> {
    pub fn new(
        config: GameConfig,
        canvas: CanvasSize,
        tracker: T,
        clock: C,
        controls: UnboundedReceiver<ControlCommand>,
        events: UnboundedSender<GameEvent>,
        frames: UnboundedSender<Vec<DrawCommand>>,
    ) -> Self {
        Self {
            session: GameSession::new(config, canvas, events),
            tracker,
            clock,
            controls,
            frames,
            stop: StopHandle::default(),
            paused: false,
        }
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Runs until the host stops presenting frames, the stop handle fires,
    /// or the render side goes away. Tracker init failure leaves the session
    /// in `Loading` with its status text; the loop still renders it.
    pub async fn run(mut self) {
        match self.tracker.init().await {
            Ok(()) => self.session.tracker_ready(),
            Err(error) => self.session.tracker_failed(error.to_string()),
        }

        loop {
            if self.stop.is_stopped() {
                break;
            }
            let Some(timestamp) = self.clock.next_frame().await else {
                break;
            };
            if self.stop.is_stopped() {
                break;
            }
            self.drain_controls();
            let frame = self.session.tick(&mut self.tracker, timestamp, self.paused);
            if self.frames.send(frame).is_err() {
                break;
            }
        }
        info!("frame loop stopped");
    }

    fn drain_controls(&mut self) {
        loop {
            match self.controls.try_recv() {
                Ok(ControlCommand::Start) => {
                    self.session.start();
                }
                Ok(ControlCommand::SetPaused(paused)) => self.paused = paused,
                Ok(ControlCommand::CameraDenied(message)) => self.session.camera_denied(message),
                Ok(ControlCommand::SetCanvas(canvas)) => self.session.set_canvas(canvas),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::{NormalizedPoint, TrackerError};
    use tokio::sync::mpsc;

    struct ScriptedClock {
        timestamps: Vec<f64>,
        cursor: usize,
    }

    impl ScriptedClock {
        fn new(frames: usize) -> Self {
            Self {
                timestamps: (1..=frames).map(|i| i as f64 * 16.0).collect(),
                cursor: 0,
            }
        }
    }

    #[async_trait]
    impl FrameClock for ScriptedClock {
        async fn next_frame(&mut self) -> Option<f64> {
            let timestamp = self.timestamps.get(self.cursor).copied();
            self.cursor += 1;
            timestamp
        }
    }

    struct CenteredHand;

    #[async_trait]
    impl HandTracker for CenteredHand {
        async fn init(&mut self) -> Result<(), TrackerError> {
            Ok(())
        }

        fn detect(&mut self, _timestamp: f64) -> Option<NormalizedPoint> {
            Some(NormalizedPoint { x: 0.5, y: 0.5 })
        }
    }

    struct BrokenHand;

    #[async_trait]
    impl HandTracker for BrokenHand {
        async fn init(&mut self) -> Result<(), TrackerError> {
            Err(TrackerError::ModelLoad("missing model".into()))
        }

        fn detect(&mut self, _timestamp: f64) -> Option<NormalizedPoint> {
            None
        }
    }

    fn canvas() -> CanvasSize {
        CanvasSize {
            width: 640.0,
            height: 480.0,
        }
    }

    #[tokio::test]
    async fn runs_one_tick_per_frame_until_the_clock_ends() {
        let (controls_tx, controls_rx) = mpsc::unbounded_channel();
        let (events_tx, mut events_rx) = mpsc::unbounded_channel();
        let (frames_tx, mut frames_rx) = mpsc::unbounded_channel();

        let runtime = GameRuntime::new(
            GameConfig::default(),
            canvas(),
            CenteredHand,
            ScriptedClock::new(5),
            controls_rx,
            events_tx,
            frames_tx,
        );
        controls_tx.send(ControlCommand::Start).unwrap();
        runtime.run().await;

        let mut frames = 0;
        while frames_rx.try_recv().is_ok() {
            frames += 1;
        }
        assert_eq!(frames, 5);

        let mut saw_playing = false;
        while let Ok(event) = events_rx.try_recv() {
            if event == GameEvent::PhaseChanged(crate::game::types::GamePhase::Playing) {
                saw_playing = true;
            }
        }
        assert!(saw_playing);
    }

    #[tokio::test]
    async fn stop_handle_ends_the_loop_before_the_next_tick() {
        let (_controls_tx, controls_rx) = mpsc::unbounded_channel();
        let (events_tx, _events_rx) = mpsc::unbounded_channel();
        let (frames_tx, mut frames_rx) = mpsc::unbounded_channel();

        let runtime = GameRuntime::new(
            GameConfig::default(),
            canvas(),
            CenteredHand,
            ScriptedClock::new(1000),
            controls_rx,
            events_tx,
            frames_tx,
        );
        let stop = runtime.stop_handle();
        stop.stop();
        runtime.run().await;

        assert!(frames_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn closed_render_side_stops_the_loop() {
        let (_controls_tx, controls_rx) = mpsc::unbounded_channel();
        let (events_tx, _events_rx) = mpsc::unbounded_channel();
        let (frames_tx, frames_rx) = mpsc::unbounded_channel();
        drop(frames_rx);

        let runtime = GameRuntime::new(
            GameConfig::default(),
            canvas(),
            CenteredHand,
            ScriptedClock::new(1000),
            controls_rx,
            events_tx,
            frames_tx,
        );
        // Returns after the first undeliverable frame instead of spinning.
        runtime.run().await;
    }

    #[tokio::test]
    async fn tracker_init_failure_keeps_rendering_the_loading_state() {
        let (controls_tx, controls_rx) = mpsc::unbounded_channel();
        let (events_tx, mut events_rx) = mpsc::unbounded_channel();
        let (frames_tx, mut frames_rx) = mpsc::unbounded_channel();

        let runtime = GameRuntime::new(
            GameConfig::default(),
            canvas(),
            BrokenHand,
            ScriptedClock::new(3),
            controls_rx,
            events_tx,
            frames_tx,
        );
        // Start must be ignored: the session never leaves Loading.
        controls_tx.send(ControlCommand::Start).unwrap();
        runtime.run().await;

        let mut frames = 0;
        while frames_rx.try_recv().is_ok() {
            frames += 1;
        }
        assert_eq!(frames, 3);
        assert!(events_rx.try_recv().is_err());
    }
}

use std::f64::consts::PI;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use camsnake::game::config::GameConfig;
use camsnake::game::session::GameEvent;
use camsnake::game::types::CanvasSize;
use camsnake::runtime::{ControlCommand, GameRuntime, IntervalClock};
use camsnake::tracker::{HandTracker, NormalizedPoint, TrackerError};

/// Stand-in for the camera pipeline: a fingertip sweeping a slow circle
/// around the canvas center.
struct OrbitingHand {
  frame: u32,
}

#[async_trait]
impl HandTracker for OrbitingHand {
  async fn init(&mut self) -> Result<(), TrackerError> {
    Ok(())
  }

  fn detect(&mut self, _timestamp: f64) -> Option<NormalizedPoint> {
    self.frame += 1;
    let angle = self.frame as f64 * PI / 90.0;
    Some(NormalizedPoint {
      x: 0.5 + angle.cos() * 0.3,
      y: 0.5 + angle.sin() * 0.3,
    })
  }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let canvas = CanvasSize {
    width: 640.0,
    height: 480.0,
  };
  let (controls_tx, controls_rx) = mpsc::unbounded_channel();
  let (events_tx, mut events_rx) = mpsc::unbounded_channel();
  let (frames_tx, mut frames_rx) = mpsc::unbounded_channel();

  let runtime = GameRuntime::new(
    GameConfig::default(),
    canvas,
    OrbitingHand { frame: 0 },
    IntervalClock::new(30),
    controls_rx,
    events_tx,
    frames_tx,
  );
  let stop = runtime.stop_handle();
  controls_tx.send(ControlCommand::Start)?;

  let loop_task = tokio::spawn(runtime.run());

  let events_task = tokio::spawn(async move {
    while let Some(event) = events_rx.recv().await {
      match event {
        GameEvent::ScoreChanged(score) => tracing::info!(score, "score"),
        GameEvent::PhaseChanged(phase) => tracing::info!(?phase, "phase"),
        GameEvent::SelfCollision => tracing::info!("self collision"),
      }
    }
  });

  let frames_task = tokio::spawn(async move {
    let mut last = None;
    while let Some(frame) = frames_rx.recv().await {
      last = Some(frame);
    }
    last
  });

  tokio::time::sleep(Duration::from_secs(3)).await;
  stop.stop();
  loop_task.await?;
  drop(controls_tx);
  events_task.await?;

  if let Some(frame) = frames_task.await? {
    println!("{}", serde_json::to_string_pretty(&frame)?);
  }

  Ok(())
}

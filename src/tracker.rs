use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::types::{CanvasSize, Point};

/// Detector output in normalized coordinates, `[0, 1]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    /// Scales to pixel space using the current canvas dimensions.
    pub fn to_canvas(self, canvas: CanvasSize) -> Point {
        Point {
            x: self.x * canvas.width,
            y: self.y * canvas.height,
        }
    }
}

/// Setup failures are terminal for the session: they surface as status text
/// and the loop never progresses past `Loading`.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("hand model failed to load: {0}")]
    ModelLoad(String),
    #[error("camera unavailable: {0}")]
    CameraUnavailable(String),
}

/// External hand-landmark capability. `init` may be slow (model load and
/// camera negotiation); `detect` must be cheap, runs synchronously inside a
/// tick, and is called at most once per frame timestamp.
#[async_trait]
pub trait HandTracker: Send {
    async fn init(&mut self) -> Result<(), TrackerError>;

    /// Zero or one fingertip for the frame captured at `timestamp` (ms).
    /// Absence is normal (no hand in frame), never an error.
    fn detect(&mut self, timestamp: f64) -> Option<NormalizedPoint>;
}

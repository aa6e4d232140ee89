use serde::{Deserialize, Serialize};

/// 2-D coordinate in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
  pub width: f64,
  pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FoodColor {
  Coral,
  Amber,
  Mint,
  Sky,
  Rose,
  Violet,
}

impl FoodColor {
  pub const ALL: [FoodColor; 6] = [
    FoodColor::Coral,
    FoodColor::Amber,
    FoodColor::Mint,
    FoodColor::Sky,
    FoodColor::Rose,
    FoodColor::Violet,
  ];

  pub fn hex(self) -> &'static str {
    match self {
      FoodColor::Coral => "#ff6b6b",
      FoodColor::Amber => "#ffd166",
      FoodColor::Mint => "#06d6a0",
      FoodColor::Sky => "#4dabf7",
      FoodColor::Rose => "#f06595",
      FoodColor::Violet => "#845ef7",
    }
  }
}

/// The single food target. Exactly one exists while a round is being played;
/// it is replaced, never mutated, on consumption.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Food {
  pub x: f64,
  pub y: f64,
  pub color: FoodColor,
}

impl Food {
  pub fn position(&self) -> Point {
    Point { x: self.x, y: self.y }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
  Loading,
  Menu,
  Playing,
  GameOver,
}

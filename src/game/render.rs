use serde::Serialize;

use super::config::GameConfig;
use super::constants::{
    BACKGROUND_COLOR, EYE_COLOR, HIGHLIGHT_COLOR, HINT_TEXT, PAUSED_TEXT, SNAKE_COLOR,
};
use super::trail::TrailManager;
use super::types::{CanvasSize, Food, GamePhase, Point};

/// Primitives the drawing backend understands. Emitted in draw order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DrawCommand {
    Clear {
        width: f64,
        height: f64,
        color: &'static str,
    },
    Glow {
        center: Point,
        radius: f64,
        color: &'static str,
    },
    Disc {
        center: Point,
        radius: f64,
        color: &'static str,
    },
    Ring {
        center: Point,
        radius: f64,
        color: &'static str,
    },
    Stroke {
        points: Vec<Point>,
        width: f64,
        color: &'static str,
    },
    Text {
        center: Point,
        content: &'static str,
    },
}

fn clear(canvas: CanvasSize) -> DrawCommand {
    DrawCommand::Clear {
        width: canvas.width,
        height: canvas.height,
        color: BACKGROUND_COLOR,
    }
}

/// Translates the current scene into an ordered draw list. Pure: reads the
/// model, never mutates it.
///
/// The stroke runs through the live tip ahead of the committed head, so the
/// snake visually follows the finger even while node insertion is
/// distance-gated.
pub fn compose_frame(
    phase: GamePhase,
    trail: &TrailManager,
    food: Option<&Food>,
    live_tip: Option<Point>,
    canvas: CanvasSize,
    config: &GameConfig,
) -> Vec<DrawCommand> {
    let mut commands = vec![clear(canvas)];
    if !matches!(phase, GamePhase::Playing | GamePhase::GameOver) {
        return commands;
    }

    if let Some(food) = food {
        let center = food.position();
        commands.push(DrawCommand::Glow {
            center,
            radius: config.food_radius * 2.0,
            color: food.color.hex(),
        });
        commands.push(DrawCommand::Disc {
            center,
            radius: config.food_radius,
            color: food.color.hex(),
        });
        commands.push(DrawCommand::Ring {
            center,
            radius: config.food_radius + 3.0,
            color: HIGHLIGHT_COLOR,
        });
    }

    let mut points = Vec::with_capacity(trail.len() + 1);
    if let Some(tip) = live_tip {
        points.push(tip);
    }
    points.extend(trail.iter());
    if points.len() >= 2 {
        commands.push(DrawCommand::Stroke {
            points,
            width: config.snake_radius,
            color: SNAKE_COLOR,
        });
    }

    if let Some(head) = live_tip.or_else(|| trail.head()) {
        commands.push(DrawCommand::Disc {
            center: head,
            radius: config.snake_radius * 0.75,
            color: SNAKE_COLOR,
        });
        for side in [-1.0, 1.0] {
            commands.push(DrawCommand::Disc {
                center: Point {
                    x: head.x + side * config.snake_radius * 0.3,
                    y: head.y - config.snake_radius * 0.2,
                },
                radius: 2.5,
                color: EYE_COLOR,
            });
        }
    }

    if trail.is_empty() && phase == GamePhase::Playing {
        commands.push(DrawCommand::Text {
            center: Point {
                x: canvas.width / 2.0,
                y: canvas.height / 2.0,
            },
            content: HINT_TEXT,
        });
    }

    commands
}

/// Placeholder frame while the camera toggle is paused.
pub fn compose_paused(canvas: CanvasSize) -> Vec<DrawCommand> {
    vec![
        clear(canvas),
        DrawCommand::Text {
            center: Point {
                x: canvas.width / 2.0,
                y: canvas.height / 2.0,
            },
            content: PAUSED_TEXT,
        },
    ]
}

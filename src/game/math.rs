use super::types::Point;

pub fn distance(a: Point, b: Point) -> f64 {
  ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

pub fn within(a: Point, b: Point, radius: f64) -> bool {
  distance(a, b) < radius
}

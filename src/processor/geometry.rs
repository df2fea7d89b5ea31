//! Editor space (origin top-left, Y down) to world space (origin
//! bottom-left, Y up) conversions.

use nalgebra::Vector2;

use crate::error::{ConvertError, Result};
use crate::model::{PolyPoint, RenderOrder};
use crate::processor::value::Value;

/// One edge of a polyline in world space with its unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p1: Vector2<f64>,
    pub p2: Vector2<f64>,
    pub normal: Vector2<f64>,
}

impl Segment {
    pub fn to_value(&self) -> Value {
        Value::record([
            ("p1", to_vec2(self.p1)),
            ("p2", to_vec2(self.p2)),
            ("normal", to_vec2(self.normal)),
        ])
    }
}

pub fn to_vec2(v: Vector2<f64>) -> Value {
    Value::Vec2(v.x, v.y)
}

#[inline]
pub fn flip_y(level_h: f64, y: f64) -> f64 {
    level_h - y
}

/// `_level_w` is unused: only the Y axis changes direction.
pub fn point_to_world(_level_w: f64, level_h: f64, x: f64, y: f64) -> Vector2<f64> {
    Vector2::new(x, flip_y(level_h, y))
}

/// Rectangle top-left corner and size to its midpoint in world space.
pub fn rect_to_midpoint(
    order: RenderOrder,
    level_h: f64,
    w: f64,
    h: f64,
    x: f64,
    y: f64,
) -> Result<Vector2<f64>> {
    match order {
        RenderOrder::RightDown => Ok(Vector2::new(x + w / 2., level_h - y - h / 2.)),
        other => Err(ConvertError::UnsupportedRenderOrder(other)),
    }
}

/// Polyline points are relative to an origin already in world space, but
/// their Y still grows downwards.
pub fn polygon_point_to_world(origin: Vector2<f64>, rel_x: f64, rel_y: f64) -> Vector2<f64> {
    Vector2::new(origin.x + rel_x, origin.y - rel_y)
}

/// Split a polyline into consecutive segments: A-B-C becomes A-B and B-C.
///
/// The normal is the edge rotated 90° counter-clockwise, normalised.
/// Two coincident consecutive points have no normal and are rejected.
pub fn polyline_to_segments(points: &[PolyPoint], origin: Vector2<f64>) -> Result<Vec<Segment>> {
    points
        .windows(2)
        .enumerate()
        .map(|(index, pair)| -> Result<Segment> {
            let [a, b] = pair else { unreachable!() };
            let p1 = polygon_point_to_world(origin, a.x, a.y);
            let p2 = polygon_point_to_world(origin, b.x, b.y);

            let edge = p2 - p1;
            let normal = Vector2::new(-edge.y, edge.x)
                .try_normalize(0.0)
                .ok_or(ConvertError::DegenerateSegment {
                    index,
                    x: p1.x,
                    y: p1.y,
                })?;

            Ok(Segment { p1, p2, normal })
        })
        .collect()
}

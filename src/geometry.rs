//! Path geometry for the progress widget.
//!
//! Everything here is plain math on `glam` vectors so painters and tests can
//! share it. Angles are in radians, 0 at 3 o'clock, clockwise positive,
//! origin top-left with Y down. Arcs stay symbolic (`ArcSpec`) until paint
//! time; glyphs are ordered vertex lists joined by straight segments.

use glam::{Affine2, Vec2};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

/// Arrow glyph segment size as a fraction of the view width.
pub const ARROW_SIZE_RATIO: f32 = 0.12;
/// Stop square side as a fraction of the view width.
pub const STOP_SIZE_RATIO: f32 = 0.3;
/// Tick stroke unit as a fraction of the glyph radius.
pub const TICK_WIDTH_RATIO: f32 = 0.3;
/// Default line width as a fraction of the construction frame width.
pub const DEFAULT_LINE_WIDTH_RATIO: f32 = 0.025;

/// Sweep of the background ring while spinning. The missing 0.2π leaves the
/// gap that makes the rotation visible.
pub const SPIN_SWEEP: f32 = 1.8 * PI;

/// A circular arc: center, radius, start angle and signed sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpec {
    pub center: Vec2,
    pub radius: f32,
    pub start_angle: f32,
    pub sweep: f32,
}

impl ArcSpec {
    pub fn new(center: Vec2, radius: f32, start_angle: f32, sweep: f32) -> Self {
        Self {
            center,
            radius,
            start_angle,
            sweep,
        }
    }

    pub fn end_angle(&self) -> f32 {
        self.start_angle + self.sweep
    }

    /// Point on the arc at `angle`.
    pub fn point_at(&self, angle: f32) -> Vec2 {
        self.center + Vec2::new(angle.cos(), angle.sin()) * self.radius
    }

    /// Flattens the arc into a polyline. Segment count scales with the sweep
    /// (128 per full turn); a zero sweep yields a single point, which
    /// painters skip.
    pub fn flatten(&self) -> Vec<Vec2> {
        if self.sweep == 0.0 {
            return vec![self.point_at(self.start_angle)];
        }
        let segments = ((self.sweep.abs() / TAU) * 128.0).ceil().max(1.0) as usize;
        (0..=segments)
            .map(|i| {
                let angle = self.start_angle + self.sweep * (i as f32 / segments as f32);
                self.point_at(angle)
            })
            .collect()
    }
}

/// An ordered vertex list joined by straight segments.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub points: Vec<Vec2>,
    pub closed: bool,
}

impl Polygon {
    pub fn closed(points: Vec<Vec2>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    /// Applies an affine transform to every vertex.
    pub fn transform(mut self, affine: Affine2) -> Self {
        for point in &mut self.points {
            *point = affine.transform_point2(*point);
        }
        self
    }
}

/// A path a shape layer can carry: either a symbolic arc or a polygon.
/// Custom icon paths supplied by callers use the same type.
#[derive(Clone, Debug, PartialEq)]
pub enum VectorPath {
    Arc(ArcSpec),
    Polygon(Polygon),
}

impl VectorPath {
    /// The path as a polyline in layer-local coordinates.
    pub fn flatten(&self) -> Vec<Vec2> {
        match self {
            Self::Arc(arc) => arc.flatten(),
            Self::Polygon(polygon) => polygon.points.clone(),
        }
    }

    pub fn is_closed(&self) -> bool {
        match self {
            Self::Arc(_) => false,
            Self::Polygon(polygon) => polygon.closed,
        }
    }

    pub fn as_arc(&self) -> Option<&ArcSpec> {
        match self {
            Self::Arc(arc) => Some(arc),
            Self::Polygon(_) => None,
        }
    }
}

/// The background ring: starts at 12 o'clock and runs a full circle, or 90%
/// of one while spinning.
pub fn background_ring(width: f32, height: f32, line_width: f32, partial: bool) -> ArcSpec {
    let sweep = if partial { SPIN_SWEEP } else { TAU };
    ArcSpec::new(
        Vec2::new(width / 2.0, height / 2.0),
        (width - line_width) / 2.0,
        -FRAC_PI_2,
        sweep,
    )
}

/// The progress arc: starts at 12 o'clock and sweeps `progress` turns
/// clockwise. Negative progress sweeps the other way.
pub fn progress_arc(width: f32, height: f32, line_width: f32, progress: f32) -> ArcSpec {
    ArcSpec::new(
        Vec2::new(width / 2.0, height / 2.0),
        (width - line_width * 3.0) / 2.0,
        -FRAC_PI_2,
        progress * TAU,
    )
}

/// Checkmark silhouette, built in a local frame and moved into place:
///
/// ```text
/// A---F
/// |   |
/// |   E-------D
/// |           |
/// B-----------C
/// ```
///
/// (0,0) is top left; the shape is rotated -45° and translated so it sits in
/// the circle.
pub fn tick_glyph(width: f32, height: f32) -> Polygon {
    let radius = width.min(height) / 2.0;
    let tick_width = radius * TICK_WIDTH_RATIO;

    let outline = Polygon::closed(vec![
        Vec2::ZERO,
        Vec2::new(0.0, tick_width * 2.0),
        Vec2::new(tick_width * 3.0, tick_width * 2.0),
        Vec2::new(tick_width * 3.0, tick_width),
        Vec2::new(tick_width, tick_width),
        Vec2::new(tick_width, 0.0),
    ]);

    let place = Affine2::from_translation(Vec2::new(radius * 0.46, radius * 1.02))
        * Affine2::from_angle(-FRAC_PI_4);
    outline.transform(place)
}

/// Axis-aligned stop square, centered within the ring.
pub fn stop_glyph(width: f32) -> Polygon {
    let radius = width / 2.0;
    let side = width * STOP_SIZE_RATIO;

    let square = Polygon::closed(vec![
        Vec2::ZERO,
        Vec2::new(side, 0.0),
        Vec2::new(side, side),
        Vec2::new(0.0, side),
    ]);

    let offset = radius * (1.0 - STOP_SIZE_RATIO);
    square.transform(Affine2::from_translation(Vec2::new(offset, offset)))
}

/// Downward arrow silhouette, stroked only.
pub fn arrow_glyph(width: f32) -> Polygon {
    let radius = width / 2.0;
    let segment = width * ARROW_SIZE_RATIO;

    let outline = Polygon::closed(vec![
        Vec2::ZERO,
        Vec2::new(segment * 2.0, 0.0),
        Vec2::new(segment * 2.0, segment),
        Vec2::new(segment * 3.0, segment),
        Vec2::new(segment, segment * 3.3),
        Vec2::new(-segment, segment),
        Vec2::new(0.0, segment),
        Vec2::ZERO,
    ]);

    let offset = radius * (1.0 - ARROW_SIZE_RATIO);
    let place = Affine2::from_translation(Vec2::new(offset, offset))
        * Affine2::from_translation(Vec2::new(-segment / 2.0, -segment / 1.2));
    outline.transform(place)
}

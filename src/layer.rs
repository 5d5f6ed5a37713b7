//! Retained drawing state: a small record per shape, sampled at paint time.

use std::time::{Duration, Instant};

use glam::Vec2;
use gpui::Hsla;

use crate::geometry::VectorPath;

/// How stroked path ends are drawn. Carried per layer so painters that
/// support caps can honor it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// An indefinite rotation of a layer about its frame center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinAnimation {
    pub started: Instant,
    pub revolutions_per_sec: f32,
}

impl SpinAnimation {
    pub fn new(started: Instant, revolutions_per_sec: f32) -> Self {
        Self {
            started,
            revolutions_per_sec,
        }
    }

    /// Rotation angle in radians at `now`.
    pub fn angle_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        elapsed * self.revolutions_per_sec * std::f32::consts::TAU
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
}

impl Easing {
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
        }
    }
}

/// A timed interpolation of a layer's fill color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillTransition {
    pub from: Hsla,
    pub to: Hsla,
    pub started: Instant,
    pub duration: Duration,
    pub easing: Easing,
}

impl FillTransition {
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    /// The interpolated color at `now`, clamped to the endpoints.
    pub fn color_at(&self, now: Instant) -> Hsla {
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        let t = (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        let t = self.easing.apply(t);
        Hsla {
            h: lerp(self.from.h, self.to.h, t),
            s: lerp(self.from.s, self.to.s, t),
            l: lerp(self.from.l, self.to.l, t),
            a: lerp(self.from.a, self.to.a, t),
        }
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// A retained shape: path plus paint attributes, with optional animations.
/// Layers hold no handles to the windowing system; the painter samples them
/// every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeLayer {
    pub path: Option<VectorPath>,
    pub stroke_color: Option<Hsla>,
    pub fill_color: Option<Hsla>,
    pub line_width: f32,
    pub line_cap: LineCap,
    /// Extent of the layer in view-local points, set on every draw. The spin
    /// animation rotates about the center of this extent.
    pub frame: Vec2,
    pub spin: Option<SpinAnimation>,
    pub fill_transition: Option<FillTransition>,
}

impl Default for ShapeLayer {
    fn default() -> Self {
        Self {
            path: None,
            stroke_color: None,
            fill_color: None,
            line_width: 1.0,
            line_cap: LineCap::default(),
            frame: Vec2::ZERO,
            spin: None,
            fill_transition: None,
        }
    }
}

impl ShapeLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fill to paint at `now`, with any running transition applied.
    pub fn fill_color_at(&self, now: Instant) -> Option<Hsla> {
        match self.fill_transition {
            Some(transition) => Some(transition.color_at(now)),
            None => self.fill_color,
        }
    }

    /// Rotation about the frame center at `now`, in radians.
    pub fn rotation_at(&self, now: Instant) -> f32 {
        self.spin.map_or(0.0, |spin| spin.angle_at(now))
    }

    /// Whether this layer needs repainting on the next frame regardless of
    /// property changes.
    pub fn is_animating(&self, now: Instant) -> bool {
        if self.spin.is_some() {
            return true;
        }
        self.fill_transition
            .is_some_and(|transition| !transition.is_finished(now))
    }

    pub fn remove_all_animations(&mut self) {
        self.spin = None;
        self.fill_transition = None;
    }
}

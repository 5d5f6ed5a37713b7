use std::time::{Duration, Instant};

use glam::Vec2;
use gpui::Hsla;

use crate::geometry::{
    arrow_glyph, background_ring, progress_arc, stop_glyph, tick_glyph, VectorPath,
    DEFAULT_LINE_WIDTH_RATIO,
};
use crate::layer::{Easing, FillTransition, LineCap, ShapeLayer, SpinAnimation};
use crate::theme::ProgressTheme;

/// Rotation rate of the background ring while spinning.
const SPIN_REVOLUTIONS_PER_SEC: f32 = 1.0;
/// Duration of the fill color transition fired on completion.
const FILL_TRANSITION_SECS: f32 = 0.5;

/// ProgressState holds the widget's scalar properties and its three shape
/// layers, independently of the GPUI infrastructure to facilitate testing.
/// The view shell forwards setters here and paints whatever the layers hold.
pub struct ProgressState {
    progress: f32,
    line_width: f32,
    tint_color: Hsla,
    background_color: Hsla,
    /// Color of the checkmark shown at completion.
    pub tick_color: Hsla,
    /// Custom path shown in the middle of the circle while idle.
    pub icon_path: Option<VectorPath>,
    /// Whether the shell has installed an external icon view. Suppresses the
    /// built-in arrow glyph.
    pub icon_view_present: bool,
    spinning: bool,
    needs_display: bool,
    frame: Vec2,

    pub background_layer: ShapeLayer,
    pub progress_layer: ShapeLayer,
    pub icon_layer: ShapeLayer,
}

impl ProgressState {
    /// Builds the three layers and seeds every property through its setter,
    /// so the construction defaults and the runtime paths stay identical.
    pub fn new(frame: Vec2) -> Self {
        let theme = ProgressTheme::default();

        let background_layer = ShapeLayer {
            line_cap: LineCap::Round,
            ..ShapeLayer::new()
        };
        let progress_layer = ShapeLayer {
            line_cap: LineCap::Square,
            ..ShapeLayer::new()
        };
        let icon_layer = ShapeLayer {
            line_cap: LineCap::Butt,
            ..ShapeLayer::new()
        };

        let mut state = Self {
            progress: 0.0,
            line_width: 1.0,
            tint_color: theme.tint_color,
            background_color: theme.background_color,
            tick_color: theme.tick_color,
            icon_path: None,
            icon_view_present: false,
            spinning: false,
            needs_display: true,
            frame,
            background_layer,
            progress_layer,
            icon_layer,
        };

        state.set_line_width(frame.x * DEFAULT_LINE_WIDTH_RATIO);
        state.set_tint_color(theme.tint_color);
        state.set_background_color(theme.background_color);
        state.set_tick_color(theme.tick_color);
        state
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    pub fn tint_color(&self) -> Hsla {
        self.tint_color
    }

    pub fn background_color(&self) -> Hsla {
        self.background_color
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    pub fn needs_display(&self) -> bool {
        self.needs_display
    }

    pub fn frame(&self) -> Vec2 {
        self.frame
    }

    /// Sets the fraction of the ring to fill. Values above 1 clamp to 1;
    /// values below 0 pass through and sweep the arc counterclockwise.
    /// Reaching exactly 1 starts the completion fill transition; returning
    /// to exactly 0 resets the fill immediately.
    pub fn set_progress(&mut self, value: f32, now: Instant) {
        let value = if value > 1.0 { 1.0 } else { value };

        if self.progress != value {
            self.progress = value;

            if self.progress == 1.0 {
                self.animate_background_fill(now);
            }

            if self.progress == 0.0 {
                self.background_layer.fill_transition = None;
                self.background_layer.fill_color = Some(self.background_color);
            }

            self.needs_display = true;
        }
    }

    /// Sets the stroke thickness. Ignores values smaller than 1. The progress
    /// arc is stroked at twice this width.
    pub fn set_line_width(&mut self, line_width: f32) {
        self.line_width = line_width.max(1.0);

        self.background_layer.line_width = self.line_width;
        self.progress_layer.line_width = self.line_width * 2.0;
        self.icon_layer.line_width = self.line_width;
        self.needs_display = true;
    }

    /// Sets the stroke color of all three layers.
    pub fn set_tint_color(&mut self, color: Hsla) {
        self.tint_color = color;
        self.background_layer.stroke_color = Some(color);
        self.progress_layer.stroke_color = Some(color);
        self.icon_layer.stroke_color = Some(color);
        self.needs_display = true;
    }

    /// Sets the color the ring interior shows while not complete.
    pub fn set_background_color(&mut self, color: Hsla) {
        self.background_color = color;
        self.background_layer.fill_color = Some(color);
        self.needs_display = true;
    }

    pub fn set_tick_color(&mut self, color: Hsla) {
        self.tick_color = color;
        self.needs_display = true;
    }

    pub fn set_icon_path(&mut self, path: Option<VectorPath>) {
        self.icon_path = path;
        self.needs_display = true;
    }

    pub fn set_icon_view_present(&mut self, present: bool) {
        self.icon_view_present = present;
        self.needs_display = true;
    }

    /// Applies a theme by running each color through its setter.
    pub fn apply_theme(&mut self, theme: &ProgressTheme) {
        self.set_tint_color(theme.tint_color);
        self.set_background_color(theme.background_color);
        self.set_tick_color(theme.tick_color);
    }

    /// Resets progress to zero and rotates the background ring indefinitely,
    /// with a gap so the rotation is visible.
    pub fn start_infinite_spin(&mut self, now: Instant) {
        self.set_progress(0.0, now);
        self.spinning = true;
        self.background_layer.spin = Some(SpinAnimation::new(now, SPIN_REVOLUTIONS_PER_SEC));
        self.needs_display = true;
    }

    /// Stops the spin and closes the ring again. Also drops any fill
    /// transition still attached to the background layer.
    pub fn stop_infinite_spin(&mut self) {
        self.background_layer.remove_all_animations();
        self.spinning = false;
        self.needs_display = true;
    }

    /// Whether any layer is mid-animation and the shell should keep
    /// scheduling frames.
    pub fn has_active_animation(&self, now: Instant) -> bool {
        self.background_layer.is_animating(now)
            || self.progress_layer.is_animating(now)
            || self.icon_layer.is_animating(now)
    }

    /// Rebuilds every layer path for the given view size. Runs on each paint;
    /// clears the pending display flag.
    pub fn draw(&mut self, size: Vec2) {
        self.frame = size;
        self.background_layer.frame = size;
        self.progress_layer.frame = size;
        self.icon_layer.frame = size;

        self.background_layer.path = Some(VectorPath::Arc(background_ring(
            size.x,
            size.y,
            self.line_width,
            self.spinning,
        )));

        self.progress_layer.path = Some(VectorPath::Arc(progress_arc(
            size.x,
            size.y,
            self.line_width,
            self.progress,
        )));

        if self.progress == 1.0 {
            self.draw_tick();
        } else if self.progress > 0.0 && self.progress < 1.0 {
            self.draw_stop();
        } else if !self.icon_view_present && self.icon_path.is_none() {
            self.draw_arrow();
        } else if let Some(path) = self.icon_path.clone() {
            self.icon_layer.path = Some(path);
            self.icon_layer.fill_color = None;
        }

        self.needs_display = false;
    }

    fn draw_tick(&mut self) {
        self.icon_layer.path = Some(VectorPath::Polygon(tick_glyph(
            self.frame.x,
            self.frame.y,
        )));
        self.icon_layer.fill_color = Some(self.tick_color);
        // Completion floods the ring interior with the arc's stroke color.
        self.background_layer.fill_color = self.progress_layer.stroke_color;
    }

    fn draw_stop(&mut self) {
        self.icon_layer.path = Some(VectorPath::Polygon(stop_glyph(self.frame.x)));
        self.icon_layer.stroke_color = self.progress_layer.stroke_color;
        self.icon_layer.fill_color = Some(self.tint_color);
    }

    fn draw_arrow(&mut self) {
        self.icon_layer.path = Some(VectorPath::Polygon(arrow_glyph(self.frame.x)));
        self.icon_layer.fill_color = None;
    }

    fn animate_background_fill(&mut self, now: Instant) {
        self.background_layer.fill_transition = Some(FillTransition {
            from: gpui::transparent_black(),
            to: self.progress_layer.stroke_color.unwrap_or(self.tint_color),
            started: now,
            duration: Duration::from_secs_f32(FILL_TRANSITION_SECS),
            easing: Easing::EaseIn,
        });
    }
}

// Rendering functions for the progress widget

use std::time::Instant;

use glam::{Affine2, Vec2};
use gpui::*;

use crate::layer::ShapeLayer;
use crate::state::ProgressState;
use crate::utils::PixelsExt;

/// Paints the widget's layers on the canvas, back to front.
pub fn paint_layers(
    window: &mut Window,
    bounds: Bounds<Pixels>,
    state: &ProgressState,
    now: Instant,
) {
    paint_layer(window, bounds, &state.background_layer, now);
    paint_layer(window, bounds, &state.progress_layer, now);
    paint_layer(window, bounds, &state.icon_layer, now);
}

/// Paints one layer: fill first, then stroke, with the layer's current
/// rotation applied about its frame center.
pub fn paint_layer(window: &mut Window, bounds: Bounds<Pixels>, layer: &ShapeLayer, now: Instant) {
    let Some(path) = &layer.path else {
        return;
    };

    let mut points = path.flatten();
    if points.len() < 2 {
        return;
    }

    let rotation = layer.rotation_at(now);
    if rotation != 0.0 {
        let pivot = layer.frame * 0.5;
        let spin = Affine2::from_translation(pivot)
            * Affine2::from_angle(rotation)
            * Affine2::from_translation(-pivot);
        for point in &mut points {
            *point = spin.transform_point2(*point);
        }
    }

    let origin_x = bounds.origin.x.as_f32();
    let origin_y = bounds.origin.y.as_f32();
    let to_window = |p: Vec2| Point::new(px(origin_x + p.x), px(origin_y + p.y));

    if let Some(fill) = layer.fill_color_at(now) {
        if fill.a > 0.0 {
            let mut builder = PathBuilder::fill();
            builder.move_to(to_window(points[0]));
            for point in &points[1..] {
                builder.line_to(to_window(*point));
            }
            builder.line_to(to_window(points[0]));
            if let Ok(path) = builder.build() {
                window.paint_path(path, fill);
            }
        }
    }

    if let Some(stroke) = layer.stroke_color {
        if stroke.a > 0.0 {
            let mut builder = PathBuilder::stroke(px(layer.line_width));
            builder.move_to(to_window(points[0]));
            for point in &points[1..] {
                builder.line_to(to_window(*point));
            }
            if path.is_closed() {
                builder.line_to(to_window(points[0]));
            }
            if let Ok(path) = builder.build() {
                window.paint_path(path, stroke);
            }
        }
    }
}

use glam::Vec2;
use gpui::{Pixels, Size};

pub trait PixelsExt {
    fn as_f32(&self) -> f32;
}

impl PixelsExt for Pixels {
    fn as_f32(&self) -> f32 {
        f32::from(*self)
    }
}

/// A pixel size as a glam vector, for the geometry code.
pub fn size_to_vec2(size: Size<Pixels>) -> Vec2 {
    Vec2::new(size.width.as_f32(), size.height.as_f32())
}

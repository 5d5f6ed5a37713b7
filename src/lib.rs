//! gpui_progress crate: a circular progress indicator for GPUI

pub mod geometry;
pub mod layer;
pub mod progress_view;
pub mod rendering;
pub mod state;
pub mod theme;
pub mod utils;

pub use geometry::{ArcSpec, Polygon, VectorPath};
pub use layer::{FillTransition, LineCap, ShapeLayer, SpinAnimation};
pub use progress_view::{init, ProgressView};
pub use state::ProgressState;
pub use theme::ProgressTheme;

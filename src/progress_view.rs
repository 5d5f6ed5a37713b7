// ProgressView implementation

use gpui::prelude::*;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;
use tracing::info;

use crate::geometry::VectorPath;
use crate::rendering::paint_layers;
use crate::state::ProgressState;
use crate::theme::ProgressTheme;
use crate::utils::size_to_vec2;

pub fn init(_cx: &mut impl AppContext) {
    // Initialization code if needed
}

/// The `View` wrapping a [`ProgressState`]: it forwards property changes to
/// the model, repaints on notify, and keeps a frame callback alive while an
/// animation is running.
pub struct ProgressView {
    state: Rc<RefCell<ProgressState>>,
    icon_view: Option<AnyView>,

    bounds: Rc<RefCell<Bounds<Pixels>>>,
    frame_loop_running: bool,
}

impl ProgressView {
    pub fn new(frame: Size<Pixels>) -> Self {
        info!("ProgressView new called");

        Self {
            state: Rc::new(RefCell::new(ProgressState::new(size_to_vec2(frame)))),
            icon_view: None,
            bounds: Rc::new(RefCell::new(Bounds::new(
                Point::new(px(0.0), px(0.0)),
                Size {
                    width: px(0.0),
                    height: px(0.0),
                },
            ))),
            frame_loop_running: false,
        }
    }

    // --- Property accessors ---

    pub fn progress(&self) -> f32 {
        self.state.borrow().progress()
    }

    pub fn line_width(&self) -> f32 {
        self.state.borrow().line_width()
    }

    pub fn tint_color(&self) -> Hsla {
        self.state.borrow().tint_color()
    }

    pub fn background_color(&self) -> Hsla {
        self.state.borrow().background_color()
    }

    pub fn tick_color(&self) -> Hsla {
        self.state.borrow().tick_color
    }

    pub fn is_spinning(&self) -> bool {
        self.state.borrow().is_spinning()
    }

    /// The canvas bounds recorded on the last paint.
    pub fn bounds(&self) -> Bounds<Pixels> {
        *self.bounds.borrow()
    }

    pub fn has_icon_view(&self) -> bool {
        self.icon_view.is_some()
    }

    pub fn icon_path(&self) -> Option<VectorPath> {
        self.state.borrow().icon_path.clone()
    }

    /// Sets the fraction of the ring to fill.
    pub fn set_progress(&mut self, value: f32, cx: &mut Context<Self>) {
        self.state.borrow_mut().set_progress(value, Instant::now());
        cx.notify();
    }

    pub fn set_line_width(&mut self, line_width: f32, cx: &mut Context<Self>) {
        self.state.borrow_mut().set_line_width(line_width);
        cx.notify();
    }

    pub fn set_tint_color(&mut self, color: Hsla, cx: &mut Context<Self>) {
        self.state.borrow_mut().set_tint_color(color);
        cx.notify();
    }

    pub fn set_background_color(&mut self, color: Hsla, cx: &mut Context<Self>) {
        self.state.borrow_mut().set_background_color(color);
        cx.notify();
    }

    pub fn set_tick_color(&mut self, color: Hsla, cx: &mut Context<Self>) {
        self.state.borrow_mut().set_tick_color(color);
        cx.notify();
    }

    /// Installs a view shown in the middle of the circle, replacing and
    /// dropping any previous one. Passing `None` restores the built-in
    /// glyphs.
    pub fn set_icon_view(&mut self, view: Option<AnyView>, cx: &mut Context<Self>) {
        self.icon_view = view;
        self.state
            .borrow_mut()
            .set_icon_view_present(self.icon_view.is_some());
        cx.notify();
    }

    pub fn set_icon_path(&mut self, path: Option<VectorPath>, cx: &mut Context<Self>) {
        self.state.borrow_mut().set_icon_path(path);
        cx.notify();
    }

    pub fn apply_theme(&mut self, theme: &ProgressTheme, cx: &mut Context<Self>) {
        self.state.borrow_mut().apply_theme(theme);
        cx.notify();
    }

    /// Resets progress and spins the background ring until stopped.
    pub fn start_infinite_spin(&mut self, cx: &mut Context<Self>) {
        self.state.borrow_mut().start_infinite_spin(Instant::now());
        cx.notify();
    }

    pub fn stop_infinite_spin(&mut self, cx: &mut Context<Self>) {
        self.state.borrow_mut().stop_infinite_spin();
        cx.notify();
    }

    fn ensure_frame_loop(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.frame_loop_running {
            return;
        }
        self.frame_loop_running = true;
        cx.on_next_frame(window, |this, window, cx| {
            this.advance_animations(window, cx);
        });
    }

    fn advance_animations(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if !self.state.borrow().has_active_animation(Instant::now()) {
            self.frame_loop_running = false;
            return;
        }
        cx.notify();
        cx.on_next_frame(window, |this, window, cx| {
            this.advance_animations(window, cx);
        });
    }
}

impl Render for ProgressView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Renders run after every notify, so this is the one place that can
        // arm the frame loop no matter which setter started an animation.
        if self.state.borrow().has_active_animation(Instant::now()) {
            self.ensure_frame_loop(window, cx);
        }

        let state_rc = self.state.clone();
        let bounds_rc = self.bounds.clone();
        let background = self.state.borrow().background_color();

        div()
            .size_full()
            .relative()
            .bg(background)
            .child(
                canvas(|_, _, _| {}, {
                    move |bounds, (), window, _cx| {
                        *bounds_rc.borrow_mut() = bounds;
                        let mut state = state_rc.borrow_mut();
                        state.draw(size_to_vec2(bounds.size));
                        paint_layers(window, bounds, &state, Instant::now());
                    }
                })
                .size_full(),
            )
            .children(self.icon_view.clone().map(|icon| {
                // Center the external icon view within the ring.
                div()
                    .absolute()
                    .inset_0()
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(icon)
            }))
    }
}

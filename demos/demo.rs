use gpui::prelude::*;
use gpui::*;
use gpui_progress::{ProgressTheme, ProgressView};
use std::time::Duration;

/// Drives the widget through its states: spin on launch, then a simulated
/// download, then a tap restarts whichever phase ran last.
struct DemoApp {
    progress_view: Entity<ProgressView>,

    demoing: bool,
    infinite_spin_was_last_used: bool,
}

impl DemoApp {
    pub fn new(theme: ProgressTheme, cx: &mut Context<Self>) -> Self {
        let progress_view = cx.new(|cx| {
            let mut view = ProgressView::new(size(px(80.0), px(80.0)));
            view.apply_theme(&theme, cx);
            view
        });

        let mut this = Self {
            progress_view,
            demoing: false,
            infinite_spin_was_last_used: false,
        };
        this.start_auto_demo(cx);
        this
    }

    /// Launch sequence: spin for two seconds, and half a second after the
    /// spin stops, ramp the progress up.
    fn start_auto_demo(&mut self, cx: &mut Context<Self>) {
        self.demoing = true;
        self.progress_view
            .update(cx, |view, cx| view.start_infinite_spin(cx));

        let executor = cx.background_executor().clone();
        cx.spawn(async move |this, cx| {
            executor.timer(Duration::from_millis(2500)).await;
            this.update(cx, |this, cx| this.start_progressing(cx)).ok();
        })
        .detach();

        let executor = cx.background_executor().clone();
        cx.spawn(async move |this, cx| {
            executor.timer(Duration::from_secs(2)).await;
            this.update(cx, |this, cx| this.stop_infinite_spin(cx)).ok();
        })
        .detach();
    }

    /// Restarts the demo on a tap, mirroring the phase that ran last: after
    /// a progress run the next tap progresses again, after a spin it spins.
    fn start_demo(&mut self, cx: &mut Context<Self>) {
        if self.demoing {
            return;
        }

        if self.infinite_spin_was_last_used {
            self.start_progressing(cx);
        } else {
            self.demoing = true;
            self.progress_view
                .update(cx, |view, cx| view.start_infinite_spin(cx));

            let executor = cx.background_executor().clone();
            cx.spawn(async move |this, cx| {
                executor.timer(Duration::from_secs(2)).await;
                this.update(cx, |this, cx| this.stop_infinite_spin(cx)).ok();
            })
            .detach();
        }
    }

    /// Steps progress by 0.01 every 100ms until past 1, then clears it two
    /// seconds after the ramp ends.
    fn start_progressing(&mut self, cx: &mut Context<Self>) {
        self.demoing = true;

        let executor = cx.background_executor().clone();
        cx.spawn(async move |this, cx| {
            let mut i = 0.0f32;
            while i < 1.1 {
                let step = i;
                this.update(cx, |this, cx| {
                    this.progress_view
                        .update(cx, |view, cx| view.set_progress(step, cx));
                })
                .ok();
                executor.timer(Duration::from_millis(100)).await;
                i += 0.01;
            }

            executor.timer(Duration::from_secs(2)).await;
            this.update(cx, |this, cx| this.clear_progress(cx)).ok();
        })
        .detach();
    }

    fn clear_progress(&mut self, cx: &mut Context<Self>) {
        self.progress_view
            .update(cx, |view, cx| view.set_progress(0.0, cx));
        self.infinite_spin_was_last_used = false;
        self.demoing = false;
    }

    fn stop_infinite_spin(&mut self, cx: &mut Context<Self>) {
        self.progress_view
            .update(cx, |view, cx| view.stop_infinite_spin(cx));
        self.infinite_spin_was_last_used = true;
        self.demoing = false;
    }
}

impl Render for DemoApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .bg(gpui::white())
            .flex()
            .items_center()
            .justify_center()
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, _, _, cx| this.start_demo(cx)),
            )
            .child(
                div()
                    .w(px(80.0))
                    .h(px(80.0))
                    .child(self.progress_view.clone()),
            )
    }
}

fn main() -> eyre::Result<()> {
    // An optional theme file as the first argument recolors the widget.
    let theme = match std::env::args().nth(1) {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => ProgressTheme::default(),
    };

    Application::new().run(move |cx: &mut App| {
        gpui_progress::init(cx);

        cx.open_window(WindowOptions::default(), move |_window, cx| {
            cx.new(move |cx| DemoApp::new(theme, cx))
        })
        .expect("failed to open window");
    });

    Ok(())
}

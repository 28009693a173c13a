pub mod input;
pub mod renderer;

use crate::chart::{ChartController, LoadTicket};
use crate::config::ChartConfig;
use crate::geometry::Viewport;
use crate::polars_source::load_csv;
use crate::theme::ChartTheme;
use crate::utils::PixelsExt;
use gpui::prelude::*;
use gpui::*;
use std::time::Instant;
use tracing::debug;

/// GPUI view hosting a single census scatter chart.
///
/// The view owns the [`ChartController`] and translates window events
/// (resize, pointer movement, label clicks) into controller calls.
pub struct ScatterView {
    controller: ChartController,
    theme: ChartTheme,
    viewport: Size<Pixels>,
    // Dropping the task cancels a load made obsolete by a resize.
    load_task: Option<Task<()>>,
    _bounds_subscription: Subscription,
}

impl ScatterView {
    pub fn new(config: ChartConfig, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let bounds_subscription = cx.observe_window_bounds(window, |this, window, cx| {
            this.set_viewport(window.viewport_size(), cx);
        });

        let viewport = window.viewport_size();
        let mut controller = ChartController::new(config);
        let ticket = controller.initialize(to_viewport(viewport));

        let mut view = Self {
            controller,
            theme: ChartTheme::default(),
            viewport,
            load_task: None,
            _bounds_subscription: bounds_subscription,
        };
        view.spawn_load(ticket, cx);
        view
    }

    pub fn controller(&self) -> &ChartController {
        &self.controller
    }

    /// Tears the chart down and rebuilds it for `viewport`.
    pub fn set_viewport(&mut self, viewport: Size<Pixels>, cx: &mut Context<Self>) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        let ticket = self.controller.on_resize(to_viewport(viewport));
        self.spawn_load(ticket, cx);
        cx.notify();
    }

    fn spawn_load(&mut self, ticket: LoadTicket, cx: &mut Context<Self>) {
        let path = self.controller.config().data_path.clone();
        debug!(?ticket, path = %path.display(), "spawning dataset load");

        let task = cx.spawn(async move |this, cx| {
            let loaded = cx
                .background_executor()
                .spawn(async move { load_csv(&path) })
                .await;
            this.update(cx, |view, cx| {
                if view.controller.complete_load(ticket, loaded, Instant::now()) {
                    cx.notify();
                }
            })
            .ok();
        });
        self.load_task = Some(task);
    }
}

fn to_viewport(size: Size<Pixels>) -> Viewport {
    Viewport::new(size.width.as_f32(), size.height.as_f32())
}

impl Render for ScatterView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let now = Instant::now();
        let root = div()
            .size_full()
            .relative()
            .bg(self.theme.background)
            .on_mouse_move(cx.listener(Self::handle_mouse_move));

        let Some(scene) = self.controller.scene() else {
            return root;
        };
        // Leaving the window emits no move event, only a window-level exit.
        let view = cx.entity();
        let exit_listener = canvas(
            |_, _, _| {},
            move |_, (), window, _cx| {
                window.on_mouse_event(move |_: &MouseExitEvent, phase, _window, cx| {
                    if phase == DispatchPhase::Bubble {
                        view.update(cx, |this, cx| this.handle_mouse_exit(cx));
                    }
                });
            },
        )
        .absolute()
        .size_full();
        if scene.is_animating(now) {
            window.request_animation_frame();
        }

        let geometry = *self.controller.geometry();
        root.child(exit_listener)
            .child(renderer::render_chart(scene, &geometry, &self.theme, now, cx))
    }
}

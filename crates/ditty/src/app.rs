use std::time::Instant;

use ditty_engine::core::{App, AppControl, FrameCtx, RenderOutcome};
use ditty_engine::paint::RandomColors;
use ditty_engine::time::FrameStats;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

/// Clears the window to a fresh random color every frame.
pub struct ClearApp {
    colors: RandomColors,
    frame_limit: Option<u64>,
    presented: u64,
    stats: FrameStats,
    show_fps: bool,
    title: String,
}

impl ClearApp {
    pub fn new(colors: RandomColors, title: String) -> Self {
        Self {
            colors,
            frame_limit: None,
            presented: 0,
            stats: FrameStats::default(),
            show_fps: false,
            title,
        }
    }

    pub fn with_frame_limit(mut self, limit: Option<u64>) -> Self {
        self.frame_limit = limit;
        self
    }

    pub fn with_fps_in_title(mut self, show: bool) -> Self {
        self.show_fps = show;
        self
    }

    /// Bookkeeping after a frame reached the screen.
    ///
    /// Returns whether to keep running, plus a new window title when the fps
    /// figure changed and should be displayed.
    fn after_present(&mut self, now: Instant) -> (AppControl, Option<String>) {
        self.presented += 1;

        let title = self.stats.record(now).and_then(|fps| {
            log::debug!("{fps:.1} fps ({} frames presented)", self.presented);
            self.show_fps.then(|| format!("{} ({fps:.0} fps)", self.title))
        });

        if self.frame_limit.is_some_and(|limit| self.presented >= limit) {
            log::info!("presented {} frames; exiting", self.presented);
            return (AppControl::Exit, title);
        }

        (AppControl::Continue, title)
    }
}

impl App for ClearApp {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
            {
                AppControl::Exit
            }
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let frame_index = ctx.time.frame_index;
        let colors = &mut self.colors;
        let clear = || {
            let color = colors.next_color();
            log::trace!("frame {frame_index}: clear {color:?}");
            color
        };

        let outcome = ctx.render(clear, |_rctx, _target| {
            // TODO: encode draw commands once a pipeline exists.
        });

        if outcome != RenderOutcome::Presented {
            return outcome.control();
        }

        let (control, title) = self.after_present(ctx.time.now);
        if let Some(title) = title {
            ctx.runtime.set_title(title);
        }
        control
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app() -> ClearApp {
        ClearApp::new(RandomColors::from_seed(0), "Metal ditty".to_string())
    }

    #[test]
    fn runs_forever_without_limit() {
        let mut app = app();
        let t0 = Instant::now();
        for i in 0..100 {
            let (control, _) = app.after_present(t0 + Duration::from_millis(i));
            assert_eq!(control, AppControl::Continue);
        }
    }

    #[test]
    fn exits_when_frame_limit_reached() {
        let mut app = app().with_frame_limit(Some(3));
        let t0 = Instant::now();
        assert_eq!(app.after_present(t0).0, AppControl::Continue);
        assert_eq!(app.after_present(t0).0, AppControl::Continue);
        assert_eq!(app.after_present(t0).0, AppControl::Exit);
    }

    #[test]
    fn fps_title_only_when_enabled() {
        let t0 = Instant::now();
        let later = t0 + Duration::from_secs(1);

        let mut quiet = app();
        quiet.after_present(t0);
        assert_eq!(quiet.after_present(later).1, None);

        let mut loud = app().with_fps_in_title(true);
        loud.after_present(t0);
        assert_eq!(loud.after_present(later).1.as_deref(), Some("Metal ditty (1 fps)"));
    }
}

use winit::window::{Window, WindowId};

use crate::device::{Gpu, SurfaceErrorAction};
use crate::paint::Color;
use crate::render::{clear_pass, RenderCtx, RenderTarget};
use crate::time::FrameTime;
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

/// What happened to the frame passed to [`FrameCtx::render`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RenderOutcome {
    /// Commands were submitted and the drawable presented.
    Presented,
    /// No drawable this time (lost/outdated/timeout); nothing was submitted.
    Skipped,
    /// The surface cannot recover.
    Fatal,
}

impl RenderOutcome {
    pub fn control(self) -> AppControl {
        match self {
            RenderOutcome::Fatal => AppControl::Exit,
            RenderOutcome::Presented | RenderOutcome::Skipped => AppControl::Continue,
        }
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub time: FrameTime,
    pub runtime: &'a mut RuntimeCtx,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Clears the drawable with the color returned by `clear`, calls `draw`
    /// with a ready [`RenderCtx`] and [`RenderTarget`], then submits and
    /// presents the frame.
    ///
    /// `clear` runs only once a drawable has been acquired. When none can be
    /// acquired the frame is skipped without calling `clear` or `draw`.
    pub fn render<C, F>(&mut self, clear: C, draw: F) -> RenderOutcome
    where
        C: FnOnce() -> Color,
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let (mut frame, clear) = match acquire_then_pick(|| self.gpu.begin_frame(), clear) {
            Ok(acquired) => acquired,
            Err(err) => {
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => RenderOutcome::Fatal,
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                        RenderOutcome::Skipped
                    }
                };
            }
        };

        clear_pass(&mut frame.encoder, &frame.view, clear);

        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            self.gpu.size(),
        );

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        RenderOutcome::Presented
    }
}

/// Acquires a frame, and only on success picks the color to clear it with.
fn acquire_then_pick<T, E, A, C>(acquire: A, clear: C) -> Result<(T, Color), E>
where
    A: FnOnce() -> Result<T, E>,
    C: FnOnce() -> Color,
{
    let frame = acquire()?;
    Ok((frame, clear()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::RandomColors;

    #[test]
    fn skipped_frame_does_not_consume_a_color() {
        let mut colors = RandomColors::from_seed(9);

        let skipped: Result<((), Color), _> =
            acquire_then_pick(|| Err(wgpu::SurfaceError::Timeout), || colors.next_color());
        assert!(skipped.is_err());

        let shown = acquire_then_pick(|| Ok::<_, wgpu::SurfaceError>(()), || colors.next_color());
        let (_, shown) = shown.unwrap();

        assert_eq!(shown, RandomColors::from_seed(9).next_color());
    }

    #[test]
    fn acquired_frame_is_paired_with_its_color() {
        let (frame, color) =
            acquire_then_pick(|| Ok::<_, ()>(7u32), || Color::opaque(0.5, 0.25, 1.0)).unwrap();
        assert_eq!(frame, 7);
        assert_eq!(color, Color::opaque(0.5, 0.25, 1.0));
    }

    #[test]
    fn only_fatal_outcome_exits() {
        assert_eq!(RenderOutcome::Presented.control(), AppControl::Continue);
        assert_eq!(RenderOutcome::Skipped.control(), AppControl::Continue);
        assert_eq!(RenderOutcome::Fatal.control(), AppControl::Exit);
    }
}

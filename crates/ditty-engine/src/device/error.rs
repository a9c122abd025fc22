/// What the frame loop does after failing to acquire a drawable.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was lost or outdated and has been reconfigured; the next frame
    /// should succeed.
    Reconfigured,
    /// Transient (timeout); drop this frame and carry on.
    SkipFrame,
    /// Out of memory; the loop should exit.
    Fatal,
}

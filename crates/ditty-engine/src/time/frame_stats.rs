use std::time::{Duration, Instant};

/// Frames-per-second counter.
///
/// Counts presented frames and yields an average rate once per interval.
#[derive(Debug, Clone)]
pub struct FrameStats {
    interval: Duration,
    window_start: Option<Instant>,
    frames: u32,
    last_fps: Option<f32>,
}

impl FrameStats {
    pub fn new(interval: Duration) -> Self {
        debug_assert!(!interval.is_zero());
        Self {
            interval,
            window_start: None,
            frames: 0,
            last_fps: None,
        }
    }

    /// Records one frame at `now`.
    ///
    /// Returns the average rate when at least one interval has elapsed since the
    /// current measurement window started.
    pub fn record(&mut self, now: Instant) -> Option<f32> {
        let start = *self.window_start.get_or_insert(now);
        self.frames += 1;

        let elapsed = now.saturating_duration_since(start);
        if elapsed < self.interval {
            return None;
        }

        // The first frame opens the window, so it is not part of the rate.
        let fps = (self.frames - 1) as f32 / elapsed.as_secs_f32();
        self.window_start = Some(now);
        self.frames = 1;
        self.last_fps = Some(fps);
        Some(fps)
    }

    /// Most recently reported rate.
    pub fn last_fps(&self) -> Option<f32> {
        self.last_fps
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_reported_before_interval() {
        let mut stats = FrameStats::default();
        let t0 = Instant::now();
        assert_eq!(stats.record(t0), None);
        assert_eq!(stats.record(t0 + Duration::from_millis(500)), None);
        assert_eq!(stats.last_fps(), None);
    }

    #[test]
    fn reports_average_after_interval() {
        let mut stats = FrameStats::default();
        let t0 = Instant::now();
        let mut reported = None;
        // 61 frames 1/60 s apart span exactly one second.
        for i in 0..=60u64 {
            reported = stats.record(t0 + Duration::from_micros(i * 1_000_000 / 60));
        }
        let fps = reported.unwrap();
        assert!((fps - 60.0).abs() < 0.1, "fps = {fps}");
        assert_eq!(stats.last_fps(), Some(fps));
    }

    #[test]
    fn window_restarts_after_report() {
        let mut stats = FrameStats::new(Duration::from_millis(100));
        let t0 = Instant::now();
        stats.record(t0);
        assert!(stats.record(t0 + Duration::from_millis(100)).is_some());
        assert_eq!(stats.record(t0 + Duration::from_millis(150)), None);
        assert!(stats.record(t0 + Duration::from_millis(200)).is_some());
    }
}

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Number of recent frames averaged by [`FrameClock::fps`].
pub const FPS_WINDOW: usize = 10;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,

    /// Average frame rate over the last [`FPS_WINDOW`] ticks.
    pub fps: f32,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// When built with [`FrameClock::with_max_fps`], `tick()` sleeps until at least
/// `1 / max_fps` seconds have passed since the previous tick. This is a
/// throttle: it never lets frames run early, but a slow frame is not made up
/// for by shortening the next one.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    frame_budget: Option<Duration>,
    recent: VecDeque<Duration>,
}

impl FrameClock {
    /// Creates an unpaced clock.
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
            frame_budget: None,
            recent: VecDeque::with_capacity(FPS_WINDOW),
        }
    }

    /// Creates a clock that caps the tick rate at `max_fps`.
    ///
    /// `max_fps == 0` disables pacing.
    pub fn with_max_fps(max_fps: u32) -> Self {
        let mut clock = Self::new();
        if max_fps > 0 {
            clock.frame_budget = Some(Duration::from_secs_f64(1.0 / max_fps as f64));
        }
        clock
    }

    /// Earliest instant at which the next `tick()` returns without sleeping.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.frame_budget.map(|budget| self.last + budget)
    }

    /// Average frame rate over the last [`FPS_WINDOW`] ticks; `0.0` before the
    /// first tick.
    pub fn fps(&self) -> f32 {
        let total: Duration = self.recent.iter().sum();
        if total.is_zero() {
            return 0.0;
        }
        self.recent.len() as f32 / total.as_secs_f32()
    }

    /// Waits out the remaining frame budget, then advances the clock.
    pub fn tick(&mut self) -> FrameTime {
        if let Some(deadline) = self.next_deadline() {
            let now = Instant::now();
            if now < deadline {
                std::thread::sleep(deadline - now);
            }
        }

        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last);
        self.last = now;

        if self.recent.len() == FPS_WINDOW {
            self.recent.pop_front();
        }
        self.recent.push_back(dt);

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
            fps: self.fps(),
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── pacing ────────────────────────────────────────────────────────────

    #[test]
    fn paced_ticks_are_at_least_one_budget_apart() {
        let mut clock = FrameClock::with_max_fps(50);
        let first = clock.tick();

        for _ in 0..5 {
            let ft = clock.tick();
            // 1/50 s; allow for f32 rounding of the reported dt.
            assert!(ft.dt >= 0.0199, "dt = {}", ft.dt);
        }

        let elapsed = Instant::now().duration_since(first.now);
        assert!(elapsed >= Duration::from_millis(100), "elapsed = {elapsed:?}");
    }

    #[test]
    fn paced_clock_never_exceeds_max_fps() {
        let max_fps = 100;
        let mut clock = FrameClock::with_max_fps(max_fps);
        let start = clock.tick().now;

        let mut completed = 0u32;
        while Instant::now().duration_since(start) < Duration::from_millis(200) {
            clock.tick();
            completed += 1;
        }

        // 200 ms at 100 fps allows 20 ticks; the loop may overrun by one.
        let elapsed = Instant::now().duration_since(start).as_secs_f64();
        assert!(completed as f64 <= elapsed * max_fps as f64 + 1.0);
    }

    #[test]
    fn zero_max_fps_disables_pacing() {
        let clock = FrameClock::with_max_fps(0);
        assert!(clock.next_deadline().is_none());
    }

    #[test]
    fn deadline_is_one_budget_after_last_tick() {
        let mut clock = FrameClock::with_max_fps(20);
        let ft = clock.tick();
        assert_eq!(clock.next_deadline(), Some(ft.now + Duration::from_millis(50)));
    }

    // ── counters ──────────────────────────────────────────────────────────

    #[test]
    fn frame_index_is_monotonic() {
        let mut clock = FrameClock::new();
        let indices: Vec<u64> = (0..4).map(|_| clock.tick().frame_index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn fps_is_zero_before_first_tick() {
        assert_eq!(FrameClock::new().fps(), 0.0);
    }

    #[test]
    fn fps_tracks_paced_rate() {
        let mut clock = FrameClock::with_max_fps(50);
        for _ in 0..FPS_WINDOW + 2 {
            clock.tick();
        }
        let fps = clock.fps();
        // Sleeps only overshoot, so the measured rate cannot exceed the cap.
        assert!(fps > 0.0 && fps <= 50.5, "fps = {fps}");
    }
}

//! Deadline-based refresh clock

use std::time::{Duration, Instant};

use crate::ports::FrameClock;

/// Sleeps until the next multiple of the frame period
#[derive(Debug, Clone)]
pub struct FixedRateClock {
    period: Duration,
    deadline: Instant,
    overruns: u64,
}

impl FixedRateClock {
    /// Clock ticking `frame_rate` times a second (0 is treated as 1)
    pub fn new(frame_rate: u32) -> Self {
        let period = Duration::from_secs(1) / frame_rate.max(1);
        Self {
            period,
            deadline: Instant::now(),
            overruns: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Frames that finished after their deadline
    pub fn overruns(&self) -> u64 {
        self.overruns
    }
}

impl FrameClock for FixedRateClock {
    fn wait_for_refresh(&mut self) {
        self.deadline += self.period;
        let now = Instant::now();
        if self.deadline > now {
            std::thread::sleep(self.deadline - now);
        } else {
            // Late: start counting from here instead of racing to catch up
            self.overruns += 1;
            log::trace!("frame overran by {:?}", now - self.deadline);
            self.deadline = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_from_rate() {
        assert_eq!(FixedRateClock::new(50).period(), Duration::from_millis(20));
        assert_eq!(FixedRateClock::new(0).period(), Duration::from_secs(1));
    }

    #[test]
    fn test_waits_at_least_one_period_per_frame() {
        let start = Instant::now();
        let mut clock = FixedRateClock::new(200);
        clock.wait_for_refresh();
        clock.wait_for_refresh();
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn test_overrun_reanchors() {
        let mut clock = FixedRateClock::new(1000);
        std::thread::sleep(Duration::from_millis(5));
        clock.wait_for_refresh();
        assert_eq!(clock.overruns(), 1);
    }
}

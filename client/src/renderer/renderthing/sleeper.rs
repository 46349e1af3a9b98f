use std::time::{Duration, Instant};

/// Paces the redraw loop to a target frame time.
pub struct Sleeper {
    pub target_delta_time: Option<Duration>,
    pub last_instant: Option<Instant>,
}

impl Sleeper {
    /// A target of 0 fps disables pacing.
    pub fn new(target_fps: u64) -> Self {
        Self {
            target_delta_time: (target_fps > 0)
                .then(|| Duration::from_micros(1_000_000 / target_fps)),
            last_instant: None,
        }
    }

    /// Sleeps out whatever is left of the current frame. Returns whether it slept.
    pub fn sleep(&mut self) -> bool {
        let slept = match (self.target_delta_time, self.last_instant) {
            (Some(target_delta_time), Some(last_instant)) => {
                let delta_time = last_instant.elapsed();

                if target_delta_time > delta_time {
                    spin_sleep::sleep(target_delta_time - delta_time);
                    true
                } else {
                    false
                }
            }
            // Nothing to measure against on the first frame.
            _ => false,
        };

        self.last_instant = Some(Instant::now());
        slept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncapped_never_sleeps() {
        let mut sleeper = Sleeper::new(0);
        assert!(!sleeper.sleep());
        assert!(!sleeper.sleep());
    }

    #[test]
    fn first_frame_doesnt_sleep() {
        let mut sleeper = Sleeper::new(30);
        assert!(!sleeper.sleep());
    }

    #[test]
    fn fast_frames_are_held_back() {
        let mut sleeper = Sleeper::new(50);
        sleeper.sleep();

        let started = Instant::now();
        assert!(sleeper.sleep());
        assert!(started.elapsed() >= Duration::from_millis(15));
    }
}

/*
    Speed Estimator
*/

use embassy_time::Instant;

/* --------------------------- Code -------------------------- */
pub struct SpeedEstimator {
    counts_per_revolution: f32,
    last_count: i32,
    last_sample: Instant,
    speed_rps: f32,
}

impl SpeedEstimator {
    pub fn new(counts_per_revolution: f32, count: i32, now: Instant) -> Self {
        Self {
            counts_per_revolution,
            last_count: count,
            last_sample: now,
            speed_rps: 0.0,
        }
    }

    /// Takes a sample and returns the elapsed time in seconds, or `None` when
    /// no time has passed since the previous one (the sample is dropped and
    /// the last speed kept).
    pub fn sample(&mut self, count: i32, now: Instant) -> Option<f32> {
        let elapsed_us = now.checked_duration_since(self.last_sample)?.as_micros();
        if elapsed_us == 0 {
            return None;
        }

        let dt = elapsed_us as f32 / 1_000_000.0;
        let delta = count.wrapping_sub(self.last_count);
        self.speed_rps = delta as f32 / self.counts_per_revolution / dt;
        self.last_count = count;
        self.last_sample = now;

        Some(dt)
    }

    pub fn rebase(&mut self, count: i32, now: Instant) {
        self.last_count = count;
        self.last_sample = now;
        self.speed_rps = 0.0;
    }

    pub fn speed_rps(&self) -> f32 {
        self.speed_rps
    }
}

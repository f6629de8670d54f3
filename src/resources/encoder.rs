/*
    Encoder Resources
*/

use core::sync::atomic::AtomicI32;
use core::sync::atomic::Ordering;

/* --------------------------- Pulse Counter -------------------------- */
pub trait PulseCounter {
    /// Accumulated pulse count since power-up.
    fn count(&self) -> i32;
}

impl<T: PulseCounter + ?Sized> PulseCounter for &T {
    fn count(&self) -> i32 {
        (**self).count()
    }
}

/* --------------------------- Shared Count -------------------------- */
/// Single-word pulse count written by one encoder task and read by the
/// control loop. Only plain loads and stores are used so it works on
/// cores without compare-and-swap.
pub struct SharedCount {
    count: AtomicI32,
}

impl SharedCount {
    pub const fn new() -> Self {
        Self {
            count: AtomicI32::new(0),
        }
    }

    pub fn store(&self, count: i32) {
        self.count.store(count, Ordering::Relaxed);
    }

    pub fn load(&self) -> i32 {
        return self.count.load(Ordering::Relaxed);
    }

    /// One quadrature step. Must only be called from the single writer.
    pub fn step(&self, clockwise: bool) {
        let count = self.load();
        let next = if clockwise {
            count.saturating_add(1)
        } else {
            count.saturating_sub(1)
        };
        self.store(next);
    }
}

impl Default for SharedCount {
    fn default() -> Self {
        Self::new()
    }
}

impl PulseCounter for SharedCount {
    fn count(&self) -> i32 {
        self.load()
    }
}

//! Injectable randomness for asteroid seeding
//!
//! Only initial placement is random. Everything after that is deterministic.

use rand::Rng;
use rand_pcg::Pcg32;

/// The two random draws seeding needs
pub trait RandomSource {
    /// Integer in `lo..=hi`
    fn int_in(&mut self, lo: i32, hi: i32) -> i32;
    /// Fair coin
    fn coin(&mut self) -> bool;
}

impl RandomSource for Pcg32 {
    fn int_in(&mut self, lo: i32, hi: i32) -> i32 {
        self.random_range(lo..=hi)
    }

    fn coin(&mut self) -> bool {
        self.random_bool(0.5)
    }
}

//! Injectable random sources for generation tests.

use rand_core::{CryptoRng, RngCore};

/// A random source that always fails.
pub struct DeadRng;

impl RngCore for DeadRng {
    fn next_u32(&mut self) -> u32 {
        unreachable!("only try_fill_bytes is used")
    }
    fn next_u64(&mut self) -> u64 {
        unreachable!("only try_fill_bytes is used")
    }
    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        unreachable!("only try_fill_bytes is used")
    }
    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
        Err(rand_core::Error::new("entropy device unplugged"))
    }
}

impl CryptoRng for DeadRng {}

/// Yields 0xff bytes, which is at or above every supported group order.
pub struct SaturatedRng;

impl RngCore for SaturatedRng {
    fn next_u32(&mut self) -> u32 {
        u32::MAX
    }
    fn next_u64(&mut self) -> u64 {
        u64::MAX
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0xff);
    }
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for SaturatedRng {}

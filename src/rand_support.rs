//! Integration with the `rand` crate, behind the `rand` feature.
//!
//! Lets an [`Lfsr`] drive any `rand`-based API. Wide outputs are built by
//! concatenating successive register states, and the raw stream never
//! emits an all-zero word, so this is a parlour-grade source: fine for
//! shuffles and dice, not for statistics or keys.

use rand::{RngCore, SeedableRng};

use crate::lfsr::{Lfsr, RegisterWidth};

impl RngCore for Lfsr {
    fn next_u32(&mut self) -> u32 {
        let width = self.width().bits();
        let mut acc: u64 = 0;
        let mut have: u32 = 0;
        while have < 32 {
            acc = (acc << width) | self.next_value() as u64;
            have += width;
        }
        (acc >> (have - 32)) as u32
    }

    fn next_u64(&mut self) -> u64 {
        (self.next_u32() as u64) << 32 | self.next_u32() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let word = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Lfsr {
    type Seed = [u8; 4];

    /// Builds a 17-bit generator, folding the 4-byte seed into range so
    /// that an all-zero seed still yields a valid register state.
    fn from_seed(seed: Self::Seed) -> Self {
        let raw = u32::from_le_bytes(seed);
        Lfsr::from_folded_seed(RegisterWidth::W17, raw as i64)
    }
}

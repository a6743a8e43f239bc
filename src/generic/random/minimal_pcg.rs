//! A simple pseudorandom number generator.
//!
//! Specifically, a translation of the *really* minimal C PCG32 implementation from <https://www.pcg-random.org/> implemented to satisfy the [RngCore](rand_core::RngCore) trait.[^note]
//!
//! PCG(32) was chosen as the default source of (pseudo)random numbers as it is simple, fast, and has some nice supporting documentation.
//!
//! Each [context](crate::context) stores a source of rng, and every probabilistic step of evolution --- population generation, parent selection, crossover points, and mutation --- draws from that source.
//! The context structure is parameterised to anything which satisfies the [Rng](rand::Rng) trait.
//! Though, to keep the rest of the library straightforward the rng is fixed in the [context](crate::context) as [MinimalPCG32].
//! Still, revising or parameterising the context is all that's needed for a different source of rng.
//!
//! Note, `next_u64` composes two 32-bit outputs rather than widening a single output.
//! The distinction matters: probability draws made through [random_bool](rand::Rng::random_bool) compare a 64-bit output against a 64-bit threshold, and a widened 32-bit output would fail the comparison in entirely misleading ways.
//!
//! [^note]: At the time of writing, the C implementation is at the top of the [download page](https://www.pcg-random.org/download.html).

use rand::SeedableRng;
use rand_core::{RngCore, impls};

/// State and increment
#[derive(Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        /// Entirely unmotivated, though odd.
        const INCREMENT: u64 = 5573589319906701683;
        Self {
            state: (u64::from_le_bytes(seed)).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn seven_seed() {
        let mut seven_seed = MinimalPCG32::from_seed(7u64.to_le_bytes());
        assert_eq!(seven_seed.next_u32(), 676697322);
        assert_eq!(seven_seed.next_u32(), 2264694617);
        assert_eq!(seven_seed.next_u32(), 2604577809);
        assert_eq!(seven_seed.next_u32(), 3182640396);
        assert_eq!(seven_seed.next_u32(), 3257997367);
    }

    #[test]
    fn twenty_twenty_six_seed() {
        let mut the_seed = MinimalPCG32::from_seed(2026u64.to_le_bytes());

        assert_eq!(the_seed.next_u64(), 13376111019078030570);
        assert_eq!(the_seed.next_u64(), 504276306630157782);
        assert_eq!(the_seed.next_u64(), 975515964546193764);
        assert_eq!(the_seed.next_u64(), 14527865826352593040);
    }

    #[test]
    fn coin_balance() {
        use rand::Rng;

        let mut rng = MinimalPCG32::from_seed(7u64.to_le_bytes());
        let heads = (0..10_000).filter(|_| rng.random_bool(0.5)).count();

        assert!((4_500..=5_500).contains(&heads));
    }
}

/*!
Mutation of a valuation, in place.

Each value of the valuation is flipped with probability [mutation_chance](crate::config::Config::mutation_chance), with the draws independent across values.

With the default chance of 0.01 mutation is a slight pressure away from the parents of a generation, sufficient to (eventually) break a population stuck at a local maximum --- relying on crossover alone, a value absent from every member of a generation is absent from every later generation.

Two ends of the dial are exact:
- With a chance of zero mutation never flips a value.
- With a chance of one mutation flips every value.
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Flips each value of the given valuation with probability [mutation_chance](crate::config::Config::mutation_chance), in place.
    ///
    /// Returns the count of values flipped.
    pub fn mutate(&mut self, valuation: &mut [bool]) -> usize {
        let chance = self.config.mutation_chance.value;

        let mut flips = 0;
        for value in valuation.iter_mut() {
            if self.rng.random_bool(chance) {
                *value = !*value;
                flips += 1;
            }
        }

        if flips != 0 {
            log::trace!(target: targets::MUTATE, "{flips} values flipped");
        }
        self.counters.total_flips += flips;

        flips
    }
}

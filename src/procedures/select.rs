/*!
Selection of a parent from a ranked population, by stochastic acceptance.

To select a parent:
- Draw a candidate uniformly at random from the ranked population.
- Accept the candidate with probability *fitness / best-fitness*, where *best-fitness* is the fitness at the head of the ranking.
- Otherwise, reject the candidate and draw again.

So, members are selected in proportion to fitness, the best member of a generation is accepted whenever drawn, and every member has *some* chance of selection --- apart from members with a fitness of zero.

# Bounds and fallbacks

Left alone, rejection sampling admits two ways to spin without an acceptance:

- If the best fitness is zero, every acceptance probability is zero.
  In this case fitness carries no information, and the draw is made uniformly, without an acceptance test.
- Otherwise, acceptance is likely but not guaranteed, so draws are bounded at [ACCEPTANCE_BOUND], with a uniform draw on exhaustion.
  With the bound at 64 a fallback requires every draw to land on relatively unfit members, and so, in effect, the fallback embeds the pressure of acceptance sampling while keeping each selection a bounded procedure.
*/

use crate::{
    context::GenericContext,
    db::MemberKey,
    misc::log::targets::{self},
    procedures::rank::Ranking,
    types::err::{self, ErrorKind},
};

/// Attempts at an acceptance before selection falls back to a uniform draw.
pub const ACCEPTANCE_BOUND: usize = 64;

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Selects a parent from the given ranking by stochastic acceptance.
    ///
    /// Errors if the ranking is empty.
    pub fn select(&mut self, ranking: &Ranking) -> Result<MemberKey, ErrorKind> {
        if ranking.is_empty() {
            return Err(err::PopulationError::Empty.into());
        }

        // The ranking is ordered by descending fitness, so the head carries the best fitness.
        let best_fitness = ranking[0].fitness;

        if best_fitness > 0.0 {
            for _ in 0..ACCEPTANCE_BOUND {
                let candidate = &ranking[self.rng.random_range(0..ranking.len())];

                if self.rng.random_bool(candidate.fitness / best_fitness) {
                    return Ok(candidate.member);
                }

                self.counters.total_rejections += 1;
            }

            log::trace!(target: targets::SELECT, "Acceptance bound met, uniform fallback");
        }

        Ok(ranking[self.rng.random_range(0..ranking.len())].member)
    }
}

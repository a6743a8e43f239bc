/*!
Fitness evaluation, and the ranking of a population by fitness.

# Fitness

The fitness of a valuation is the fraction of the clauses of the formula the valuation satisfies:

> fitness(𝐯) = (count of clauses satisfied on 𝐯) / (count of clauses)

So, fitness is a float in the unit interval, with a fitness of one exactly when every clause is satisfied.

A formula with no clauses has every clause satisfied on any valuation, and so fitness over the empty formula is one --- as a case apart, rather than by division.

# Ranking

A ranking of a population pairs each member with its fitness and orders the pairs by descending fitness.
The sort is stable --- members of equal fitness keep the order in which they were read from the population --- and so ranking the same population twice yields the same ranking.

The head of a ranking is the best member of the generation, and the ranking as a whole is the input to [selection](crate::procedures::select).
*/

use crate::{
    config::Fitness,
    context::GenericContext,
    db::MemberKey,
    misc::log::targets::{self},
    structures::valuation::Valuation,
    types::err::{self, ErrorKind},
};

/// A member of the population, keyed, with the fitness of the member.
#[derive(Clone, Copy, Debug)]
pub struct Rank {
    /// The key to the member.
    pub member: MemberKey,

    /// The fitness of the member.
    pub fitness: Fitness,
}

/// An ordering of every member of a population by descending fitness.
pub type Ranking = Vec<Rank>;

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// The fitness of the given valuation against the formula of the context.
    ///
    /// Pure --- neither the context nor the valuation is touched.
    ///
    /// Errors if the valuation does not cover every atom of the context.
    /// A valuation over additional atoms is fine, as the additional values cannot be read by a literal of the formula.
    pub fn fitness_of(&self, valuation: &impl Valuation) -> Result<Fitness, ErrorKind> {
        if valuation.atom_count() < self.atom_db.count() {
            return Err(err::PopulationError::IncompleteValuation.into());
        }

        let total = self.clause_db.count();
        if total == 0 {
            return Ok(1.0);
        }

        // Safe, as the valuation covers every atom of the context, checked above.
        let satisfied = unsafe { self.clause_db.satisfied_count_unchecked(valuation) };

        Ok(satisfied as Fitness / total as Fitness)
    }

    /// A ranking of the current population by descending fitness, ties in first-seen order.
    ///
    /// Errors if the population is empty.
    pub fn rank(&mut self) -> Result<Ranking, ErrorKind> {
        if self.population_db.member_count() == 0 {
            return Err(err::PopulationError::Empty.into());
        }

        let mut ranking: Ranking = Vec::with_capacity(self.population_db.member_count());
        for (member, valuation) in self.population_db.members().enumerate() {
            let fitness = self.fitness_of(valuation)?;
            ranking.push(Rank { member, fitness });
        }

        self.counters.total_evaluations += ranking.len();

        ranking.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));

        log::trace!(target: targets::RANK, "Best fitness {} from member {}", ranking[0].fitness, ranking[0].member);

        Ok(ranking)
    }
}

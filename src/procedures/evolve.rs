/*!
Approximates the maximum satisfiability of the formula in a context.

# Overview

[evolve](crate::procedures::evolve) runs a generational genetic algorithm over populations of valuations, with the fitness of a valuation the fraction of the clauses of the formula the valuation satisfies.

Each pass of the loop handles one generation:
- [rank](crate::procedures::rank) the population by fitness, and note the head of the ranking as champion if it improves on the best valuation seen.
- Conclude, if the best fitness of the generation meets the fitness threshold, or if the generation meets the iteration limit.
- Otherwise, breed a successor generation: [select](crate::procedures::select) a pair of parents, [crossover](crate::procedures::crossover) the pair, [mutate](crate::procedures::mutate) both children, and append the children, until the successor generation is full.

The initial population counts as the first generation, so a threshold met without any breeding concludes at a count of one, and a run which exhausts the iteration limit concludes at a count of exactly the limit.

Roughly, the loop is as diagrammed:

```none
          +----------+     generation limit, time limit,
  +-------| populate |  +-----> threshold, or termination
  |       +----------+  |       by callback
  |                     |
  ⌄       +------+      |
  +------>| rank |------+
  ⌃       +------+      |
  |                     | otherwise, breed a successor generation
  |                     ⌄
  |   +--------------------------------------------+
  +---| (select ⨯ select) → crossover → 2 ⨯ mutate |*
      +--------------------------------------------+
```

And, abstracting from bookkeeping, evolve is:

```rust,ignore
'evolution_loop: loop {
    self.counters.total_generations += 1;

    let ranking = self.rank()?;
    let best = ranking[0];

    if best.fitness >= self.config.fitness_threshold.value {
        break 'evolution_loop Report::ThresholdMet;
    }

    if self.counters.total_generations >= self.config.iteration_limit.value {
        break 'evolution_loop Report::IterationsExhausted;
    }

    self.breed(&ranking)?;
}
```

# Termination

The fitness threshold may be unreachable --- most plainly on an unsatisfiable formula with a threshold above the maximum satisfiable fraction --- and for this reason failing to meet the threshold is a *reported outcome* rather than an error, with the best valuation seen read via [best_valuation](crate::context::GenericContext::best_valuation).
The iteration limit is the hard guarantee the loop concludes, with the time limit and the terminate callback optional, sharper, cutoffs.

# Degenerate formulas

- A formula with no clauses has fitness one on any valuation, and so concludes in the first generation.
- A context with no atoms admits only the empty valuation, so every member of a population is identical and breeding is skipped --- ranking alone decides between the threshold and the iteration limit.

# Literature

Genetic algorithms for (MAX-)SAT, and the care needed with them, are surveyed by Gottlieb, Marchiori, and Rossi in *Evolutionary algorithms for the satisfiability problem*.[^note]

[^note]: Evolutionary Computation, 10(1), 2002.
*/

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    procedures::rank::Ranking,
    reports::Report,
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Evolves the population of the context until a conclusion is met, generating the population first if needed.
    ///
    /// Returns the report of the conclusion, also available via [report](GenericContext::report).
    ///
    /// Errors if evolution has already concluded --- for a fresh run over the same formula, build a fresh context.
    pub fn evolve(&mut self) -> Result<Report, ErrorKind> {
        match self.state {
            ContextState::Configuration | ContextState::Input => self.populate()?,

            ContextState::Populated => {}

            ContextState::Evolving => return Err(err::StateError::EvolutionInProgress.into()),

            ContextState::Concluded(_) => {
                return Err(err::StateError::EvolutionConcluded.into());
            }
        }
        self.state = ContextState::Evolving;

        let total_time = std::time::Instant::now();
        let time_limit = self.config.time_limit.value;

        let report = 'evolution_loop: loop {
            self.counters.total_generations += 1;
            log::trace!(target: targets::EVOLVE, "Generation {}", self.counters.total_generations);

            self.counters.time = total_time.elapsed();
            if !time_limit.is_zero() && self.counters.time > time_limit {
                break 'evolution_loop Report::TimeUp;
            }

            if self.check_callback_terminate() {
                break 'evolution_loop Report::Unknown;
            }

            let ranking = self.rank()?;

            // The ranking of a non-empty population is non-empty, and rank errors otherwise.
            let best = ranking[0];

            if self.population_db.note_champion(best.member, best.fitness)? {
                log::info!(
                    target: targets::EVOLVE,
                    "Champion fitness {} at generation {}",
                    best.fitness,
                    self.counters.total_generations
                );
            }

            if self.callback_on_generation_set() {
                let snapshot = self.population_db.member(best.member)?.clone();
                self.make_callback_on_generation(
                    self.counters.total_generations,
                    &snapshot,
                    best.fitness,
                );
            }

            if best.fitness >= self.config.fitness_threshold.value {
                break 'evolution_loop Report::ThresholdMet;
            }

            if self.counters.total_generations >= self.config.iteration_limit.value {
                break 'evolution_loop Report::IterationsExhausted;
            }

            // With no atoms every member is the empty valuation, and there is nothing to breed over.
            if self.atom_db.count() == 0 {
                continue 'evolution_loop;
            }

            self.breed(&ranking)?;
        };

        self.counters.time = total_time.elapsed();
        log::info!(target: targets::EVOLVE, "{report} at generation {}", self.counters.total_generations);

        self.state = ContextState::Concluded(report);
        Ok(report)
    }

    /// Breeds a successor generation from the current population, directed by the given ranking, and renews the population with the successors.
    fn breed(&mut self, ranking: &Ranking) -> Result<(), ErrorKind> {
        let size = self.config.population_size.value;

        let mut successors = Vec::with_capacity(size);
        while successors.len() < size {
            let sire = self.select(ranking)?;
            let dam = self.select(ranking)?;

            let (mut first, mut second) = self.crossover_members(sire, dam, None)?;

            self.mutate(&mut first);
            successors.push(first);

            if successors.len() < size {
                self.mutate(&mut second);
                successors.push(second);
            }
        }

        self.population_db.renew(successors);

        Ok(())
    }
}

use crate::{
    config::{Config, Fitness},
    db::{atom::AtomDB, clause::ClauseDB, population::PopulationDB},
    reports::Report,
    structures::valuation::CValuation,
    types::err::{self, ErrorKind},
};

use super::{
    ContextState, Counters,
    callbacks::{CallbackOnGeneration, CallbackTerminate},
};

/// A generic context, parameratised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
///
/// # Example
///
/// ```rust
/// # use finch_sat::context::GenericContext;
/// # use finch_sat::generic::random::MinimalPCG32;
/// # use finch_sat::config::Config;
/// let context = GenericContext::<MinimalPCG32>::from_config(Config::default());
/// ```
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/evolution.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The population database.
    /// See [db::population](crate::db::population) for details.
    pub population_db: PopulationDB,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// Terminates evolution, if true.
    pub(super) callback_terminate: Option<Box<CallbackTerminate>>,

    /// Called once per generation with the generation, the best member, and the fitness of the best member.
    pub(super) callback_on_generation: Option<Box<CallbackOnGeneration>>,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// The count of generations bred, the initial population included.
    pub fn generation_count(&self) -> usize {
        self.counters.total_generations
    }

    /// The best valuation seen across every generation, with the fitness of the valuation.
    ///
    /// Nothing, until a first generation has been ranked.
    pub fn best_valuation(&self) -> Option<(&CValuation, Fitness)> {
        self.population_db.champion()
    }

    /// The report of a concluded context, or an error if evolution has not concluded.
    pub fn conclusion(&self) -> Result<Report, ErrorKind> {
        match self.state {
            ContextState::Concluded(report) => Ok(report),
            _ => Err(err::ErrorKind::InvalidState),
        }
    }
}

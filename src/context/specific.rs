use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, population::PopulationDB},
    generic::random::MinimalPCG32,
};

use rand::SeedableRng;

use super::{ContextState, Counters, GenericContext};

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// Creates a context from some given configuration.
    ///
    /// The source of randomness is seeded to a fixed value, so two contexts with the same configuration and formula evolve identically.
    /// For distinct runs, see [from_config_seeded](Context::from_config_seeded).
    pub fn from_config(config: Config) -> Self {
        Self::from_config_seeded(config, 0)
    }

    /// Creates a context from some given configuration, with the source of randomness seeded as given.
    pub fn from_config_seeded(config: Config, seed: u64) -> Self {
        Self {
            atom_db: AtomDB::default(),
            clause_db: ClauseDB::default(),
            population_db: PopulationDB::default(),

            config,

            counters: Counters::default(),

            rng: MinimalPCG32::from_seed(seed.to_le_bytes()),
            state: ContextState::Configuration,

            callback_terminate: None,
            callback_on_generation: None,
        }
    }
}

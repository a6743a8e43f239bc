/*!
Configuration of a context.

All configuration for a context is contained within the context, and set up is through a [Config] struct.

Each option is an instance of [ConfigOption], which details the valid range of values for the option and the last state of a context at which the option may be revised.

The defaults are chosen to give quick, deterministic, results on small formulas, and any serious use will want to raise the iteration limit, at least.
*/

mod config_option;
pub use config_option::ConfigOption;

mod fitness;
pub use fitness::Fitness;

mod rng;
pub use rng::{MutationChance, PolarityLean};

use crate::context::ContextState;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// The probability of assigning positive polarity to an atom when generating a member of a population.
    ///
    /// A lean of one half gives the uniform coin flip per atom.
    pub polarity_lean: ConfigOption<PolarityLean>,

    /// The probability with which the value of an atom is flipped during mutation, independently per atom.
    pub mutation_chance: ConfigOption<MutationChance>,

    /// Evolution concludes when the best fitness of a generation meets this threshold.
    pub fitness_threshold: ConfigOption<Fitness>,

    /// The number of valuations in a population.
    pub population_size: ConfigOption<usize>,

    /// The limit on generations bred, the initial population included.
    ///
    /// As the fitness threshold may never be met, this limit is the hard guarantee of termination.
    pub iteration_limit: ConfigOption<usize>,

    /// The time limit for evolution.
    ///
    /// A limit of zero applies no limit.
    pub time_limit: ConfigOption<std::time::Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                max_state: ContextState::Input,
                value: 0.5,
            },

            mutation_chance: ConfigOption {
                name: "mutation_chance",
                min: 0.0,
                max: 1.0,
                max_state: ContextState::Input,
                value: 0.01,
            },

            fitness_threshold: ConfigOption {
                name: "fitness_threshold",
                min: 0.0,
                max: 1.0,
                max_state: ContextState::Input,
                value: 0.75,
            },

            population_size: ConfigOption {
                name: "population_size",
                min: 1,
                max: usize::MAX,
                max_state: ContextState::Input,
                value: 16,
            },

            iteration_limit: ConfigOption {
                name: "iteration_limit",
                min: 1,
                max: usize::MAX,
                max_state: ContextState::Input,
                value: 25,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: std::time::Duration::from_secs(0),
                max: std::time::Duration::MAX,
                max_state: ContextState::Input,
                value: std::time::Duration::from_secs(0),
            },
        }
    }
}

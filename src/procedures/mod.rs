//! Various procedures for mutating a context.
//!
//! For the most part these are methods accessed via a context, and primarily placed here for documentation.
//!
//! The procedures are the operators of a generational genetic algorithm, together with the loop which applies them:
//! - [populate](crate::procedures::populate), to generate an initial population.
//! - [rank](crate::procedures::rank), to measure the fitness of each member of a population and order members by fitness.
//! - [select](crate::procedures::select), to choose a parent from a ranked population.
//! - [crossover](crate::procedures::crossover), to recombine two parents into two children.
//! - [mutate](crate::procedures::mutate), to flip values of a valuation at random.
//! - [evolve](crate::procedures::evolve), the loop.

pub mod crossover;
pub mod evolve;
pub mod mutate;
pub mod populate;
pub mod rank;
pub mod select;

//! Key structures, such as literals and clauses.
//!
//! Most structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//! Use of a trait or it's canonical implementation within the library is situational.
//!
//! # Other structures without a trait and/or canonical implementation.
//!
//! ## Formulas
//!
//!  A formula 𝐅 is a set of [clauses](clause), interpreted as the conjunction of those clauses (and so is the conjunction of disjunctions over literals in some language).
//!
//!  The conjunction of clauses in the [clause database](crate::db::clause) is a *formula*, and as no preprocessing is performed the formula is exactly the formula given to the context.
//!  This is deliberate: the fitness of a valuation is the fraction of *given* clauses the valuation satisfies, and rewriting the formula (e.g. by dropping tautologies) would change the measure.
//!
//! ## Languages
//!
//! A *language* 𝓛 is some set of [atoms](atom), closed under the operations of negation, conjunction, and disjunction. \
//! Every formula is expressed in some language, and every [context](crate::context) is implicitly relative to some language.
//!
//! Languages do not have an implementation. \
//! Instead, the atoms of a context constitute *the* language of interest, and the creation order of atoms fixes the canonical ordering used when valuations are split during [crossover](crate::procedures::crossover).

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;

//! Databases for holding information relevant to evolution.
//!
//!   - [The atom database](crate::db::atom)
//!     + The external names of atoms, kept aside so every other part of the library reads and writes atoms as plain indicies.
//!
//!   - [The clause database](crate::db::clause)
//!     + A collection of clauses, each indexed by a clause key. \
//!       The collection of clauses is the formula 𝐅 whose maximum satisfiability is approximated, and the count of clauses in the database is the denominator of every fitness measure. \
//!       For this reason clauses are stored as given --- duplicate or tautological clauses are never removed, as removal would skew fitness relative to 𝐅.
//!
//!   - [The population database](crate::db::population)
//!     + The valuations of the current generation, replaced wholesale as generations are bred, together with the best valuation seen across every generation.

pub mod atom;
pub mod clause;
mod keys;
pub use keys::*;
pub mod population;

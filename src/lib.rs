//! A library for approximating maximum satisfiability of boolean formulas written in conjunctive normal form.
//!
//! finch_sat takes a formula written in conjunctive normal form and searches for a valuation which satisfies as many clauses of the formula as possible, using a generational genetic algorithm.
//!
//! Exact MAX-SAT solving is NP-hard, and finch_sat makes no attempt at it.
//! Instead, a population of complete valuations is evolved, with the fitness of a valuation taken as the fraction of clauses the valuation satisfies.
//! The evolved result is a good valuation rather than a provably optimal valuation, and for this reason finch_sat is suited to investigating evolutionary solvers, and to applications where a good valuation is enough.
//!
//! Some guiding principles of finch_sat are:
//! - Modularity, with each evolutionary operator implemented as a distinct [procedure](crate::procedures).
//! - Documentation, of both implementation and theory.
//! - Simple efficiency, with annotated uses of unsafe and notes on when using a function would be unsound.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a configuration.
//! Clauses may be added through the [DIMACS](crate::context::GenericContext::read_dimacs) representation of a formula, [programatically](crate::context::GenericContext::add_clause), or at [random](crate::context::GenericContext::random_formula).
//!
//! Internally, and at a high-level, evolution is viewed in terms of manipulation of, and relationships between, a handful of databases which instantiate core theoretical objects.
//! Notably:
//! - A formula is stored in a [clause database](crate::db::clause).
//! - The external names of atoms are stored in an [atom database](crate::db::atom).
//! - The valuations of the current generation, and the best valuation seen, are stored in a [population database](crate::db::population).
//!
//! Each generation of a run is ranked against the formula, and the ranking directs the selection of parents from which the following generation is bred.
//! In terms of implementation, data from the clause and population databases is read, used to build a ranking, which in turn leads to revision of the population database.
//!
//! Useful starting points, then, may be:
//! - The high-level [evolve procedure](crate::procedures::evolve) to inspect the dynamics of a run.
//! - The [database module](crate::db) to inspect the data considered during a run.
//! - The [structures] to familiarise yourself with the abstract elements of a formula and their representation (literals, clauses, etc.)
//! - The [configuration](crate::config) to see which parameters are supported.
//!
//! If you're in search of cnf formulas consider:
//! - The SATLIB benchmark problems at [www.cs.ubc.ca/~hoos/SATLIB/benchm.html](https://www.cs.ubc.ca/~hoos/SATLIB/benchm.html)
//! - The MaxSAT evaluations at [maxsat-evaluations.github.io](https://maxsat-evaluations.github.io)
//! - The [random formula builder](crate::context::GenericContext::random_formula)
//!
//! # Examples
//!
//! + Evolve a valuation for a trivially satisfiable formula.
//!
//! ```rust
//! # use finch_sat::config::Config;
//! # use finch_sat::context::Context;
//! # use finch_sat::reports::Report;
//! use finch_sat::structures::literal::{CLiteral, Literal};
//!
//! let mut the_context: Context = Context::from_config(Config::default());
//!
//! let p = the_context.fresh_or_max_atom();
//! let q = the_context.fresh_or_max_atom();
//!
//! let clause = vec![CLiteral::new(p, true), CLiteral::new(q, true)];
//! assert!(the_context.add_clause(clause).is_ok());
//!
//! assert!(the_context.evolve().is_ok());
//! assert_eq!(the_context.report(), Report::ThresholdMet);
//!
//! let (_valuation, fitness) = the_context.best_valuation().unwrap();
//! assert_eq!(fitness, 1.0);
//! ```
//!
//! + Parse a DIMACS formula and evolve against it.
//!
//! ```rust
//! # use finch_sat::context::Context;
//! # use finch_sat::config::Config;
//! # use finch_sat::reports::Report;
//! # use std::io::Write;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let mut dimacs = vec![];
//! let _ = dimacs.write(b"
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ");
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! assert!(the_context.evolve().is_ok());
//!
//! // The formula is unsatisfiable, though three of the four clauses may be satisfied.
//! assert_ne!(the_context.report(), Report::Unknown);
//! let (_valuation, fitness) = the_context.best_valuation().unwrap();
//! assert!(fitness <= 0.75);
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! As logging is only built on request, and further can be requested by level, logs are verbose.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [selection](crate::procedures::select) can be filtered with `RUST_LOG=select …` or,
//! - Logs of each generation without information about the operators can be found with `RUST_LOG=evolve=info …`

#![allow(clippy::single_match)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod misc;

pub mod reports;

//! Generation of random formulas with a fixed clause length.
//!
//! Random formulas are useful when exploring how evolution responds to configuration, as formulas with the same shape may be generated across seeds.
//!
//! The atoms of each clause are sampled without replacement, so a generated clause never contains a duplicate literal, and is never a tautology.

use crate::{
    context::GenericContext,
    structures::{
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Extends the formula of the context with a random formula over fresh atoms.
    ///
    /// `atoms` fresh atoms are obtained, and each of `clauses` clauses is built by sampling `length` distinct atoms from the fresh atoms, negating each with the flip of a fair coin.
    /// With a length of three, this is the fixed clause length model of random 3-SAT.
    ///
    /// Errors if `length` is zero, as clauses are non-empty, or if `length` exceeds `atoms`, as the atoms of a clause are distinct.
    ///
    /// ```rust
    /// # use finch_sat::context::Context;
    /// # use finch_sat::config::Config;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// assert!(the_context.random_formula(5, 12, 3).is_ok());
    /// assert_eq!(the_context.clause_db.count(), 12);
    ///
    /// assert!(the_context.evolve().is_ok());
    /// ```
    pub fn random_formula(
        &mut self,
        atoms: usize,
        clauses: usize,
        length: usize,
    ) -> Result<(), ErrorKind> {
        if length == 0 {
            return Err(err::ClauseDBError::EmptyClause.into());
        }
        if atoms < length {
            return Err(err::BuildError::ClauseLength.into());
        }

        let mut fresh_atoms = Vec::with_capacity(atoms);
        for _ in 0..atoms {
            fresh_atoms.push(self.fresh_atom()?);
        }

        for _ in 0..clauses {
            let mut the_clause: CClause = Vec::with_capacity(length);

            while the_clause.len() < length {
                let the_atom = fresh_atoms[self.rng.random_range(0..atoms)];

                if the_clause.iter().any(|l| l.atom() == the_atom) {
                    continue;
                }

                the_clause.push(CLiteral::new(the_atom, self.rng.random_bool(0.5)));
            }

            self.add_clause(the_clause)?;
        }

        Ok(())
    }
}

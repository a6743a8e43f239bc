//! Methods for building structures from strings.
//!
//! Atoms are referenced by name, and a fresh atom is obtained whenever a name is not known to the context.
//! So, small formulas may be written directly:
//!
//! ```rust
//! # use finch_sat::context::Context;
//! # use finch_sat::config::Config;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let clause = the_context.clause_from_string("p -q").unwrap();
//! assert!(the_context.add_clause(clause).is_ok());
//! assert_eq!(the_context.atom_db.count(), 2);
//! ```

use crate::{
    context::GenericContext,
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// The atom named by the given string, fresh if the name is not known to the context.
    ///
    /// Errors if the string is empty, or if a fresh atom was required and could not be obtained.
    pub fn atom_from_string(&mut self, string: &str) -> Result<Atom, ErrorKind> {
        if string.is_empty() {
            return Err(err::ParseError::Empty.into());
        }

        match self.atom_db.internal_representation(string) {
            Some(atom) => Ok(atom),
            None => self.fresh_atom_fundamental(string),
        }
    }

    /// The literal of the given string, with a leading `-` read as negation --- e.g. `-four` pairs the atom named `four` with negative polarity.
    ///
    /// The atom of the literal is obtained with [atom_from_string](GenericContext::atom_from_string), and so is fresh if the name is not known to the context.
    pub fn literal_from_string(&mut self, string: &str) -> Result<CLiteral, ErrorKind> {
        let trimmed_string = string.trim();
        if trimmed_string.is_empty() {
            return Err(err::ParseError::Empty.into());
        }
        if trimmed_string == "-" {
            return Err(err::ParseError::Negation.into());
        }

        let polarity = !trimmed_string.starts_with('-');

        let mut the_name = trimmed_string;
        if !polarity {
            the_name = &the_name[1..];
        }

        let the_atom = self.atom_from_string(the_name)?;
        Ok(CLiteral::new(the_atom, polarity))
    }

    /// The clause of the given string of whitespace separated literals, e.g. `p -q`.
    ///
    /// Duplicate literals are dropped, as the clause is read as the disjunction of the literals.
    /// The clause is *not* added to the context --- for that, see [add_clause](GenericContext::add_clause).
    pub fn clause_from_string(&mut self, string: &str) -> Result<CClause, ErrorKind> {
        let string_literals = string.split_whitespace();
        let mut the_clause = vec![];

        for string_literal in string_literals {
            let the_literal = self.literal_from_string(string_literal)?;
            if !the_clause.iter().any(|l| *l == the_literal) {
                the_clause.push(the_literal);
            }
        }

        Ok(the_clause)
    }
}

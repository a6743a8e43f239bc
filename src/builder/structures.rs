use crate::{
    context::{ContextState, GenericContext},
    db::ClauseKey,
    structures::{
        atom::{ATOM_MAX, Atom},
        clause::Clause,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Returns a fresh atom, named by the numeral of its DIMACS representation.
    ///
    /// For a practical alternative, see [fresh_or_max_atom](GenericContext::fresh_or_max_atom).
    /// To name the atom, see [atom_from_string](GenericContext::atom_from_string).
    pub fn fresh_atom(&mut self) -> Result<Atom, err::ErrorKind> {
        let name = (self.atom_db.count() + 1).to_string();
        self.fresh_atom_fundamental(&name)
    }

    /// Returns a fresh atom, or the maximum atom.
    ///
    /// In short, a safe alternative to unwrapping the result of [fresh_atom](GenericContext::fresh_atom), by defaulting to the maximum limit of an atom.
    /// And, as exhausting the atom limit is unlikely in many applications, this may be preferred.
    ///
    /// # Panics
    /// If a fresh atom conflicts with the state of the context, e.g. if a population exists.
    pub fn fresh_or_max_atom(&mut self) -> Atom {
        match self.fresh_atom() {
            Ok(atom) => atom,
            Err(ErrorKind::AtomDB(err::AtomDBError::AtomsExhausted)) => ATOM_MAX,
            Err(e) => panic!("{e:?}"),
        }
    }

    /// The fundamental method for obtaining a fresh atom --- on Ok the atom is part of the language of the context, under the given name.
    ///
    /// Errors if the atom limit has been met, or if a population exists --- a fresh atom would extend the valuations measured.
    pub fn fresh_atom_fundamental(&mut self, name: &str) -> Result<Atom, err::ErrorKind> {
        match self.state {
            ContextState::Configuration | ContextState::Input => {}

            ContextState::Populated | ContextState::Evolving | ContextState::Concluded(_) => {
                return Err(err::StateError::PopulationExists.into());
            }
        }

        let atom = self.atom_db.fresh_atom(name)?;
        self.state = ContextState::Input;

        Ok(atom)
    }
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Returns a fresh literal with value true.
    ///
    /// Alternatively, see [fresh_or_max_literal](GenericContext::fresh_or_max_literal).
    pub fn fresh_literal(&mut self) -> Result<CLiteral, err::ErrorKind> {
        let atom = self.fresh_atom()?;
        Ok(CLiteral::new(atom, true))
    }

    /// Returns a fresh literal with value true, or the maximum atom with value true.
    ///
    /// # Panics
    /// As [fresh_or_max_atom](GenericContext::fresh_or_max_atom) panics.
    pub fn fresh_or_max_literal(&mut self) -> CLiteral {
        CLiteral::new(self.fresh_or_max_atom(), true)
    }

    /// Returns a vector containing `count` literals with either a fresh atom or the maximum atom and valued true.
    pub fn fresh_or_max_literals(&mut self, count: usize) -> Vec<CLiteral> {
        let mut literals = Vec::default();
        for _ in 0..count {
            literals.push(self.fresh_or_max_literal());
        }
        literals
    }
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Adds a clause to the formula of the context, and returns the key of the stored clause.
    ///
    /// The clause is stored as given.
    /// Duplicate literals, duplicate clauses, and tautologies all count towards the fitness of a valuation, so no form of preprocessing is applied.
    /// (Though, methods which build clauses may simplify, e.g. [clause_from_string](GenericContext::clause_from_string).)
    ///
    /// Errors if the clause is empty, if some atom of the clause is not part of the context, or if a population exists --- the fitness of a member of the population would not account for the clause.
    pub fn add_clause<C: Clause>(&mut self, clause: C) -> Result<ClauseKey, err::ErrorKind> {
        match self.state {
            ContextState::Configuration | ContextState::Input => {}

            ContextState::Populated | ContextState::Evolving | ContextState::Concluded(_) => {
                return Err(err::StateError::PopulationExists.into());
            }
        }

        if clause.size() == 0 {
            return Err(err::ClauseDBError::EmptyClause.into());
        }

        for literal in clause.literals() {
            if (literal.atom() as usize) >= self.atom_db.count() {
                return Err(err::AtomDBError::Unregistered(literal.atom()).into());
            }
        }

        let key = self.clause_db.store(clause.canonical())?;
        self.state = ContextState::Input;

        Ok(key)
    }
}

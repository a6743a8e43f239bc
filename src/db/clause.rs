/*!
A database of clause related things.

The database holds the clauses of the formula, in order of addition.

Two notes, with some weight:
- The count of clauses in the database is the denominator of every fitness measure.
  So, clauses are stored exactly as given --- duplicate clauses, duplicate literals, and tautologies are all kept, as each counts toward the fitness of a valuation.
- Clauses are never removed, and a population is only generated after the formula is fixed.
  So, a key to a clause is stable, and the count of satisfied clauses is comparable across generations.

The field of the database is private to uphold these invariants.
*/

use crate::{
    db::ClauseKey,
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        valuation::Valuation,
    },
    types::err::{self},
};

/// A database of clause related things.
#[derive(Default)]
pub struct ClauseDB {
    /// Clauses of the formula, in order of addition.
    clauses: Vec<CClause>,
}

impl ClauseDB {
    /// Stores a clause and returns the key to the clause.
    ///
    /// Empty clauses are rejected --- an empty clause is false on every valuation, and holds no literals to inspect.
    pub fn store(&mut self, clause: CClause) -> Result<ClauseKey, err::ClauseDBError> {
        if clause.size() == 0 {
            log::warn!(target: targets::CLAUSE_DB, "Rejected an empty clause");
            return Err(err::ClauseDBError::EmptyClause);
        }

        let key = self.clauses.len();
        log::trace!(target: targets::CLAUSE_DB, "{key} ⟵ {}", clause.as_string());
        self.clauses.push(clause);

        Ok(key)
    }

    /// The clause stored with the given key.
    pub fn get(&self, key: ClauseKey) -> Result<&CClause, err::ClauseDBError> {
        match self.clauses.get(key) {
            Some(clause) => Ok(clause),
            None => Err(err::ClauseDBError::InvalidKeyIndex),
        }
    }

    /// The clause stored with the given key.
    ///
    /// # Safety
    /// Does not check the key indexes a stored clause.
    pub unsafe fn get_unchecked(&self, key: ClauseKey) -> &CClause {
        unsafe { self.clauses.get_unchecked(key) }
    }

    /// A count of the clauses in the database.
    pub fn count(&self) -> usize {
        self.clauses.len()
    }

    /// An iterator over the clauses of the database, in order of addition.
    pub fn clauses(&self) -> impl Iterator<Item = &CClause> {
        self.clauses.iter()
    }

    /// A count of the clauses satisfied on the given valuation.
    ///
    /// Atoms outside the valuation fail to satisfy a literal, see [satisfied_on](crate::structures::clause::Clause::satisfied_on).
    pub fn satisfied_count(&self, valuation: &impl Valuation) -> usize {
        self.clauses
            .iter()
            .filter(|clause| clause.satisfied_on(valuation))
            .count()
    }

    /// A count of the clauses satisfied on the given valuation.
    ///
    /// # Safety
    /// Does not check the atoms of stored clauses are part of the valuation.
    pub unsafe fn satisfied_count_unchecked(&self, valuation: &impl Valuation) -> usize {
        self.clauses
            .iter()
            .filter(|clause| unsafe { clause.satisfied_on_unchecked(valuation) })
            .count()
    }
}

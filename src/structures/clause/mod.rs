//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use finch_sat::structures::literal::ABLiteral;
//! # use finch_sat::structures::literal::Literal;
//! # use finch_sat::structures::clause::Clause;
//! let clause = vec![ABLiteral::new(2, true),
//!                   ABLiteral::new(0, false)];
//!
//! assert_eq!(clause.size(), 2);
//!
//! let mut some_valuation = vec![true, true, false];
//!
//! assert!(!clause.satisfied_on(&some_valuation));
//!
//! some_valuation[2] = true;
//! assert!(clause.satisfied_on(&some_valuation));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).
//!
//! Note, clauses are never rewritten after construction.
//! In particular, a tautological clause (one containing a literal and its negation) is satisfied on every valuation, but still counts as a clause when the fitness of a valuation is measured, and so is kept.

mod literal;
mod v_clause;

use crate::structures::{
    atom::Atom,
    literal::CLiteral,
    valuation::Valuation,
};

/// The clause trait.
pub trait Clause {
    /// Some string representation of the clause.
    /// The representation does not need to use the external representation of atoms within the clause.
    fn as_string(&self) -> String;

    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// Returns whether the clause is satisfied on the given valuation.
    /// That is, whether at least one literal of the clause evaluates to true under the valuation.
    ///
    /// Atoms outside the valuation fail to satisfy a literal, so a clause over such atoms is reported unsatisfied.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool;

    /// Returns whether the clause is satisfied on the given valuation.
    ///
    /// # Safety
    /// Does not check whether the atoms of the clause are part of the valuation.
    unsafe fn satisfied_on_unchecked(&self, valuation: &impl Valuation) -> bool;

    /// An iterator over all literals in the clause, order is not guaranteed.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, order is not guaranteed.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;
}

/// The implementation of a clause as a vector of literals.
pub type VClause = Vec<CLiteral>;

/// The canonical implementation of a clause.
pub type CClause = VClause;

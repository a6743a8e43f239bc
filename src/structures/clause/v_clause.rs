//! Implementation of the clause trait for a vector of literals.

use crate::structures::{
    atom::Atom,
    clause::Clause,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

use std::ops::Deref;

use super::VClause;

impl Clause for VClause {
    fn as_string(&self) -> String {
        let mut the_string = String::default();
        for literal in self.deref() {
            the_string.push_str(format!("{literal} ").as_str());
        }
        the_string.pop();
        the_string
    }

    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in self.deref() {
            let the_representation = match literal.polarity() {
                true => format!(" {} ", literal.as_int()),
                false => format!("{} ", literal.as_int()),
            };
            the_string.push_str(the_representation.as_str());
        }
        if zero {
            the_string += "0";
            the_string
        } else {
            the_string.pop();
            the_string
        }
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.iter()
            .any(|literal| valuation.value_of_literal(literal) == Some(true))
    }

    unsafe fn satisfied_on_unchecked(&self, valuation: &impl Valuation) -> bool {
        self.iter()
            .any(|literal| unsafe { valuation.value_of_unchecked(literal.atom()) } == literal.polarity())
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn canonical(self) -> super::CClause {
        self
    }
}

//! Implementation of the clause trait for a (single) literal.

use crate::structures::{
    clause::Clause,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

impl Clause for CLiteral {
    fn as_string(&self) -> String {
        match self.polarity() {
            true => format!(" {self}"),
            false => format!("{self}"),
        }
    }

    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();

        let the_representation = match self.polarity() {
            true => format!(" {} ", self.as_int()),
            false => format!("{} ", self.as_int()),
        };
        the_string.push_str(the_representation.as_str());

        if zero {
            the_string += "0";
            the_string
        } else {
            the_string.pop();
            the_string
        }
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        valuation.value_of_literal(self) == Some(true)
    }

    unsafe fn satisfied_on_unchecked(&self, valuation: &impl Valuation) -> bool {
        unsafe { valuation.value_of_unchecked(self.atom()) == self.polarity() }
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        std::iter::once(self)
    }

    fn size(&self) -> usize {
        1
    }

    fn atoms(&self) -> impl Iterator<Item = crate::structures::atom::Atom> {
        std::iter::once(self.atom())
    }

    fn canonical(self) -> super::CClause {
        vec![self]
    }
}

//! Implementation of the valuation trait for any structure which can be mutably dereferenced to a slice of booleans.

use std::borrow::Borrow;

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

impl<T: std::ops::DerefMut<Target = [bool]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied()
    }

    unsafe fn value_of_unchecked(&self, atom: Atom) -> bool {
        unsafe { *self.get_unchecked(atom as usize) }
    }

    fn value_of_literal(&self, literal: impl Borrow<CLiteral>) -> Option<bool> {
        let literal = literal.borrow();
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    fn set_value_of(&mut self, atom: Atom, value: bool) -> Option<bool> {
        let cell = self.get_mut(atom as usize)?;
        Some(std::mem::replace(cell, value))
    }

    fn set_value_of_literal(&mut self, literal: impl Borrow<CLiteral>, value: bool) -> Option<bool> {
        let literal = literal.borrow();
        self.set_value_of(literal.atom(), literal.polarity() == value)
    }

    fn values(&self) -> impl Iterator<Item = bool> {
        self.iter().copied()
    }

    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, bool)> {
        self.iter()
            .enumerate()
            .map(|(atom, value)| (atom as Atom, *value))
    }

    fn canonical(&self) -> super::CValuation {
        self.to_vec()
    }

    fn atom_count(&self) -> usize {
        self.len()
    }
}

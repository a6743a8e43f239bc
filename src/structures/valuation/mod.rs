/*!
A total function from atoms to truth values.

The canonical representation of a valuation is a vector of booleans, where the index of the vector is interpreted as an atom, though most interaction is through the valuation trait.

In other words, the canonical representation of a valuation 𝐯 is a vector *v* whose length is the number of atoms in the context such that:
- *v*\[a\] = true *if and only if* 𝐯(𝐚) = true.
- *v*\[a\] = false *if and only if* 𝐯(𝐚) = false.

The trait is implemented for anything which can be mutably dereferenced to a slice of booleans.

```rust
# use finch_sat::structures::valuation::Valuation;
# use finch_sat::structures::literal::{CLiteral, Literal};
let mut valuation = vec![true, false, true];

assert_eq!(valuation.value_of(1), Some(false));
assert_eq!(valuation.atom_count(), 3);

let negative_one = CLiteral::new(1, false);
assert_eq!(valuation.value_of_literal(negative_one), Some(true));

valuation.set_value_of(1, true);
assert_eq!(valuation.value_of_literal(negative_one), Some(false));
```

Unlike a solver which derives values atom by atom, every valuation here is total by construction: members of a [population](crate::db::population) are built with a value for each atom of the context, and crossover and mutation preserve length.
For this reason the unsafe `value_of_unchecked` is preferred over the safe `value_of` internally, with the guarantee that an atom is within bounds resting on the construction of the valuation.

# Soundness

The valuation trait is implemented for any structure which can be mutably dereferenced to a slice of booleans.
And, as the value of an atom is determined by using the atom as an index on the dereferenced structure, there is no structural guarantee that the returned value is for the atom.

In other words, a sub-slice shifts which atom an index names:

```rust
# use finch_sat::structures::valuation::Valuation;
let valuation = vec![true, false, true];

let shifted = valuation[1..].to_vec();
assert_eq!(shifted.value_of(0), Some(false));
```
*/

mod slice_impl;

use std::borrow::Borrow;

use super::{atom::Atom, literal::CLiteral};

/// The implementation of a valuation as a vector of booleans.
pub type VValuation = Vec<bool>;

/// The canonical representation of a valuation.
pub type CValuation = VValuation;

/// A valuation is something which stores the value of each atom of a context.
pub trait Valuation {
    /// The value of an atom under the valuation, or nothing if the atom is outside the valuation.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// The value of an atom under the valuation.
    ///
    /// # Safety
    /// Implementations are not required to check the atom is part of the valuation.
    unsafe fn value_of_unchecked(&self, atom: Atom) -> bool;

    /// The value of a literal under the valuation.
    /// True when the value of the atom of the literal matches the polarity of the literal, and nothing if the atom is outside the valuation.
    fn value_of_literal(&self, literal: impl Borrow<CLiteral>) -> Option<bool>;

    /// Sets the value of an atom, returning the previous value, or nothing if the atom is outside the valuation.
    fn set_value_of(&mut self, atom: Atom, value: bool) -> Option<bool>;

    /// Sets the value of the atom of a literal so the literal takes the given value under the valuation.
    /// Returns the previous value of the atom, or nothing if the atom is outside the valuation.
    fn set_value_of_literal(&mut self, literal: impl Borrow<CLiteral>, value: bool) -> Option<bool>;

    /// An iterator over the values of the atoms in the valuation, in strict, contiguous, atom order.
    /// I.e. the first element is the value of atom '0' and the *n*th element the value of atom *n - 1*.
    fn values(&self) -> impl Iterator<Item = bool>;

    /// An iterator through all (Atom, value) pairs.
    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, bool)>;

    /// The canonical representation of the valuation as a canonical valuation ([CValuation]).
    fn canonical(&self) -> CValuation;

    /// A count of all the atoms in the valuation.
    fn atom_count(&self) -> usize;
}

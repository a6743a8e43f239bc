/*!
(The internal representation of) an atom (aka. a 'variable').

Broadly, atoms are things with a name to which assigning a (boolean) value (true or false) is of interest.
- 'Internal' atoms are used internal to a context.
- 'External' atoms are used during external interaction with a context, e.g. when providing a formula as input or reading the value of an atom. \
     External atoms are a string of non-whitespace characters which does not begin with '-' (a minus sign). \
     Examples: `p`, `atom_one`, `96`, `0`.

Each (*internal*) atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

That is, the atoms are [0..*m*) for some *m*.

This representation allows atoms to be used as the indices of a structure, e.g. `valuation[a]`, without taking too much space.
In particular, a valuation stores the value of atom *a* at index *a*, and the order of atoms by index is the canonical ordering over which valuations are split during [crossover](crate::procedures::crossover).

# Notes
- The external representation of an atom is stored in the [atom database](crate::db::atom).
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// Limited to the bound of an i32 in order to support conversion between literals and their DIMACS representation.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();

/*!
A database of atom related things.

Internally an atom is an index, and the database holds the external name of each atom:
- `internal_map` sends the name of an atom to the atom.
- `external_map` sends an atom to the name of the atom, by indexing the map with the atom.

Names are free-form, so atoms may be symbolic (`"a"`, `"x1"`, …) or numeric (`"3"`, …).
An atom obtained without a name is named by the numeral of its DIMACS representation, and as a consequence the atoms of a DIMACS formula keep their names when read and written.

The database also renders valuations with the external name of each atom, see [valuation_string](AtomDB::valuation_string).
*/

use std::collections::HashMap;

use crate::{
    structures::{
        atom::{ATOM_MAX, Atom},
        valuation::Valuation,
    },
    types::err::{self},
};

/// The atom database.
#[derive(Default)]
pub struct AtomDB {
    /// A map from the external name of an atom to the atom.
    internal_map: HashMap<String, Atom>,

    /// A map from an atom to the external name of the atom, indexed by atoms.
    external_map: Vec<String>,
}

impl AtomDB {
    /// A count of the atoms in the database.
    pub fn count(&self) -> usize {
        self.external_map.len()
    }

    /// The atom named by the given string, if the name is known to the database.
    pub fn internal_representation(&self, name: &str) -> Option<Atom> {
        self.internal_map.get(name).copied()
    }

    /// The external name of an atom.
    ///
    /// # Panics
    /// If the atom is not part of the database.
    pub fn external_representation(&self, atom: Atom) -> &str {
        &self.external_map[atom as usize]
    }

    /// A fresh atom with the given external name, or an error if the atom limit has been met.
    ///
    /// The name is not checked against names already in the database.
    /// If the name is known, lookup by name sends the name to the fresh atom, though the named atom is otherwise unaffected.
    /// To reuse known names, see [atom_from_string](crate::context::GenericContext::atom_from_string).
    pub fn fresh_atom(&mut self, name: &str) -> Result<Atom, err::AtomDBError> {
        let atom = match self.count().try_into() {
            Ok(atom) if atom < ATOM_MAX => atom,
            _ => return Err(err::AtomDBError::AtomsExhausted),
        };

        self.internal_map.insert(name.to_string(), atom);
        self.external_map.push(name.to_string());

        Ok(atom)
    }

    /// A string of the given valuation, using the external name of each atom.
    ///
    /// Positive atoms are written with a leading space and negative atoms with a leading `-`, e.g. ` p -q  r`.
    /// Atoms outside the valuation, or values outside the atoms of the database, are skipped.
    pub fn valuation_string(&self, valuation: &impl Valuation) -> String {
        valuation
            .atom_value_pairs()
            .take(self.count())
            .map(|(atom, value)| match value {
                true => format!(" {}", self.external_representation(atom)),
                false => format!("-{}", self.external_representation(atom)),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

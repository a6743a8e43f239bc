use crate::structures::atom::Atom;

use super::Literal;

/// The representation of a literal as an atom paired with a boolean.
#[derive(Clone, Copy, Debug)]
pub struct ABLiteral {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

impl Literal for ABLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    fn negate(&self) -> Self {
        Self {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    fn atom(&self) -> Atom {
        self.atom
    }

    fn polarity(&self) -> bool {
        self.polarity
    }

    fn canonical(&self) -> super::CLiteral {
        *self
    }

    fn as_int(&self) -> isize {
        // Internal atoms are zero based while the DIMACS representation is one based.
        match self.polarity {
            true => (self.atom + 1) as isize,
            false => -((self.atom + 1) as isize),
        }
    }
}

// Traits

impl PartialOrd for ABLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ABLiteral {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.atom == other.atom {
            self.polarity.cmp(&other.polarity)
        } else {
            self.atom.cmp(&other.atom)
        }
    }
}

impl PartialEq for ABLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.atom == other.atom && self.polarity == other.polarity
    }
}

impl Eq for ABLiteral {}

impl std::hash::Hash for ABLiteral {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.atom.hash(state);
        self.polarity.hash(state);
    }
}

impl std::fmt::Display for ABLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}

impl std::ops::Neg for ABLiteral {
    type Output = ABLiteral;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

// From

impl From<i32> for ABLiteral {
    /// The literal of a DIMACS style integer, e.g. `-3` pairs the atom externally numbered '3' with negative polarity.
    ///
    /// As `0` terminates a DIMACS clause it does not name a literal, and is treated as the first atom.
    fn from(value: i32) -> Self {
        ABLiteral::new(value.unsigned_abs().saturating_sub(1), value.is_positive())
    }
}

impl From<&i32> for ABLiteral {
    fn from(value: &i32) -> Self {
        ABLiteral::new(value.unsigned_abs().saturating_sub(1), value.is_positive())
    }
}

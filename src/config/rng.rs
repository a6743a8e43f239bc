/// Representation for the probability of choosing `true`
pub type PolarityLean = f64;

/// Representation for the probability of flipping the value of an atom
pub type MutationChance = f64;

/*!
Recombination of two parents into two children, by single point crossover.

The atoms of a context are a contiguous block of indicies, and this fixes a canonical ordering of the values of a valuation.
Crossover splices two valuations at a point in this ordering:

```none
                 point
                   ⌄
  sire:  s₀ s₁ … sₚ | sₚ₊₁ … sₙ₋₁
  dam:   d₀ d₁ … dₚ | dₚ₊₁ … dₙ₋₁

  first:  s₀ s₁ … sₚ  dₚ₊₁ … dₙ₋₁
  second: d₀ d₁ … dₚ  sₚ₊₁ … sₙ₋₁
```

The first child takes the values of the sire up to *and including* the point, and the values of the dam after.
The second child is the mirror.
So, for any point the pair of children partition the values of the pair of parents.

A point must name an atom --- from zero up to, but excluding, the count of atoms.
Note the distinction between a point at zero and a point at the final atom: a point at zero takes a single value from the first parent, while a point at the final atom takes every value (and each child is a copy of a parent).

Parents are read, never written, and children are fresh valuations.
*/

use crate::{
    context::GenericContext,
    db::MemberKey,
    misc::log::targets::{self},
    structures::valuation::CValuation,
    types::err::{self, ErrorKind},
};

/// The single point crossover of two valuations at the given point.
///
/// Errors if the valuations differ in length, or if the point does not name an atom of the valuations.
pub fn crossover(
    sire: &[bool],
    dam: &[bool],
    point: usize,
) -> Result<(CValuation, CValuation), err::PopulationError> {
    if sire.len() != dam.len() {
        return Err(err::PopulationError::MismatchedMembers);
    }

    if point >= sire.len() {
        return Err(err::PopulationError::CrossoverBound);
    }

    let mut first = Vec::with_capacity(sire.len());
    first.extend_from_slice(&sire[..=point]);
    first.extend_from_slice(&dam[point + 1..]);

    let mut second = Vec::with_capacity(dam.len());
    second.extend_from_slice(&dam[..=point]);
    second.extend_from_slice(&sire[point + 1..]);

    Ok((first, second))
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// The single point crossover of two members of the population, with the point drawn uniformly from the atoms of the context when not given.
    ///
    /// Errors if a key does not index a member, or via [crossover] --- in particular, with no atoms there is no point to draw, and [CrossoverBound](err::PopulationError::CrossoverBound) is returned.
    pub fn crossover_members(
        &mut self,
        sire: MemberKey,
        dam: MemberKey,
        point: Option<usize>,
    ) -> Result<(CValuation, CValuation), ErrorKind> {
        let point = match point {
            Some(point) => point,

            None => match self.atom_db.count() {
                0 => return Err(err::PopulationError::CrossoverBound.into()),
                count => self.rng.random_range(0..count),
            },
        };

        let children = crossover(
            self.population_db.member(sire)?,
            self.population_db.member(dam)?,
            point,
        )?;

        self.counters.total_recombinations += 1;
        log::trace!(target: targets::CROSSOVER, "{sire} ⨯ {dam} at {point}");

        Ok(children)
    }
}

/*!
A database of population related things.

The database holds:
- The members of the current generation, with each member a total valuation over the atoms of the context.
- The champion --- the best member seen across every generation, noted with its fitness.

Members are replaced wholesale when a generation is bred, and no member of one generation aliases a member of another --- each is a fresh valuation, read through a [MemberKey].

The champion is kept apart from the members, as plain generational replacement may lose the best valuation seen.
A note of a champion is only taken when the fitness of a candidate is *strictly* greater than the fitness of the stored champion, so between members of equal fitness the champion is the member seen first.

Fields of the database are private to uphold these invariants.
*/

use crate::{
    config::Fitness,
    db::MemberKey,
    misc::log::targets::{self},
    structures::valuation::{CValuation, Valuation},
    types::err::{self},
};

/// A database of population related things.
#[derive(Default)]
pub struct PopulationDB {
    /// The members of the current generation.
    members: Vec<CValuation>,

    /// The best member seen across every generation, with its fitness.
    champion: Option<(CValuation, Fitness)>,
}

impl PopulationDB {
    /// The member stored with the given key.
    pub fn member(&self, key: MemberKey) -> Result<&CValuation, err::PopulationError> {
        match self.members.get(key) {
            Some(member) => Ok(member),
            None => Err(err::PopulationError::InvalidKeyIndex),
        }
    }

    /// The member stored with the given key.
    ///
    /// # Safety
    /// Does not check the key indexes a stored member.
    pub unsafe fn member_unchecked(&self, key: MemberKey) -> &CValuation {
        unsafe { self.members.get_unchecked(key) }
    }

    /// An iterator over the members of the current generation, by key order.
    pub fn members(&self) -> impl Iterator<Item = &CValuation> {
        self.members.iter()
    }

    /// A count of the members of the current generation.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Replaces the members of the current generation with the given successors.
    pub fn renew(&mut self, successors: Vec<CValuation>) {
        log::trace!(target: targets::POPULATION, "Population renewed with {} members", successors.len());
        self.members = successors;
    }

    /// Notes the given member as champion, if its fitness is strictly greater than the fitness of the stored champion.
    ///
    /// Returns true if the note was taken.
    pub fn note_champion(
        &mut self,
        key: MemberKey,
        fitness: Fitness,
    ) -> Result<bool, err::PopulationError> {
        if let Some((_, reigning)) = &self.champion {
            if fitness <= *reigning {
                return Ok(false);
            }
        }

        let snapshot = self.member(key)?.canonical();
        log::info!(target: targets::POPULATION, "Champion with fitness {fitness}");
        self.champion = Some((snapshot, fitness));

        Ok(true)
    }

    /// The best member seen across every generation, with its fitness.
    pub fn champion(&self) -> Option<(&CValuation, Fitness)> {
        self.champion
            .as_ref()
            .map(|(valuation, fitness)| (valuation, *fitness))
    }
}

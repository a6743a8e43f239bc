/*!
Generation of an initial population.

Each member of the population is a total valuation over the atoms of the context, built by valuing each atom true with probability [polarity_lean](crate::config::Config::polarity_lean) --- with the default lean of one half, a fair coin flip per atom.

Values are drawn independently across atoms and across members, and each member is a fresh valuation --- no two members share structure, so the mutation of one member cannot touch another.

Generating a population fixes the formula of the context, as measures of the population are relative to the clauses of the formula at the time of generation.
*/

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Generates a population of [population_size](crate::config::Config::population_size) fresh valuations, each over every atom of the context.
    ///
    /// Errors if a population already exists, or if the configured size is zero.
    pub fn populate(&mut self) -> Result<(), ErrorKind> {
        match self.state {
            ContextState::Configuration | ContextState::Input => {}

            ContextState::Populated | ContextState::Evolving | ContextState::Concluded(_) => {
                return Err(err::StateError::PopulationExists.into());
            }
        }

        let size = self.config.population_size.value;
        if size == 0 {
            return Err(err::PopulationError::Empty.into());
        }

        let atom_count = self.atom_db.count();
        let lean = self.config.polarity_lean.value;

        let mut members = Vec::with_capacity(size);
        for _ in 0..size {
            let mut member = Vec::with_capacity(atom_count);
            for _ in 0..atom_count {
                member.push(self.rng.random_bool(lean));
            }
            members.push(member);
        }

        log::trace!(target: targets::POPULATE, "{size} members generated over {atom_count} atoms");

        self.population_db.renew(members);
        self.state = ContextState::Populated;

        Ok(())
    }
}

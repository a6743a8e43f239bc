/*!
The context --- to which formulas are added and within which evolution takes place, etc.

Strictly, a [GenericContext] and a [Context].

The generic context is designed to be generic over various parameters.
Though, for the moment this is limited to the source of randomness.

Still, this helps distinguish generic context methods against those intended for external use or a particular application.
In particular, [from_config](Context::from_config) is implemented for a context rather than a generic context to avoid requiring a source of randomness to be supplied alongside a config.

# Example
```rust
# use finch_sat::context::Context;
# use finch_sat::config::Config;
# use finch_sat::reports::Report;
# use finch_sat::structures::literal::{CLiteral, Literal};
let mut config = Config::default();
config.population_size.value = 64;

let mut the_context = Context::from_config(config);

let p = the_context.fresh_or_max_atom();
let q = the_context.fresh_or_max_atom();

let p_q_clause = vec![CLiteral::new(p, true), CLiteral::new(q, true)];
assert!(the_context.add_clause(p_q_clause).is_ok());

let not_p = CLiteral::new(p, false);

assert!(the_context.add_clause(not_p).is_ok());
assert!(the_context.evolve().is_ok());
assert_eq!(the_context.report(), Report::ThresholdMet);
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

use crate::reports::Report;

/// The state of a context.
///
/// States advance in the order given, and a context never returns to an earlier state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context allows input.
    Input,

    /// A population measured against the formula of the context exists, and the formula is fixed.
    Populated,

    /// Evolution is in progress.
    Evolving,

    /// Evolution has concluded, for the reason given by the report.
    Concluded(Report),
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Populated => write!(f, "Populated"),
            Self::Evolving => write!(f, "Evolving"),
            Self::Concluded(report) => write!(f, "Concluded({report})"),
        }
    }
}

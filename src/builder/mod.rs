/*!
Tools for building a context.

# Basic methods

The library has two basic methods for building a context:
- [fresh_atom](crate::context::GenericContext::fresh_atom), to obtain a fresh atom.
- [add_clause](crate::context::GenericContext::add_clause), to add a clause.

A formula may be added to a context by interweaving these two methods, together with relevant structure initialisers.
In rough strokes, the pattern is to:
- Obtain a collection of atoms to represent a clause.
- Create [CLiteral](crate::structures::literal::CLiteral)s from the atoms.
- Bundle the literals into a [CClause](crate::structures::clause::CClause).
- Add the clause to the context.

For examples, see below.
And, in particular, note this process may be simplified by using the canonical structures and associated methods.

# Alternative methods

Formulas do not need to be built by hand:
- [read_dimacs](crate::context::GenericContext::read_dimacs) reads the DIMACS representation of a formula.
- [clause_from_string](crate::context::GenericContext::clause_from_string) and related methods build structures from strings, with atoms referenced by name.
- [random_formula](crate::context::GenericContext::random_formula) generates a random formula with a fixed clause length.

# Examples

A clause built using basic methods.

```rust
# use finch_sat::context::Context;
# use finch_sat::config::Config;
# use finch_sat::reports::Report;
# use finch_sat::structures::{clause::CClause, literal::{CLiteral, Literal}};
#
let mut config = Config::default();
config.population_size.value = 64;
let mut the_context = Context::from_config(config);

let p = the_context.fresh_or_max_atom();
let q = the_context.fresh_or_max_atom();

let clause_a = CClause::from([CLiteral::new(p, true), CLiteral::new(q, false)]);
let clause_b = CClause::from([CLiteral::new(p, false), CLiteral::new(q, true)]);

assert!(the_context.add_clause(clause_a).is_ok());
assert!(the_context.add_clause(clause_b).is_ok());
assert!(the_context.evolve().is_ok());
assert_eq!(the_context.report(), Report::ThresholdMet)
```

A simplified build, using canonical structures.

```rust
# use finch_sat::context::Context;
# use finch_sat::config::Config;
# use finch_sat::reports::Report;
# use finch_sat::structures::{clause::CClause, literal::{CLiteral, Literal}};
#
let mut config = Config::default();
config.population_size.value = 64;
let mut the_context = Context::from_config(config);

let p = the_context.fresh_or_max_literal();
let q = the_context.fresh_or_max_literal();

let clause_a = vec![p, -q];
let clause_b = vec![-p, q];

assert!(the_context.add_clause(clause_a).is_ok());
assert!(the_context.add_clause(clause_b).is_ok());
assert!(the_context.evolve().is_ok());
assert_eq!(the_context.report(), Report::ThresholdMet)
```
*/
mod dimacs;
pub use dimacs::ParserInfo;

mod random;
mod strings;
mod structures;

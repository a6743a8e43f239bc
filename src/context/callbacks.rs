/*!
Callbacks associated with a context.

# Callback types

Callbacks may be mutable functions.
Still, information passed from the context is non-mutable.

# Example

A callback to record the best fitness of each generation:

```rust
# use finch_sat::context::Context;
# use finch_sat::config::Config;
# use std::{cell::RefCell, rc::Rc};
let mut the_context = Context::from_config(Config::default());

let p = the_context.fresh_or_max_literal();
let _ = the_context.add_clause(p);

let history = Rc::new(RefCell::new(Vec::default()));
let history_handle = history.clone();

the_context.set_callback_on_generation(Box::new(move |_generation, _best, fitness| {
    history_handle.borrow_mut().push(fitness);
}));

let _ = the_context.evolve();

assert_eq!(history.borrow().len(), the_context.generation_count());
```
*/

use crate::{config::Fitness, structures::valuation::CValuation};

use super::GenericContext;

/// Terminates evolution when true is returned.
pub type CallbackTerminate = dyn FnMut() -> bool;

/// Receives the generation, the best member of the generation, and the fitness of the best member.
pub type CallbackOnGeneration = dyn FnMut(usize, &CValuation, Fitness);

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Sets a callback checked once per generation, with evolution terminated on true.
    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.callback_terminate = Some(callback);
    }

    /// Checks the terminate callback, if set.
    pub fn check_callback_terminate(&mut self) -> bool {
        if let Some(callback) = &mut self.callback_terminate {
            callback()
        } else {
            false
        }
    }

    /// Sets a callback made once per generation, after the generation has been ranked.
    pub fn set_callback_on_generation(&mut self, callback: Box<CallbackOnGeneration>) {
        self.callback_on_generation = Some(callback);
    }

    /// Whether a per-generation callback is set, to allow callers to skip preparing arguments for the callback.
    pub fn callback_on_generation_set(&self) -> bool {
        self.callback_on_generation.is_some()
    }

    /// Makes the per-generation callback, if set.
    pub fn make_callback_on_generation(
        &mut self,
        generation: usize,
        best: &CValuation,
        fitness: Fitness,
    ) {
        if let Some(callback) = &mut self.callback_on_generation {
            callback(generation, best, fitness)
        }
    }
}

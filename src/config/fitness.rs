/// Representation of the fitness of a valuation.
///
/// The fitness of a valuation is the fraction of the clauses of a formula the valuation satisfies.
/// So, fitness is a float in [0, 1], with 0 exactly when no clause is satisfied and 1 exactly when every clause is satisfied.
///
/// A formula with no clauses places no demands on a valuation, and so every valuation has fitness 1 with respect to such a formula.
pub type Fitness = f64;

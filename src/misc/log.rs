/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [parsing](crate::context::GenericContext::read_dimacs)
    pub const PARSE: &str = "parse";

    /// Logs related to the [population](crate::db::population)
    pub const POPULATION: &str = "population";

    /// Logs related to [populating](crate::procedures::populate)
    pub const POPULATE: &str = "populate";

    /// Logs related to [ranking](crate::procedures::rank)
    pub const RANK: &str = "rank";

    /// Logs related to [selection](crate::procedures::select)
    pub const SELECT: &str = "select";

    /// Logs related to [crossover](crate::procedures::crossover)
    pub const CROSSOVER: &str = "crossover";

    /// Logs related to [mutation](crate::procedures::mutate)
    pub const MUTATE: &str = "mutate";

    /// Logs related to [evolution](crate::procedures::evolve)
    pub const EVOLVE: &str = "evolve";
}

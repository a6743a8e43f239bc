//! Error types used in the library.
//!
//! - Most of these are very unlikely to occur during use.
//! - Some are external --- e.g. a context may return a `PopulationExists` error to highlight a request to revise the formula after a population has been generated, as doing so would skew any measure made of the population.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::atom::Atom;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    AtomDB(AtomDBError),
    Build(BuildError),
    ClauseDB(ClauseDBError),
    Population(PopulationError),
    Parse(ParseError),
    State(StateError),

    InvalidState,
}

/// Errors in the atom database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,

    /// Some literal was built over an atom which is not part of the context.
    Unregistered(Atom),
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Errors when building a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A request for clauses of distinct literals longer than the count of available atoms.
    ClauseLength,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// Some attempt was made to store an empty clause.
    EmptyClause,

    /// An invalid key index.
    InvalidKeyIndex,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors in the population database, or when applying an evolutionary operator to members of the population.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PopulationError {
    /// The population contains no members, where at least one member was required.
    Empty,

    /// An invalid key index.
    InvalidKeyIndex,

    /// A valuation does not cover every atom of the context.
    IncompleteValuation,

    /// Two valuations of different lengths, where valuations over the same atoms were required.
    MismatchedMembers,

    /// A crossover point outside the atoms of the context.
    CrossoverBound,
}

impl From<PopulationError> for ErrorKind {
    fn from(e: PopulationError) -> Self {
        ErrorKind::Population(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// A negation character was read, but no candidate for negation was found.
    Negation,

    /// An empty string, where some non-empty string was required.
    Empty,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors from interaction with a context which conflicts with the state of the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// The formula of the context cannot be revised, as a population measured against the formula exists.
    PopulationExists,

    /// Evolution is in progress.
    EvolutionInProgress,

    /// Evolution has concluded, and the context reports on the conclusion.
    EvolutionConcluded,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

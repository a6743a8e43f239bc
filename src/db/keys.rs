//! Keys to items stored in databases.

/// A key to access a clause stored in the clause database.
///
/// Keys are indicies given in order of addition, and as clauses are never removed a key is stable for the life of a context.
pub type ClauseKey = usize;

/// A key to access a member of the population database.
///
/// Keys are indicies, and as members are replaced wholesale when a generation is bred, a key is stable only within a generation.
pub type MemberKey = usize;

/*!
Databases for holding information relevant to a proof search.

At present the only database is the [clause database](crate::db::clause), which holds the knowledge base: every clause given as input, the negated query, and every resolvent added during a search.

Clauses are accessed through [keys](ClauseKey).
The key of a clause distinguishes clauses given as input (and the negated query) from clauses added by resolution.
*/

pub mod clause;

/// A key to access a clause stored in the clause database.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClauseKey {
    /// The key to a clause given as input, or to the negated query.
    Original(slotmap::DefaultKey),

    /// The key to a clause added by resolution.
    Addition(slotmap::DefaultKey),
}

impl ClauseKey {
    /// Whether the key is to a clause added by resolution.
    pub fn is_addition(&self) -> bool {
        matches!(self, Self::Addition(_))
    }
}

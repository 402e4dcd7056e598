/*!
Details on some change during a procedure or to an interal structure.
*/
use crate::{
    db::ClauseKey,
    structures::clause::{CClause, Clause},
};

/// High level distinction of changes, by 'location' of the change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delta {
    /// Within the [clause database](crate::db::clause).
    ClauseDB(self::ClauseDB),

    /// During [saturation](crate::procedures::saturate).
    Saturation(self::Saturation),
}

/// Changes within the [clause database](crate::db::clause).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClauseDB {
    /// An input clause was added with the detailed key.
    Original(ClauseKey, CClause),

    /// The negated query was added with the detailed key.
    NegatedQuery(ClauseKey, CClause),

    /// A resolvent was added with the detailed key.
    Resolvent(ClauseKey, CClause),
}

/// Changes during saturation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Saturation {
    /// The knowledge base was seeded with the negated query, and holds the detailed count of clauses.
    Seeded(usize),

    /// A round with the detailed (one-based) index has begun, over the detailed count of pairs.
    Round(usize, usize),

    /// A resolvent of two clauses, either novel to the round or empty.
    Resolution {
        left: CClause,
        right: CClause,
        resolvent: CClause,
    },

    /// The round found no novel resolvent.
    Fixpoint,
}

impl std::fmt::Display for ClauseDB {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Original(_, clause) => write!(f, "Input clause {}", clause.as_string()),
            Self::NegatedQuery(_, clause) => write!(f, "Negated query {}", clause.as_string()),
            Self::Resolvent(_, clause) => write!(f, "Added {}", clause.as_string()),
        }
    }
}

impl std::fmt::Display for Saturation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Seeded(count) => write!(f, "Initial knowledge base (with negated query): {count} clauses"),
            Self::Round(index, pairs) => write!(f, "Round {index}: {pairs} pairs"),
            Self::Resolution {
                left,
                right,
                resolvent,
            } => match resolvent.is_empty() {
                true => write!(
                    f,
                    "Resolved {} and {} to get empty clause []",
                    left.as_string(),
                    right.as_string()
                ),
                false => write!(
                    f,
                    "Resolved {} and {} to get {}",
                    left.as_string(),
                    right.as_string(),
                    resolvent.as_string()
                ),
            },
            Self::Fixpoint => write!(f, "No more resolvents"),
        }
    }
}

impl std::fmt::Display for Delta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClauseDB(delta) => write!(f, "{delta}"),
            Self::Saturation(delta) => write!(f, "{delta}"),
        }
    }
}

//! Statistics regarding various things.
use std::time::Duration;

/// Dispatches containing statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stat {
    /// The count of rounds made.
    Rounds(usize),

    /// The count of pairs of clauses resolved.
    Pairs(usize),

    /// The count of resolvents derived, whether novel or not.
    Resolvents(usize),

    /// The count of clauses added to the knowledge base by resolution.
    Additions(usize),

    /// The time elapsed.
    Time(Duration),
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rounds(count) => write!(f, "Rounds:      {count}"),
            Self::Pairs(count) => write!(f, "Pairs:       {count}"),
            Self::Resolvents(count) => write!(f, "Resolvents:  {count}"),
            Self::Additions(count) => write!(f, "Additions:   {count}"),
            Self::Time(time) => write!(f, "Time:        {time:.2?}"),
        }
    }
}

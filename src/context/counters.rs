use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every round made.
    pub rounds: usize,

    /// A count of every pair of clauses given to the resolution operator.
    pub pairs: usize,

    /// A count of every resolvent derived, novel or not.
    pub resolvents: usize,

    /// A count of clauses added to the knowledge base by resolution.
    pub additions: usize,

    /// The time taken during a solve.
    pub time: Duration,
}

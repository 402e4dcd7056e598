use serde::Serialize;

/// Which pairs of clauses are resolved during a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Pairing {
    #[default]
    /// Resolve every pair of clauses in the knowledge base, each round
    Exhaustive,

    /// Resolve only pairs with some clause added since the previous round
    Fresh,
}

impl Pairing {
    pub const MIN: Pairing = Pairing::Exhaustive;
    pub const MAX: Pairing = Pairing::Fresh;
}

impl std::fmt::Display for Pairing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Exhaustive => write!(f, "exhaustive"),
            Self::Fresh => write!(f, "fresh"),
        }
    }
}

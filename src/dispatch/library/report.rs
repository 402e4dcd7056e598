//! Details on the result of some procedure.
use serde::Serialize;

/// Reports from the context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report {
    /// Information regarding a solve.
    Solve(self::Solve),

    /// No further dispatches will be sent regarding the current solve.
    Finish,
}

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Solve {
    /// The knowledge base entails the query.
    Entailed,

    /// The knowledge base does not entail the query.
    NotEntailed,

    /// Entailment could not be determined within the time allowed.
    TimeUp,

    /// Entailment is unknown, as no solve has concluded.
    Unknown,
}

impl Solve {
    /// Whether the report is of entailment.
    pub fn is_entailed(&self) -> bool {
        matches!(self, Self::Entailed)
    }

    /// Whether the report is a decision, either way.
    pub fn is_decided(&self) -> bool {
        matches!(self, Self::Entailed | Self::NotEntailed)
    }
}

impl std::fmt::Display for self::Solve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entailed => write!(f, "ENTAILED"),
            Self::NotEntailed => write!(f, "NOT ENTAILED"),
            Self::TimeUp => write!(f, "UNKNOWN"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solve(Solve::Entailed) => write!(f, "Query is entailed"),
            Self::Solve(Solve::NotEntailed) => write!(f, "Query is NOT entailed"),
            Self::Solve(Solve::TimeUp) => write!(f, "Time limit reached"),
            Self::Solve(Solve::Unknown) => write!(f, "Entailment unknown"),
            Self::Finish => write!(f, "Finished"),
        }
    }
}

//! Error types used in the library.
//!
//! - Most errors arise from input: a malformed literal token, an empty clause, or an empty query.
//!   These are always returned before any resolution takes place.
//! - Some errors note a procedure called on a context in the wrong state, e.g. a round before the query has been seeded.
//! - Some are internal, and should not occur, e.g. a missing clause key.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::{context::ContextState, misc::log::targets};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Build(BuildError),
    ClauseDB(ClauseDBError),
    Literal(LiteralError),
    Parse(ParseError),
    State(StateError),
}

impl ErrorKind {
    /// Whether the error is due to some issue with the given input, as opposed to the use of a context.
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Build(_) | Self::Literal(_) | Self::Parse(_))
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Build(e) => write!(f, "{e}"),
            Self::ClauseDB(e) => write!(f, "{e}"),
            Self::Literal(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::State(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Malformed literal tokens.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LiteralError {
    /// An empty token, where some literal was required.
    Empty,

    /// A token with more than one negation marker, e.g. `~~p`.
    DoubleNegation(String),

    /// A token whose name is empty or contains a reserved character, e.g. `~` or `p,q`.
    InvalidName(String),
}

impl From<LiteralError> for ErrorKind {
    fn from(e: LiteralError) -> Self {
        ErrorKind::Literal(e)
    }
}

impl std::fmt::Display for LiteralError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Malformed literal: empty token"),
            Self::DoubleNegation(token) => {
                write!(f, "Malformed literal: '{token}' is negated more than once")
            }
            Self::InvalidName(token) => write!(f, "Malformed literal: '{token}' has no valid name"),
        }
    }
}

/// Noted errors when building a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// An input clause without literals, identified by its (zero-based) position among input clauses.
    ///
    /// The empty clause is reserved for a contradiction derived by resolution.
    EmptyClause(usize),

    /// A query without literals.
    EmptyQuery,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyClause(index) => write!(f, "Input clause {index} is empty"),
            Self::EmptyQuery => write!(f, "The query is empty"),
        }
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// Some attempt was made to store an empty clause.
    EmptyClause,

    /// A key without a stored clause.
    Missing,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

impl std::fmt::Display for ClauseDBError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyClause => write!(f, "An attempt was made to store the empty clause"),
            Self::Missing => write!(f, "A clause key without a stored clause"),
        }
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A malformed literal on some (one-based) line.
    Line(usize, LiteralError),

    /// A clause line with no literals, e.g. a line of commas.
    EmptyClause(usize),

    /// A second query line.
    DuplicateQuery(usize),

    /// The input could not be read.
    Io(std::io::ErrorKind),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        log::error!(target: targets::BUILDER, "Read failure: {e}");
        ParseError::Io(e.kind())
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Line(line, e) => write!(f, "Line {line}: {e}"),
            Self::EmptyClause(line) => write!(f, "Line {line}: a clause without literals"),
            Self::DuplicateQuery(line) => write!(f, "Line {line}: a second query"),
            Self::Io(kind) => write!(f, "Failed to read input: {kind}"),
        }
    }
}

/// A procedure was called on a context in a state which does not support the procedure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// Clauses may only be added before the query is seeded.
    InputClosed(ContextState),

    /// A round requires a seeded context which has not reached a decision (aside from saturation).
    NoRound(ContextState),

    /// Resolvents may only be merged after a round which found some.
    NoGrowth(ContextState),
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputClosed(state) => write!(f, "No input is accepted in state {state}"),
            Self::NoRound(state) => write!(f, "No round is possible in state {state}"),
            Self::NoGrowth(state) => write!(f, "No growth is possible in state {state}"),
        }
    }
}

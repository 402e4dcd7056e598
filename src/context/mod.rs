/*!
The context --- to which clauses are added and within which solves take place, etc.

A context owns:
- A [configuration](crate::config).
- The [clause database](crate::db::clause), aka. the knowledge base.
- [Counters] for various things.
- The [state](ContextState) of the proof search.
- An optional [dispatcher](crate::dispatch), to observe a solve.

A context is built for a single query.
Clauses are added, the query is [seeded](crate::procedures::saturate), and a [solve](crate::procedures::solve) is made.
After a decision the context may be inspected, though no further clauses are accepted.

# Example
```rust
# use otter_refute::context::{Context, ContextState};
# use otter_refute::config::Config;
# use otter_refute::dispatch::library::report;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_clause_tokens(&["p", "q"]).is_ok());
assert!(the_context.add_clause_tokens(&["~p", "r"]).is_ok());
assert!(the_context.add_clause_tokens(&["~q", "r"]).is_ok());

let query = the_context.query_from_tokens(&["r"]).unwrap();
assert_eq!(the_context.solve_query(query), Ok(report::Solve::Entailed));
assert!(matches!(the_context.state, ContextState::Entailed(_, _)));
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{clause::ClauseDB, ClauseKey},
    dispatch::{library::report, Dispatcher},
    procedures::saturate::Resolvent,
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input.
    Input,

    /// The knowledge base has been seeded with the negated query, and no round has been made.
    Seeded,

    /// The previous round found novel resolvents, which are yet to be added to the knowledge base.
    Grow,

    /// Novel resolvents from the previous round have been added, and a fresh round may be made.
    Round,

    /// The empty clause was derived from the clauses of the given keys.
    Entailed(ClauseKey, ClauseKey),

    /// A round found no novel resolvents.
    Saturated,

    /// The time limit was reached before a decision.
    TimeUp,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Seeded => write!(f, "Seeded"),
            Self::Grow => write!(f, "Grow"),
            Self::Round => write!(f, "Round"),
            Self::Entailed(_, _) => write!(f, "Entailed"),
            Self::Saturated => write!(f, "Saturated"),
            Self::TimeUp => write!(f, "TimeUp"),
        }
    }
}

/// A context.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// The clause database, aka. the knowledge base.
    pub clause_db: ClauseDB,

    /// Counters related to the context/solve.
    pub counters: Counters,

    /// The state of the context.
    pub state: ContextState,

    /// The count of clauses given as input, used to identify an empty input clause.
    pub(crate) input_count: usize,

    /// The position in the clause database of the first clause added since the previous round.
    pub(crate) fresh_from: usize,

    /// Novel resolvents of the previous round, waiting to be added.
    pub(crate) pending: Vec<Resolvent>,

    /// The dispatcher, if any.
    pub(crate) dispatcher: Option<Box<Dispatcher>>,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            clause_db: ClauseDB::default(),
            counters: Counters::default(),
            state: ContextState::Input,

            input_count: 0,
            fresh_from: 0,
            pending: Vec::default(),

            dispatcher: None,
        }
    }

    /// Sets a callback to receive each [dispatch](crate::dispatch) from the context.
    pub fn set_dispatcher(&mut self, dispatcher: Box<Dispatcher>) {
        self.dispatcher = Some(dispatcher);
    }

    /// Removes the dispatcher, if any.
    pub fn clear_dispatcher(&mut self) {
        self.dispatcher = None;
    }

    /// A report on the state of the context.
    pub fn report(&self) -> report::Solve {
        match self.state {
            ContextState::Entailed(_, _) => report::Solve::Entailed,
            ContextState::Saturated => report::Solve::NotEntailed,
            ContextState::TimeUp => report::Solve::TimeUp,
            ContextState::Input | ContextState::Seeded | ContextState::Grow | ContextState::Round => {
                report::Solve::Unknown
            }
        }
    }
}

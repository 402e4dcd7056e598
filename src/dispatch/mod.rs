/*!
Dispatches for external observers.

Dispatches have two uses:
- Communication after some procedure, e.g. a solve.
- Optional observation of the dynamics of a context during some procedure, e.g. a trace of each resolution.

Each dispatch is a small message of some pre-determined type, sent to a dispatcher callback when (and only when) a dispatcher has been [set](crate::context::Context::set_dispatcher).
Dispatches have no influence on the result of a procedure, and without a dispatcher the overhead of a dispatch is a check on an optional.

- [Deltas](crate::dispatch::library::delta), on some change during a procedure or to an interal structure.
  - For example, the addition of a clause to the clause database, or a resolvent found during a round.
- [Reports](crate::dispatch::library::report), on the result of some procedure.
- [Stats](crate::dispatch::library::stat), regarding various counts.

Each dispatch has a textual form, and together the textual forms of the dispatches from a solve give a trace of the solve.

# Example

Recording the textual form of each dispatch.

```rust
# use otter_refute::config::Config;
# use otter_refute::context::Context;
# use otter_refute::dispatch::Dispatch;
# use std::{cell::RefCell, rc::Rc};
let trace = Rc::new(RefCell::new(Vec::default()));
let trace_clone = trace.clone();

let mut the_context = Context::from_config(Config::default());
the_context.set_dispatcher(Box::new(move |dispatch: Dispatch| {
    trace_clone.borrow_mut().push(dispatch.to_string())
}));

the_context.add_clause_tokens(&["p"]).unwrap();
let query = the_context.query_from_tokens(&["p"]).unwrap();
the_context.solve_query(query).unwrap();

assert!(trace
    .borrow()
    .iter()
    .any(|line| line == "Resolved [p] and [~p] to get empty clause []"));
```
*/

pub mod library;
pub(crate) mod macros;

use library::{delta::Delta, report::Report, stat::Stat};

/// Dispatch types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// A delta. E.g. that a clause was added to the clause database.
    Delta(Delta),

    /// A report. E.g. that the query is entailed.
    Report(Report),

    /// A stat. E.g. the count of rounds.
    Stat(Stat),
}

/// The type of a dispatcher callback.
pub type Dispatcher = dyn FnMut(Dispatch);

impl std::fmt::Display for Dispatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Delta(delta) => write!(f, "{delta}"),
            Self::Report(report) => write!(f, "{report}"),
            Self::Stat(stat) => write!(f, "{stat}"),
        }
    }
}

//! Decides whether the knowledge base of a context entails the seeded query.
//!
//! # Overview
//!
//! [solve](crate::context::Context::solve) drives the [saturation](crate::procedures::saturate) state machine until a decision is reached:
//!
//! ```none
//!         +---------------+
//!   +---->|     round     |-----+-----> entailed, if the empty clause is derived
//!   |     +---------------+     |
//!   |                           +-----> not entailed, if no novel resolvent is derived
//!   |                           |
//!   |     +---------------+     | if some novel resolvent is derived
//!   +-----|     grow      |<----+
//!         +---------------+
//! ```
//!
//! Abstracting from bookkeeping, solve is:
//!
//! ```rust,ignore
//! loop {
//!     match self.round()? {
//!         RoundOk::Contradiction(_, _) => break,
//!         RoundOk::Fixpoint => break,
//!         RoundOk::Novel(_) => self.grow()?,
//!     };
//! }
//! ```
//!
//! If a time limit is [configured](crate::config::Config::time_limit) the time elapsed during the call to solve is checked before each round, and on passing the limit the solve returns [TimeUp](report::Solve::TimeUp).
//! A solve which ran out of time may be resumed by a further call to solve, which makes at least one round before checking the limit again.
//! Resolvents pending from a round made outside of solve are added before the limit is checked.
//!
//! # Example
//!
//! ```rust
//! # use otter_refute::config::Config;
//! # use otter_refute::context::Context;
//! # use otter_refute::dispatch::library::report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! the_context.add_clause_tokens(&["p"]).unwrap();
//!
//! // Nothing relates p and q, so the first round finds no resolvent.
//! let query = the_context.query_from_tokens(&["q"]).unwrap();
//! assert_eq!(the_context.solve_query(query), Ok(report::Solve::NotEntailed));
//! assert_eq!(the_context.counters.rounds, 1);
//! ```

use crate::{
    context::{Context, ContextState},
    dispatch::{
        library::report::{self, Report},
        library::stat::Stat,
        macros::{self},
        Dispatch,
    },
    misc::log::targets::{self},
    procedures::saturate::RoundOk,
    structures::clause::Clause,
    types::err::{self},
};

impl Context {
    /// Makes rounds until a decision, or until the time limit.
    ///
    /// A solve on a context which has already reached a decision returns the decision, without any further round.
    pub fn solve(&mut self) -> Result<report::Solve, err::ErrorKind> {
        match self.state {
            ContextState::Entailed(_, _) | ContextState::Saturated => return Ok(self.report()),
            _ => {}
        }

        let total_time = std::time::Instant::now();
        let prior_time = self.counters.time;
        let time_limit = self.config.time_limit();

        // A resumed solve makes at least one round before the limit applies.
        let mut check_time = self.state != ContextState::TimeUp;

        'solve_loop: loop {
            if self.state == ContextState::Grow {
                self.grow()?;
            }

            self.counters.time = prior_time + total_time.elapsed();
            if check_time && time_limit.is_some_and(|limit| total_time.elapsed() > limit) {
                log::info!(target: targets::SATURATION, "Time limit reached after {} rounds", self.counters.rounds);
                self.state = ContextState::TimeUp;
                break 'solve_loop;
            }
            check_time = true;

            match self.round()? {
                RoundOk::Contradiction(_, _) => break 'solve_loop,

                RoundOk::Fixpoint => break 'solve_loop,

                RoundOk::Novel(_) => {
                    self.grow()?;
                }
            }
        }

        self.counters.time = prior_time + total_time.elapsed();
        let report = self.report();
        log::info!(target: targets::SATURATION, "{report} after {} rounds", self.counters.rounds);

        macros::send_stats!(self);
        macros::send_finish!(self, report);
        Ok(report)
    }

    /// Seeds the query and solves.
    pub fn solve_query(&mut self, query: impl Clause) -> Result<report::Solve, err::ErrorKind> {
        self.seed(query)?;
        self.solve()
    }
}

//! A library for deciding whether a propositional knowledge base entails a query, by resolution refutation.
//!
//! Given a knowledge base of clauses and a query (a conjunction of literals), the query is negated into a single clause and added to the knowledge base.
//! Pairs of clauses are then resolved, round after round, until either:
//! - The empty clause is derived, in which case the knowledge base together with the negated query is inconsistent, and so the query is entailed.
//! - A round derives no clause which was not already present, in which case the knowledge base is saturated and the query is not entailed.
//!
//! As there are finitely many clauses over a finite collection of names, saturation is always reached (or the empty clause found) after finitely many rounds.
//!
//! # Orientation
//!
//! The library is designed around a [context], which owns a [configuration](crate::config), a [clause database](crate::db::clause), and an optional [dispatcher](crate::dispatch) for observing a solve.
//!
//! Useful starting points may be:
//! - The [saturation procedure](crate::procedures::saturate) for the state machine which drives a solve.
//! - The [resolution operator](crate::procedures::resolve).
//! - The [structures] for literals and clauses.
//! - The [builder] for validated construction of clauses and queries from tokens, and for reading problems from text.
//!
//! # Examples
//!
//! + Check entailment directly from tokens.
//!
//! ```rust
//! # use otter_refute::entails;
//! let knowledge_base = vec![vec!["P", "Q"], vec!["~P", "R"], vec!["~Q", "R"]];
//!
//! assert_eq!(entails(&knowledge_base, &["R"]), Ok(true));
//! assert_eq!(entails(&knowledge_base, &["P"]), Ok(false));
//! ```
//!
//! + Build a context, observe the solve, and inspect the report.
//!
//! ```rust
//! # use otter_refute::config::Config;
//! # use otter_refute::context::Context;
//! # use otter_refute::dispatch::library::report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let p_or_q = the_context.clause_from_string("P Q").unwrap();
//! let not_p = the_context.clause_from_string("~P").unwrap();
//! assert!(the_context.add_clause(p_or_q).is_ok());
//! assert!(the_context.add_clause(not_p).is_ok());
//!
//! let query = the_context.clause_from_string("Q").unwrap();
//! assert_eq!(the_context.solve_query(query), Ok(report::Solve::Entailed));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! No logger is installed by the library.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod dispatch;

pub mod db;

pub mod misc;

use crate::{config::Config, context::Context, types::err};

/// Whether the knowledge base entails the query.
///
/// Each clause of the knowledge base and the query are given as literal tokens, e.g. `"P"` or `"~P"`.
/// All tokens are validated before any resolution takes place, and the first invalid token, clause, or query is returned as an error.
///
/// The default configuration is used, and so (in the absence of a time limit) a decision is always returned.
pub fn entails<C, S>(knowledge_base: &[C], query: &[S]) -> Result<bool, err::ErrorKind>
where
    C: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut the_context = Context::from_config(Config::default());

    for clause in knowledge_base {
        the_context.add_clause_tokens(clause.as_ref())?;
    }

    let query = the_context.query_from_tokens(query)?;
    let report = the_context.solve_query(query)?;
    Ok(report.is_entailed())
}

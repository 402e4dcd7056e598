//! The transitions of the saturation state machine.
//!
//! # Overview
//!
//! A proof search is a sequence of transitions between [states](ContextState) of a context:
//!
//! ```none
//!                seed                  round
//!   Input ---------------> Seeded ---------------+---> Entailed, if the empty clause is derived
//!                                                |
//!                            ⌃                   +---> Saturated, if no novel resolvent is derived
//!                            |                   |
//!                            | round             +---> Grow, if some novel resolvent is derived
//!                            |                            |
//!                          Round <------------------------+
//!                                         grow
//! ```
//!
//! - [seed](Context::seed) adds the negation of the query to the knowledge base, as a single clause.
//! - [round](Context::round) resolves every pair of clauses in the knowledge base (or, with [Pairing::Fresh], every pair with some fresh clause).
//!   The round stops as soon as the empty clause is derived.
//!   Otherwise, a resolvent is *novel* if it is neither in the knowledge base nor an earlier resolvent of the same round, and novel resolvents are held until the end of the round.
//! - [grow](Context::grow) adds the novel resolvents of a round to the knowledge base, in the order they were found.
//!
//! The knowledge base is not changed during a round, and so every pair of a round is resolved against the same knowledge base.
//! As a consequence, whether a round ends in a decision does not depend on the order of pairs.
//!
//! Each transition is public, so a search may be stepped through by hand:
//!
//! ```rust
//! # use otter_refute::config::Config;
//! # use otter_refute::context::{Context, ContextState};
//! # use otter_refute::procedures::saturate::RoundOk;
//! let mut the_context = Context::from_config(Config::default());
//!
//! the_context.add_clause_tokens(&["p", "q"]).unwrap();
//! the_context.add_clause_tokens(&["~p"]).unwrap();
//!
//! let query = the_context.query_from_tokens(&["q"]).unwrap();
//! the_context.seed(query).unwrap();
//! assert_eq!(the_context.state, ContextState::Seeded);
//!
//! // [p, q] with [~p] gives [q], and [p, q] with [~q] gives [p].
//! assert_eq!(the_context.round(), Ok(RoundOk::Novel(2)));
//! assert_eq!(the_context.grow(), Ok(2));
//!
//! // [~p] with [p] is a contradiction.
//! assert!(matches!(the_context.round(), Ok(RoundOk::Contradiction(_, _))));
//! ```
//!
//! # Termination
//!
//! Every clause added to the knowledge base is canonical and distinct from each clause already present.
//! Over *n* names there are at most 4ⁿ canonical clauses, and so at most 4ⁿ rounds may end with growth.

use std::collections::HashSet;

use crate::{
    config::Pairing,
    context::{Context, ContextState},
    db::{
        clause::{ClauseOk, ClauseSource},
        ClauseKey,
    },
    dispatch::{
        library::delta::{self, Delta},
        macros::{send_clause_db_delta, send_saturation_delta},
        Dispatch,
    },
    misc::log::targets::{self},
    procedures::resolve::resolve,
    structures::clause::{CClause, Clause},
    types::err::{self},
};

/// A novel resolvent, together with the keys of the clauses it was derived from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolvent {
    /// The resolvent, in canonical form.
    pub clause: CClause,

    /// The key of the first clause of the pair.
    pub left: ClauseKey,

    /// The key of the second clause of the pair.
    pub right: ClauseKey,
}

/// Ok results of a [round](Context::round).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOk {
    /// The empty clause was derived from the clauses of the given keys.
    Contradiction(ClauseKey, ClauseKey),

    /// No novel resolvent was derived.
    Fixpoint,

    /// The given count of novel resolvents were derived, and are waiting to be added.
    Novel(usize),
}

impl Context {
    /// Adds the negation of the query to the knowledge base, closing the context to further input.
    ///
    /// The query is read as a conjunction, and so the negation is the clause of the negation of each literal of the query.
    pub fn seed(&mut self, query: impl Clause) -> Result<ClauseKey, err::ErrorKind> {
        if self.state != ContextState::Input {
            return Err(err::StateError::InputClosed(self.state).into());
        }
        if query.size() == 0 {
            return Err(err::BuildError::EmptyQuery.into());
        }

        let negation = query.negated_literals().canonical();
        log::info!(target: targets::SATURATION, "Negated query: {}", negation.as_string());

        let key = self
            .clause_db
            .store(negation.clone(), ClauseSource::NegatedQuery, 0)?
            .key();
        send_clause_db_delta!(self, NegatedQuery, key, negation);

        self.fresh_from = 0;
        self.state = ContextState::Seeded;
        send_saturation_delta!(self, delta::Saturation::Seeded(self.clause_db.len()));

        Ok(key)
    }

    /// Resolves pairs of clauses from the knowledge base, as configured.
    ///
    /// A round may be made after seeding, after growth, or again after saturation (in which case no novel resolvent will be found).
    pub fn round(&mut self) -> Result<RoundOk, err::ErrorKind> {
        match self.state {
            ContextState::Seeded
            | ContextState::Round
            | ContextState::Saturated
            | ContextState::TimeUp => {}
            state => return Err(err::StateError::NoRound(state).into()),
        }

        self.counters.rounds += 1;

        let keys = self.clause_db.keys();
        let count = keys.len();
        let fresh_from = match self.config.pairing.value {
            Pairing::Exhaustive => 0,
            Pairing::Fresh => self.fresh_from,
        };

        let pair_count = count * count.saturating_sub(1) / 2
            - fresh_from * fresh_from.saturating_sub(1) / 2;
        log::debug!(target: targets::SATURATION, "Round {}: {count} clauses, {pair_count} pairs", self.counters.rounds);
        send_saturation_delta!(self, delta::Saturation::Round(self.counters.rounds, pair_count));

        let mut novel: Vec<Resolvent> = Vec::default();
        let mut novel_index: HashSet<CClause> = HashSet::default();

        for i in 0..count {
            let left = self.clause_db.get(&keys[i])?;

            for j in std::cmp::max(i + 1, fresh_from)..count {
                let right = self.clause_db.get(&keys[j])?;
                self.counters.pairs += 1;

                for resolvent in resolve(left.clause(), right.clause()) {
                    self.counters.resolvents += 1;

                    if resolvent.is_empty() {
                        log::info!(target: targets::SATURATION, "Contradiction: {} and {}", left.clause().as_string(), right.clause().as_string());
                        send_saturation_delta!(
                            self,
                            delta::Saturation::Resolution {
                                left: left.clause().clone(),
                                right: right.clause().clone(),
                                resolvent,
                            }
                        );

                        self.state = ContextState::Entailed(left.key(), right.key());
                        return Ok(RoundOk::Contradiction(left.key(), right.key()));
                    }

                    if self.clause_db.contains(&resolvent) || novel_index.contains(&resolvent) {
                        continue;
                    }

                    send_saturation_delta!(
                        self,
                        delta::Saturation::Resolution {
                            left: left.clause().clone(),
                            right: right.clause().clone(),
                            resolvent: resolvent.clone(),
                        }
                    );

                    novel_index.insert(resolvent.clone());
                    novel.push(Resolvent {
                        clause: resolvent,
                        left: left.key(),
                        right: right.key(),
                    });
                }
            }
        }

        match novel.len() {
            0 => {
                log::info!(target: targets::SATURATION, "Fixpoint after {} rounds", self.counters.rounds);
                send_saturation_delta!(self, delta::Saturation::Fixpoint);
                self.state = ContextState::Saturated;
                Ok(RoundOk::Fixpoint)
            }

            novel_count => {
                log::debug!(target: targets::SATURATION, "{novel_count} novel resolvents");
                self.pending = novel;
                self.state = ContextState::Grow;
                Ok(RoundOk::Novel(novel_count))
            }
        }
    }

    /// Adds the novel resolvents of the previous round to the knowledge base, returning the count added.
    pub fn grow(&mut self) -> Result<usize, err::ErrorKind> {
        if self.state != ContextState::Grow {
            return Err(err::StateError::NoGrowth(self.state).into());
        }

        self.fresh_from = self.clause_db.len();
        let round = self.counters.rounds;
        let mut added = 0;

        for Resolvent {
            clause,
            left,
            right,
        } in std::mem::take(&mut self.pending)
        {
            match self
                .clause_db
                .store(clause, ClauseSource::Resolution(left, right), round)?
            {
                ClauseOk::Added(key) => {
                    added += 1;
                    send_clause_db_delta!(self, Resolvent, key, self.clause_db.get(&key)?.clause());
                }

                ClauseOk::Duplicate(key) => {
                    log::warn!(target: targets::SATURATION, "Resolvent already present: {key:?}");
                }
            }
        }

        self.counters.additions += added;
        self.state = ContextState::Round;
        log::debug!(target: targets::SATURATION, "Grew to {} clauses", self.clause_db.len());

        Ok(added)
    }

    /// The novel resolvents of the previous round which are waiting to be added.
    pub fn pending(&self) -> &[Resolvent] {
        &self.pending
    }
}

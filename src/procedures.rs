//! Procedures of a proof search.
//!
//! - [resolve](resolve::resolve) is the resolution operator, a pure function of two clauses.
//! - [saturate] contains the transitions of the saturation state machine: seeding, rounds, and growth.
//! - [solve] drives the transitions to a decision.

pub mod resolve;
pub mod saturate;
pub mod solve;

//! Abstract elements of a proof search, and their representation.
//!
//! - [Literals](literal) are atoms (names of propositions) paired with a polarity.
//! - [Clauses](clause) are disjunctions of literals.

pub mod clause;
pub mod literal;

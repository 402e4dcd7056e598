//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals, sorted and without duplicates.
//! Two clauses are the same clause exactly when their canonical representations are equal.
//!
//! ```rust
//! # use otter_refute::structures::literal::Literal;
//! # use otter_refute::structures::clause::Clause;
//! let clause = ["r", "~p", "r", "q"]
//!     .iter()
//!     .map(|token| Literal::try_from_token(token).unwrap())
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(clause.size(), 4);
//! assert!(!clause.is_canonical());
//!
//! let canonical = clause.canonical();
//! assert_eq!(canonical.size(), 3);
//! assert_eq!(canonical.as_string(), "[~p, q, r]");
//! ```
//!
//! - The empty clause is always false (never true), and is written `[]`.
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).

use crate::structures::literal::Literal;

/// The clause trait.
pub trait Clause {
    /// A string representation of the clause, e.g. `[p, ~q]`.
    fn as_string(&self) -> String;

    /// An iterator over all literals in the clause, order is not guaranteed.
    fn literals(&self) -> impl Iterator<Item = &Literal>;

    /// The number of literals in the clause, including any duplicates.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, order is not guaranteed.
    fn atoms(&self) -> impl Iterator<Item = &str>;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;

    /// Whether the clause is in its canonical form.
    fn is_canonical(&self) -> bool;

    /// Whether the clause contains some literal and its negation.
    fn is_tautology(&self) -> bool;

    /// The clause of the negation of each literal in the clause.
    ///
    /// If the clause is read as a conjunction (e.g. a query) this is the negation of the clause, by De Morgan.
    fn negated_literals(&self) -> CClause;
}

/// The implementation of a clause as a vector of literals.
pub type CClause = Vec<Literal>;

impl Clause for CClause {
    fn as_string(&self) -> String {
        let literals = self
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>();
        format!("[{}]", literals.join(", "))
    }

    fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|literal| literal.atom())
    }

    fn canonical(mut self) -> CClause {
        self.sort_unstable();
        self.dedup();
        self
    }

    fn is_canonical(&self) -> bool {
        self.windows(2).all(|pair| pair[0] < pair[1])
    }

    fn is_tautology(&self) -> bool {
        self.iter()
            .any(|a| self.iter().any(|b| a.is_complement_of(b)))
    }

    fn negated_literals(&self) -> CClause {
        self.iter().map(|literal| literal.negate()).collect()
    }
}

impl Clause for Literal {
    fn as_string(&self) -> String {
        format!("[{self}]")
    }

    fn literals(&self) -> impl Iterator<Item = &Literal> {
        std::iter::once(self)
    }

    fn size(&self) -> usize {
        1
    }

    fn atoms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.atom())
    }

    fn canonical(self) -> CClause {
        vec![self]
    }

    fn is_canonical(&self) -> bool {
        true
    }

    fn is_tautology(&self) -> bool {
        false
    }

    fn negated_literals(&self) -> CClause {
        vec![self.negate()]
    }
}

#[cfg(test)]
mod clause_tests {
    use super::*;

    fn clause(tokens: &[&str]) -> CClause {
        tokens
            .iter()
            .map(|token| Literal::try_from_token(token).unwrap())
            .collect()
    }

    #[test]
    fn canonical_order_independent() {
        let a = clause(&["q", "~p", "q", "r"]).canonical();
        let b = clause(&["r", "q", "~p"]).canonical();
        assert_eq!(a, b);
        assert!(a.is_canonical());
        assert_eq!(a.as_string(), "[~p, q, r]");
    }

    #[test]
    fn empty() {
        let empty = CClause::default();
        assert!(empty.is_canonical());
        assert_eq!(empty.as_string(), "[]");
        assert!(!empty.is_tautology());
    }

    #[test]
    fn tautology() {
        assert!(clause(&["p", "q", "~p"]).is_tautology());
        assert!(!clause(&["p", "q", "~r"]).is_tautology());
    }

    #[test]
    fn negation() {
        let query = clause(&["p", "~q"]);
        assert_eq!(query.negated_literals(), clause(&["~p", "q"]));
    }
}

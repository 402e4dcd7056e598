/*!
A database of clause related things.

The clause database is the knowledge base of a proof search.
It is:
- Ordered: clauses are returned in the order they were stored.
- Unique: no two stored clauses have the same canonical form.
  An attempt to store a clause already present returns the key of the present clause.
- Append-only: clauses are never removed or revised.

Clauses given as input and the negated query are stored apart from clauses added by resolution, with distinct [keys](ClauseKey).

```rust
# use otter_refute::db::clause::{ClauseDB, ClauseOk, ClauseSource};
# use otter_refute::structures::clause::CClause;
# use otter_refute::structures::literal::Literal;
let p = Literal::try_from_token("p").unwrap();
let q = Literal::try_from_token("q").unwrap();

let mut clause_db = ClauseDB::default();

let first = clause_db.store(vec![p.clone(), q.clone()], ClauseSource::Original, 0);
let second = clause_db.store(vec![q, p.clone(), p], ClauseSource::Original, 0);

assert!(matches!(first, Ok(ClauseOk::Added(_))));
assert!(matches!(second, Ok(ClauseOk::Duplicate(_))));
assert_eq!(clause_db.len(), 1);
```
*/

use std::collections::HashMap;

use slotmap::{DefaultKey, SlotMap};

use crate::{
    db::ClauseKey,
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::Literal,
    },
    types::err::{self},
};

/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// A clause given as input.
    Original,

    /// The clause of the negation of each literal of the query.
    NegatedQuery,

    /// A clause derived via resolution from the clauses of the given keys.
    Resolution(ClauseKey, ClauseKey),
}

/// A clause together with some metadata.
#[derive(Clone, Debug)]
pub struct StoredClause {
    key: ClauseKey,
    clause: CClause,
    source: ClauseSource,
    round: usize,
}

impl StoredClause {
    /// The key used to store the clause.
    pub fn key(&self) -> ClauseKey {
        self.key
    }

    /// The clause, in canonical form.
    pub fn clause(&self) -> &CClause {
        &self.clause
    }

    /// How the clause came to be in the database.
    pub fn source(&self) -> ClauseSource {
        self.source
    }

    /// The round during which the clause was derived, with zero for input clauses and the negated query.
    pub fn round(&self) -> usize {
        self.round
    }
}

/// Ok results of storing a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was not present, and has been added with the given key.
    Added(ClauseKey),

    /// The clause was already present, with the given key.
    Duplicate(ClauseKey),
}

impl ClauseOk {
    /// The key of the clause, whether freshly added or not.
    pub fn key(&self) -> ClauseKey {
        match self {
            Self::Added(key) | Self::Duplicate(key) => *key,
        }
    }
}

/// The clause database.
#[derive(Default)]
pub struct ClauseDB {
    /// Clauses given as input, and the negated query.
    original: SlotMap<DefaultKey, StoredClause>,

    /// Clauses added by resolution.
    addition: SlotMap<DefaultKey, StoredClause>,

    /// Every key, in the order of storage.
    order: Vec<ClauseKey>,

    /// The key of each clause, by canonical form.
    index: HashMap<CClause, ClauseKey>,
}

impl ClauseDB {
    /// Stores a clause, if no clause with the same canonical form has been stored.
    ///
    /// Returns an error on an attempt to store the empty clause, as the empty clause is never part of a knowledge base.
    pub fn store(
        &mut self,
        clause: impl Clause,
        source: ClauseSource,
        round: usize,
    ) -> Result<ClauseOk, err::ClauseDBError> {
        if clause.size() == 0 {
            log::error!(target: targets::CLAUSE_DB, "Attempt to store the empty clause");
            return Err(err::ClauseDBError::EmptyClause);
        }
        let clause = clause.canonical();

        if let Some(key) = self.index.get(&clause) {
            log::trace!(target: targets::CLAUSE_DB, "Duplicate: {}", clause.as_string());
            return Ok(ClauseOk::Duplicate(*key));
        }

        let stored = |key| StoredClause {
            key,
            clause: clause.clone(),
            source,
            round,
        };

        let key = match source {
            ClauseSource::Original | ClauseSource::NegatedQuery => ClauseKey::Original(
                self.original
                    .insert_with_key(|k| stored(ClauseKey::Original(k))),
            ),
            ClauseSource::Resolution(_, _) => ClauseKey::Addition(
                self.addition
                    .insert_with_key(|k| stored(ClauseKey::Addition(k))),
            ),
        };

        log::trace!(target: targets::CLAUSE_DB, "Stored {key:?}: {}", clause.as_string());
        self.order.push(key);
        self.index.insert(clause, key);

        Ok(ClauseOk::Added(key))
    }

    /// The stored clause of the given key.
    pub fn get(&self, key: &ClauseKey) -> Result<&StoredClause, err::ClauseDBError> {
        let stored = match key {
            ClauseKey::Original(k) => self.original.get(*k),
            ClauseKey::Addition(k) => self.addition.get(*k),
        };
        stored.ok_or(err::ClauseDBError::Missing)
    }

    /// The key of the clause with the same canonical form as `clause`, if stored.
    ///
    /// The clause is assumed to be canonical.
    pub fn key_of(&self, clause: &[Literal]) -> Option<ClauseKey> {
        self.index.get(clause).copied()
    }

    /// Whether a clause with the same canonical form as `clause` is stored.
    ///
    /// The clause is assumed to be canonical.
    pub fn contains(&self, clause: &[Literal]) -> bool {
        self.index.contains_key(clause)
    }

    /// A count of all stored clauses.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no clause has been stored.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// A count of stored clauses added by resolution.
    pub fn addition_count(&self) -> usize {
        self.addition.len()
    }

    /// All keys, in the order of storage.
    pub fn keys(&self) -> &[ClauseKey] {
        &self.order
    }

    /// An iterator over all stored clauses, in the order of storage.
    pub fn clauses(&self) -> impl Iterator<Item = &StoredClause> {
        self.order.iter().filter_map(|key| self.get(key).ok())
    }
}

#[cfg(test)]
mod clause_db_tests {
    use super::*;

    fn clause(tokens: &[&str]) -> CClause {
        tokens
            .iter()
            .map(|token| Literal::try_from_token(token).unwrap())
            .collect()
    }

    #[test]
    fn canonical_uniqueness() {
        let mut clause_db = ClauseDB::default();

        let first = clause_db
            .store(clause(&["p", "q"]), ClauseSource::Original, 0)
            .unwrap();
        let second = clause_db
            .store(clause(&["q", "p", "q"]), ClauseSource::Original, 0)
            .unwrap();

        assert!(matches!(first, ClauseOk::Added(_)));
        assert_eq!(second, ClauseOk::Duplicate(first.key()));
        assert_eq!(clause_db.len(), 1);
    }

    #[test]
    fn order_preserved() {
        let mut clause_db = ClauseDB::default();
        let a = clause_db
            .store(clause(&["r"]), ClauseSource::Original, 0)
            .unwrap()
            .key();
        let b = clause_db
            .store(clause(&["~r"]), ClauseSource::NegatedQuery, 0)
            .unwrap()
            .key();
        let c = clause_db
            .store(clause(&["p"]), ClauseSource::Resolution(a, b), 1)
            .unwrap()
            .key();

        assert_eq!(clause_db.keys(), &[a, b, c]);
        assert!(c.is_addition());
        assert_eq!(clause_db.addition_count(), 1);

        let stored = clause_db.get(&c).unwrap();
        assert_eq!(stored.source(), ClauseSource::Resolution(a, b));
        assert_eq!(stored.round(), 1);

        let atoms = clause_db
            .clauses()
            .flat_map(|stored| stored.clause().atoms())
            .collect::<Vec<_>>();
        assert_eq!(atoms, vec!["r", "r", "p"]);
    }

    #[test]
    fn empty_refused() {
        let mut clause_db = ClauseDB::default();
        assert_eq!(
            clause_db.store(CClause::default(), ClauseSource::Original, 0),
            Err(err::ClauseDBError::EmptyClause)
        );
        assert!(clause_db.is_empty());
    }

    #[test]
    fn membership() {
        let mut clause_db = ClauseDB::default();
        let key = clause_db
            .store(clause(&["q", "~p"]), ClauseSource::Original, 0)
            .unwrap()
            .key();
        assert!(clause_db.contains(&clause(&["~p", "q"])));
        assert_eq!(clause_db.key_of(&clause(&["~p", "q"])), Some(key));
        assert!(!clause_db.contains(&clause(&["p", "q"])));
    }
}

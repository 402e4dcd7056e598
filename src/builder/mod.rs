/*!
Tools for building a context.

# Basic methods

The library has two basic methods for building a context:
- [add_clause](crate::context::Context::add_clause), to add a clause to the knowledge base.
- [seed](crate::context::Context::seed), to add the negation of a query, closing the context to further input.

Clauses may be built directly from [literals](crate::structures::literal::Literal), or from tokens:
- [clause_from_string](crate::context::Context::clause_from_string), from a string of tokens separated by whitespace or commas.
- [add_clause_tokens](crate::context::Context::add_clause_tokens), from a slice of tokens.
- [query_from_tokens](crate::context::Context::query_from_tokens), for a query.

Each token is validated when read, and so a malformed token is returned as an error before any resolution takes place.

Whole problems may also be [read from text](crate::builder::text) or [generated at random](crate::builder::random).

# Examples

A clause built from literals.

```rust
# use otter_refute::context::Context;
# use otter_refute::config::Config;
# use otter_refute::dispatch::library::report;
# use otter_refute::structures::literal::Literal;
let mut the_context = Context::from_config(Config::default());

let p = Literal::try_new("p", true).unwrap();
let q = Literal::try_new("q", true).unwrap();

assert!(the_context.add_clause(vec![p.clone(), q.negate()]).is_ok());
assert!(the_context.add_clause(p).is_ok());

let query = the_context.clause_from_string("q").unwrap();
assert_eq!(the_context.solve_query(query), Ok(report::Solve::Entailed));
```

An empty clause is an error.

```rust
# use otter_refute::context::Context;
# use otter_refute::config::Config;
# use otter_refute::types::err::{BuildError, ErrorKind};
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_clause_tokens(&["p"]).is_ok());
assert_eq!(
    the_context.add_clause_tokens::<&str>(&[]),
    Err(ErrorKind::Build(BuildError::EmptyClause(1)))
);
```
*/

pub mod random;
pub mod text;

use crate::{
    context::{Context, ContextState},
    db::clause::{ClauseOk, ClauseSource},
    dispatch::{
        library::{
            delta::{self, Delta},
            report::{self},
        },
        macros::{self},
        Dispatch,
    },
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::Literal,
    },
    types::err::{self},
};

/// A knowledge base together with a query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Problem {
    /// The clauses of the knowledge base, in the order given.
    pub knowledge_base: Vec<CClause>,

    /// The literals of the query, read as a conjunction.
    pub query: CClause,
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for clause in &self.knowledge_base {
            writeln!(f, "{}", tokens_of(clause))?;
        }
        write!(f, "? {}", tokens_of(&self.query))
    }
}

/// The tokens of a clause, separated by a space.
fn tokens_of(clause: &[Literal]) -> String {
    clause
        .iter()
        .map(|literal| literal.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reads the literals of a string of tokens separated by whitespace or commas.
pub fn literals_from_string(string: &str) -> Result<CClause, err::LiteralError> {
    string
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(Literal::try_from_token)
        .collect()
}

impl Context {
    /// Adds a clause to the knowledge base.
    ///
    /// The clause is stored in canonical form, and a clause with the same canonical form as some stored clause is noted as a duplicate.
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, err::ErrorKind> {
        if self.state != ContextState::Input {
            return Err(err::StateError::InputClosed(self.state).into());
        }

        let index = self.input_count;
        self.input_count += 1;

        if clause.size() == 0 {
            log::warn!(target: targets::BUILDER, "Empty clause at index {index}");
            return Err(err::BuildError::EmptyClause(index).into());
        }

        let result = self.clause_db.store(clause, ClauseSource::Original, 0)?;
        match result {
            ClauseOk::Added(key) => {
                macros::send_clause_db_delta!(self, Original, key, self.clause_db.get(&key)?.clause());
            }

            ClauseOk::Duplicate(key) => {
                log::info!(target: targets::BUILDER, "Clause at index {index} duplicates {key:?}");
            }
        }

        Ok(result)
    }

    /// Adds a clause to the knowledge base, from a slice of literal tokens.
    ///
    /// Every token is validated before the clause is added.
    pub fn add_clause_tokens<S: AsRef<str>>(
        &mut self,
        tokens: &[S],
    ) -> Result<ClauseOk, err::ErrorKind> {
        let clause = tokens
            .iter()
            .map(|token| Literal::try_from_token(token.as_ref()))
            .collect::<Result<CClause, _>>()?;
        self.add_clause(clause)
    }

    /// A clause from a string of literal tokens, separated by whitespace or commas.
    ///
    /// ```rust
    /// # use otter_refute::context::Context;
    /// # use otter_refute::config::Config;
    /// # use otter_refute::structures::clause::Clause;
    /// let the_context = Context::from_config(Config::default());
    ///
    /// let clause = the_context.clause_from_string("q, ~p r").unwrap();
    /// assert_eq!(clause.as_string(), "[q, ~p, r]");
    ///
    /// assert!(the_context.clause_from_string("~~p").is_err());
    /// ```
    pub fn clause_from_string(&self, string: &str) -> Result<CClause, err::ErrorKind> {
        Ok(literals_from_string(string)?)
    }

    /// A query from a slice of literal tokens.
    ///
    /// A query is a conjunction of literals, and so an empty query is an error (as the negation of an empty query would be the empty clause).
    pub fn query_from_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Result<CClause, err::ErrorKind> {
        if tokens.is_empty() {
            return Err(err::BuildError::EmptyQuery.into());
        }

        let query = tokens
            .iter()
            .map(|token| Literal::try_from_token(token.as_ref()))
            .collect::<Result<CClause, _>>()?;
        Ok(query)
    }

    /// Adds each clause of a problem, and solves the query of the problem.
    ///
    /// Every clause and the query are validated before any resolution takes place.
    pub fn solve_problem(&mut self, problem: Problem) -> Result<report::Solve, err::ErrorKind> {
        let Problem {
            knowledge_base,
            query,
        } = problem;

        if query.is_empty() {
            return Err(err::BuildError::EmptyQuery.into());
        }

        for clause in knowledge_base {
            self.add_clause(clause)?;
        }

        self.solve_query(query)
    }
}

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn input_closes_on_seed() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.add_clause_tokens(&["p"]).is_ok());

        let query = the_context.query_from_tokens(&["p"]).unwrap();
        assert!(the_context.seed(query).is_ok());

        assert_eq!(
            the_context.add_clause_tokens(&["q"]),
            Err(err::ErrorKind::State(err::StateError::InputClosed(
                ContextState::Seeded
            )))
        );
    }

    #[test]
    fn duplicate_clause() {
        let mut the_context = Context::from_config(Config::default());

        let first = the_context.add_clause_tokens(&["q", "p"]).unwrap();
        let second = the_context.add_clause_tokens(&["p", "q", "p"]).unwrap();

        assert!(matches!(first, ClauseOk::Added(_)));
        assert_eq!(second, ClauseOk::Duplicate(first.key()));
        assert_eq!(the_context.clause_db.len(), 1);
    }

    #[test]
    fn malformed_token() {
        let mut the_context = Context::from_config(Config::default());

        assert_eq!(
            the_context.add_clause_tokens(&["p", "~-q"]),
            Err(err::ErrorKind::Literal(err::LiteralError::DoubleNegation(
                "~-q".to_string()
            )))
        );
        assert!(the_context.clause_db.is_empty());
    }

    #[test]
    fn empty_query() {
        let the_context = Context::from_config(Config::default());
        assert_eq!(
            the_context.query_from_tokens::<&str>(&[]),
            Err(err::ErrorKind::Build(err::BuildError::EmptyQuery))
        );
    }

    #[test]
    fn problem_display() {
        let problem = Problem {
            knowledge_base: vec![literals_from_string("p ~q").unwrap()],
            query: literals_from_string("q").unwrap(),
        };
        assert_eq!(problem.to_string(), "p ~q\n? q");
    }
}

/*!
Random problems.

Atoms are named `p0`, `p1`, …, and each clause (and the query) holds distinct atoms with uniformly random polarity.
The generator is given, and so a problem is reproducible from a seeded generator.

```rust
# use otter_refute::builder::random::{random_problem, RandomConfig};
# use rand::SeedableRng;
let config = RandomConfig::default();

let first = random_problem(&mut rand::rngs::StdRng::seed_from_u64(7), &config);
let second = random_problem(&mut rand::rngs::StdRng::seed_from_u64(7), &config);

assert_eq!(first, second);
assert_eq!(first.knowledge_base.len(), config.clauses);
```
*/

use rand::Rng;

use crate::{
    builder::Problem,
    structures::{
        clause::{CClause, Clause},
        literal::{Atom, Literal},
    },
};

/// The shape of a random problem.
#[derive(Clone, Debug)]
pub struct RandomConfig {
    /// The count of distinct atoms, at least one.
    pub atoms: usize,

    /// The count of clauses in the knowledge base.
    pub clauses: usize,

    /// The maximum count of literals in a clause.
    pub max_width: usize,

    /// The maximum count of literals in the query.
    pub max_query: usize,
}

impl Default for RandomConfig {
    fn default() -> Self {
        RandomConfig {
            atoms: 4,
            clauses: 6,
            max_width: 3,
            max_query: 2,
        }
    }
}

/// A random problem of the given shape.
pub fn random_problem<R: Rng + ?Sized>(rng: &mut R, config: &RandomConfig) -> Problem {
    let atoms = (0..config.atoms.max(1))
        .map(|index| Atom::from(format!("p{index}")))
        .collect::<Vec<_>>();

    let knowledge_base = (0..config.clauses)
        .map(|_| random_clause(rng, &atoms, config.max_width))
        .collect();
    let query = random_clause(rng, &atoms, config.max_query);

    Problem {
        knowledge_base,
        query,
    }
}

/// A canonical clause of at least one and at most `max_width` literals on distinct atoms.
fn random_clause<R: Rng + ?Sized>(rng: &mut R, atoms: &[Atom], max_width: usize) -> CClause {
    let width = rng.gen_range(1..=max_width.clamp(1, atoms.len()));

    rand::seq::index::sample(rng, atoms.len(), width)
        .into_iter()
        .map(|index| Literal::from_atom(atoms[index].clone(), rng.gen_bool(0.5)))
        .collect::<CClause>()
        .canonical()
}

#[cfg(test)]
mod random_tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn shape() {
        let config = RandomConfig {
            atoms: 3,
            clauses: 20,
            max_width: 5,
            max_query: 1,
        };
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);

        for _ in 0..10 {
            let problem = random_problem(&mut rng, &config);

            assert_eq!(problem.query.len(), 1);
            for clause in &problem.knowledge_base {
                assert!(!clause.is_empty() && clause.len() <= 3);
                assert!(clause.is_canonical());
                assert!(!clause.is_tautology());
            }
        }
    }
}

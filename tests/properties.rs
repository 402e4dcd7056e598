use std::collections::BTreeSet;

use otter_refute::{
    builder::{
        random::{random_problem, RandomConfig},
        Problem,
    },
    config::{Config, Pairing},
    context::{Context, ContextState},
    dispatch::library::report::{self},
    procedures::{resolve::resolve, saturate::RoundOk},
    structures::{
        clause::{CClause, Clause},
        literal::Literal,
    },
};

use rand::{Rng, SeedableRng};

/// Whether every valuation which satisfies each clause of the knowledge base satisfies each literal of the query.
fn entailed_by_truth_table(problem: &Problem) -> bool {
    let atoms = problem
        .knowledge_base
        .iter()
        .flat_map(|clause| clause.atoms())
        .chain(problem.query.atoms())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>();

    let value_of = |literal: &Literal, valuation: usize| {
        let index = atoms
            .iter()
            .position(|atom| *atom == literal.atom())
            .expect("missing atom");
        ((valuation >> index) & 1 == 1) == literal.polarity()
    };

    for valuation in 0..(1_usize << atoms.len()) {
        let knowledge_base_true = problem
            .knowledge_base
            .iter()
            .all(|clause| clause.iter().any(|literal| value_of(literal, valuation)));

        let query_true = problem
            .query
            .iter()
            .all(|literal| value_of(literal, valuation));

        if knowledge_base_true && !query_true {
            return false;
        }
    }

    true
}

fn config_with(pairing: Pairing) -> Config {
    let mut config = Config::default();
    config.pairing.set(pairing);
    config
}

fn random_config<R: Rng>(rng: &mut R) -> RandomConfig {
    RandomConfig {
        atoms: rng.gen_range(1..=4),
        clauses: rng.gen_range(0..=7),
        max_width: rng.gen_range(1..=3),
        max_query: rng.gen_range(1..=2),
    }
}

mod truth_table {
    use super::*;

    fn agrees_with_truth_table(pairing: Pairing, seed: u64) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

        for _ in 0..60 {
            let shape = random_config(&mut rng);
            let problem = random_problem(&mut rng, &shape);
            let expected = entailed_by_truth_table(&problem);

            let mut ctx = Context::from_config(config_with(pairing));
            let report = ctx.solve_problem(problem.clone()).unwrap();

            assert!(report.is_decided());
            assert_eq!(report.is_entailed(), expected, "Problem:\n{problem}");
        }
    }

    #[test]
    fn exhaustive() {
        agrees_with_truth_table(Pairing::Exhaustive, 0);
        agrees_with_truth_table(Pairing::Exhaustive, 1);
    }

    #[test]
    fn fresh() {
        agrees_with_truth_table(Pairing::Fresh, 0);
        agrees_with_truth_table(Pairing::Fresh, 1);
    }

    #[test]
    fn pairing_agrees() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(2);

        for _ in 0..40 {
            let shape = random_config(&mut rng);
            let problem = random_problem(&mut rng, &shape);

            let mut exhaustive = Context::from_config(config_with(Pairing::Exhaustive));
            let mut fresh = Context::from_config(config_with(Pairing::Fresh));

            assert_eq!(
                exhaustive.solve_problem(problem.clone()),
                fresh.solve_problem(problem.clone()),
                "Problem:\n{problem}"
            );
            assert_eq!(exhaustive.counters.rounds, fresh.counters.rounds);
        }
    }
}

mod operators {
    use super::*;

    #[test]
    fn negation_involution() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let problem = random_problem(&mut rng, &RandomConfig::default());

        for literal in problem.knowledge_base.iter().flatten() {
            assert_eq!(literal.negate().negate(), *literal);
            assert_ne!(literal.negate(), *literal);
            assert!(literal.negate().is_complement_of(literal));
        }
    }

    #[test]
    fn resolution_symmetry() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(4);
        let shape = RandomConfig {
            atoms: 3,
            clauses: 12,
            max_width: 3,
            max_query: 1,
        };

        for _ in 0..10 {
            let problem = random_problem(&mut rng, &shape);

            for left in &problem.knowledge_base {
                for right in &problem.knowledge_base {
                    let forward = resolve(left, right).into_iter().collect::<BTreeSet<_>>();
                    let backward = resolve(right, left).into_iter().collect::<BTreeSet<_>>();
                    assert_eq!(forward, backward);

                    for resolvent in forward {
                        assert!(resolvent.is_canonical());
                    }
                }
            }
        }
    }
}

mod saturation {
    use super::*;

    #[test]
    fn termination_bound() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(5);

        for _ in 0..40 {
            let shape = random_config(&mut rng);
            let problem = random_problem(&mut rng, &shape);

            let mut ctx = Context::from_config(Config::default());
            assert!(ctx.solve_problem(problem).is_ok());

            let atom_count = ctx
                .clause_db
                .clauses()
                .flat_map(|stored| stored.clause().atoms())
                .collect::<BTreeSet<_>>()
                .len();

            assert!(ctx.counters.rounds <= 4_usize.pow(atom_count as u32) + 1);
        }
    }

    #[test]
    fn fixpoint_stability() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(6);
        let mut saturated = 0;

        for pairing in [Pairing::Exhaustive, Pairing::Fresh] {
            for _ in 0..30 {
                let shape = random_config(&mut rng);
                let problem = random_problem(&mut rng, &shape);

                let mut ctx = Context::from_config(config_with(pairing));
                if ctx.solve_problem(problem).unwrap() != report::Solve::NotEntailed {
                    continue;
                }
                saturated += 1;

                let before = ctx
                    .clause_db
                    .clauses()
                    .map(|stored| stored.clause().clone())
                    .collect::<Vec<CClause>>();

                assert_eq!(ctx.round(), Ok(RoundOk::Fixpoint));
                assert_eq!(ctx.round(), Ok(RoundOk::Fixpoint));
                assert_eq!(ctx.state, ContextState::Saturated);

                let after = ctx
                    .clause_db
                    .clauses()
                    .map(|stored| stored.clause().clone())
                    .collect::<Vec<CClause>>();

                assert_eq!(before, after);
            }
        }

        assert!(saturated > 0);
    }

    #[test]
    fn round_leaves_knowledge_base_unchanged() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.add_clause_tokens(&["P", "Q"]).is_ok());
        assert!(ctx.add_clause_tokens(&["~P", "R"]).is_ok());
        assert!(ctx.add_clause_tokens(&["~Q", "R"]).is_ok());

        let query = ctx.query_from_tokens(&["R"]).unwrap();
        assert!(ctx.seed(query).is_ok());

        assert_eq!(ctx.round(), Ok(RoundOk::Novel(4)));
        assert_eq!(ctx.clause_db.len(), 4);
        assert_eq!(ctx.pending().len(), 4);
        assert_eq!(ctx.state, ContextState::Grow);

        assert_eq!(ctx.grow(), Ok(4));
        assert_eq!(ctx.clause_db.len(), 8);
        assert!(ctx.pending().is_empty());
        assert_eq!(ctx.state, ContextState::Round);
    }
}

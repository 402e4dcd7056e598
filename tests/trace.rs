use std::{cell::RefCell, rc::Rc};

use otter_refute::{
    config::Config,
    context::Context,
    dispatch::{
        library::{
            delta::{self, Delta},
            report::{self, Report},
            stat::Stat,
        },
        Dispatch,
    },
};

/// A context with a dispatcher which records every dispatch.
fn recording_context() -> (Context, Rc<RefCell<Vec<Dispatch>>>) {
    let dispatches = Rc::new(RefCell::new(Vec::default()));
    let dispatches_clone = dispatches.clone();

    let mut ctx = Context::from_config(Config::default());
    ctx.set_dispatcher(Box::new(move |dispatch: Dispatch| {
        dispatches_clone.borrow_mut().push(dispatch)
    }));

    (ctx, dispatches)
}

fn worked_example(ctx: &mut Context, query: &str) -> report::Solve {
    assert!(ctx.add_clause_tokens(&["P", "Q"]).is_ok());
    assert!(ctx.add_clause_tokens(&["~P", "R"]).is_ok());
    assert!(ctx.add_clause_tokens(&["~Q", "R"]).is_ok());

    let query = ctx.query_from_tokens(&[query]).unwrap();
    ctx.solve_query(query).unwrap()
}

mod trace {
    use super::*;

    #[test]
    fn order_of_dispatches() {
        let (mut ctx, dispatches) = recording_context();
        assert_eq!(worked_example(&mut ctx, "R"), report::Solve::Entailed);

        let lines = dispatches
            .borrow()
            .iter()
            .map(|dispatch| dispatch.to_string())
            .collect::<Vec<_>>();

        assert_eq!(lines[0], "Input clause [P, Q]");
        assert_eq!(lines[3], "Negated query [~R]");
        assert_eq!(lines[4], "Initial knowledge base (with negated query): 4 clauses");
        assert_eq!(lines[5], "Round 1: 6 pairs");
        assert_eq!(lines[6], "Resolved [P, Q] and [~P, R] to get [Q, R]");

        assert!(lines
            .iter()
            .any(|line| line == "Resolved [~R] and [R] to get empty clause []"));
        assert!(!lines.iter().any(|line| line == "No more resolvents"));
    }

    #[test]
    fn finish_follows_report() {
        let (mut ctx, dispatches) = recording_context();
        assert_eq!(worked_example(&mut ctx, "P"), report::Solve::NotEntailed);

        let dispatches = dispatches.borrow();
        let count = dispatches.len();

        assert_eq!(
            dispatches[count - 2],
            Dispatch::Report(Report::Solve(report::Solve::NotEntailed))
        );
        assert_eq!(dispatches[count - 1], Dispatch::Report(Report::Finish));

        assert!(dispatches.contains(&Dispatch::Delta(Delta::Saturation(
            delta::Saturation::Fixpoint
        ))));
        assert!(dispatches.contains(&Dispatch::Stat(Stat::Rounds(ctx.counters.rounds))));
    }

    #[test]
    fn resolvents_added_after_round() {
        let (mut ctx, dispatches) = recording_context();
        worked_example(&mut ctx, "R");

        let dispatches = dispatches.borrow();

        let first_addition = dispatches
            .iter()
            .position(|dispatch| {
                matches!(
                    dispatch,
                    Dispatch::Delta(Delta::ClauseDB(delta::ClauseDB::Resolvent(_, _)))
                )
            })
            .unwrap();

        let novel_in_first_round = dispatches[..first_addition]
            .iter()
            .filter(|dispatch| {
                matches!(
                    dispatch,
                    Dispatch::Delta(Delta::Saturation(delta::Saturation::Resolution { .. }))
                )
            })
            .count();

        assert_eq!(novel_in_first_round, 4);
    }

    #[test]
    fn no_dispatcher() {
        let (mut ctx, dispatches) = recording_context();
        ctx.clear_dispatcher();

        assert_eq!(worked_example(&mut ctx, "R"), report::Solve::Entailed);
        assert!(dispatches.borrow().is_empty());
    }
}

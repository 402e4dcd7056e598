use otter_refute::{
    builder::text::read_problem,
    config::Config,
    context::Context,
    dispatch::library::report::{self},
    structures::clause::Clause,
    types::err::{self},
};

mod text {
    use super::*;

    #[test]
    fn worked_example() {
        let text = "
# Either P or Q, and each implies R.
P Q
~P, R
~Q, R
? R
";
        let problem = read_problem(text.as_bytes()).unwrap();
        assert_eq!(problem.knowledge_base.len(), 3);
        assert_eq!(problem.query.as_string(), "[R]");

        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.solve_problem(problem), Ok(report::Solve::Entailed));
    }

    #[test]
    fn display_reads_back() {
        let text = "P ~Q\n-R\n? Q R\n";
        let problem = read_problem(text.as_bytes()).unwrap();

        let again = read_problem(problem.to_string().as_bytes()).unwrap();
        assert_eq!(problem, again);
    }

    #[test]
    fn missing_query() {
        let problem = read_problem("P\n".as_bytes()).unwrap();

        let mut ctx = Context::from_config(Config::default());
        assert_eq!(
            ctx.solve_problem(problem),
            Err(err::ErrorKind::Build(err::BuildError::EmptyQuery))
        );
    }

    #[test]
    fn malformed_line() {
        assert_eq!(
            read_problem("P\n% note\nQ p,q,\n~p ~\n".as_bytes()),
            Err(err::ParseError::Line(
                4,
                err::LiteralError::InvalidName("~".to_string())
            ))
        );
    }

    #[test]
    fn error_display() {
        let error = err::ErrorKind::from(err::ParseError::DuplicateQuery(7));
        assert_eq!(error.to_string(), "Line 7: a second query");
        assert!(error.is_input());
    }
}

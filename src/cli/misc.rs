use std::io::BufReader;

use crossterm::style::Stylize;
use rand::SeedableRng;

use otter_refute::{
    builder::{literals_from_string, random::random_problem, text::read_problem, Problem},
    dispatch::{library::report, Dispatch},
    types::err::{self},
};

use crate::args::Args;

/// Installs a console logger, on stderr, at the given level.
#[cfg(feature = "log")]
pub fn init_logging(level: log::LevelFilter) -> Result<(), String> {
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Root},
        encode::pattern::PatternEncoder,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("c {l} {t} - {m}{n}")))
        .build();

    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| e.to_string())?;

    log4rs::init_config(config).map_err(|e| e.to_string())?;
    Ok(())
}

/// The problem to solve, from a random generator, a file, or stdin, with any query from the arguments.
pub fn load_problem(args: &Args) -> Result<Problem, err::ErrorKind> {
    let mut problem = match (args.random, &args.problem_file) {
        (true, _) => {
            let mut rng = match args.seed {
                Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
                None => rand::rngs::StdRng::from_entropy(),
            };
            let problem = random_problem(&mut rng, &args.random_config());

            println!("c Random problem:");
            for line in problem.to_string().lines() {
                println!("c   {line}");
            }
            problem
        }

        (false, Some(path)) => {
            println!("c Reading problem from {path:?}");
            let file = std::fs::File::open(path).map_err(err::ParseError::from)?;
            read_problem(BufReader::new(file))?
        }

        (false, None) => {
            println!("c Reading problem from stdin");
            read_problem(std::io::stdin().lock())?
        }
    };

    if let Some(query) = &args.query {
        problem.query = literals_from_string(query)?;
    }

    println!(
        "c {} clauses, query of {} literals",
        problem.knowledge_base.len(),
        problem.query.len()
    );
    Ok(problem)
}

/// The comment line for a dispatch, if any, given whether steps are traced and stats are shown.
fn comment_line(dispatch: &Dispatch, trace: bool, stats: bool) -> Option<String> {
    match dispatch {
        Dispatch::Delta(delta) if trace => Some(format!("c {delta}")),
        Dispatch::Stat(stat) if stats => Some(format!("c {stat}")),
        _ => None,
    }
}

/// A dispatcher which prints each step of a solve when tracing, and each statistic when asked for stats.
pub fn dispatcher(trace: bool, stats: bool) -> impl FnMut(Dispatch) {
    move |dispatch: Dispatch| {
        if let Some(line) = comment_line(&dispatch, trace, stats) {
            println!("{line}");
        }
    }
}

pub fn print_report(report: report::Solve) {
    let line = format!("s {report}");
    match report {
        report::Solve::Entailed => println!("{}", line.green()),
        report::Solve::NotEntailed => println!("{}", line.red()),
        report::Solve::TimeUp | report::Solve::Unknown => println!("{}", line.yellow()),
    }
}

#[cfg(test)]
mod misc_tests {
    use super::*;
    use otter_refute::dispatch::library::{
        delta::{self, Delta},
        report::Report,
        stat::Stat,
    };

    #[test]
    fn comment_lines() {
        let stat = Dispatch::Stat(Stat::Rounds(3));
        let delta = Dispatch::Delta(Delta::Saturation(delta::Saturation::Fixpoint));
        let finish = Dispatch::Report(Report::Finish);

        assert_eq!(comment_line(&stat, false, true), Some("c Rounds:      3".to_string()));
        assert_eq!(comment_line(&stat, true, false), None);

        assert!(comment_line(&delta, true, false).is_some());
        assert_eq!(comment_line(&delta, false, true), None);

        assert_eq!(comment_line(&finish, true, true), None);
    }
}

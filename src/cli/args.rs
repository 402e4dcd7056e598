use std::{path::PathBuf, time::Duration};

use clap::Parser;

use otter_refute::{
    builder::random::RandomConfig,
    config::{Config, Pairing},
};

/// Decides whether a propositional knowledge base entails a query, by resolution refutation
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// A problem file, with one clause per line and the query on a line beginning with '?' (read from stdin if absent)
    pub problem_file: Option<PathBuf>,

    /// The query, as literal tokens (replacing any query in the problem file)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Display each step of the solve
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Display stats on completion
    #[arg(short, long, default_value_t = false)]
    pub stats: bool,

    /// Which pairs of clauses to resolve each round
    #[arg(long, default_value_t, value_enum)]
    pub pairing: Pairing,

    /// Time limit for the solve, in seconds
    #[arg(long, value_parser = parse_seconds)]
    pub time_limit: Option<Duration>,

    /// Solve a random problem, in place of a problem file
    #[arg(short, long, default_value_t = false)]
    pub random: bool,

    /// The count of atoms in a random problem
    #[arg(long, default_value_t = 4)]
    pub atoms: usize,

    /// The count of clauses in a random problem
    #[arg(long, default_value_t = 6)]
    pub clauses: usize,

    /// The maximum count of literals in a clause of a random problem
    #[arg(long, default_value_t = 3)]
    pub width: usize,

    /// The seed of a random problem
    #[arg(long)]
    pub seed: Option<u64>,

    /// The level of logs, with the `log` feature
    #[arg(long, default_value = "warn", value_parser = |level: &str| level.parse::<log::LevelFilter>().map_err(|e| e.to_string()))]
    #[cfg_attr(not(feature = "log"), allow(dead_code))]
    pub log_level: log::LevelFilter,

    /// Print help as markdown
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

fn parse_seconds(seconds: &str) -> Result<Duration, String> {
    let seconds = seconds.parse::<f64>().map_err(|e| e.to_string())?;
    Duration::try_from_secs_f64(seconds).map_err(|e| e.to_string())
}

impl Args {
    /// The configuration of a context, from the arguments.
    pub fn config(&self) -> Config {
        let mut the_config = Config::default();

        the_config.pairing.set(self.pairing);

        if let Some(limit) = self.time_limit {
            if !the_config.time_limit.set(limit) {
                println!("c Time limit of {limit:.2?} ignored");
            }
        }

        the_config
    }

    /// The shape of a random problem, from the arguments.
    pub fn random_config(&self) -> RandomConfig {
        RandomConfig {
            atoms: self.atoms,
            clauses: self.clauses,
            max_width: self.width,
            ..Default::default()
        }
    }
}

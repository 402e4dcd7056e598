#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use clap::Parser;

use otter_refute::context::Context;

mod args;
mod misc;

use args::Args;

fn main() {
    let args = Args::parse();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Args>();
        return;
    }

    #[cfg(feature = "log")]
    if let Err(e) = misc::init_logging(args.log_level) {
        println!("c Logging unavailable: {e}");
    }

    let problem = match misc::load_problem(&args) {
        Ok(problem) => problem,
        Err(e) => {
            println!("c Input error: {e}");
            std::process::exit(1);
        }
    };

    let mut the_context = Context::from_config(args.config());
    if args.trace || args.stats {
        the_context.set_dispatcher(Box::new(misc::dispatcher(args.trace, args.stats)));
    }

    let report = match the_context.solve_problem(problem) {
        Ok(report) => report,
        Err(e) if e.is_input() => {
            println!("c Input error: {e}");
            std::process::exit(1);
        }
        Err(e) => {
            println!("c Solve error: {e}");
            std::process::exit(2);
        }
    };

    misc::print_report(report);
}

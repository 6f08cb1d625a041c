//! `cooking-english` - builds the course pages from lesson documents

use clap::Parser;

use cooking_english::build::run_build;
use cooking_english::cli::Cli;
use cooking_english::error::ExitCode;
use cooking_english::observability::init_logging;
use cooking_english_core::Roster;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::USAGE_ERROR
            } else {
                ExitCode::SUCCESS
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    match run_build(&cli.build_options(), Roster::builtin()) {
        Ok(_) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

use clap::Parser;
use twsconf::adapters::tracing_log_adapter::init_logging;
use twsconf::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    init_logging();
    run(Cli::parse())
}

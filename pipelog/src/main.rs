use clap::Parser;
use pipelog_core::cli::{self, AnalyzeArgs};
use pipelog_core::logging::{default_log_format, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "pipelog",
    version,
    about = "Pipelog: request latency statistics from JSON logs"
)]
struct Cli {
    #[command(flatten)]
    args: AnalyzeArgs,
}

fn main() {
    let cli = Cli::parse();

    let log_format = cli
        .args
        .log_format
        .map(Into::into)
        .unwrap_or_else(default_log_format);
    init_logging(log_format);

    tracing::debug!(args = ?cli.args, "starting");

    if let Err(e) = cli::run(cli.args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

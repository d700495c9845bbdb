mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{advise, climate, companions, new, place, plan, sun, validate, zones};
use tracing_subscriber::EnvFilter;

/// Log to stderr.  `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Validate(args) => validate::run(&cli, args),
        Commands::Zones(args) => zones::run(&cli, args),
        Commands::New(args) => new::run(&cli, args),
        Commands::Place(args) => place::run(&cli, args),
        Commands::Advise(args) => advise::run(&cli, args),
        Commands::Plan(args) => plan::run(&cli, args),
        Commands::Companions(args) => companions::run(&cli, args),
        Commands::Climate(args) => climate::run(&cli, args),
        Commands::Sun(args) => sun::run(&cli, args),
        #[cfg(feature = "download")]
        Commands::Analyze(args) => commands::analyze::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }

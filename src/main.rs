use sqlmaker::cli::{Cli, Commands, GenerateArgs};
use sqlmaker::commands::{generate, init};
use sqlmaker::error::Result;
use sqlmaker::Config;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

// Allow println in main CLI binary
#[allow(clippy::disallowed_methods)]
fn main() {
    init_logging();

    let cli = Cli::parse();
    tracing::debug!("sqlmaker CLI initialized");

    let result = match cli.command {
        Some(Commands::Generate(args)) => run_generate(&args, cli.config.as_deref()),
        Some(Commands::Init { dir, locale, force }) => {
            init::handle_init(&dir, locale, force).map(|_| ())
        }
        None => {
            println!("sqlmaker - Use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run_generate(args: &GenerateArgs, config_path: Option<&Path>) -> Result<()> {
    let dir = std::env::current_dir()?;
    let config = Config::discover(config_path, &dir)?;
    generate::handle_generate(args, &config)
}

/// Initialize logging on stderr so generated SQL on stdout stays clean
fn init_logging() {
    // Default to WARN for dependencies, overridable with RUST_LOG
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sqlmaker=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

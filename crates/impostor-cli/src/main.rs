//! CLI entry point - the composition root.
//!
//! Infrastructure is wired together once via bootstrap; command dispatch
//! routes to handlers which operate on the composed context.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use impostor_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(mut cli: Cli) -> Result<(), CliError> {
    // Dispatch to appropriate handler
    let Some(command) = cli.command.take() else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    // Bootstrap the CLI context (composition root)
    let config = CliConfig::from_cli(&cli)?;
    let mut ctx = bootstrap(config).await?;

    match command {
        Commands::Show { json } => handlers::setup::show(&ctx, json),
        Commands::Players { count } => handlers::setup::players(&mut ctx, count).await,
        Commands::Name { seat, name } => handlers::setup::name(&mut ctx, seat, &name).await,
        Commands::Impostors { count } => handlers::setup::impostors(&mut ctx, count).await,
        Commands::Difficulty { level } => handlers::setup::difficulty(&mut ctx, level).await,
        Commands::Category { command } => handlers::setup::category(&mut ctx, command).await,
        Commands::Hints => handlers::setup::hints(&mut ctx).await,
        Commands::Reset => handlers::setup::reset(&ctx).await,
        Commands::Play => handlers::play::execute(&mut ctx).await,
        Commands::Paths => handlers::paths::execute(&ctx),
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}

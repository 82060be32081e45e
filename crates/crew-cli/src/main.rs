use clap::Parser;

mod cli;
mod commands;
mod context;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("crw error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = crew_config::CrewConfig::load_with_dotenv()?;
    let mut ctx = context::AppContext::init(&cli, config).await?;

    commands::dispatch(&cli, &mut ctx).await?;

    // Anything the workbench reported is an error for the invocation.
    let messages = ctx.workbench.messages();
    if !messages.is_empty() {
        anyhow::bail!("{}", messages.as_text());
    }
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CREWDECK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

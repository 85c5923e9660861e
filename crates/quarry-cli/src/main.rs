use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod console;
mod context;
mod invitations;
mod output;

#[cfg(test)]
mod test_support;

use commands::CommandError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(error) = run().await {
        match error.downcast_ref::<CommandError>() {
            Some(command_error) if command_error.is_reported() => println!("{command_error}"),
            _ => eprintln!("quarry error: {error:#}"),
        }
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;

    let config = bootstrap::load_config(&flags)?;

    let mut ctx = context::AppContext::init(config)
        .await
        .context("failed to initialize quarry application context")?;

    commands::dispatch::dispatch(cli.command, &mut ctx).await?;
    Ok(())
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("QUARRY_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(flags.default_log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

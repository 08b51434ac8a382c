mod args;
mod command;
mod locator;

use crate::args::CommonArgs;
use crate::command::Command;
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mutual-friends-bot", version, about)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let Cli { common, command } = Cli::parse();

    // Sentry has to be initialized before the async runtime starts.
    let _sentry = init_sentry(&common);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(command.run(common))
}

fn init_sentry(args: &CommonArgs) -> Option<sentry::ClientInitGuard> {
    let dsn = args.sentry_dsn.as_deref()?;

    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: args.sentry_environment.clone().map(Into::into),
            sample_rate: args.sentry_sample_rate.unwrap_or(1.0),
            traces_sample_rate: args.sentry_traces_sample_rate.unwrap_or(0.0),
            ..Default::default()
        },
    )))
}

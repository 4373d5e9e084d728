use clap::Parser;
use links_uteis::{cli::Cli, config, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(config::Config::from_env()?);
    config.validate()?;

    telemetry::init(&config);
    config.print_summary();

    server::run(config).await
}

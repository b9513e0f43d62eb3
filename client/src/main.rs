use anyhow::Context;
use clap::Parser;
use drip_rewards_client::{logger, CliConfig, DripRewardsClient};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    logger::init_cli_logger(config.verbose);

    run(&config).inspect_err(|e| tracing::error!("initialize failed: {e:#}"))
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    let provider = config.provider().context("resolving provider")?;
    let program_id = config.program_id()?;

    let client = DripRewardsClient::connect(&provider, program_id)
        .with_context(|| format!("connecting to {}", provider.cluster.url()))?;
    let signature = client.initialize()?;

    println!("Your transaction signature {signature}");
    Ok(())
}

use crate::orchestrator::workflow::launch;
use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod llm;
mod orchestrator;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let query = args.query.clone();
    let config = args.into_config();

    launch(&config, &query).await
}

// HPD 311 client - CLI binary
// Run with: cargo run --bin hpd-311 -- [args]

use clap::Parser;
use hpd_311_client::cli::{runner, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    hpd_311_client::init_logging(cli.verbose);

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    runner::run(cli).await
}

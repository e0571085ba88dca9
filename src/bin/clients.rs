//! Bulk client load generator.
//!
//! Runs N simulated clients against a war server and reports aggregate
//! win/draw/loss counts.

use clap::Parser;

#[derive(Parser)]
#[command(about = "run simulated war clients against a server")]
struct Args {
    /// Server address.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    /// Server port.
    #[arg(long, default_value_t = 4444)]
    port: u16,
    /// How many clients to run in total.
    #[arg(long, default_value_t = 2)]
    count: usize,
    /// How many clients may be in flight at once.
    #[arg(long, default_value_t = 1000)]
    limit: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cardwar::log();
    cardwar::kys();
    let args = Args::parse();
    let tally = cardwar::client::swarm(&args.host, args.port, args.count, args.limit).await;
    log::info!("[swarm] {}", tally);
    anyhow::ensure!(tally.failures == 0, "{} clients failed", tally.failures);
    Ok(())
}

//! War server binary.
//!
//! Pairs arriving TCP clients into games and adjudicates them until the
//! user presses Ctrl+C.

use cardwar::gameroom::Matchmaker;
use clap::Parser;

#[derive(Parser)]
#[command(about = "serve games of war over tcp")]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to listen on.
    #[arg(long, default_value_t = 4444)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cardwar::log();
    cardwar::kys();
    let args = Args::parse();
    Matchmaker::new().serve(&args.host, args.port).await
}

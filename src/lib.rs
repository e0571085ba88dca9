//! Two-player War card game served over raw TCP.
//!
//! A server pairs arriving clients into games, deals each pair a shuffled
//! half-deck, and adjudicates 26 rounds by rank comparison until both hands
//! are exhausted. Any malformed input, replayed card, or disconnect kills
//! the game for both sides without touching any other game.
//!
//! ## Modules
//!
//! - [`cards`] — byte-encoded [`cards::Card`], bitmask [`cards::Hand`],
//!   and uniform dealing via [`cards::Deck`]
//! - [`protocol`] — wire messages, the async [`protocol::Connection`]
//!   codec, and the [`protocol::GameError`] taxonomy
//! - [`gameroom`] — the per-game [`gameroom::Session`] state machine and
//!   the [`gameroom::Matchmaker`] pairing loop
//! - [`client`] — a well-behaved simulated client and a bounded load swarm

pub mod cards;
pub mod client;
pub mod gameroom;
pub mod protocol;

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;
/// Cards dealt to each player; a game is exactly this many rounds.
pub const HAND_SIZE: usize = 26;
/// Deadline applied to every server-side read. Expiry is treated the same
/// as a peer disconnect.
pub const READ_DEADLINE: std::time::Duration = std::time::Duration::from_secs(30);

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
pub fn kys() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.unwrap();
        println!();
        log::warn!("violent interrupt received, exiting immediately");
        std::process::exit(0);
    });
}

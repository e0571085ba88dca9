use super::Lobby;
use super::Session;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use tokio::net::TcpListener;
use tokio::net::TcpStream;

/// Accepts connections forever and pairs them into independent games.
///
/// The matchmaker never inspects message content and never awaits game
/// I/O: each formed pair is handed to a [`Session`] task that runs to
/// completion on its own, so a hung client stalls nobody but its own
/// opponent. Session completion is observed only by a detached
/// bookkeeping task that logs the result.
pub struct Matchmaker {
    lobby: Lobby<TcpStream>,
    games: AtomicUsize,
}

impl Default for Matchmaker {
    fn default() -> Self {
        Self::new()
    }
}

impl Matchmaker {
    pub fn new() -> Self {
        Self {
            lobby: Lobby::new(),
            games: AtomicUsize::new(0),
        }
    }

    /// Binds and serves until the process is interrupted.
    pub async fn serve(self, host: &str, port: u16) -> anyhow::Result<()> {
        let listener = TcpListener::bind((host, port)).await?;
        self.run(listener).await
    }

    /// Accept loop over an already-bound listener.
    pub async fn run(self, listener: TcpListener) -> anyhow::Result<()> {
        log::info!("[lobby] listening on {}", listener.local_addr()?);
        loop {
            let (stream, peer) = listener.accept().await?;
            log::debug!("[lobby] accepted {}", peer);
            self.connect(stream);
        }
    }

    /// Entry point for a newly accepted connection: admit it, and spawn a
    /// session as soon as it has an opponent.
    pub fn connect(&self, stream: TcpStream) {
        if let Some((one, two)) = self.lobby.admit(stream) {
            let id = self.games.fetch_add(1, Ordering::Relaxed);
            log::info!("[lobby] paired game {}", id);
            let finish = tokio::spawn(Session::new(id, one, two).run());
            tokio::spawn(async move {
                match finish.await {
                    Ok(Ok(())) => log::info!("[session {}] finished", id),
                    Ok(Err(e)) => log::info!("[session {}] ended early: {}", id, e),
                    Err(e) => log::error!("[session {}] task panicked: {}", id, e),
                }
            });
        }
    }
    /// Number of games started so far.
    pub fn games(&self) -> usize {
        self.games.load(Ordering::Relaxed)
    }
}

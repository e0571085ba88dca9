//! Simulated war clients, one honest player and a bounded load swarm.
//!
//! This is the client side of the contract the server exposes: send
//! WANT_GAME, read the 27-byte deal, then for each dealt card send
//! PLAY_CARD and read the 2-byte PLAY_RESULT, accumulating score.

use crate::protocol::Connection;
use crate::protocol::GameError;
use crate::protocol::Message;
use crate::protocol::Outcome;
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use std::cmp::Ordering;
use std::sync::Arc;
use tokio::io::AsyncRead;
use tokio::io::AsyncWrite;
use tokio::net::TcpStream;
use tokio::sync::Semaphore;

/// Aggregate win/draw/loss counts across a swarm of clients.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub failures: usize,
}

impl Tally {
    /// Games that ran to completion.
    pub fn games(&self) -> usize {
        self.wins + self.draws + self.losses
    }
    fn count(&mut self, result: Result<Outcome, GameError>) {
        match result {
            Ok(Outcome::Win) => self.wins += 1,
            Ok(Outcome::Draw) => self.draws += 1,
            Ok(Outcome::Lose) => self.losses += 1,
            Err(_) => self.failures += 1,
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} won / {} drew / {} lost / {} failed",
            self.wins, self.draws, self.losses, self.failures
        )
    }
}

/// Connects and plays one full game, returning this client's overall
/// outcome (net score across all 26 rounds).
pub async fn play(host: &str, port: u16) -> Result<Outcome, GameError> {
    let stream = TcpStream::connect((host, port)).await?;
    game(&mut Connection::new(stream)).await
}

/// The well-behaved client half of the protocol, transport-agnostic.
pub async fn game<S>(connection: &mut Connection<S>) -> Result<Outcome, GameError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    connection.send(Message::WantGame).await?;
    let hand = connection.deal().await?;
    let mut score = 0i32;
    for card in hand {
        connection.send(Message::PlayCard(card)).await?;
        match connection.result().await? {
            Outcome::Win => score += 1,
            Outcome::Lose => score -= 1,
            Outcome::Draw => {}
        }
    }
    log::debug!("[client] game complete, net score {}", score);
    Ok(match score.cmp(&0) {
        Ordering::Greater => Outcome::Win,
        Ordering::Equal => Outcome::Draw,
        Ordering::Less => Outcome::Lose,
    })
}

/// Runs `n` clients against `host:port` with at most `limit` in flight,
/// collecting completions in arbitrary order.
pub async fn swarm(host: &str, port: u16, n: usize, limit: usize) -> Tally {
    let semaphore = Arc::new(Semaphore::new(limit));
    let mut pending = (0..n)
        .map(|i| {
            let semaphore = semaphore.clone();
            async move {
                let _permit = semaphore.acquire().await.expect("semaphore open");
                (i, play(host, port).await)
            }
        })
        .collect::<FuturesUnordered<_>>();
    let mut tally = Tally::default();
    while let Some((i, result)) = pending.next().await {
        if let Err(ref e) = result {
            log::warn!("[client {}] failed: {}", i, e);
        }
        tally.count(result);
    }
    log::info!("[swarm] {} completed clients", tally.games());
    tally
}

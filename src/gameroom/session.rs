use super::judge;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::protocol::Connection;
use crate::protocol::GameError;
use crate::protocol::Message;
use crate::protocol::Outcome;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tokio::io::AsyncRead;
use tokio::io::AsyncWrite;

/// One paired game from handshake to termination.
///
/// Exclusively owns both connections and both hands for its lifetime; no
/// other task touches them. The state machine is
/// `AwaitingWantGame → Dealt → Round(1..=26) → Closed`, and any
/// [`GameError`] anywhere collapses straight to Closed: both connections
/// are shut down and nothing further is sent to either side.
pub struct Session<S> {
    id: usize,
    one: Connection<S>,
    two: Connection<S>,
    rng: SmallRng,
}

impl<S> Session<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(id: usize, one: S, two: S) -> Self {
        Self {
            id,
            one: Connection::new(one),
            two: Connection::new(two),
            rng: SmallRng::from_os_rng(),
        }
    }
    /// Deterministic deal for tests.
    pub fn seeded(id: usize, one: S, two: S, seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            ..Self::new(id, one, two)
        }
    }

    /// Runs the game to completion and closes both connections exactly once.
    pub async fn run(mut self) -> Result<(), GameError> {
        let result = self.play().await;
        self.one.close().await;
        self.two.close().await;
        match result {
            Ok(()) => log::debug!("[session {}] complete", self.id),
            Err(e) => log::debug!("[session {}] killed: {}", self.id, e),
        }
        result
    }

    async fn play(&mut self) -> Result<(), GameError> {
        self.handshake().await?;
        let (mut one, mut two) = self.dealt().await?;
        for round in 1..=crate::HAND_SIZE {
            self.round(round, &mut one, &mut two).await?;
        }
        debug_assert!(one.size() == 0 && two.size() == 0);
        Ok(())
    }

    /// Both sides must open with exactly WANT_GAME before anything is dealt.
    async fn handshake(&mut self) -> Result<(), GameError> {
        match (self.one.recv().await?, self.two.recv().await?) {
            (Message::WantGame, Message::WantGame) => Ok(()),
            _ => Err(GameError::MalformedMessage),
        }
    }

    /// Deals audited hands and sends each player theirs.
    async fn dealt(&mut self) -> Result<(Hand, Hand), GameError> {
        let (one, two) = Deck::deal(&mut self.rng)?;
        log::debug!("[session {}] dealt {} | {}", self.id, one, two);
        self.one.send(Message::GameStart(one)).await?;
        self.two.send(Message::GameStart(two)).await?;
        Ok((one, two))
    }

    /// One round: a card from each side, ownership enforced, mirrored
    /// results. Violations abort before any result is written.
    async fn round(
        &mut self,
        round: usize,
        one: &mut Hand,
        two: &mut Hand,
    ) -> Result<(), GameError> {
        let a = match self.one.recv().await? {
            Message::PlayCard(card) => card,
            _ => return Err(GameError::MalformedMessage),
        };
        let b = match self.two.recv().await? {
            Message::PlayCard(card) => card,
            _ => return Err(GameError::MalformedMessage),
        };
        one.remove(a)?;
        two.remove(b)?;
        let outcome = Outcome::versus(judge::compare(a, b));
        log::trace!(
            "[session {}] round {}: {} vs {} -> {}",
            self.id,
            round,
            a,
            b,
            outcome
        );
        self.one.send(Message::PlayResult(outcome)).await?;
        self.two.send(Message::PlayResult(outcome.mirror())).await?;
        Ok(())
    }
}

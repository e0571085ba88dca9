use super::command::Command;
use super::error::GameError;
use super::message::Message;
use super::outcome::Outcome;
use crate::cards::Card;
use crate::cards::Hand;
use tokio::io::AsyncRead;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWrite;
use tokio::io::AsyncWriteExt;
use tokio::time::timeout;

/// One side of a game: a byte stream speaking the war protocol.
///
/// Generic over the transport so sessions run identically over a real
/// `TcpStream` or an in-memory duplex pipe in tests. Reads block until
/// exactly the expected byte count arrives; EOF mid-read and an expired
/// deadline both surface as [`GameError::ConnectionClosed`], which the
/// session treats the same as any other violation.
#[derive(Debug)]
pub struct Connection<S> {
    stream: S,
    deadline: std::time::Duration,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            deadline: crate::READ_DEADLINE,
        }
    }
    pub fn with_deadline(stream: S, deadline: std::time::Duration) -> Self {
        Self { stream, deadline }
    }

    /// Reads one 2-byte client frame and decodes it.
    pub async fn recv(&mut self) -> Result<Message, GameError> {
        let mut buf = [0u8; 2];
        self.fill(&mut buf).await?;
        Message::decode(buf)
    }
    /// Writes a complete message and flushes it.
    pub async fn send(&mut self, message: Message) -> Result<(), GameError> {
        self.stream.write_all(&message.encode()).await?;
        self.stream.flush().await?;
        Ok(())
    }
    /// Client side: reads the 27-byte GAME_START frame into a hand.
    /// Out-of-range or duplicated card bytes are malformed.
    pub async fn deal(&mut self) -> Result<Hand, GameError> {
        let mut buf = [0u8; 1 + crate::HAND_SIZE];
        self.fill(&mut buf).await?;
        if buf[0] != u8::from(Command::GameStart) {
            return Err(GameError::MalformedMessage);
        }
        if buf[1..].iter().any(|n| *n as usize >= crate::DECK_SIZE) {
            return Err(GameError::MalformedMessage);
        }
        let hand = Hand::from(buf[1..].iter().map(|n| Card::from(*n)).collect::<Vec<_>>());
        if hand.size() != crate::HAND_SIZE {
            return Err(GameError::MalformedMessage);
        }
        Ok(hand)
    }
    /// Client side: reads a 2-byte PLAY_RESULT frame.
    pub async fn result(&mut self) -> Result<Outcome, GameError> {
        let mut buf = [0u8; 2];
        self.fill(&mut buf).await?;
        if buf[0] != u8::from(Command::PlayResult) {
            return Err(GameError::MalformedMessage);
        }
        Outcome::try_from(buf[1])
    }
    /// Mutable access to the underlying transport.
    pub fn stream_mut(&mut self) -> &mut S {
        &mut self.stream
    }
    /// Shuts the stream down. Killing a game calls this on both sides;
    /// shutting down an already-gone peer must not fail the session.
    pub async fn close(&mut self) {
        let _ = self.stream.shutdown().await;
    }

    /// Deadline-bounded exact read.
    async fn fill(&mut self, buf: &mut [u8]) -> Result<(), GameError> {
        timeout(self.deadline, self.stream.read_exact(buf)).await??;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn recv_decodes_a_written_frame() {
        let (client, server) = tokio::io::duplex(64);
        let mut client = Connection::new(client);
        let mut server = Connection::new(server);
        client.send(Message::WantGame).await.unwrap();
        assert_eq!(server.recv().await, Ok(Message::WantGame));
    }
    #[tokio::test]
    async fn eof_mid_read_is_connection_closed() {
        let (client, server) = tokio::io::duplex(64);
        let mut server = Connection::new(server);
        drop(client);
        assert_eq!(server.recv().await, Err(GameError::ConnectionClosed));
    }
    #[tokio::test]
    async fn deadline_expiry_is_connection_closed() {
        let (_client, server) = tokio::io::duplex(64);
        let mut server = Connection::with_deadline(server, Duration::from_millis(20));
        assert_eq!(server.recv().await, Err(GameError::ConnectionClosed));
    }
    #[tokio::test]
    async fn deal_roundtrips_a_hand() {
        let (client, server) = tokio::io::duplex(64);
        let mut client = Connection::new(client);
        let mut server = Connection::new(server);
        let hand = Hand::from(0x000FFFFFFC000000u64);
        server.send(Message::GameStart(hand)).await.unwrap();
        assert_eq!(client.deal().await, Ok(hand));
    }
    #[tokio::test]
    async fn deal_rejects_duplicate_cards() {
        let (client, server) = tokio::io::duplex(64);
        let mut client = Connection::new(client);
        let mut server = Connection::new(server);
        let mut bytes = vec![1u8];
        bytes.extend(std::iter::repeat(5u8).take(crate::HAND_SIZE));
        server.stream.write_all(&bytes).await.unwrap();
        assert_eq!(client.deal().await, Err(GameError::MalformedMessage));
    }
    #[tokio::test]
    async fn result_roundtrips_outcomes() {
        let (client, server) = tokio::io::duplex(64);
        let mut client = Connection::new(client);
        let mut server = Connection::new(server);
        server
            .send(Message::PlayResult(Outcome::Draw))
            .await
            .unwrap();
        assert_eq!(client.result().await, Ok(Outcome::Draw));
    }
}

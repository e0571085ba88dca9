use crate::cards::Card;

/// Everything that can end a game.
///
/// All four variants are handled identically anywhere in a session's
/// lifetime: close both connections, end the session, keep serving
/// everyone else. There is no retry and no error payload on the wire;
/// a misbehaving peer's opponent just sees EOF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Wrong length, unrecognized command tag, or out-of-range payload.
    MalformedMessage,
    /// A played card absent from the player's remaining hand.
    CardNotOwned(Card),
    /// Dealt hands failed the disjoint/complete audit. Server-side defect.
    DealingInvariant,
    /// Peer disconnected mid-read, or a read deadline expired.
    ConnectionClosed,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedMessage => write!(f, "malformed message"),
            Self::CardNotOwned(c) => write!(f, "card not owned: {}", c),
            Self::DealingInvariant => write!(f, "dealt hands violate deck invariant"),
            Self::ConnectionClosed => write!(f, "connection closed"),
        }
    }
}

impl std::error::Error for GameError {}

/// any transport failure collapses to ConnectionClosed; the kill-game
/// policy does not distinguish why the peer went away
impl From<std::io::Error> for GameError {
    fn from(_: std::io::Error) -> Self {
        Self::ConnectionClosed
    }
}
/// an expired read deadline is treated exactly like a disconnect
impl From<tokio::time::error::Elapsed> for GameError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        Self::ConnectionClosed
    }
}

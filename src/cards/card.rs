use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52`, the layout the wire
/// protocol speaks: `rank = n % 13` and `suit = n / 13`. Two cards of the
/// same rank in different suits are 13 apart and compare as equal in play.
///
/// Construction from an arbitrary byte happens only after the codec has
/// range-checked it; `From<u8>` itself assumes `n < 52`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (Two through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 % 13)
    }
    /// Extracts the suit component. Never consulted by comparison.
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 / 13)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(s) * 13 + u8::from(r))
    }
}

/// u8 isomorphism
/// each card is its position in the suit-major deck layout
/// 5♦
/// 18
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < crate::DECK_SIZE as u8);
        Self(n)
    }
}

/// u64 injection
/// each card is just one bit turned on, for set membership in Hand
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << c.0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

use super::card::Card;
use super::hand::Hand;
use crate::protocol::GameError;
use rand::Rng;

/// A full deck consumed by uniformly random draws.
///
/// Dealing is parameterized over the RNG so tests can seed a `SmallRng`
/// and replay exact deals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck.
    pub fn new() -> Self {
        Self(Hand::full())
    }
    /// Draws and removes a uniformly random card from the deck.
    ///
    /// Picks the i-th set bit for uniform i, by shredding the i lowest
    /// set bits off a copy and reading the next one.
    pub fn draw(&mut self, rng: &mut impl Rng) -> Card {
        debug_assert!(self.0.size() > 0);
        let n = self.0.size();
        let i = rng.random_range(0..n) as u8;
        let mut ones = 0u8;
        let mut deck = u64::from(self.0);
        while ones < i {
            deck = deck & (deck - 1);
            ones = ones + 1;
        }
        let card = Card::from(deck.trailing_zeros() as u8);
        self.0 = Hand::from(u64::from(self.0) & !u64::from(card));
        card
    }
    /// Splits a shuffled deck into two disjoint 26-card hands.
    ///
    /// Drawing without replacement makes every split of the deck equally
    /// likely. The dealt-hands invariant is audited before the hands leave
    /// this function; a violation is a server-side defect, not client fault.
    pub fn deal(rng: &mut impl Rng) -> Result<(Hand, Hand), GameError> {
        let mut deck = Self::new();
        let one = (0..crate::HAND_SIZE)
            .map(|_| deck.draw(rng))
            .collect::<Vec<Card>>();
        let one = Hand::from(one);
        let two = Hand::from(deck.0);
        Self::audit(one, two)?;
        Ok((one, two))
    }
    /// Dealt hands must be disjoint, half the deck each, and exhaustive.
    fn audit(one: Hand, two: Hand) -> Result<(), GameError> {
        if one.size() == crate::HAND_SIZE
            && two.size() == crate::HAND_SIZE
            && !one.overlaps(&two)
            && Hand::union(one, two) == Hand::full()
        {
            Ok(())
        } else {
            Err(GameError::DealingInvariant)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn dealt_hands_partition_the_deck() {
        for seed in 0..64u64 {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let (one, two) = Deck::deal(rng).unwrap();
            assert_eq!(one.size(), crate::HAND_SIZE);
            assert_eq!(two.size(), crate::HAND_SIZE);
            assert!(!one.overlaps(&two));
            assert_eq!(Hand::union(one, two), Hand::full());
        }
    }
    #[test]
    fn deals_differ_across_seeds() {
        let ref mut a = SmallRng::seed_from_u64(1);
        let ref mut b = SmallRng::seed_from_u64(2);
        assert_ne!(Deck::deal(a).unwrap(), Deck::deal(b).unwrap());
    }
    #[test]
    fn deals_repeat_under_the_same_seed() {
        let ref mut a = SmallRng::seed_from_u64(7);
        let ref mut b = SmallRng::seed_from_u64(7);
        assert_eq!(Deck::deal(a).unwrap(), Deck::deal(b).unwrap());
    }
    #[test]
    fn draw_exhausts_the_deck_without_repeats() {
        let ref mut rng = SmallRng::seed_from_u64(13);
        let mut deck = Deck::new();
        let drawn = (0..crate::DECK_SIZE)
            .map(|_| deck.draw(rng))
            .collect::<Vec<Card>>();
        assert_eq!(Hand::from(drawn).size(), crate::DECK_SIZE);
    }
    #[test]
    fn audit_rejects_overlapping_hands() {
        let one = Hand::from(0x0000000003FFFFFFu64);
        assert!(Deck::audit(one, one).is_err());
    }
    #[test]
    fn audit_rejects_short_hands() {
        let one = Hand::from(0x0000000003FFFFFFu64);
        let two = Hand::from(!u64::from(one) & Hand::mask() & !(1u64 << 51));
        assert!(Deck::audit(one, two).is_err());
    }
}

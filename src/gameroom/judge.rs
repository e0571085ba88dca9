use crate::cards::Card;
use std::cmp::Ordering;

/// Compares two cards by rank alone. Deterministic, total, side-effect
/// free; suit is never consulted, so equal ranks across suits are a draw.
pub fn compare(one: Card, two: Card) -> Ordering {
    one.rank().cmp(&two.rank())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn antisymmetric_over_the_whole_deck() {
        for a in 0..52u8 {
            for b in 0..52u8 {
                let forward = compare(Card::from(a), Card::from(b));
                let reverse = compare(Card::from(b), Card::from(a));
                assert_eq!(forward, reverse.reverse());
            }
        }
    }
    #[test]
    fn equal_exactly_when_ranks_match() {
        for a in 0..52u8 {
            for b in 0..52u8 {
                let equal = compare(Card::from(a), Card::from(b)) == Ordering::Equal;
                assert_eq!(equal, a % 13 == b % 13);
            }
        }
    }
    #[test]
    fn same_rank_different_suit_is_a_draw() {
        assert_eq!(
            compare(Card::from(5u8), Card::from(18u8)),
            Ordering::Equal
        );
    }
    #[test]
    fn ace_beats_deuce() {
        assert_eq!(
            compare(Card::from(12u8), Card::from(0u8)),
            Ordering::Greater
        );
        assert_eq!(compare(Card::from(0u8), Card::from(12u8)), Ordering::Less);
    }
}

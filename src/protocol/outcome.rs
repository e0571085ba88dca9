use super::error::GameError;
use std::cmp::Ordering;

/// The byte values sent as the payload of a PLAY_RESULT message, always
/// from the receiving player's perspective.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win = 0,
    Draw = 1,
    Lose = 2,
}

impl Outcome {
    /// Outcome for the side whose card compared as `ord` against its opponent's.
    pub fn versus(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Outcome::Win,
            Ordering::Equal => Outcome::Draw,
            Ordering::Less => Outcome::Lose,
        }
    }
    /// The opponent's outcome for the same round. WIN and LOSE mirror each
    /// other; DRAW is symmetric.
    pub fn mirror(&self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Draw => Outcome::Draw,
            Outcome::Lose => Outcome::Win,
        }
    }
}

/// u8 injection
impl From<Outcome> for u8 {
    fn from(o: Outcome) -> u8 {
        o as u8
    }
}
impl TryFrom<u8> for Outcome {
    type Error = GameError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Outcome::Win),
            1 => Ok(Outcome::Draw),
            2 => Ok(Outcome::Lose),
            _ => Err(GameError::MalformedMessage),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::Lose => write!(f, "lose"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn mirror_swaps_win_and_lose() {
        assert_eq!(Outcome::Win.mirror(), Outcome::Lose);
        assert_eq!(Outcome::Lose.mirror(), Outcome::Win);
        assert_eq!(Outcome::Draw.mirror(), Outcome::Draw);
    }
    #[test]
    fn versus_follows_the_ordering() {
        assert_eq!(Outcome::versus(Ordering::Greater), Outcome::Win);
        assert_eq!(Outcome::versus(Ordering::Equal), Outcome::Draw);
        assert_eq!(Outcome::versus(Ordering::Less), Outcome::Lose);
    }
    #[test]
    fn payload_out_of_range_is_malformed() {
        assert_eq!(Outcome::try_from(3), Err(GameError::MalformedMessage));
    }
}

use super::command::Command;
use super::error::GameError;
use super::outcome::Outcome;
use crate::cards::Card;
use crate::cards::Hand;

/// A complete protocol message.
///
/// Every message is a command byte plus a fixed-size payload: one byte for
/// everything except GAME_START, which carries the dealt 26-card hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    WantGame,
    GameStart(Hand),
    PlayCard(Card),
    PlayResult(Outcome),
}

impl Message {
    /// The exact bytes this message occupies on the wire.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Message::WantGame => vec![Command::WantGame.into(), 0],
            Message::GameStart(hand) => std::iter::once(Command::GameStart.into())
                .chain((*hand).into_iter().map(u8::from))
                .collect(),
            Message::PlayCard(card) => vec![Command::PlayCard.into(), u8::from(*card)],
            Message::PlayResult(outcome) => {
                vec![Command::PlayResult.into(), u8::from(*outcome)]
            }
        }
    }
    /// Decodes the fixed 2-byte frame clients send.
    ///
    /// WANT_GAME demands a zero payload and PLAY_CARD an in-range card byte;
    /// server-to-client tags arriving from a client are malformed too.
    pub fn decode([tag, payload]: [u8; 2]) -> Result<Self, GameError> {
        match Command::try_from(tag)? {
            Command::WantGame if payload == 0 => Ok(Message::WantGame),
            Command::PlayCard if (payload as usize) < crate::DECK_SIZE => {
                Ok(Message::PlayCard(Card::from(payload)))
            }
            _ => Err(GameError::MalformedMessage),
        }
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Message::WantGame => write!(f, "WANT_GAME"),
            Message::GameStart(hand) => write!(f, "GAME_START {}", hand),
            Message::PlayCard(card) => write!(f, "PLAY_CARD {}", card),
            Message::PlayResult(outcome) => write!(f, "PLAY_RESULT {}", outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn want_game_is_two_zero_bytes() {
        assert_eq!(Message::WantGame.encode(), vec![0, 0]);
    }
    #[test]
    fn game_start_is_command_byte_plus_hand() {
        let hand = Hand::from(0x0000000003FFFFFFu64);
        let bytes = Message::GameStart(hand).encode();
        assert_eq!(bytes.len(), 1 + crate::HAND_SIZE);
        assert_eq!(bytes[0], 1);
        assert_eq!(&bytes[1..], (0..26).collect::<Vec<u8>>().as_slice());
    }
    #[test]
    fn play_card_carries_the_card_byte() {
        assert_eq!(Message::PlayCard(Card::from(51u8)).encode(), vec![2, 51]);
    }
    #[test]
    fn play_result_carries_the_outcome_byte() {
        assert_eq!(Message::PlayResult(Outcome::Win).encode(), vec![3, 0]);
        assert_eq!(Message::PlayResult(Outcome::Draw).encode(), vec![3, 1]);
        assert_eq!(Message::PlayResult(Outcome::Lose).encode(), vec![3, 2]);
    }
    #[test]
    fn decode_accepts_client_frames() {
        assert_eq!(Message::decode([0, 0]), Ok(Message::WantGame));
        assert_eq!(
            Message::decode([2, 18]),
            Ok(Message::PlayCard(Card::from(18u8)))
        );
    }
    #[test]
    fn decode_rejects_nonzero_want_game_payload() {
        assert_eq!(Message::decode([0, 1]), Err(GameError::MalformedMessage));
    }
    #[test]
    fn decode_rejects_out_of_range_card() {
        assert_eq!(Message::decode([2, 52]), Err(GameError::MalformedMessage));
    }
    #[test]
    fn decode_rejects_server_tags_and_unknown_tags() {
        assert_eq!(Message::decode([1, 0]), Err(GameError::MalformedMessage));
        assert_eq!(Message::decode([3, 0]), Err(GameError::MalformedMessage));
        assert_eq!(Message::decode([9, 0]), Err(GameError::MalformedMessage));
    }
}

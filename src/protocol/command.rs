use super::error::GameError;

/// The byte values sent as the first byte of any message in the war protocol.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Command {
    WantGame = 0,
    GameStart = 1,
    PlayCard = 2,
    PlayResult = 3,
}

/// u8 injection
impl From<Command> for u8 {
    fn from(c: Command) -> u8 {
        c as u8
    }
}
/// fallible u8 decoding; anything unrecognized is malformed wire input
impl TryFrom<u8> for Command {
    type Error = GameError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Command::WantGame),
            1 => Ok(Command::GameStart),
            2 => Ok(Command::PlayCard),
            3 => Ok(Command::PlayResult),
            _ => Err(GameError::MalformedMessage),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Command::WantGame => write!(f, "WANT_GAME"),
            Command::GameStart => write!(f, "GAME_START"),
            Command::PlayCard => write!(f, "PLAY_CARD"),
            Command::PlayResult => write!(f, "PLAY_RESULT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn u8_roundtrip() {
        for n in 0..4u8 {
            assert_eq!(u8::from(Command::try_from(n).unwrap()), n);
        }
    }
    #[test]
    fn unknown_tag_is_malformed() {
        assert_eq!(Command::try_from(4), Err(GameError::MalformedMessage));
        assert_eq!(Command::try_from(255), Err(GameError::MalformedMessage));
    }
}

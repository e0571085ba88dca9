mod card;
mod deck;
mod hand;
mod rank;
mod suit;

pub use card::*;
pub use deck::*;
pub use hand::*;
pub use rank::*;
pub use suit::*;

mod command;
mod connection;
mod error;
mod message;
mod outcome;

pub use command::*;
pub use connection::*;
pub use error::*;
pub use message::*;
pub use outcome::*;

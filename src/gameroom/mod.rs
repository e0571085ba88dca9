pub mod judge;

mod lobby;
mod matchmaker;
mod session;

pub use lobby::*;
pub use matchmaker::*;
pub use session::*;

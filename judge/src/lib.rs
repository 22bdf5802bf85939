mod config;
mod game;
mod recording;
mod tournament;
pub use config::*;
pub use game::*;
pub use recording::*;
pub use tournament::*;

pub use board::*;
pub use dice::*;
pub use errors::*;
pub use game::*;
pub use geometry::*;
pub use player::*;
pub use position::*;
pub use protocol_types::*;
pub use strategy::*;
pub use token::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod dice;
mod errors;
mod game;
mod geometry;
mod player;
mod position;
mod protocol_types;
mod strategy;
mod token;
mod visualization;

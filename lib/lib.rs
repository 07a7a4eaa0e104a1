/// Chess domain types and rules.
pub mod chess;
/// The game controller.
pub mod game;
/// Assorted utilities.
pub mod util;

mod board;
mod castles;
mod color;
mod figure;
mod file;
mod legal;
mod r#move;
mod movegen;
mod perspective;
mod piece;
mod promotion;
mod rank;
mod record;
mod role;
mod square;

pub use board::*;
pub use castles::*;
pub use color::*;
pub use figure::*;
pub use file::*;
pub use legal::*;
pub use perspective::*;
pub use piece::*;
pub use promotion::*;
pub use r#move::*;
pub use rank::*;
pub use record::*;
pub use role::*;
pub use square::*;

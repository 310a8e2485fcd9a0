pub mod card;
pub use card::*;

pub mod color;
pub use color::*;

pub mod hand;
pub use hand::*;

pub mod symbol;
pub use symbol::*;

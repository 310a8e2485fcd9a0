pub mod engine;
pub use engine::*;

pub mod error;
pub use error::*;

pub mod phase;
pub use phase::*;

pub mod player;
pub use player::*;

pub mod record;
pub use record::*;

pub mod trace;
pub use trace::*;

pub mod order;
pub use order::*;

pub mod preset;
pub use preset::*;

pub mod roll;
pub use roll::*;

pub mod strategy;
pub use strategy::*;

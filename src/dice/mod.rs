pub mod activation;
pub use activation::*;

pub mod dice;
pub use dice::*;

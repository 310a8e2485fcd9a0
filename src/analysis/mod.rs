pub mod comparison;
pub use comparison::*;

pub mod summary;
pub use summary::*;

pub mod table;
pub use table::*;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub mod query;
#[cfg(feature = "cli")]
pub use query::*;

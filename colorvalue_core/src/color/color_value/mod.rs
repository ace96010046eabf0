mod accessors;
mod constructors;
mod convert;
mod fmt;
#[cfg(feature = "serde")]
mod serialize;

pub use constructors::*;

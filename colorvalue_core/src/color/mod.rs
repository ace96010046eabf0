//! Packing, hex parsing and the [`ColorValue`] type built on top of them.

mod color_value;
pub use color_value::*;

mod hex;
pub use hex::*;

mod pack;
pub use pack::*;

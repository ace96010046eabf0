pub mod convert;
mod input;
mod pretty_print;
pub mod probe;

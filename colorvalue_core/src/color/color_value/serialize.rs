//! Serde support: a `ColorValue` is written as its canonical hex string and can be read
//! back from a hex string or a packed integer.
//!
//! Reading keeps the silent fallback of [`ColorValue::from_hex`]: a malformed string
//! deserializes to transparent black rather than failing.
//!
//! Tests live in `tests/serde.rs`, a target that requires the `serde` feature:
//! `cargo test -p colorvalue_core --features serde`.

use crate::ColorValue;
use serde::{
	Deserialize, Deserializer, Serialize, Serializer,
	de::{self, Visitor},
};
use std::fmt;

impl Serialize for ColorValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.hex)
	}
}

struct ColorValueVisitor;

impl Visitor<'_> for ColorValueVisitor {
	type Value = ColorValue;

	fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str("a hex color string or a packed AARRGGBB integer")
	}

	fn visit_str<E: de::Error>(self, value: &str) -> Result<ColorValue, E> {
		Ok(ColorValue::from_hex(value))
	}

	// packed integers are truncated to 32 bits, the same way hex input is narrowed
	fn visit_i64<E: de::Error>(self, value: i64) -> Result<ColorValue, E> {
		Ok(ColorValue::from_packed(value as i32))
	}

	fn visit_u64<E: de::Error>(self, value: u64) -> Result<ColorValue, E> {
		Ok(ColorValue::from_packed(value as i32))
	}
}

impl<'de> Deserialize<'de> for ColorValue {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_any(ColorValueVisitor)
	}
}


use crate::ColorValue;
use std::{convert::Infallible, str::FromStr};

impl From<i32> for ColorValue {
	fn from(packed: i32) -> Self {
		Self::from_packed(packed)
	}
}

/// Reinterprets the bits, so `0xFFFF0000_u32` is the same color as `-65536_i32`.
impl From<u32> for ColorValue {
	fn from(packed: u32) -> Self {
		Self::from_packed(packed as i32)
	}
}

impl From<&str> for ColorValue {
	fn from(hex: &str) -> Self {
		Self::from_hex(hex)
	}
}

/// Channels in `[red, green, blue, alpha]` order.
impl From<[u8; 4]> for ColorValue {
	fn from([red, green, blue, alpha]: [u8; 4]) -> Self {
		Self::from_rgba(red.into(), green.into(), blue.into(), alpha.into())
	}
}

/// Parses like [`ColorValue::from_hex`] and therefore never fails.
///
/// ```
/// # use colorvalue_core::ColorValue;
/// let color: ColorValue = "#0F08".parse().unwrap();
/// assert_eq!(color.hex(), "00FF0088");
/// ```
impl FromStr for ColorValue {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::from_hex(s))
	}
}

impl From<ColorValue> for i32 {
	fn from(color: ColorValue) -> Self {
		color.packed
	}
}

impl From<ColorValue> for u32 {
	fn from(color: ColorValue) -> Self {
		color.packed_unsigned()
	}
}

impl From<ColorValue> for [u8; 4] {
	fn from(color: ColorValue) -> Self {
		color.channels()
	}
}

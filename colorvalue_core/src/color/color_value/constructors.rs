//! An immutable RGBA color.
//!
//! A `ColorValue` keeps the packed `AARRGGBB` integer together with everything derived
//! from it: the four channels and the canonical hex string. All constructors funnel
//! through [`ColorValue::from_packed`], so the fields always agree with each other.
//!
//! ## Common tasks
//! - Build from a packed integer: [`ColorValue::from_packed`]
//! - Build from a hex string:     [`ColorValue::from_hex`]
//! - Build from channels:         [`ColorValue::from_rgb`], [`ColorValue::from_rgba`]
//!
//! ## Examples
//! ```
//! # use colorvalue_core::ColorValue;
//! let a = ColorValue::from_hex("#FF8800");
//! let b = ColorValue::from_rgb(255, 136, 0);
//! let c = ColorValue::from_packed(0xFFFF8800_u32 as i32);
//! assert_eq!(a, b);
//! assert_eq!(b, c);
//! ```

use crate::{format_hex, pack_rgb, pack_rgba, parse_hex, unpack_rgba};

/// An RGBA color with a packed, a hex and a per-channel representation.
///
/// # Fields
/// - `packed` — `AARRGGBB` as a signed 32-bit integer.
/// - `red`, `green`, `blue`, `alpha` — channels in `0..=255`.
/// - `hex` — canonical uppercase hex string, see [`format_hex`].
#[derive(Clone, Hash, PartialEq, Eq)]
pub struct ColorValue {
	pub(super) packed: i32,
	pub(super) red: u8,
	pub(super) green: u8,
	pub(super) blue: u8,
	pub(super) alpha: u8,
	pub(super) hex: String,
}

impl ColorValue {
	/// Create from a packed `AARRGGBB` integer.
	///
	/// # Example
	/// ```
	/// # use colorvalue_core::ColorValue;
	/// let color = ColorValue::from_packed(0x80FF0000_u32 as i32);
	/// assert_eq!(color.alpha(), 0x80);
	/// assert_eq!(color.red(), 0xFF);
	/// assert_eq!(color.hex(), "80FF0000");
	/// ```
	pub fn from_packed(packed: i32) -> Self {
		let [red, green, blue, alpha] = unpack_rgba(packed);
		Self {
			packed,
			red,
			green,
			blue,
			alpha,
			hex: format_hex(packed),
		}
	}

	/// Create from a hex string such as `"#F80"`, `"ff8800"` or `"80FF8800"`.
	///
	/// Strings that are not an accepted hex color produce transparent black instead of an
	/// error; see [`parse_hex`] for the accepted forms.
	///
	/// # Example
	/// ```
	/// # use colorvalue_core::ColorValue;
	/// assert_eq!(ColorValue::from_hex("#f80").hex(), "FF8800");
	/// assert_eq!(ColorValue::from_hex("not a color").packed(), 0);
	/// ```
	pub fn from_hex(hex: &str) -> Self {
		Self::from_packed(parse_hex(hex))
	}

	/// Create an opaque color. Channels are masked to their lowest byte.
	pub fn from_rgb(red: i32, green: i32, blue: i32) -> Self {
		Self::from_packed(pack_rgb(red, green, blue))
	}

	/// Create from four channels. Each channel is masked to its lowest byte, so `256`
	/// becomes `0` and `-1` becomes `255`.
	///
	/// # Example
	/// ```
	/// # use colorvalue_core::ColorValue;
	/// let color = ColorValue::from_rgba(256, 0, -1, 255);
	/// assert_eq!((color.red(), color.green(), color.blue()), (0, 0, 255));
	/// ```
	pub fn from_rgba(red: i32, green: i32, blue: i32, alpha: i32) -> Self {
		Self::from_packed(pack_rgba(red, green, blue, alpha))
	}

	/// Transparent black, the value every malformed hex string falls back to.
	pub fn transparent() -> Self {
		Self::from_packed(0)
	}
}

impl Default for ColorValue {
	fn default() -> Self {
		Self::transparent()
	}
}

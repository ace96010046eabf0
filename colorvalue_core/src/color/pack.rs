//! Bit packing of RGBA channels into a single `AARRGGBB` integer.
//!
//! The packed value is a signed 32-bit integer, so every color with an alpha of 128 or more
//! is negative. Use `as u32` for the unsigned view.
//!
//! # Examples
//!
//! ```
//! use colorvalue_core::{pack_rgb, pack_rgba, unpack_rgba};
//!
//! assert_eq!(pack_rgba(0x12, 0x34, 0x56, 0x78), 0x78123456);
//! assert_eq!(pack_rgb(255, 0, 0) as u32, 0xFFFF0000);
//! assert_eq!(unpack_rgba(0x78123456), [0x12, 0x34, 0x56, 0x78]);
//! ```

/// Bit offset of the alpha channel.
pub const ALPHA_SHIFT: u32 = 24;
/// Bit offset of the red channel.
pub const RED_SHIFT: u32 = 16;
/// Bit offset of the green channel.
pub const GREEN_SHIFT: u32 = 8;
/// Bit offset of the blue channel.
pub const BLUE_SHIFT: u32 = 0;

const CHANNEL_MASK: i32 = 0xFF;

/// Alpha value of a fully opaque color.
pub const OPAQUE: i32 = 0xFF;

/// Packs an opaque color. Equivalent to `pack_rgba(red, green, blue, 255)`.
pub const fn pack_rgb(red: i32, green: i32, blue: i32) -> i32 {
	pack_rgba(red, green, blue, OPAQUE)
}

/// Packs four channels into `AARRGGBB`.
///
/// Every channel is masked with `0xFF` first, so values outside `0..=255` are truncated
/// to their lowest byte instead of being rejected: `256` becomes `0`, `-1` becomes `255`.
///
/// ```
/// use colorvalue_core::pack_rgba;
///
/// assert_eq!(pack_rgba(256, 0, 0, 255), pack_rgba(0, 0, 0, 255));
/// assert_eq!(pack_rgba(-1, 0, 0, 0), 0x00FF0000);
/// ```
pub const fn pack_rgba(red: i32, green: i32, blue: i32, alpha: i32) -> i32 {
	((alpha & CHANNEL_MASK) << ALPHA_SHIFT)
		| ((red & CHANNEL_MASK) << RED_SHIFT)
		| ((green & CHANNEL_MASK) << GREEN_SHIFT)
		| ((blue & CHANNEL_MASK) << BLUE_SHIFT)
}

/// Splits a packed value into `[red, green, blue, alpha]`.
pub const fn unpack_rgba(packed: i32) -> [u8; 4] {
	[
		channel(packed, RED_SHIFT),
		channel(packed, GREEN_SHIFT),
		channel(packed, BLUE_SHIFT),
		channel(packed, ALPHA_SHIFT),
	]
}

/// Extracts the byte at `shift` from a packed value.
const fn channel(packed: i32, shift: u32) -> u8 {
	((packed >> shift) & CHANNEL_MASK) as u8
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case((0, 0, 0, 0), 0x00000000)]
	#[case((255, 0, 0, 255), 0xFFFF0000)]
	#[case((0, 255, 0, 255), 0xFF00FF00)]
	#[case((0, 0, 255, 255), 0xFF0000FF)]
	#[case((0x12, 0x34, 0x56, 0x78), 0x78123456)]
	#[case((255, 255, 255, 255), 0xFFFFFFFF)]
	#[case((1, 2, 3, 0), 0x00010203)]
	fn pack_rgba_layout(#[case] rgba: (i32, i32, i32, i32), #[case] expected: u32) {
		let (r, g, b, a) = rgba;
		assert_eq!(pack_rgba(r, g, b, a) as u32, expected);
	}

	#[rstest]
	#[case(256, 0)]
	#[case(257, 1)]
	#[case(-1, 255)]
	#[case(0x1234, 0x34)]
	#[case(i32::MIN, 0)]
	#[case(i32::MAX, 255)]
	fn out_of_range_channels_are_masked(#[case] input: i32, #[case] masked: i32) {
		assert_eq!(pack_rgba(input, 0, 0, 255), pack_rgba(masked, 0, 0, 255));
		assert_eq!(pack_rgba(0, input, 0, 255), pack_rgba(0, masked, 0, 255));
		assert_eq!(pack_rgba(0, 0, input, 255), pack_rgba(0, 0, masked, 255));
		assert_eq!(pack_rgba(0, 0, 0, input), pack_rgba(0, 0, 0, masked));
	}

	#[test]
	fn pack_rgb_is_opaque() {
		for (r, g, b) in [(0, 0, 0), (255, 0, 0), (12, 34, 56), (255, 255, 255), (300, -5, 1000)] {
			assert_eq!(pack_rgb(r, g, b), pack_rgba(r, g, b, 255), "rgb({r},{g},{b})");
		}
	}

	#[test]
	fn unpack_reverses_pack() {
		for r in 0..=255 {
			for a in 0..=255 {
				// green and blue walk all values with their own strides
				let g = (r * 7 + a * 13) % 256;
				let b = (r * 31 + a * 3 + 101) % 256;
				let packed = pack_rgba(r, g, b, a);
				assert_eq!(
					unpack_rgba(packed),
					[r as u8, g as u8, b as u8, a as u8],
					"round trip of ({r},{g},{b},{a})"
				);
			}
		}
	}

	#[test]
	fn unpack_negative_values() {
		assert_eq!(unpack_rgba(-1), [255, 255, 255, 255]);
		assert_eq!(unpack_rgba(i32::MIN), [0, 0, 0, 128]);
		assert_eq!(unpack_rgba(0xAABBCCDD_u32 as i32), [0xBB, 0xCC, 0xDD, 0xAA]);
	}
}

use crate::ColorValue;
use std::fmt;

/// Implements `Debug` for [`ColorValue`].
///
/// The output shows the canonical hex string followed by the channels:
///
/// ```text
/// #hex (red,green,blue,alpha)
/// ```
///
/// Example:
/// ```
/// # use colorvalue_core::ColorValue;
/// let color = ColorValue::from_rgba(255, 136, 0, 128);
/// assert_eq!(format!("{:?}", color), "#80FF8800 (255,136,0,128)");
/// ```
impl fmt::Debug for ColorValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"#{} ({},{},{},{})",
			self.hex, self.red, self.green, self.blue, self.alpha
		)
	}
}

/// Implements `Display` for [`ColorValue`] as the canonical hex string.
///
/// Example:
/// ```
/// # use colorvalue_core::ColorValue;
/// assert_eq!(ColorValue::from_hex("#abc").to_string(), "AABBCC");
/// ```
impl fmt::Display for ColorValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.hex)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(ColorValue::from_rgb(255, 0, 0), "FF0000", "#FF0000 (255,0,0,255)")]
	#[case(ColorValue::from_rgba(1, 2, 3, 4), "04010203", "#04010203 (1,2,3,4)")]
	#[case(ColorValue::from_hex("oops"), "00000000", "#00000000 (0,0,0,0)")]
	#[case(ColorValue::from_packed(-1), "FFFFFF", "#FFFFFF (255,255,255,255)")]
	fn display_and_debug_formats(#[case] color: ColorValue, #[case] expect_display: &str, #[case] expect_debug: &str) {
		assert_eq!(format!("{color}"), expect_display);
		assert_eq!(format!("{color:?}"), expect_debug);
	}
}

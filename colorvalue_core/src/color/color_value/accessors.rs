use crate::ColorValue;

impl ColorValue {
	/// The packed `AARRGGBB` value. Negative whenever alpha is 128 or more.
	pub fn packed(&self) -> i32 {
		self.packed
	}

	/// The packed `AARRGGBB` value read as unsigned.
	///
	/// ```
	/// # use colorvalue_core::ColorValue;
	/// let color = ColorValue::from_rgb(255, 0, 0);
	/// assert_eq!(color.packed(), -65536);
	/// assert_eq!(color.packed_unsigned(), 0xFFFF0000);
	/// ```
	pub fn packed_unsigned(&self) -> u32 {
		self.packed as u32
	}

	/// Canonical uppercase hex string without `#`.
	pub fn hex(&self) -> &str {
		&self.hex
	}

	pub fn red(&self) -> u8 {
		self.red
	}

	pub fn green(&self) -> u8 {
		self.green
	}

	pub fn blue(&self) -> u8 {
		self.blue
	}

	/// Opacity, where `255` is fully opaque.
	pub fn alpha(&self) -> u8 {
		self.alpha
	}

	/// All channels as `[red, green, blue, alpha]`.
	pub fn channels(&self) -> [u8; 4] {
		[self.red, self.green, self.blue, self.alpha]
	}
}

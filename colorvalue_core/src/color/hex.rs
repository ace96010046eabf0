//! Hex string parsing and formatting for packed colors.
//!
//! # Accepted input
//!
//! An optional leading `#` followed by 3, 4, 6 or 8 hex digits, case-insensitive:
//!
//! | digits | meaning    | normalized to                  |
//! |--------|------------|--------------------------------|
//! | 3      | `RGB`      | `FF` + every digit doubled     |
//! | 4      | `ARGB`     | every digit doubled            |
//! | 6      | `RRGGBB`   | `FF` + digits                  |
//! | 8      | `AARRGGBB` | digits                         |
//!
//! Everything else, including 5 and 7 digits, parses to `0` (transparent black).
//!
//! # Canonical output
//!
//! Uppercase, no `#`, 6 digits when alpha is `FF` and 8 digits otherwise.
//!
//! ```
//! use colorvalue_core::{format_hex, parse_hex};
//!
//! assert_eq!(format_hex(parse_hex("#abc")), "AABBCC");
//! assert_eq!(format_hex(parse_hex("8abc")), "88AABBCC");
//! assert_eq!(parse_hex("#12345"), 0);
//! ```

use std::sync::LazyLock;

use regex::Regex;

static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#?[0-9a-fA-F]{3,8}$").unwrap());

const OPAQUE_PREFIX: &str = "FF";

/// Strips a single leading `#`.
fn strip_hash(value: &str) -> &str {
	value.strip_prefix('#').unwrap_or(value)
}

/// Returns `true` if `parse_hex` reads `value` as a color instead of falling back to `0`.
///
/// Note that `"00000000"` is a valid hex color that also parses to `0`; this is the only way
/// to tell the two apart.
///
/// ```
/// use colorvalue_core::is_hex;
///
/// assert!(is_hex("#FFF"));
/// assert!(is_hex("00000000"));
/// assert!(!is_hex("#FFFFF"));
/// assert!(!is_hex("white"));
/// ```
pub fn is_hex(value: &str) -> bool {
	HEX_PATTERN.is_match(value) && matches!(strip_hash(value).len(), 3 | 4 | 6 | 8)
}

/// Parses a hex color string into a packed `AARRGGBB` value.
///
/// Never fails: input that is not an accepted hex color yields `0`. The normalized digits
/// are parsed as a 64-bit value and then truncated to 32 bits, so opaque colors come out
/// negative.
///
/// ```
/// use colorvalue_core::{pack_rgb, parse_hex};
///
/// assert_eq!(parse_hex("#FF0000"), pack_rgb(255, 0, 0));
/// assert_eq!(parse_hex("f00"), pack_rgb(255, 0, 0));
/// assert_eq!(parse_hex("ABCD") as u32, 0xAABBCCDD);
/// assert_eq!(parse_hex("zzzzzz"), 0);
/// ```
pub fn parse_hex(value: &str) -> i32 {
	if !HEX_PATTERN.is_match(value) {
		return 0;
	}

	let digits = strip_hash(value);
	if digits.len() == 5 || digits.len() == 7 {
		return 0;
	}

	let digits = digits.to_ascii_uppercase();
	let mut normalized = String::with_capacity(8);

	if digits.len() % 3 == 0 {
		normalized.push_str(OPAQUE_PREFIX);
	}

	if digits.len() < 6 {
		for c in digits.chars() {
			normalized.push(c);
			normalized.push(c);
		}
	} else {
		normalized.push_str(&digits);
	}

	// at most 8 hex digits, so the 64-bit parse cannot overflow; the narrowing wraps
	i64::from_str_radix(&normalized, 16).map_or(0, |value| value as i32)
}

/// Formats a packed value as a canonical hex string.
///
/// The value is read as unsigned, rendered as 8 uppercase digits and, if the alpha byte is
/// `FF`, shortened to the 6-digit `RRGGBB` form.
///
/// ```
/// use colorvalue_core::format_hex;
///
/// assert_eq!(format_hex(-1), "FFFFFF");
/// assert_eq!(format_hex(0), "00000000");
/// assert_eq!(format_hex(0x7F00FF00), "7F00FF00");
/// ```
pub fn format_hex(packed: i32) -> String {
	let hex = format!("{:08X}", packed as u32);
	match hex.strip_prefix(OPAQUE_PREFIX) {
		Some(rgb) => rgb.to_string(),
		None => hex,
	}
}

//! # colorvalue_core
//!
//! An immutable RGBA color value with lossless conversion between three representations:
//! - a packed 32-bit integer laid out as `AARRGGBB`,
//! - a canonical uppercase hex string (`RRGGBB` when opaque, `AARRGGBB` otherwise),
//! - the four 8-bit channels.
//!
//! Conversions never fail. Malformed hex strings fall back to transparent black (`0`) and
//! out-of-range channel values are truncated to their lowest 8 bits.
//!
//! ## Usage Example
//!
//! ```rust
//! use colorvalue_core::ColorValue;
//!
//! let color = ColorValue::from_hex("#f80");
//! assert_eq!(color.hex(), "FF8800");
//! assert_eq!((color.red(), color.green(), color.blue(), color.alpha()), (255, 136, 0, 255));
//!
//! let translucent = ColorValue::from_rgba(255, 136, 0, 128);
//! assert_eq!(translucent.hex(), "80FF8800");
//! assert_eq!(translucent.packed_unsigned(), 0x80FF8800);
//! ```

pub mod color;

pub use color::*;

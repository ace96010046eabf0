use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use colorvalue_core::{ColorValue, is_hex};

/// How a command line value is read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
	/// channels if the value contains a comma, otherwise hex
	#[default]
	Auto,
	/// RGB, ARGB, RRGGBB or AARRGGBB, optionally prefixed with '#'
	Hex,
	/// packed AARRGGBB as signed or unsigned decimal
	Int,
	/// comma separated decimal channels: r,g,b or r,g,b,a
	Channels,
}

pub fn read_color(value: &str, format: InputFormat) -> Result<ColorValue> {
	log::debug!("read {value:?} as {format:?}");

	match format {
		InputFormat::Auto if value.contains(',') => read_channels(value),
		InputFormat::Auto | InputFormat::Hex => Ok(read_hex(value)),
		InputFormat::Int => read_int(value),
		InputFormat::Channels => read_channels(value),
	}
}

fn read_hex(value: &str) -> ColorValue {
	if !is_hex(value) {
		log::warn!("{value:?} is not a hex color, falling back to transparent black");
	}
	ColorValue::from_hex(value)
}

fn read_int(value: &str) -> Result<ColorValue> {
	let value = value.trim();
	if let Ok(packed) = value.parse::<i32>() {
		return Ok(ColorValue::from(packed));
	}
	let packed = value
		.parse::<u32>()
		.with_context(|| format!("{value:?} is not a 32-bit integer"))?;
	Ok(ColorValue::from(packed))
}

fn read_channels(value: &str) -> Result<ColorValue> {
	let channels = value
		.split(',')
		.map(|channel| {
			let channel = channel.trim();
			let number = channel
				.parse::<i32>()
				.with_context(|| format!("channel {channel:?} is not an integer"))?;
			if !(0..=255).contains(&number) {
				log::warn!("channel {number} is outside 0..=255 and gets truncated to {}", number & 0xFF);
			}
			Ok(number)
		})
		.collect::<Result<Vec<i32>>>()?;

	match channels.as_slice() {
		&[r, g, b] => Ok(ColorValue::from_rgb(r, g, b)),
		&[r, g, b, a] => Ok(ColorValue::from_rgba(r, g, b, a)),
		_ => bail!("expected 3 or 4 channels (r,g,b[,a]), got {}", channels.len()),
	}
}

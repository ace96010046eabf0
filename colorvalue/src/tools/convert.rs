use super::input::{InputFormat, read_color};
use anyhow::Result;
use clap::ValueEnum;
use colorvalue_core::ColorValue;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// color to convert, e.g. "#F80", "80FF8800" or "255,136,0"
	#[arg(allow_hyphen_values = true)]
	value: String,

	/// how to read the value
	#[arg(long, short, value_enum, default_value_t = InputFormat::Auto, display_order = 1)]
	from: InputFormat,

	/// what to print
	#[arg(long, short, value_enum, default_value_t = OutputFormat::Hex, display_order = 1)]
	to: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
	/// canonical hex: RRGGBB if opaque, AARRGGBB otherwise
	Hex,
	/// packed AARRGGBB as signed 32-bit integer
	Int,
	/// packed AARRGGBB as unsigned 32-bit integer
	Uint,
	/// decimal channels: r,g,b,a
	Channels,
	/// JSON string
	Json,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let color = read_color(&arguments.value, arguments.from)?;
	println!("{}", render(&color, arguments.to)?);
	Ok(())
}

fn render(color: &ColorValue, format: OutputFormat) -> Result<String> {
	Ok(match format {
		OutputFormat::Hex => color.hex().to_string(),
		OutputFormat::Int => color.packed().to_string(),
		OutputFormat::Uint => color.packed_unsigned().to_string(),
		OutputFormat::Channels => {
			let [r, g, b, a] = color.channels();
			format!("{r},{g},{b},{a}")
		}
		OutputFormat::Json => serde_json::to_string(color)?,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::run_command;
	use rstest::rstest;

	#[rstest]
	#[case(OutputFormat::Hex, "80FF8800")]
	#[case(OutputFormat::Int, "-2130737152")]
	#[case(OutputFormat::Uint, "2164230144")]
	#[case(OutputFormat::Channels, "255,136,0,128")]
	#[case(OutputFormat::Json, "\"80FF8800\"")]
	fn render_translucent(#[case] format: OutputFormat, #[case] expected: &str) {
		let color = ColorValue::from_rgba(255, 136, 0, 128);
		assert_eq!(render(&color, format).unwrap(), expected);
	}

	#[rstest]
	#[case(OutputFormat::Hex, "FF8800")]
	#[case(OutputFormat::Int, "-30720")]
	#[case(OutputFormat::Uint, "4294936576")]
	#[case(OutputFormat::Channels, "255,136,0,255")]
	#[case(OutputFormat::Json, "\"FF8800\"")]
	fn render_opaque(#[case] format: OutputFormat, #[case] expected: &str) {
		let color = ColorValue::from_rgb(255, 136, 0);
		assert_eq!(render(&color, format).unwrap(), expected);
	}

	#[test]
	fn accepts_negative_integers() {
		run_command(vec!["colorvalue", "convert", "-30720", "--from", "int"]).unwrap();
	}

	#[test]
	fn rejects_bad_channels() {
		let error = run_command(vec!["colorvalue", "convert", "1,2"]).unwrap_err();
		assert!(error.to_string().contains("expected 3 or 4 channels"));
	}
}

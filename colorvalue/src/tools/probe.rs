use super::{
	input::{InputFormat, read_color},
	pretty_print::PrettyPrint,
};
use anyhow::Result;
use colorvalue_core::ColorValue;
use serde::Serialize;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// color to inspect, e.g. "#F80", "80FF8800" or "255,136,0"
	#[arg(allow_hyphen_values = true)]
	value: String,

	/// how to read the value
	#[arg(long, short, value_enum, default_value_t = InputFormat::Auto, display_order = 1)]
	from: InputFormat,

	/// print a JSON object instead of text
	#[arg(long, display_order = 2)]
	json: bool,
}

#[derive(Serialize, Debug, PartialEq)]
struct Report {
	color: ColorValue,
	packed: i32,
	unsigned: u32,
	red: u8,
	green: u8,
	blue: u8,
	alpha: u8,
}

impl From<&ColorValue> for Report {
	fn from(color: &ColorValue) -> Self {
		Self {
			color: color.clone(),
			packed: color.packed(),
			unsigned: color.packed_unsigned(),
			red: color.red(),
			green: color.green(),
			blue: color.blue(),
			alpha: color.alpha(),
		}
	}
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let color = read_color(&arguments.value, arguments.from)?;
	let report = Report::from(&color);

	if arguments.json {
		println!("{}", serde_json::to_string_pretty(&report)?);
	} else {
		print_report(&PrettyPrint::new(), &report)?;
	}
	Ok(())
}

fn print_report(printer: &PrettyPrint, report: &Report) -> Result<()> {
	let category = printer.get_category("color")?;
	category.add_key_value("hex", report.color.hex())?;
	category.add_key_value("packed", &report.packed)?;
	category.add_key_value("unsigned", &report.unsigned)?;

	let channels = printer.get_category("channels")?;
	channels.add_key_value("red", &report.red)?;
	channels.add_key_value("green", &report.green)?;
	channels.add_key_value("blue", &report.blue)?;
	channels.add_key_value("alpha", &report.alpha)?;
	Ok(())
}

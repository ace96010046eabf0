//! Colorized key/value output for the CLI.
//!
//! Writes to stdout at runtime. In tests the output is buffered and can be read back
//! without color codes via `as_string`.

use anyhow::Result;
use colored::{ColoredString, Colorize};
use std::{cell::RefCell, fmt::Display, io::Write, rc::Rc};

struct PrettyPrinter {
	indention: String,
	#[cfg(not(test))]
	output: RefCell<Box<dyn Write>>,
	#[cfg(test)]
	output: RefCell<Vec<u8>>,
}

impl PrettyPrinter {
	fn new() -> Self {
		Self {
			indention: String::from("  "),

			#[cfg(not(test))]
			output: RefCell::new(Box::new(std::io::stdout())),

			#[cfg(test)]
			output: RefCell::new(Vec::new()),
		}
	}

	fn write(&self, text: &str) -> Result<()> {
		self.output.borrow_mut().write_all(text.as_bytes())?;
		Ok(())
	}

	#[cfg(test)]
	fn as_string(&self) -> String {
		use regex::Regex;
		use std::sync::LazyLock;

		static RE_COLORS: LazyLock<Regex> = LazyLock::new(|| Regex::new("\u{001b}\\[[0-9;]*m").unwrap());

		let text = String::from_utf8(self.output.borrow().clone()).unwrap();
		RE_COLORS.replace_all(&text, "").to_string()
	}
}

/// Structured output with categories and key/value lines.
pub struct PrettyPrint {
	prefix: String,
	printer: Rc<PrettyPrinter>,
}

impl PrettyPrint {
	pub fn new() -> Self {
		Self {
			prefix: String::new(),
			printer: Rc::new(PrettyPrinter::new()),
		}
	}

	/// Writes a bold category header and returns a printer indented below it.
	pub fn get_category(&self, text: &str) -> Result<PrettyPrint> {
		self.write_line(text.white().bold().to_string() + ":")?;
		Ok(Self {
			prefix: format!("{}{}", self.prefix, self.printer.indention),
			printer: self.printer.clone(),
		})
	}

	/// Writes `key: value`, coloring the value by whether it looks numeric.
	pub fn add_key_value<K: Display + ?Sized, V: Display + ?Sized>(&self, key: &K, value: &V) -> Result<()> {
		self.write_line(format!("{key}: {}", get_formatted_value(value)))
	}

	fn write_line<T: Display>(&self, line: T) -> Result<()> {
		self.printer.write(&format!("{}{}\n", self.prefix, line))
	}

	#[cfg(test)]
	pub fn as_string(&self) -> String {
		self.printer.as_string()
	}
}

impl Default for PrettyPrint {
	fn default() -> Self {
		Self::new()
	}
}

fn get_formatted_value<V: Display + ?Sized>(value: &V) -> ColoredString {
	let text = value.to_string();
	if text.parse::<i64>().is_ok() {
		text.bright_blue()
	} else {
		text.bright_green()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn categories_are_indented() -> Result<()> {
		let printer = PrettyPrint::new();
		let category = printer.get_category("color")?;
		category.add_key_value("hex", "FF0000")?;
		category.add_key_value("red", &255)?;
		printer.add_key_value("done", "yes")?;

		assert_eq!(printer.as_string(), "color:\n  hex: FF0000\n  red: 255\ndone: yes\n");
		Ok(())
	}
}

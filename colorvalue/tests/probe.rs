#![cfg(feature = "cli")]

use predicates::str;
use test_utilities::*;

#[test]
fn probe_text() {
	colorvalue_cmd()
		.args(["probe", "80FF8800"])
		.assert()
		.success()
		.stdout(str::contains("80FF8800"))
		.stdout(str::contains("-2130737152"))
		.stdout(str::contains("2164230144"))
		.stdout(str::contains("136"))
		.stdout(str::contains("128"));
}

#[test]
fn probe_json() {
	let stdout = colorvalue_stdout(&["probe", "--json", "--from", "int", "-65536"]);
	assert_eq!(
		stdout,
		"{\n  \"color\": \"FF0000\",\n  \"packed\": -65536,\n  \"unsigned\": 4294901760,\n  \"red\": 255,\n  \"green\": 0,\n  \"blue\": 0,\n  \"alpha\": 255\n}"
	);
}

use std::error::Error;
use std::io::Write;
use std::str::FromStr;

use clap::Parser;
use rand::thread_rng;

use cubenet::prelude::*;

/// n×n×n cube toy: turn, shuffle, flatten and solve cubes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Cube size (the n of the n×n×n cube)
	#[arg(short = 'n', long, default_value_t = 3)]
	size: u32,

	/// Start from the net in this file instead of the solved cube
	#[arg(long, default_value_t = String::new())]
	net: String,

	/// Apply a sequence of turns, e.g. "x1 y-1' z0"
	#[arg(short, default_value_t = String::new())]
	sequence: String,

	/// Apply this many random turns
	#[arg(long, default_value_t = 0)]
	shuffle: usize,

	/// Solve the cube (the output is a turn sequence)
	#[arg(long, default_value_t = false)]
	solve: bool,

	/// Output the net with plain letters rather than colored
	#[arg(short, long, default_value_t = false)]
	char_print: bool,

	/// Print the output to a file rather to the stdout
	#[arg(short, long, default_value_t = String::new())]
	output: String,
}

fn main() -> Result<(), Box<dyn Error>> {
	#[cfg(debug_assertions)]
	std::env::set_var("RUST_BACKTRACE", "1");

	let args = Args::parse();
	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn std::io::Write> = if args.output.is_empty() {
		Box::new(std::io::stdout())
	} else {
		Box::new(std::fs::File::create(args.output)?)
	};

	let mut cube = if args.net.is_empty() {
		PieceCube::new(args.size)?
	} else {
		let text = std::fs::read_to_string(&args.net)?;
		Net::from_str(&text)?.to_cube()?
	};

	for turn in parse_turns(&args.sequence)? {
		cube.apply_turn(turn);
	}

	if args.shuffle > 0 {
		cube.shuffle(&mut thread_rng(), args.shuffle);
	}

	// Solve the cube and only output the sequence
	if args.solve {
		match solve(&cube) {
			Some(turns) => {
				let len = turns.len();
				for turn in turns {
					write!(out, "{} ", turn)?;
				}
				writeln!(out, "(len={})", len)?;
				return Ok(());
			}
			None => panic!("Could not solve the given cube!"),
		}
	}

	// Print the resulting net (either as plain letters or with colors)
	let style = if args.char_print {
		LabelStyle::Plain
	} else {
		LabelStyle::Ansi
	};
	writeln!(out, "{}", Net::paint(&cube).render(style))?;

	Ok(())
}

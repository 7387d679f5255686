use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::io;

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Reads a corpus file as a single line of text.
///
/// Lines are joined with one `separator`; no trailing separator is kept.
///
/// Example:
/// `"the fire\nburns"` → `"the fire burns"`
pub(crate) fn read_corpus<P: AsRef<Path>>(filename: P, separator: &str) -> io::Result<String> {
	Ok(read_file(filename)?.join(separator))
}

/// Reads a whole file into a `String`.
pub(crate) fn read_to_string<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

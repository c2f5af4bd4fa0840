use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

/// Reads a word-list file into a clean corpus.
///
/// Cleaning rules, applied line by line:
/// - everything after a `#` is an inline comment and is dropped
/// - surrounding whitespace is trimmed
/// - entries that are empty or not purely alphabetic are skipped
/// - surviving entries are lower-cased
///
/// The model builder assumes these rules already ran and does not
/// re-validate its input.
pub fn load_word_list<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;

	let words = contents
		.lines()
		.map(|line| line.split('#').next().unwrap_or("").trim())
		.filter(|entry| !entry.is_empty() && entry.chars().all(char::is_alphabetic))
		.map(str::to_lowercase)
		.collect();

	Ok(words)
}

/// Resolves a possibly-relative path against the executable's directory.
///
/// Absolute paths pass through untouched. Relative paths are taken as
/// relative to the directory containing the running binary, so a word
/// list shipped next to the tool is found no matter where it is invoked
/// from. Falls back to the path as given when the executable location
/// is unavailable.
pub fn resolve_path<P: AsRef<Path>>(filename: P) -> PathBuf {
	let path = filename.as_ref();
	if path.is_absolute() {
		return path.to_path_buf();
	}

	match env::current_exe().ok().as_ref().and_then(|exe| exe.parent()) {
		Some(dir) => dir.join(path),
		None => path.to_path_buf(),
	}
}

/// Builds an output path based on an input path and a new extension.
///
/// Example:
/// `data/english.txt` + `"bin"` → `data/english.bin`
pub fn build_output_path<P: AsRef<Path>>(
	input_path: P,
	output_extension: &str,
) -> io::Result<PathBuf> {
	let input_path = input_path.as_ref();

	let parent = input_path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = input_path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Input path has no filename"))?;

	let mut output = PathBuf::from(parent);
	output.push(file_stem);
	output.set_extension(output_extension);

	Ok(output)
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./data/english.txt"` → `"english"`
/// - `"english.txt"` → `"english"`
pub fn get_filename<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Lists all files with a given extension in a directory.
///
/// Returns file names only (no paths).
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();

		if path.is_file() {
			if path.extension() == Some(std::ffi::OsStr::new(extension)) {
				if let Some(name) = path.file_name() {
					files.push(name.to_string_lossy().to_string());
				}
			}
		}
	}

	Ok(files)
}

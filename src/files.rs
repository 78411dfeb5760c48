//! File discovery, output path templating and standard stream plumbing
//!
//! Application support for the command-line interface. Nothing in the core
//! pipeline depends on this module: the scanner and colonizer are handed
//! resolved input text and an output sink only.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Expand the given inputs into the list of files to process.
///
/// Files pass through unchanged. Directories contribute their `.go` entries
/// in name order, descending into subdirectories when `recursive` is set.
pub fn discover(inputs: &[PathBuf], recursive: bool) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for input in inputs {
        if input.is_dir() {
            collect_go_files(input, recursive, &mut found)?;
        } else {
            found.push(input.clone());
        }
    }
    Ok(found)
}

fn collect_go_files(dir: &Path, recursive: bool, found: &mut Vec<PathBuf>) -> io::Result<()> {
    let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());
    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            if recursive {
                collect_go_files(&path, recursive, found)?;
            }
        } else if path.extension().is_some_and(|extension| extension == "go") {
            found.push(path);
        }
    }
    Ok(())
}

/// Where the rewritten file goes: directory substitution, a file-name
/// prefix, a file-stem suffix, and extension substitution.
///
/// With no parts set, the template resolves every input to itself — the
/// in-place rewrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputTemplate {
    pub dir: Option<PathBuf>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub extension: Option<String>,
}

impl OutputTemplate {
    pub fn is_in_place(&self) -> bool {
        self.dir.is_none()
            && self.prefix.is_none()
            && self.suffix.is_none()
            && self.extension.is_none()
    }

    /// Resolve the output path for one input file.
    pub fn resolve(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = self
            .extension
            .as_deref()
            .map(|extension| extension.trim_start_matches('.').to_string())
            .or_else(|| {
                input
                    .extension()
                    .map(|extension| extension.to_string_lossy().into_owned())
            });

        let mut name = String::new();
        if let Some(prefix) = &self.prefix {
            name.push_str(prefix);
        }
        name.push_str(&stem);
        if let Some(suffix) = &self.suffix {
            name.push_str(suffix);
        }
        if let Some(extension) = extension.filter(|extension| !extension.is_empty()) {
            name.push('.');
            name.push_str(&extension);
        }

        let dir = self
            .dir
            .clone()
            .or_else(|| input.parent().map(Path::to_path_buf))
            .unwrap_or_default();
        dir.join(name)
    }
}

/// Open the input: a path, or standard input for `None`.
pub fn open_input(path: Option<&Path>) -> io::Result<Box<dyn Read>> {
    match path {
        Some(path) => Ok(Box::new(File::open(path)?)),
        None => Ok(Box::new(io::stdin())),
    }
}

/// Open the output sink: a path, or standard output for `None`.
///
/// The standard-output handle stays open when the box is dropped; only file
/// sinks own their descriptor.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(File::create(path)?)),
        None => Ok(Box::new(io::stdout())),
    }
}

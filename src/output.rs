//! Paired input/output paths and JSON writing
//!
//! A run is addressed by a base path: `<base>.d.ts` is read and
//! `<base>.d.json` is written next to it.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::schema::ExtractionResult;

/// Suffix appended to the base path to find the declaration file
pub const INPUT_SUFFIX: &str = ".d.ts";

/// Suffix appended to the base path for the JSON result
pub const OUTPUT_SUFFIX: &str = ".d.json";

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut path = OsString::from(base.as_os_str());
    path.push(suffix);
    PathBuf::from(path)
}

/// `<base>.d.ts`
pub fn input_path(base: &Path) -> PathBuf {
    with_suffix(base, INPUT_SUFFIX)
}

/// `<base>.d.json`
pub fn output_path(base: &Path) -> PathBuf {
    with_suffix(base, OUTPUT_SUFFIX)
}

/// Render the result as pretty JSON with two-space indentation.
///
/// Keys keep insertion order and no trailing newline is added.
pub fn render_json(result: &ExtractionResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render and write the result to `path`.
///
/// Rendering happens before the file is touched, so a failed render leaves no
/// output behind.
pub fn write_json(path: &Path, result: &ExtractionResult) -> Result<()> {
    let json = render_json(result)?;
    fs::write(path, &json)?;
    debug!(path = %path.display(), bytes = json.len(), "wrote output");
    Ok(())
}

//! Reading and parsing declaration files.
//!
//! This module turns a path or an in-memory source into a tree-sitter tree and
//! hands it to [`extract`]. It is the only place where parse errors arise.
//!
//! # Example
//!
//! ```ignore
//! use docmd::parsing::extract_file;
//! use std::path::Path;
//!
//! let result = extract_file(Path::new("types.d.ts"))?;
//! println!("{} classes", result.classes.len());
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;
use tree_sitter::Tree;

use crate::config::ExtractOptions;
use crate::error::{DocmdError, Result};
use crate::extract::extract;
use crate::lang::Lang;
use crate::schema::ExtractionResult;

/// Parse source code into a tree.
///
/// # Errors
///
/// Returns `DocmdError::ParseFailure` if:
/// - The language cannot be set on the parser
/// - The parser produces no tree
pub fn parse_source(file_path: &Path, source: &str, lang: Lang) -> Result<Tree> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&lang.tree_sitter_language())
        .map_err(|e| DocmdError::ParseFailure {
            message: format!(
                "Failed to set language for {}: {:?}",
                file_path.display(),
                e
            ),
        })?;

    parser
        .parse(source, None)
        .ok_or_else(|| DocmdError::ParseFailure {
            message: format!("Failed to parse file: {}", file_path.display()),
        })
}

/// Parse in-memory source and extract its declarations.
///
/// `file_path` is only used for error messages.
pub fn extract_source(
    file_path: &Path,
    source: &str,
    lang: Lang,
    options: &ExtractOptions,
) -> Result<ExtractionResult> {
    extract_source_with_options(file_path, source, lang, options, false)
}

/// Same as [`extract_source`], optionally dumping the tree to stderr first.
pub fn extract_source_with_options(
    file_path: &Path,
    source: &str,
    lang: Lang,
    options: &ExtractOptions,
    print_ast: bool,
) -> Result<ExtractionResult> {
    let tree = parse_source(file_path, source, lang)?;

    if print_ast {
        eprintln!("=== AST for {} ===", file_path.display());
        eprintln!("{}", tree.root_node().to_sexp());
        eprintln!("=================");
    }

    Ok(extract(source, &tree, options))
}

/// Read a declaration file and extract its declarations with default options.
///
/// # Errors
///
/// - `DocmdError::FileNotFound` if the file does not exist
/// - `DocmdError::Io` if it cannot be read
/// - `DocmdError::ParseFailure` if it cannot be parsed
pub fn extract_file(file_path: &Path) -> Result<ExtractionResult> {
    extract_file_with_options(file_path, &ExtractOptions::default(), false)
}

/// Read, parse and extract a declaration file.
pub fn extract_file_with_options(
    file_path: &Path,
    options: &ExtractOptions,
    print_ast: bool,
) -> Result<ExtractionResult> {
    if !file_path.exists() {
        return Err(DocmdError::FileNotFound {
            path: file_path.display().to_string(),
        });
    }

    let lang = Lang::from_path(file_path);
    // Invalid UTF-8 becomes U+FFFD rather than failing the whole file
    let bytes = fs::read(file_path)?;
    let source = String::from_utf8_lossy(&bytes);
    debug!(
        path = %file_path.display(),
        bytes = source.len(),
        lang = lang.name(),
        "read declaration file"
    );

    extract_source_with_options(file_path, &source, lang, options, print_ast)
}

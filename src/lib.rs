//! docmd: tagged documentation extraction for TypeScript declaration files
//!
//! This library parses a `.d.ts` file with tree-sitter, walks every node, and
//! records classes, interfaces, enums and named functions together with the
//! JSDoc comments that opt in with a marker tag (`:docmd` by default).
//!
//! # Example
//!
//! ```ignore
//! use docmd::{extract_source, ExtractOptions, Lang};
//! use std::path::Path;
//!
//! let source = r#"
//! /** :docmd Greets someone */
//! export declare function greet(name: string): string;
//! "#;
//!
//! let result = extract_source(
//!     Path::new("greet.d.ts"),
//!     source,
//!     Lang::TypeScript,
//!     &ExtractOptions::default(),
//! )?;
//! assert_eq!(result.functions["greet"].doc, "Greets someone");
//! println!("{}", docmd::output::render_json(&result)?);
//! ```

pub mod cli;
pub mod config;
pub mod detectors;
pub mod error;
pub mod extract;
pub mod lang;
pub mod output;
pub mod parsing;
pub mod schema;

// Re-export commonly used types
pub use cli::Cli;
pub use config::ExtractOptions;
pub use error::{DocmdError, Result};
pub use extract::extract;
pub use lang::Lang;
pub use parsing::{extract_file, extract_source};
pub use schema::{
    Argument, ClassLikeInfo, EnumInfo, EnumKey, ExtractionResult, FieldInfo, FunctionInfo,
    MethodInfo,
};

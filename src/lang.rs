//! Grammar selection and tree-sitter language loading

use std::path::Path;
use tree_sitter::Language;

/// TypeScript dialects understood by the extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    TypeScript,
    Tsx,
}

impl Lang {
    /// Pick the grammar from a file path.
    ///
    /// `.tsx` selects the TSX grammar; everything else (including `.d.ts`,
    /// `.mts`, `.cts` and extension-less paths) is parsed as TypeScript.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map(Self::from_extension)
            .unwrap_or_default()
    }

    /// Pick the grammar from an extension string
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "tsx" => Self::Tsx,
            _ => Self::TypeScript,
        }
    }

    /// Get the canonical name of the language
    pub fn name(&self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
        }
    }

    /// Get the tree-sitter Language for parsing
    pub fn tree_sitter_language(&self) -> Language {
        match self {
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

//! Declaration extraction orchestration
//!
//! Runs the declaration handlers over a parsed tree and returns the filled-in
//! [`ExtractionResult`].

use tree_sitter::Tree;
use tracing::debug;

use crate::config::ExtractOptions;
use crate::detectors::common::walk_dispatch;
use crate::detectors::typescript::{SourceContext, DECLARATION_HANDLERS};
use crate::schema::ExtractionResult;

/// Extract documentation metadata from a parsed TypeScript tree.
///
/// Every node is visited, so declarations nested inside functions, modules
/// or namespaces are found as well. Syntax errors are not reported: tree-sitter
/// already recovered from them and the recovered nodes are walked like any
/// other.
pub fn extract(source: &str, tree: &Tree, options: &ExtractOptions) -> ExtractionResult {
    let root = tree.root_node();
    if root.has_error() {
        debug!("source contains syntax errors; extracting from the recovered tree");
    }

    let ctx = SourceContext::new(source, &options.marker);
    let mut result = ExtractionResult::default();
    walk_dispatch(&root, &DECLARATION_HANDLERS, |handler, node| {
        handler(node, &ctx, &mut result)
    });

    debug!(
        classes = result.classes.len(),
        interfaces = result.interfaces.len(),
        enums = result.enums.len(),
        functions = result.functions.len(),
        "extraction complete"
    );
    result
}

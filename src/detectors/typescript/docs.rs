//! Tagged JSDoc extraction
//!
//! tree-sitter keeps comments as ordinary sibling nodes, so "attached"
//! comments are rebuilt from position: the run of comments right before a
//! node, plus the run before any `export` / `declare` wrapper around it.

use tree_sitter::Node;

use crate::detectors::common::get_node_text;

/// Wrappers whose leading comments belong to the declaration inside them
const TRANSPARENT_WRAPPERS: &[&str] = &["export_statement", "ambient_declaration"];

/// Collect the tagged doc comments of `node` and join them with newlines.
///
/// Only JSDoc blocks whose text starts with `marker` are kept; the marker is
/// removed and the remainder trimmed. Returns an empty string when nothing
/// matches.
pub fn collect_doc(node: &Node, source: &str, marker: &str) -> String {
    attached_comments(node)
        .iter()
        .filter_map(|comment| jsdoc_text(&get_node_text(comment, source)))
        .filter(|text| text.starts_with(marker))
        .map(|text| text.replacen(marker, "", 1).trim().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Comment nodes attached to `node`, in source order
fn attached_comments<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    // Outermost wrapper first so the result stays in source order
    let mut anchors = vec![*node];
    let mut current = *node;
    while let Some(parent) = current.parent() {
        if !TRANSPARENT_WRAPPERS.contains(&parent.kind()) {
            break;
        }
        anchors.push(parent);
        current = parent;
    }

    anchors
        .iter()
        .rev()
        .flat_map(|anchor| leading_comments(anchor))
        .collect()
}

/// The run of comments immediately before `node`.
///
/// Decorators inside the run are stepped over. A comment starting on the row
/// where the preceding token ends trails that token and is not included.
fn leading_comments<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut comments = Vec::new();
    let mut boundary_row = None;

    let mut current = node.prev_sibling();
    while let Some(sibling) = current {
        match sibling.kind() {
            "comment" => comments.push(sibling),
            "decorator" => {}
            _ => {
                boundary_row = Some(sibling.end_position().row);
                break;
            }
        }
        current = sibling.prev_sibling();
    }

    comments.reverse();
    if let Some(row) = boundary_row {
        comments.retain(|comment| comment.start_position().row != row);
    }
    comments
}

/// Comment text of a JSDoc block (`/** ... */`), or `None` for other comments.
///
/// Delimiters and the `*` gutter are removed. The text ends at the first block
/// tag (a line starting with `@`). Empty blocks yield `None`.
pub fn jsdoc_text(raw: &str) -> Option<String> {
    let body = raw.strip_prefix("/**")?.strip_suffix("*/")?;

    let mut lines = Vec::new();
    for line in body.lines() {
        let line = line.trim_start();
        let line = line.strip_prefix('*').unwrap_or(line);
        let line = line.strip_prefix(' ').unwrap_or(line);
        if line.trim_start().starts_with('@') {
            break;
        }
        lines.push(line.trim_end());
    }

    let text = lines.join("\n").trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

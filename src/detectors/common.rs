//! Tree traversal and text helpers shared by the declaration handlers
//!
//! The walk itself knows nothing about declarations: it visits every node and
//! asks a [`KindTable`] whether the node kind has a handler.

use tree_sitter::Node;

// ============================================================================
// Text Extraction
// ============================================================================

/// Get text content of a node
pub fn get_node_text(node: &Node, source: &str) -> String {
    node.utf8_text(source.as_bytes())
        .unwrap_or("")
        .to_string()
}

/// Text of a `type_annotation`-like node without its leading `:`
///
/// Works for `type_annotation`, `type_predicate_annotation` and
/// `asserts_annotation`, which all wrap a single named child. Comments are
/// extras and can sit before the type, so they are skipped.
pub fn annotation_text(annotation: &Node, source: &str) -> Option<String> {
    let mut cursor = annotation.walk();
    let ty = annotation
        .named_children(&mut cursor)
        .find(|child| !child.is_extra());
    ty.map(|ty| get_node_text(&ty, source))
        .filter(|text| !text.is_empty())
}

/// Value of a string literal or substitution-free template, escapes decoded
pub fn string_literal_value(literal: &Node, source: &str) -> String {
    let mut value = String::new();
    let mut cursor = literal.walk();
    for part in literal.named_children(&mut cursor) {
        match part.kind() {
            "string_fragment" => value.push_str(&get_node_text(&part, source)),
            "escape_sequence" => value.push_str(&decode_escape(&get_node_text(&part, source))),
            _ => {}
        }
    }
    value
}

/// Decode one `\...` escape sequence.
///
/// Line continuations decode to nothing. Sequences that do not name a valid
/// character (lone surrogates) are kept as written.
fn decode_escape(sequence: &str) -> String {
    let body = sequence.strip_prefix('\\').unwrap_or(sequence);
    let mut chars = body.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str();

    let decoded = match first {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        'b' => Some('\u{8}'),
        'f' => Some('\u{c}'),
        'v' => Some('\u{b}'),
        '\r' | '\n' | '\u{2028}' | '\u{2029}' => return String::new(),
        'x' => u32::from_str_radix(rest, 16).ok().and_then(char::from_u32),
        'u' => {
            let hex = rest
                .strip_prefix('{')
                .and_then(|hex| hex.strip_suffix('}'))
                .unwrap_or(rest);
            u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
        }
        '0'..='7' => u32::from_str_radix(body, 8).ok().and_then(char::from_u32),
        other => Some(other),
    };
    decoded.map_or_else(|| sequence.to_string(), String::from)
}

// ============================================================================
// AST Traversal
// ============================================================================

/// Visit all nodes in a tree with a visitor function (iterative to avoid stack overflow)
///
/// Order is depth-first pre-order, so a parent is always seen before anything
/// nested inside it.
pub fn visit_all<F>(node: &Node, mut visitor: F)
where
    F: FnMut(&Node),
{
    let mut cursor = node.walk();
    let mut did_visit_children = false;

    loop {
        if !did_visit_children {
            visitor(&cursor.node());

            // Try to go to first child
            if cursor.goto_first_child() {
                did_visit_children = false;
                continue;
            }
        }

        // Try to go to next sibling
        if cursor.goto_next_sibling() {
            did_visit_children = false;
            continue;
        }

        // Go back to parent
        if !cursor.goto_parent() {
            break; // Reached the root, we're done
        }
        did_visit_children = true;
    }
}

/// Static mapping from named node kinds to handlers
pub struct KindTable<H: 'static> {
    entries: &'static [(&'static str, H)],
}

impl<H: 'static> KindTable<H> {
    pub const fn new(entries: &'static [(&'static str, H)]) -> Self {
        Self { entries }
    }

    /// Handler registered for `kind`, if any
    pub fn get(&self, kind: &str) -> Option<&H> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, handler)| handler)
    }

    /// Node kinds with a handler, in registration order
    pub fn kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }
}

/// Walk every node under `root` and call `on_match` for named nodes whose
/// kind is in `table`.
///
/// Matching a node never stops the descent into its children.
pub fn walk_dispatch<H, F>(root: &Node, table: &KindTable<H>, mut on_match: F)
where
    H: 'static,
    F: FnMut(&H, &Node),
{
    visit_all(root, |node| {
        if !node.is_named() {
            return;
        }
        if let Some(handler) = table.get(node.kind()) {
            on_match(handler, node);
        }
    });
}

//! TypeScript declaration handlers
//!
//! Each handler receives one matched node and records what it finds into the
//! shared [`ExtractionResult`]. Handlers only look at the node itself and its
//! direct members; nested declarations are reached by the walk.

mod classes;
mod docs;
mod enums;
mod functions;

use tree_sitter::Node;

use crate::detectors::common::{get_node_text, string_literal_value, KindTable};
use crate::schema::{ExtractionResult, ANONYMOUS};

pub use docs::{collect_doc, jsdoc_text};
pub use functions::extract_arguments;

/// Per-file state shared by all handlers
#[derive(Debug, Clone, Copy)]
pub struct SourceContext<'a> {
    pub source: &'a str,
    /// Doc opt-in tag, e.g. `:docmd`
    pub marker: &'a str,
}

impl<'a> SourceContext<'a> {
    pub fn new(source: &'a str, marker: &'a str) -> Self {
        Self { source, marker }
    }

    pub fn text(&self, node: &Node) -> String {
        get_node_text(node, self.source)
    }

    /// Joined tagged doc comments attached to `node`
    pub fn doc(&self, node: &Node) -> String {
        collect_doc(node, self.source, self.marker)
    }
}

/// Records one matched declaration node
pub type DeclarationHandler = fn(&Node<'_>, &SourceContext<'_>, &mut ExtractionResult);

const HANDLERS: &[(&str, DeclarationHandler)] = &[
    ("class_declaration", classes::record_class),
    ("abstract_class_declaration", classes::record_class),
    ("class", classes::record_default_export_class),
    ("interface_declaration", classes::record_interface),
    ("enum_declaration", enums::record_enum),
    ("function_declaration", functions::record_function),
    ("generator_function_declaration", functions::record_function),
    ("function_signature", functions::record_function),
];

/// Node kinds the extractor records, and who records them
pub static DECLARATION_HANDLERS: KindTable<DeclarationHandler> = KindTable::new(HANDLERS);

/// Literal text of a declaration or member name.
///
/// String names give their decoded value; computed names (`[key]`) have no
/// literal text.
pub(crate) fn literal_name(name: &Node, ctx: &SourceContext) -> Option<String> {
    match name.kind() {
        "computed_property_name" => None,
        "string" => Some(string_literal_value(name, ctx.source)),
        _ => Some(ctx.text(name)),
    }
}

/// Name of `node` from its `name` field, falling back to `"anonymous"`
pub(crate) fn name_or_anonymous(node: &Node, ctx: &SourceContext) -> String {
    node.child_by_field_name("name")
        .and_then(|name| literal_name(&name, ctx))
        .unwrap_or_else(|| ANONYMOUS.to_string())
}

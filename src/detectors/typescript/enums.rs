//! Enum extraction

use tree_sitter::Node;
use tracing::trace;

use super::{literal_name, name_or_anonymous, SourceContext};
use crate::detectors::common::string_literal_value;
use crate::schema::{EnumInfo, EnumKey, ExtractionResult, ANONYMOUS};

/// Record an enum (plain or `const`) and its members
pub(super) fn record_enum(node: &Node, ctx: &SourceContext, result: &mut ExtractionResult) {
    let name = name_or_anonymous(node, ctx);
    let mut info = EnumInfo::default();

    if let Some(body) = node.child_by_field_name("body") {
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            if let Some((key, entry)) = extract_member(&member, ctx) {
                info.keys.insert(key, entry);
            }
        }
    }

    trace!(name = %name, keys = info.keys.len(), "enum");
    result.enums.insert(name, info);
}

/// A member is either a bare name or an `enum_assignment` with an initializer
fn extract_member(member: &Node, ctx: &SourceContext) -> Option<(String, EnumKey)> {
    let (name_node, value) = match member.kind() {
        "comment" => return None,
        "enum_assignment" => (
            member.child_by_field_name("name")?,
            member
                .child_by_field_name("value")
                .and_then(|value| initializer_text(&value, ctx)),
        ),
        _ => (*member, None),
    };

    let key = literal_name(&name_node, ctx).unwrap_or_else(|| ANONYMOUS.to_string());
    let entry = EnumKey {
        doc: ctx.doc(member),
        value,
    };
    Some((key, entry))
}

/// Literal text of an initializer.
///
/// Strings (and templates without substitutions) give their decoded value,
/// numbers and identifiers are kept verbatim. Computed expressions have no
/// literal text.
fn initializer_text(value: &Node, ctx: &SourceContext) -> Option<String> {
    match value.kind() {
        "string" => Some(string_literal_value(value, ctx.source)),
        "template_string" if !has_substitution(value) => {
            Some(string_literal_value(value, ctx.source))
        }
        "number" | "identifier" => Some(ctx.text(value)),
        _ => None,
    }
}

fn has_substitution(template: &Node) -> bool {
    let mut cursor = template.walk();
    let found = template
        .named_children(&mut cursor)
        .any(|child| child.kind() == "template_substitution");
    found
}

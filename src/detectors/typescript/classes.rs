//! Class and interface extraction

use tree_sitter::Node;
use tracing::trace;

use super::functions::extract_arguments;
use super::{literal_name, name_or_anonymous, SourceContext};
use crate::detectors::common::annotation_text;
use crate::schema::{ClassLikeInfo, ExtractionResult, FieldInfo, MethodInfo, ANONYMOUS, ANY_TYPE};

/// What a class or interface member turns into
enum Member {
    Field,
    Method,
    Skip,
}

/// Record a class declaration (abstract or not) under its name
pub(super) fn record_class(node: &Node, ctx: &SourceContext, result: &mut ExtractionResult) {
    let name = name_or_anonymous(node, ctx);
    let info = collect_members(node, ctx, class_member);
    trace!(class = %name, fields = info.fields.len(), methods = info.methods.len(), "class");
    result.classes.insert(name, info);
}

/// Record `export default class { ... }`, which has no name
///
/// Other class expressions (`const A = class {}`, `export = class {}`) are
/// values, not declarations, and are ignored.
pub(super) fn record_default_export_class(
    node: &Node,
    ctx: &SourceContext,
    result: &mut ExtractionResult,
) {
    let is_default_export = node.parent().is_some_and(|parent| {
        let mut cursor = parent.walk();
        let has_default = parent
            .children(&mut cursor)
            .any(|child| !child.is_named() && child.kind() == "default");
        parent.kind() == "export_statement" && has_default
    });
    if is_default_export {
        record_class(node, ctx, result);
    }
}

/// Record an interface declaration under its name
pub(super) fn record_interface(node: &Node, ctx: &SourceContext, result: &mut ExtractionResult) {
    let name = name_or_anonymous(node, ctx);
    let info = collect_members(node, ctx, interface_member);
    trace!(interface = %name, fields = info.fields.len(), methods = info.methods.len(), "interface");
    result.interfaces.insert(name, info);
}

fn class_member(member: &Node, ctx: &SourceContext) -> Member {
    match member.kind() {
        "public_field_definition" => Member::Field,
        "method_definition" | "method_signature" | "abstract_method_signature"
            if is_plain_method(member, ctx) =>
        {
            Member::Method
        }
        _ => Member::Skip,
    }
}

fn interface_member(member: &Node, ctx: &SourceContext) -> Member {
    match member.kind() {
        "property_signature" => Member::Field,
        "method_signature" if is_plain_method(member, ctx) => Member::Method,
        _ => Member::Skip,
    }
}

/// False for constructors and get/set accessors, which share the method node kinds
fn is_plain_method(member: &Node, ctx: &SourceContext) -> bool {
    let mut cursor = member.walk();
    let is_accessor = member
        .children(&mut cursor)
        .any(|child| !child.is_named() && matches!(child.kind(), "get" | "set"));
    if is_accessor {
        return false;
    }

    let is_constructor = member
        .child_by_field_name("name")
        .is_some_and(|name| literal_name(&name, ctx).as_deref() == Some("constructor"));
    !is_constructor
}

/// Scan the direct members of a class or interface body
fn collect_members(
    node: &Node,
    ctx: &SourceContext,
    classify: fn(&Node, &SourceContext) -> Member,
) -> ClassLikeInfo {
    let mut info = ClassLikeInfo::default();
    let Some(body) = node.child_by_field_name("body") else {
        return info;
    };

    let mut cursor = body.walk();
    for member in body.named_children(&mut cursor) {
        match classify(&member, ctx) {
            Member::Field => {
                let (name, field) = extract_field(&member, ctx);
                info.fields.insert(name, field);
            }
            Member::Method => {
                let (name, method) = extract_method(&member, ctx);
                info.methods.insert(name, method);
            }
            Member::Skip => {}
        }
    }
    info
}

fn member_name(member: &Node, ctx: &SourceContext) -> String {
    member
        .child_by_field_name("name")
        .and_then(|name| literal_name(&name, ctx))
        .unwrap_or_else(|| ANONYMOUS.to_string())
}

fn extract_field(member: &Node, ctx: &SourceContext) -> (String, FieldInfo) {
    let field_type = member
        .child_by_field_name("type")
        .and_then(|ty| annotation_text(&ty, ctx.source))
        .unwrap_or_else(|| ANY_TYPE.to_string());

    let field = FieldInfo {
        doc: ctx.doc(member),
        field_type,
    };
    (member_name(member, ctx), field)
}

fn extract_method(member: &Node, ctx: &SourceContext) -> (String, MethodInfo) {
    let arguments = member
        .child_by_field_name("parameters")
        .map(|params| extract_arguments(&params, ctx))
        .unwrap_or_default();
    let return_type = member
        .child_by_field_name("return_type")
        .and_then(|ty| annotation_text(&ty, ctx.source))
        .unwrap_or_else(|| ANY_TYPE.to_string());

    let method = MethodInfo {
        doc: ctx.doc(member),
        arguments,
        return_type,
    };
    (member_name(member, ctx), method)
}

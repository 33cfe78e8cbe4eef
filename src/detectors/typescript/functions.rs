//! Free function extraction and parameter lists

use tree_sitter::Node;
use tracing::trace;

use super::SourceContext;
use crate::detectors::common::annotation_text;
use crate::schema::{Argument, ExtractionResult, FunctionInfo};

/// Record a named function declaration or signature.
///
/// Functions without a name have nothing to be keyed by and are skipped.
/// Overloads share a name, so the last signature wins.
pub(super) fn record_function(node: &Node, ctx: &SourceContext, result: &mut ExtractionResult) {
    let Some(name_node) = node.child_by_field_name("name") else {
        return;
    };
    if name_node.kind() != "identifier" {
        return;
    }
    let name = ctx.text(&name_node);

    let arguments = node
        .child_by_field_name("parameters")
        .map(|params| extract_arguments(&params, ctx))
        .unwrap_or_default();
    let return_type = node
        .child_by_field_name("return_type")
        .and_then(|ty| annotation_text(&ty, ctx.source));

    trace!(function = %name, arity = arguments.len(), "function");
    result.functions.insert(
        name,
        FunctionInfo {
            doc: ctx.doc(node),
            arguments,
            return_type,
        },
    );
}

/// Typed, identifier-named parameters of a `formal_parameters` node, in order.
///
/// Parameters without a type annotation and destructured parameters are
/// skipped. Rest parameters (`...args: T[]`) use the inner identifier and
/// `this` parameters are kept under the name `this`.
pub fn extract_arguments(params: &Node, ctx: &SourceContext) -> Vec<Argument> {
    let mut arguments = Vec::new();
    let mut cursor = params.walk();
    for param in params.named_children(&mut cursor) {
        if !matches!(param.kind(), "required_parameter" | "optional_parameter") {
            continue;
        }
        let Some(name) = param
            .child_by_field_name("pattern")
            .and_then(|pattern| parameter_name(&pattern, ctx))
        else {
            continue;
        };
        let Some(arg_type) = param
            .child_by_field_name("type")
            .and_then(|ty| annotation_text(&ty, ctx.source))
        else {
            continue;
        };
        arguments.push(Argument { name, arg_type });
    }
    arguments
}

fn parameter_name(pattern: &Node, ctx: &SourceContext) -> Option<String> {
    match pattern.kind() {
        "identifier" | "this" => Some(ctx.text(pattern)),
        "rest_pattern" => pattern
            .named_child(0)
            .filter(|inner| inner.kind() == "identifier")
            .map(|inner| ctx.text(&inner)),
        _ => None,
    }
}

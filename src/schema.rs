//! Documentation model produced by the extractor
//!
//! Every mapping is an [`IndexMap`] so the JSON output follows source order.
//! Inserting an existing key replaces the value in place, which gives the
//! last-write-wins behavior for duplicate declaration names.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Type text used when a member has no explicit annotation
pub const ANY_TYPE: &str = "any";

/// Key used when a declaration or member has no literal name
pub const ANONYMOUS: &str = "anonymous";

/// Everything extracted from one declaration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Classes by name
    #[serde(rename = "class")]
    pub classes: IndexMap<String, ClassLikeInfo>,

    /// Interfaces by name
    #[serde(rename = "interface")]
    pub interfaces: IndexMap<String, ClassLikeInfo>,

    /// Enums by name
    #[serde(rename = "enum")]
    pub enums: IndexMap<String, EnumInfo>,

    /// Named free functions by name
    pub functions: IndexMap<String, FunctionInfo>,
}

impl ExtractionResult {
    /// Total number of recorded declarations across all categories
    pub fn len(&self) -> usize {
        self.classes.len() + self.interfaces.len() + self.enums.len() + self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Members of a class or an interface
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassLikeInfo {
    pub fields: IndexMap<String, FieldInfo>,
    pub methods: IndexMap<String, MethodInfo>,
}

/// A property member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub doc: String,

    /// Annotation text, or [`ANY_TYPE`]
    #[serde(rename = "type")]
    pub field_type: String,
}

/// A typed, named parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,

    #[serde(rename = "type")]
    pub arg_type: String,
}

/// A method member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodInfo {
    pub doc: String,
    pub arguments: Vec<Argument>,

    /// Return annotation text, or [`ANY_TYPE`]
    #[serde(rename = "return")]
    pub return_type: String,
}

/// Members of an enum
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumInfo {
    pub keys: IndexMap<String, EnumKey>,
}

/// A single enum member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumKey {
    pub doc: String,

    /// Literal initializer text, when the member has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A named free function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionInfo {
    pub doc: String,
    pub arguments: Vec<Argument>,

    /// Only present with an explicit return annotation
    #[serde(rename = "return", default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
}

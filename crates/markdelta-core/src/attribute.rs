//! Formatting attributes
//!
//! An attribute is a `(key, value)` pair applied either to a run of characters
//! (inline scope) or to a whole line (block scope). Block attributes whose key
//! is listed in [`EXCLUSIVE_BLOCK_KEYS`] decide the type of a line, so at most
//! one of them may be present in a line's attribute map.

use indexmap::IndexMap;
use serde::Serialize;

/// Block keys that are mutually exclusive on a single line
pub const EXCLUSIVE_BLOCK_KEYS: &[&str] = &["header", "list", "code-block", "blockquote"];

/// Attribute map attached to an operation, in insertion order
pub type Attributes = IndexMap<String, AttributeValue>;

/// Where an attribute applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeScope {
    /// Applies to the characters of a text insert
    Inline,
    /// Applies to the line terminated by a `\n` insert
    Block,
}

/// Value of an attribute as it appears on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Int(value)
    }
}

impl From<u8> for AttributeValue {
    fn from(value: u8) -> Self {
        AttributeValue::Int(value.into())
    }
}

impl From<usize> for AttributeValue {
    fn from(value: usize) -> Self {
        AttributeValue::Int(value as i64)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Str(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Str(value)
    }
}

/// A single formatting attribute
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    key: String,
    value: AttributeValue,
    scope: AttributeScope,
}

impl Attribute {
    pub fn new(key: &str, value: impl Into<AttributeValue>, scope: AttributeScope) -> Self {
        Self {
            key: key.to_string(),
            value: value.into(),
            scope,
        }
    }

    /// Create an inline-scoped attribute
    pub fn inline(key: &str, value: impl Into<AttributeValue>) -> Self {
        Self::new(key, value, AttributeScope::Inline)
    }

    /// Create a block-scoped attribute
    pub fn block(key: &str, value: impl Into<AttributeValue>) -> Self {
        Self::new(key, value, AttributeScope::Block)
    }

    pub fn bold() -> Self {
        Self::inline("bold", true)
    }

    pub fn italic() -> Self {
        Self::inline("italic", true)
    }

    pub fn strike() -> Self {
        Self::inline("strike", true)
    }

    pub fn inline_code() -> Self {
        Self::inline("code", true)
    }

    pub fn link(href: &str) -> Self {
        Self::inline("link", href)
    }

    pub fn bullet_list() -> Self {
        Self::block("list", "bullet")
    }

    pub fn ordered_list() -> Self {
        Self::block("list", "ordered")
    }

    pub fn code_block() -> Self {
        Self::block("code-block", true)
    }

    pub fn blockquote() -> Self {
        Self::block("blockquote", true)
    }

    /// Heading attribute for the given level
    pub fn header(level: u8) -> Self {
        Self::block("header", level)
    }

    /// Indentation of a nested list line
    pub fn indent(level: usize) -> Self {
        Self::block("indent", level)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &AttributeValue {
        &self.value
    }

    pub fn scope(&self) -> AttributeScope {
        self.scope
    }

    /// Whether this attribute belongs to the line-type exclusivity group
    pub fn is_exclusive(&self) -> bool {
        self.scope == AttributeScope::Block && EXCLUSIVE_BLOCK_KEYS.contains(&self.key.as_str())
    }

    /// Split into the map entry form used by operations
    pub fn into_entry(self) -> (String, AttributeValue) {
        (self.key, self.value)
    }
}

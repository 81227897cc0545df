//! Delta operations and the append-only builder
//!
//! A [`Delta`] is an ordered list of insert operations. Appending follows the
//! compaction rules of Quill deltas: empty text is dropped and a text insert
//! whose attributes equal those of the previous text insert is merged into it.

use serde::Serialize;

use crate::attribute::{AttributeValue, Attributes};
use crate::embed::Embed;

/// Placeholder used for embeds in [`Delta::to_plain_text`]
pub const OBJECT_REPLACEMENT: char = '\u{FFFC}';

/// Payload of an insert operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Insert {
    Text(String),
    Embed(Embed),
}

impl Insert {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Insert::Text(text) => Some(text),
            Insert::Embed(_) => None,
        }
    }

    pub fn as_embed(&self) -> Option<&Embed> {
        match self {
            Insert::Embed(embed) => Some(embed),
            Insert::Text(_) => None,
        }
    }
}

/// A single insert operation with optional attributes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
    pub insert: Insert,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl Operation {
    /// Text insert without attributes
    pub fn text(text: &str) -> Self {
        Self {
            insert: Insert::Text(text.to_string()),
            attributes: Attributes::new(),
        }
    }

    /// Embed insert without attributes
    pub fn embed(embed: Embed) -> Self {
        Self {
            insert: Insert::Embed(embed),
            attributes: Attributes::new(),
        }
    }

    /// Add an attribute, keeping insertion order
    pub fn with_attribute(mut self, key: &str, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    pub fn is_text(&self) -> bool {
        matches!(self.insert, Insert::Text(_))
    }
}

/// Ordered sequence of insert operations
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Delta {
    ops: Vec<Operation>,
}

impl Delta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text, merging with the previous insert when attributes match
    pub fn insert_text(&mut self, text: &str, attributes: Attributes) {
        if text.is_empty() {
            return;
        }

        if let Some(last) = self.ops.last_mut() {
            if let Insert::Text(ref mut existing) = last.insert {
                if last.attributes == attributes {
                    existing.push_str(text);
                    return;
                }
            }
        }

        self.ops.push(Operation {
            insert: Insert::Text(text.to_string()),
            attributes,
        });
    }

    /// Append an embed; embeds are never merged
    pub fn insert_embed(&mut self, embed: Embed, attributes: Attributes) {
        self.ops.push(Operation {
            insert: Insert::Embed(embed),
            attributes,
        });
    }

    /// Whether the last operation is text ending in a line terminator
    pub fn ends_with_newline(&self) -> bool {
        self.ops
            .last()
            .and_then(|op| op.insert.as_text())
            .is_some_and(|text| text.ends_with('\n'))
    }

    /// Terminate a non-empty delta that does not already end with `\n`.
    ///
    /// Returns `true` if a terminator was appended.
    pub fn ensure_trailing_newline(&mut self, attributes: Attributes) -> bool {
        if self.ops.is_empty() || self.ends_with_newline() {
            return false;
        }
        self.insert_text("\n", attributes);
        true
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn last(&self) -> Option<&Operation> {
        self.ops.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.ops.iter()
    }

    pub fn operations(&self) -> &[Operation] {
        &self.ops
    }

    pub fn into_operations(self) -> Vec<Operation> {
        self.ops
    }

    /// Concatenated text, with embeds rendered as U+FFFC
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for op in &self.ops {
            match &op.insert {
                Insert::Text(text) => out.push_str(text),
                Insert::Embed(_) => out.push(OBJECT_REPLACEMENT),
            }
        }
        out
    }

    /// Serialize to the `[{"insert": .., "attributes": ..}]` wire form
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<Vec<Operation>> for Delta {
    fn from(ops: Vec<Operation>) -> Self {
        Self { ops }
    }
}

impl<'a> IntoIterator for &'a Delta {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl IntoIterator for Delta {
    type Item = Operation;
    type IntoIter = std::vec::IntoIter<Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

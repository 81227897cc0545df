//! Tag-to-attribute and tag-to-embed mapping tables.
//!
//! Each table pairs a built-in default map with a caller-supplied custom map.
//! Lookups consult the custom map first, so a custom entry shadows the default
//! for the same tag. The defaults are never modified.

mod convertor;
mod defaults;

pub use convertor::{AttributeConvertor, AttributeFn, EmbedConvertor, EmbedFn};
pub use defaults::{default_block_attributes, default_embeds, default_inline_attributes};

use std::fmt;

use indexmap::IndexMap;
use markdelta_core::{Attribute, Embed};

use crate::node::{tags, AttributeBag};
use crate::{DeltaError, Result};

/// Which mapping table a lookup goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingKind {
    InlineAttribute,
    BlockAttribute,
    Embed,
}

impl fmt::Display for MappingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingKind::InlineAttribute => f.write_str("inline attribute"),
            MappingKind::BlockAttribute => f.write_str("block attribute"),
            MappingKind::Embed => f.write_str("embed"),
        }
    }
}

/// Collection of mappings used during conversion
pub struct Mappings {
    /// Custom mappings added by the user (checked first)
    custom_inline: IndexMap<String, AttributeConvertor>,
    custom_block: IndexMap<String, AttributeConvertor>,
    custom_embeds: IndexMap<String, EmbedConvertor>,
    /// Built-in mappings
    default_inline: IndexMap<String, AttributeConvertor>,
    default_block: IndexMap<String, AttributeConvertor>,
    default_embeds: IndexMap<String, EmbedConvertor>,
}

impl Mappings {
    /// Create a new Mappings instance with the built-in tables
    pub fn new() -> Self {
        Self {
            custom_inline: IndexMap::new(),
            custom_block: IndexMap::new(),
            custom_embeds: IndexMap::new(),
            default_inline: default_inline_attributes(),
            default_block: default_block_attributes(),
            default_embeds: default_embeds(),
        }
    }

    /// Add a custom inline attribute mapping
    pub fn add_inline_attribute(&mut self, tag: &str, convertor: AttributeConvertor) {
        self.custom_inline.insert(tag.to_lowercase(), convertor);
    }

    /// Add a custom block attribute mapping
    pub fn add_block_attribute(&mut self, tag: &str, convertor: AttributeConvertor) {
        self.custom_block.insert(tag.to_lowercase(), convertor);
    }

    /// Add a custom embed mapping
    pub fn add_embed(&mut self, tag: &str, convertor: EmbedConvertor) {
        self.custom_embeds.insert(tag.to_lowercase(), convertor);
    }

    fn inline_convertor(&self, tag: &str) -> Option<&AttributeConvertor> {
        self.custom_inline
            .get(tag)
            .or_else(|| self.default_inline.get(tag))
    }

    fn block_convertor(&self, tag: &str) -> Option<&AttributeConvertor> {
        self.custom_block
            .get(tag)
            .or_else(|| self.default_block.get(tag))
    }

    fn embed_convertor(&self, tag: &str) -> Option<&EmbedConvertor> {
        self.custom_embeds
            .get(tag)
            .or_else(|| self.default_embeds.get(tag))
    }

    /// Whether the tag carries an inline attribute.
    ///
    /// Inline code inside a code block has none, so code block lines are
    /// not styled twice.
    pub fn has_inline_attribute(&self, tag: &str, in_code_block: bool) -> bool {
        if in_code_block && tag == tags::CODE {
            return false;
        }
        self.inline_convertor(tag).is_some()
    }

    pub fn has_block_attribute(&self, tag: &str) -> bool {
        self.block_convertor(tag).is_some()
    }

    pub fn has_embed(&self, tag: &str) -> bool {
        self.embed_convertor(tag).is_some()
    }

    pub fn to_inline_attribute(&self, tag: &str, attributes: &AttributeBag) -> Result<Attribute> {
        self.inline_convertor(tag)
            .map(|convertor| convertor.convert(attributes))
            .ok_or_else(|| unmapped(MappingKind::InlineAttribute, tag))
    }

    pub fn to_block_attribute(&self, tag: &str, attributes: &AttributeBag) -> Result<Attribute> {
        self.block_convertor(tag)
            .map(|convertor| convertor.convert(attributes))
            .ok_or_else(|| unmapped(MappingKind::BlockAttribute, tag))
    }

    pub fn to_embed(&self, tag: &str, attributes: &AttributeBag) -> Result<Embed> {
        self.embed_convertor(tag)
            .map(|convertor| convertor.convert(attributes))
            .ok_or_else(|| unmapped(MappingKind::Embed, tag))
    }
}

impl Default for Mappings {
    fn default() -> Self {
        Self::new()
    }
}

fn unmapped(kind: MappingKind, tag: &str) -> DeltaError {
    DeltaError::UnmappedConversion {
        kind,
        tag: tag.to_string(),
    }
}

//! Built-in tag mappings for CommonMark output.

use indexmap::IndexMap;
use markdelta_core::{Attribute, Embed};

use super::{AttributeConvertor, EmbedConvertor};
use crate::node::tags;

/// Inline attributes: emphasis, strong, strikethrough, link and inline code
pub fn default_inline_attributes() -> IndexMap<String, AttributeConvertor> {
    let mut map = IndexMap::new();
    map.insert(
        tags::EMPHASIS.to_string(),
        AttributeConvertor::constant(Attribute::italic()),
    );
    map.insert(
        tags::STRONG.to_string(),
        AttributeConvertor::constant(Attribute::bold()),
    );
    map.insert(
        tags::STRIKETHROUGH.to_string(),
        AttributeConvertor::constant(Attribute::strike()),
    );
    map.insert(
        tags::LINK.to_string(),
        AttributeConvertor::new(|attrs| {
            Attribute::link(attrs.get("href").map(String::as_str).unwrap_or(""))
        }),
    );
    map.insert(
        tags::CODE.to_string(),
        AttributeConvertor::constant(Attribute::inline_code()),
    );
    map
}

/// Block attributes: lists, code blocks, blockquotes and headings 1-3
pub fn default_block_attributes() -> IndexMap<String, AttributeConvertor> {
    let mut map = IndexMap::new();
    map.insert(
        tags::UNORDERED_LIST.to_string(),
        AttributeConvertor::constant(Attribute::bullet_list()),
    );
    map.insert(
        tags::ORDERED_LIST.to_string(),
        AttributeConvertor::constant(Attribute::ordered_list()),
    );
    map.insert(
        tags::CODE_BLOCK.to_string(),
        AttributeConvertor::constant(Attribute::code_block()),
    );
    map.insert(
        tags::BLOCKQUOTE.to_string(),
        AttributeConvertor::constant(Attribute::blockquote()),
    );
    for (level, tag) in (1u8..).zip(tags::HEADINGS.iter().take(3)) {
        map.insert(
            tag.to_string(),
            AttributeConvertor::constant(Attribute::header(level)),
        );
    }
    map
}

/// Embeds: horizontal rule and image
pub fn default_embeds() -> IndexMap<String, EmbedConvertor> {
    let mut map = IndexMap::new();
    map.insert(
        tags::HORIZONTAL_RULE.to_string(),
        EmbedConvertor::new(|_| Embed::horizontal_rule()),
    );
    map.insert(
        tags::IMAGE.to_string(),
        EmbedConvertor::new(|attrs| {
            Embed::image(attrs.get("src").map(String::as_str).unwrap_or(""))
        }),
    );
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::AttributeBag;

    #[test]
    fn test_headings_stop_at_level_three() {
        let blocks = default_block_attributes();
        let bag = AttributeBag::new();
        assert_eq!(blocks["h1"].convert(&bag), Attribute::header(1));
        assert_eq!(blocks["h3"].convert(&bag), Attribute::header(3));
        assert!(!blocks.contains_key("h4"));
    }

    #[test]
    fn test_link_uses_href() {
        let inline = default_inline_attributes();
        let mut bag = AttributeBag::new();
        bag.insert("href".to_string(), "https://example.com".to_string());
        assert_eq!(inline["a"].convert(&bag), Attribute::link("https://example.com"));
    }

    #[test]
    fn test_image_without_src() {
        let embeds = default_embeds();
        assert_eq!(embeds["img"].convert(&AttributeBag::new()), Embed::image(""));
    }
}

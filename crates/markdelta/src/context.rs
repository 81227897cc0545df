//! Per-conversion traversal state.

use markdelta_core::{Attribute, Attributes};

/// Mutable state threaded through one conversion run
#[derive(Debug)]
pub(crate) struct ConversionContext {
    /// Active block attributes, outermost first
    pub block_attributes: Vec<Attribute>,
    /// Active inline attributes, outermost first
    pub inline_attributes: Vec<Attribute>,
    /// Nesting depth of list items; -1 outside of any list item
    pub list_depth: i32,
    pub in_blockquote: bool,
    pub in_code_block: bool,
    pub last_tag: Option<String>,
    /// Tag of the outermost element currently open
    pub current_block_tag: Option<String>,
    /// Set once a block exit emitted a terminator, cleared by text
    pub just_exited_block: bool,
}

impl Default for ConversionContext {
    fn default() -> Self {
        Self {
            block_attributes: Vec::new(),
            inline_attributes: Vec::new(),
            list_depth: -1,
            in_blockquote: false,
            in_code_block: false,
            last_tag: None,
            current_block_tag: None,
            just_exited_block: false,
        }
    }
}

impl ConversionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attributes for the next text insert. Inner attributes override outer
    /// ones with the same key.
    pub fn effective_inline_attributes(&self) -> Attributes {
        self.inline_attributes
            .iter()
            .cloned()
            .map(Attribute::into_entry)
            .collect()
    }

    /// Attributes for the next line terminator.
    ///
    /// Nested list lines get an `indent` first. Of several exclusive block
    /// attributes only the outermost is kept; the stack itself is untouched.
    pub fn effective_block_attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        if self.list_depth > 0 {
            let (key, value) = Attribute::indent(self.list_depth as usize).into_entry();
            attributes.insert(key, value);
        }

        let mut has_exclusive = false;
        for attribute in &self.block_attributes {
            if attribute.is_exclusive() {
                if has_exclusive {
                    continue;
                }
                has_exclusive = true;
            }
            let (key, value) = attribute.clone().into_entry();
            attributes.insert(key, value);
        }

        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markdelta_core::AttributeValue;

    #[test]
    fn test_fresh_context() {
        let ctx = ConversionContext::new();
        assert_eq!(ctx.list_depth, -1);
        assert!(ctx.effective_block_attributes().is_empty());
        assert!(ctx.effective_inline_attributes().is_empty());
    }

    #[test]
    fn test_inline_attributes_accumulate() {
        let mut ctx = ConversionContext::new();
        ctx.inline_attributes.push(Attribute::bold());
        ctx.inline_attributes.push(Attribute::link("https://a.example"));
        ctx.inline_attributes.push(Attribute::link("https://b.example"));

        let attrs = ctx.effective_inline_attributes();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs["bold"], AttributeValue::Bool(true));
        assert_eq!(attrs["link"], AttributeValue::from("https://b.example"));
    }

    #[test]
    fn test_outermost_exclusive_wins() {
        let mut ctx = ConversionContext::new();
        ctx.block_attributes.push(Attribute::blockquote());
        ctx.block_attributes.push(Attribute::header(2));
        ctx.block_attributes.push(Attribute::block("align", "center"));

        let attrs = ctx.effective_block_attributes();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs["blockquote"], AttributeValue::Bool(true));
        assert!(!attrs.contains_key("header"));
        assert_eq!(attrs["align"], AttributeValue::from("center"));
        assert_eq!(ctx.block_attributes.len(), 3);
    }

    #[test]
    fn test_indent_follows_list_depth() {
        let mut ctx = ConversionContext::new();
        ctx.block_attributes.push(Attribute::bullet_list());
        ctx.block_attributes.push(Attribute::bullet_list());
        ctx.block_attributes.push(Attribute::ordered_list());

        ctx.list_depth = 0;
        assert!(!ctx.effective_block_attributes().contains_key("indent"));

        ctx.list_depth = 2;
        let attrs = ctx.effective_block_attributes();
        assert_eq!(attrs.get_index(0).map(|(k, _)| k.as_str()), Some("indent"));
        assert_eq!(attrs["indent"], AttributeValue::Int(2));
        assert_eq!(attrs["list"], AttributeValue::from("bullet"));
    }
}

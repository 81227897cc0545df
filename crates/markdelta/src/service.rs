//! MarkdownToDelta - the main entry point for tree to delta conversion.

use log::debug;
use markdelta_core::{Attribute, AttributeScope, Delta, Embed};

use crate::convert::convert;
use crate::mappings::{AttributeConvertor, EmbedConvertor, Mappings};
use crate::node::{AttributeBag, Node};
use crate::Result;

/// Options for MarkdownToDelta
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeltaOptions {
    /// Join the lines of a paragraph with a space, as CommonMark renders
    /// soft line breaks. When off, each source line ends its own delta line.
    pub collapse_soft_line_breaks: bool,
}

impl Default for DeltaOptions {
    fn default() -> Self {
        Self {
            collapse_soft_line_breaks: true,
        }
    }
}

/// The main service for converting markup trees to deltas
pub struct MarkdownToDelta {
    options: DeltaOptions,
    mappings: Mappings,
}

impl MarkdownToDelta {
    /// Create a new MarkdownToDelta with default options
    pub fn new() -> Self {
        Self {
            options: DeltaOptions::default(),
            mappings: Mappings::new(),
        }
    }

    /// Create a MarkdownToDelta with custom options
    pub fn with_options(options: DeltaOptions) -> Self {
        Self {
            options,
            mappings: Mappings::new(),
        }
    }

    /// Convert top-level markup nodes to a delta.
    ///
    /// Every call starts from a fresh conversion context, so one service can
    /// be reused and shared between threads.
    pub fn convert(&self, nodes: &[Node]) -> Result<Delta> {
        debug!("converting {} top-level nodes", nodes.len());
        let delta = convert(nodes, &self.mappings, &self.options)?;
        debug!("produced {} operations", delta.len());
        Ok(delta)
    }

    /// Parse Markdown and convert it to a delta
    #[cfg(feature = "markdown")]
    pub fn convert_markdown(&self, markdown: &str) -> Result<Delta> {
        let nodes = crate::markdown::parse_markdown(markdown);
        self.convert(&nodes)
    }

    /// Map a tag to an inline attribute, shadowing any built-in mapping
    pub fn add_inline_attribute<F>(&mut self, tag: &str, convert: F) -> &mut Self
    where
        F: Fn(&AttributeBag) -> Attribute + Send + Sync + 'static,
    {
        self.mappings
            .add_inline_attribute(tag, AttributeConvertor::new(convert));
        self
    }

    /// Map a tag to a block attribute, shadowing any built-in mapping.
    ///
    /// Attributes built with inline scope are rescoped to block scope so they
    /// take part in line-type exclusivity.
    pub fn add_block_attribute<F>(&mut self, tag: &str, convert: F) -> &mut Self
    where
        F: Fn(&AttributeBag) -> Attribute + Send + Sync + 'static,
    {
        self.mappings.add_block_attribute(
            tag,
            AttributeConvertor::new(move |attrs| {
                let attribute = convert(attrs);
                match attribute.scope() {
                    AttributeScope::Block => attribute,
                    AttributeScope::Inline => {
                        Attribute::block(attribute.key(), attribute.value().clone())
                    }
                }
            }),
        );
        self
    }

    /// Map a tag to an embedded value, shadowing any built-in mapping
    pub fn add_embed<F>(&mut self, tag: &str, convert: F) -> &mut Self
    where
        F: Fn(&AttributeBag) -> Embed + Send + Sync + 'static,
    {
        self.mappings.add_embed(tag, EmbedConvertor::new(convert));
        self
    }

    /// Apply a plugin
    pub fn use_plugin<F>(&mut self, plugin: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        plugin(self);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &DeltaOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut DeltaOptions {
        &mut self.options
    }

    /// Get the mapping tables
    pub fn mappings(&self) -> &Mappings {
        &self.mappings
    }
}

impl Default for MarkdownToDelta {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markdelta_core::Operation;
    use pretty_assertions::assert_eq;

    fn make_p(text: &str) -> Node {
        Node::element("p").with_child(Node::text(text))
    }

    #[test]
    fn test_simple_paragraph() {
        let service = MarkdownToDelta::new();
        let delta = service.convert(&[make_p("Hello World")]).unwrap();
        assert_eq!(delta.operations(), &[Operation::text("Hello World\n")]);
    }

    #[test]
    fn test_reuse_starts_fresh() {
        let service = MarkdownToDelta::new();
        let quote = Node::element("blockquote").with_child(make_p("q"));
        let first = service.convert(&[quote.clone()]).unwrap();
        let second = service.convert(&[quote]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_inline_attribute() {
        let mut service = MarkdownToDelta::new();
        service.add_inline_attribute("mark", |_| Attribute::inline("background", "#ffff00"));

        let p = Node::element("p").with_child(Node::element("mark").with_child(Node::text("hi")));
        let delta = service.convert(&[p]).unwrap();
        assert_eq!(
            delta.operations()[0],
            Operation::text("hi").with_attribute("background", "#ffff00")
        );
    }

    #[test]
    fn test_custom_block_attribute_is_rescoped() {
        let mut service = MarkdownToDelta::new();
        service.add_block_attribute("h4", |_| Attribute::inline("header", 4u8));

        let h4 = Node::element("h4").with_child(Node::text("Deep"));
        let quote = Node::element("blockquote").with_child(h4);
        let delta = service.convert(&[quote]).unwrap();

        // Blockquote is outermost, so the custom header is dropped from the line
        assert_eq!(
            delta.last(),
            Some(&Operation::text("\n").with_attribute("blockquote", true))
        );
    }

    #[test]
    fn test_custom_embed_overrides_default() {
        let mut service = MarkdownToDelta::new();
        service.add_embed("hr", |_| Embed::new("divider", "hr"));

        let delta = service.convert(&[Node::element("hr")]).unwrap();
        assert_eq!(
            delta.operations()[0],
            Operation::embed(Embed::new("divider", "hr"))
        );
    }

    #[test]
    fn test_service_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MarkdownToDelta>();
    }

    #[test]
    fn test_use_plugin() {
        let mut service = MarkdownToDelta::new();
        service.use_plugin(|s| {
            s.options_mut().collapse_soft_line_breaks = false;
        });
        assert!(!service.options().collapse_soft_line_breaks);
    }
}

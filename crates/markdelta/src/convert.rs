//! Convert a markup tree into a delta
//!
//! A single depth-first pass over the tree. Each element gets a pre-visit
//! hook (newline before, attribute push, mode entry), its children, and a
//! post-visit hook (embed, newline after, mode exit, attribute pop). Text
//! leaves are normalized and emitted line by line.

use std::borrow::Cow;

use log::trace;
use markdelta_core::{Attributes, Delta};

use crate::context::ConversionContext;
use crate::mappings::Mappings;
use crate::node::{tags, Element, Node};
use crate::service::DeltaOptions;
use crate::text::normalize_text;
use crate::Result;

/// Convert top-level nodes into a delta
pub(crate) fn convert(nodes: &[Node], mappings: &Mappings, options: &DeltaOptions) -> Result<Delta> {
    let mut converter = Converter::new(mappings, options);
    for node in nodes {
        converter.visit(node, 0)?;
    }
    Ok(converter.finish())
}

/// Which stacks an element pushed onto when entered
#[derive(Debug, Clone, Copy, Default)]
struct Pushed {
    block: bool,
    inline: bool,
}

struct Converter<'a> {
    mappings: &'a Mappings,
    options: &'a DeltaOptions,
    ctx: ConversionContext,
    delta: Delta,
}

impl<'a> Converter<'a> {
    fn new(mappings: &'a Mappings, options: &'a DeltaOptions) -> Self {
        Self {
            mappings,
            options,
            ctx: ConversionContext::new(),
            delta: Delta::new(),
        }
    }

    /// Visit a node; `depth` is 0 for top-level nodes
    fn visit(&mut self, node: &Node, depth: usize) -> Result<()> {
        match node {
            Node::Text(content) => {
                self.visit_text(content);
                Ok(())
            }
            Node::Element(element) => {
                let pushed = self.visit_element_before(element)?;
                for child in &element.children {
                    self.visit(child, depth + 1)?;
                }
                self.visit_element_after(element, depth == 0, pushed)
            }
        }
    }

    fn visit_text(&mut self, content: &str) {
        let rendered: Cow<'_, str> = if self.ctx.in_blockquote {
            Cow::Borrowed(content)
        } else if self.ctx.in_code_block {
            Cow::Borrowed(content.strip_suffix('\n').unwrap_or(content))
        } else {
            normalize_text(
                content,
                self.ctx.last_tag.as_deref(),
                self.options.collapse_soft_line_breaks,
            )
        };

        // A trailing terminator does not open an empty last line
        let body = rendered.strip_suffix('\n').unwrap_or(&rendered);
        let inline = self.ctx.effective_inline_attributes();
        let mut lines = body.split('\n').peekable();
        while let Some(line) = lines.next() {
            self.delta.insert_text(line, inline.clone());
            if lines.peek().is_some() {
                self.insert_newline();
            }
        }

        self.ctx.last_tag = None;
        self.ctx.just_exited_block = false;
    }

    fn visit_element_before(&mut self, element: &Element) -> Result<Pushed> {
        let tag = element.tag.as_str();
        trace!("enter <{tag}>");

        self.insert_newline_before_if_needed(tag);

        if self.ctx.current_block_tag.is_none() {
            self.ctx.current_block_tag = Some(tag.to_string());
        }
        self.ctx.last_tag = Some(tag.to_string());

        let mut pushed = Pushed::default();
        if self.mappings.has_block_attribute(tag) {
            let attribute = self.mappings.to_block_attribute(tag, &element.attributes)?;
            self.ctx.block_attributes.push(attribute);
            pushed.block = true;
        }
        if self.mappings.has_inline_attribute(tag, self.ctx.in_code_block) {
            let attribute = self.mappings.to_inline_attribute(tag, &element.attributes)?;
            self.ctx.inline_attributes.push(attribute);
            pushed.inline = true;
        }

        match tag {
            tags::BLOCKQUOTE => self.ctx.in_blockquote = true,
            tags::CODE_BLOCK => self.ctx.in_code_block = true,
            tags::LIST_ITEM => self.ctx.list_depth += 1,
            _ => {}
        }

        Ok(pushed)
    }

    fn visit_element_after(&mut self, element: &Element, top_level: bool, pushed: Pushed) -> Result<()> {
        let tag = element.tag.as_str();

        if self.mappings.has_embed(tag) {
            let embed = self.mappings.to_embed(tag, &element.attributes)?;
            self.delta.insert_embed(embed, Attributes::new());
        }

        if tag == tags::LINE_BREAK {
            self.delta.insert_text("\n", Attributes::new());
        }

        let exits_block = top_level || pushed.block || tag == tags::LIST_ITEM;
        self.insert_newline_after_if_needed(tag, exits_block);

        match tag {
            tags::BLOCKQUOTE => self.ctx.in_blockquote = false,
            tags::CODE_BLOCK => self.ctx.in_code_block = false,
            tags::LIST_ITEM => self.ctx.list_depth -= 1,
            _ => {}
        }

        if pushed.block {
            self.ctx.block_attributes.pop();
        }
        if pushed.inline {
            self.ctx.inline_attributes.pop();
        }

        if self.ctx.current_block_tag.as_deref() == Some(tag) {
            self.ctx.current_block_tag = None;
        }
        self.ctx.last_tag = Some(tag.to_string());

        trace!("exit <{tag}>");
        Ok(())
    }

    /// Separate adjacent blockquotes, adjacent code blocks, and a nested
    /// list from the text of its parent item.
    fn insert_newline_before_if_needed(&mut self, tag: &str) {
        let last_tag = self.ctx.last_tag.as_deref();

        let adjacent_blockquote =
            !self.ctx.in_blockquote && last_tag == Some(tags::BLOCKQUOTE) && tag == tags::BLOCKQUOTE;
        let adjacent_code_block =
            !self.ctx.in_code_block && last_tag == Some(tags::CODE_BLOCK) && tag == tags::CODE_BLOCK;
        let nested_list = self.ctx.list_depth >= 0 && tags::is_list(tag);

        if adjacent_blockquote || adjacent_code_block || nested_list {
            self.insert_newline();
        }
    }

    fn insert_newline_after_if_needed(&mut self, tag: &str, exits_block: bool) {
        // A divider always ends its line
        if tag == tags::HORIZONTAL_RULE {
            self.ctx.just_exited_block = true;
            self.insert_newline();
            return;
        }

        if !self.ctx.just_exited_block && exits_block {
            self.ctx.just_exited_block = true;
            self.insert_newline();
        }
    }

    fn insert_newline(&mut self) {
        let attributes = self.ctx.effective_block_attributes();
        trace!("newline {attributes:?}");
        self.delta.insert_text("\n", attributes);
    }

    fn finish(mut self) -> Delta {
        debug_assert!(self.ctx.block_attributes.is_empty());
        debug_assert!(self.ctx.inline_attributes.is_empty());

        let attributes = self.ctx.effective_block_attributes();
        self.delta.ensure_trailing_newline(attributes);
        self.delta
    }
}

//! Markdown parsing support.
//!
//! This module parses Markdown strings with pulldown-cmark and builds the
//! markup tree used by the converter, shaped the way an HTML renderer would
//! nest the elements (`p`, `h1`, `blockquote`, `pre > code`, `ul > li`, ...).

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::node::{tags, Element, Node};

/// Parse a Markdown string into top-level markup nodes.
///
/// Soft line breaks become `\n` inside text, so a paragraph's lines share one
/// text leaf. Raw HTML is kept as text.
///
/// # Example
///
/// ```rust
/// use markdelta::{parse_markdown, MarkdownToDelta};
///
/// let nodes = parse_markdown("# Hello *World*");
/// assert_eq!(nodes[0].tag_name(), Some("h1"));
///
/// let delta = MarkdownToDelta::new().convert(&nodes).unwrap();
/// assert_eq!(delta.to_plain_text(), "Hello World\n");
/// ```
pub fn parse_markdown(markdown: &str) -> Vec<Node> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut builder = TreeBuilder::default();
    for event in Parser::new_ext(markdown, options) {
        builder.push_event(event);
    }
    builder.finish()
}

/// An open container. Frames without an element are transparent: their
/// children are handed to the parent when closed.
struct Frame {
    element: Option<Element>,
    children: Vec<Node>,
}

impl Frame {
    fn open(element: Option<Element>) -> Self {
        Self {
            element,
            children: Vec::new(),
        }
    }
}

#[derive(Default)]
struct TreeBuilder {
    roots: Vec<Node>,
    open: Vec<Frame>,
}

impl TreeBuilder {
    fn push_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let mut code = Element::new(tags::CODE);
                if let CodeBlockKind::Fenced(info) = kind {
                    if let Some(lang) = info.split_whitespace().next() {
                        code.set_attr("class", &format!("language-{lang}"));
                    }
                }
                self.open(Some(Element::new(tags::CODE_BLOCK)));
                self.open(Some(code));
            }
            Event::End(TagEnd::CodeBlock) => {
                self.close();
                self.close();
            }
            Event::Start(tag) => {
                let element = start_element(tag);
                self.open(element);
            }
            Event::End(_) => self.close(),
            Event::Text(text)
            | Event::Html(text)
            | Event::InlineHtml(text)
            | Event::InlineMath(text)
            | Event::DisplayMath(text) => self.push_text(&text),
            Event::Code(code) => {
                let node = Node::element(tags::CODE).with_child(Node::text(&code));
                self.push_node(node);
            }
            Event::SoftBreak => self.push_text("\n"),
            Event::HardBreak => self.push_node(Node::element(tags::LINE_BREAK)),
            Event::Rule => self.push_node(Node::element(tags::HORIZONTAL_RULE)),
            _ => {}
        }
    }

    fn open(&mut self, element: Option<Element>) {
        self.open.push(Frame::open(element));
    }

    fn close(&mut self) {
        let Some(frame) = self.open.pop() else {
            return;
        };

        match frame.element {
            Some(mut element) if element.tag == tags::IMAGE => {
                // Image children are the alt text
                let alt: String = frame.children.iter().map(Node::text_content).collect();
                if !alt.is_empty() {
                    element.set_attr("alt", &alt);
                }
                self.push_node(Node::Element(element));
            }
            Some(mut element) => {
                element.children = frame.children;
                self.push_node(Node::Element(element));
            }
            None => {
                for child in frame.children {
                    self.push_node(child);
                }
            }
        }
    }

    fn children_mut(&mut self) -> &mut Vec<Node> {
        match self.open.last_mut() {
            Some(frame) => &mut frame.children,
            None => &mut self.roots,
        }
    }

    fn push_node(&mut self, node: Node) {
        // Merge adjacent text so each run is a single leaf
        if let Node::Text(ref text) = node {
            if let Some(Node::Text(last)) = self.children_mut().last_mut() {
                last.push_str(text);
                return;
            }
        }
        self.children_mut().push(node);
    }

    fn push_text(&mut self, text: &str) {
        self.push_node(Node::text(text));
    }

    fn finish(mut self) -> Vec<Node> {
        while !self.open.is_empty() {
            self.close();
        }
        self.roots
    }
}

/// Element for a start tag, `None` for containers without a markup tag
fn start_element(tag: Tag<'_>) -> Option<Element> {
    let element = match tag {
        Tag::Paragraph => Element::new(tags::PARAGRAPH),
        Tag::Heading { level, .. } => Element::new(&format!("h{}", level as usize)),
        Tag::BlockQuote(_) => Element::new(tags::BLOCKQUOTE),
        Tag::List(None) => Element::new(tags::UNORDERED_LIST),
        Tag::List(Some(start)) => {
            let mut list = Element::new(tags::ORDERED_LIST);
            if start != 1 {
                list.set_attr("start", &start.to_string());
            }
            list
        }
        Tag::Item => Element::new(tags::LIST_ITEM),
        Tag::Emphasis => Element::new(tags::EMPHASIS),
        Tag::Strong => Element::new(tags::STRONG),
        Tag::Strikethrough => Element::new(tags::STRIKETHROUGH),
        Tag::Link {
            dest_url, title, ..
        } => {
            let mut link = Element::new(tags::LINK);
            link.set_attr("href", &dest_url);
            if !title.is_empty() {
                link.set_attr("title", &title);
            }
            link
        }
        Tag::Image {
            dest_url, title, ..
        } => {
            let mut image = Element::new(tags::IMAGE);
            image.set_attr("src", &dest_url);
            if !title.is_empty() {
                image.set_attr("title", &title);
            }
            image
        }
        _ => return None,
    };
    Some(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn el(tag: &str, children: Vec<Node>) -> Node {
        let mut node = Node::element(tag);
        for child in children {
            node.add_child(child);
        }
        node
    }

    #[test]
    fn test_parse_paragraph() {
        let nodes = parse_markdown("hello world");
        assert_eq!(nodes, vec![el("p", vec![Node::text("hello world")])]);
    }

    #[test]
    fn test_soft_break_joins_text() {
        let nodes = parse_markdown("line one\nline two");
        assert_eq!(nodes, vec![el("p", vec![Node::text("line one\nline two")])]);
    }

    #[test]
    fn test_parse_inline() {
        let nodes = parse_markdown("**bold** and ~~gone~~ `x`");
        assert_eq!(
            nodes,
            vec![el(
                "p",
                vec![
                    el("strong", vec![Node::text("bold")]),
                    Node::text(" and "),
                    el("del", vec![Node::text("gone")]),
                    Node::text(" "),
                    el("code", vec![Node::text("x")]),
                ]
            )]
        );
    }

    #[test]
    fn test_parse_fenced_code() {
        let nodes = parse_markdown("```rust\nfn main() {}\n```");
        let code = Node::element_with_attrs("code", vec![("class", "language-rust")])
            .with_child(Node::text("fn main() {}\n"));
        assert_eq!(nodes, vec![el("pre", vec![code])]);
    }

    #[test]
    fn test_parse_tight_list() {
        let nodes = parse_markdown("1. one\n2. two");
        assert_eq!(
            nodes,
            vec![el(
                "ol",
                vec![
                    el("li", vec![Node::text("one")]),
                    el("li", vec![Node::text("two")]),
                ]
            )]
        );
    }

    #[test]
    fn test_parse_ordered_list_start() {
        let nodes = parse_markdown("3. three");
        assert_eq!(nodes[0].attr("start"), Some("3"));
    }

    #[test]
    fn test_parse_image_alt() {
        let nodes = parse_markdown("![a *cat*](cat.png)");
        let img = Node::element_with_attrs("img", vec![("src", "cat.png"), ("alt", "a cat")]);
        assert_eq!(nodes, vec![el("p", vec![img])]);
    }

    #[test]
    fn test_parse_link_and_break() {
        let nodes = parse_markdown("[site](https://example.com)  \nnext");
        let link = Node::element_with_attrs("a", vec![("href", "https://example.com")])
            .with_child(Node::text("site"));
        assert_eq!(
            nodes,
            vec![el("p", vec![link, el("br", vec![]), Node::text("next")])]
        );
    }

    #[test]
    fn test_parse_blocks() {
        let nodes = parse_markdown("# Title\n\n> quote\n\n---");
        let tags: Vec<_> = nodes.iter().filter_map(Node::tag_name).collect();
        assert_eq!(tags, vec!["h1", "blockquote", "hr"]);
        assert_eq!(nodes[1].children()[0].tag_name(), Some("p"));
    }
}

//! Markup tree consumed by the converter.
//!
//! This is the element/text tree a Markdown parser produces: element nodes
//! carry a lowercase tag name, a string attribute bag and ordered children.
//! Any parser can build this structure; the `markdown` feature provides one
//! backed by pulldown-cmark.

use indexmap::IndexMap;

/// Attribute bag of an element, in source order
pub type AttributeBag = IndexMap<String, String>;

/// Tag names the converter gives special meaning to
pub mod tags {
    pub const PARAGRAPH: &str = "p";
    pub const BLOCKQUOTE: &str = "blockquote";
    pub const CODE_BLOCK: &str = "pre";
    pub const CODE: &str = "code";
    pub const UNORDERED_LIST: &str = "ul";
    pub const ORDERED_LIST: &str = "ol";
    pub const LIST_ITEM: &str = "li";
    pub const LINE_BREAK: &str = "br";
    pub const HORIZONTAL_RULE: &str = "hr";
    pub const IMAGE: &str = "img";
    pub const LINK: &str = "a";
    pub const EMPHASIS: &str = "em";
    pub const STRONG: &str = "strong";
    pub const STRIKETHROUGH: &str = "del";
    pub const HEADINGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

    /// Whether the tag opens a list
    pub fn is_list(tag: &str) -> bool {
        tag == UNORDERED_LIST || tag == ORDERED_LIST
    }
}

/// An element node
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    /// Lowercase tag name, e.g. `p`, `h1`, `li`
    pub tag: String,
    pub attributes: AttributeBag,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_lowercase(),
            attributes: AttributeBag::new(),
            children: Vec::new(),
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set an attribute, replacing any previous value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}

/// A node of the markup tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    Element(Element),
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Node::Element(Element::new(tag_name))
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut element = Element::new(tag_name);
        for (name, value) in attrs {
            element.set_attr(name, value);
        }
        Node::Element(element)
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Tag name for elements, `None` for text
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Node::Element(element) => Some(&element.tag),
            Node::Text(_) => None,
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element(element) => element.attr(name),
            Node::Text(_) => None,
        }
    }

    /// Child nodes; text nodes have none
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => &element.children,
            Node::Text(_) => &[],
        }
    }

    /// Add a child node. Text nodes cannot hold children and ignore the call.
    pub fn add_child(&mut self, child: Node) {
        if let Node::Element(element) = self {
            element.children.push(child);
        }
    }

    /// Builder form of [`Node::add_child`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(content) => content.clone(),
            Node::Element(element) => element
                .children
                .iter()
                .map(Node::text_content)
                .collect::<Vec<_>>()
                .join(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element() {
        let node = Node::element("BlockQuote");
        assert!(node.is_element());
        assert_eq!(node.tag_name(), Some("blockquote"));
    }

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert!(node.is_text());
        assert_eq!(node.tag_name(), None);
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_attributes() {
        let node = Node::element_with_attrs("a", vec![("href", "https://example.com"), ("title", "Example")]);
        assert_eq!(node.attr("href"), Some("https://example.com"));
        assert_eq!(node.attr("title"), Some("Example"));
        assert_eq!(node.attr("class"), None);
    }

    #[test]
    fn test_text_ignores_children() {
        let mut node = Node::text("leaf");
        node.add_child(Node::text("ignored"));
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_text_content() {
        let p = Node::element("p")
            .with_child(Node::text("Hello "))
            .with_child(Node::element("strong").with_child(Node::text("World")));

        assert_eq!(p.children().len(), 2);
        assert_eq!(p.text_content(), "Hello World");
    }

    #[test]
    fn test_is_list() {
        assert!(tags::is_list("ul"));
        assert!(tags::is_list("ol"));
        assert!(!tags::is_list("li"));
    }
}

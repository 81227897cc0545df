//! # markdelta
//!
//! Convert Markdown trees to Quill-style rich-text deltas.
//!
//! The converter walks an element/text tree in document order and emits a
//! flat list of insert operations: text runs carrying inline attributes
//! (`bold`, `italic`, `link`, ...), line terminators carrying block attributes
//! (`header`, `list`, `blockquote`, ...) and embeds (`hr`, `image`).
//!
//! ## Design
//!
//! The converter accepts a plain markup [`Node`] tree rather than a string.
//! This design allows:
//!
//! - **Parser agnostic**: Any Markdown parser can build the Node structure
//! - **Extensible**: Custom tags map to custom attributes and embeds
//! - **Smaller binaries**: The bundled parser is behind the `markdown` feature
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use markdelta::{MarkdownToDelta, Node};
//!
//! let service = MarkdownToDelta::new();
//!
//! let h1 = Node::element("h1").with_child(Node::text("Title"));
//!
//! let delta = service.convert(&[h1]).unwrap();
//! assert_eq!(
//!     delta.to_json().unwrap(),
//!     r#"[{"insert":"Title"},{"insert":"\n","attributes":{"header":1}}]"#
//! );
//! ```
//!
//! ## Example (Markdown string)
//!
//! ```rust
//! use markdelta::MarkdownToDelta;
//!
//! let service = MarkdownToDelta::new();
//! let delta = service.convert_markdown("**bold** text").unwrap();
//! assert_eq!(
//!     delta.to_json().unwrap(),
//!     r#"[{"insert":"bold","attributes":{"bold":true}},{"insert":" text\n"}]"#
//! );
//! ```

mod context;
mod convert;
pub mod mappings;
#[cfg(feature = "markdown")]
pub mod markdown;
pub mod node;
mod service;
pub mod text;

#[cfg(feature = "markdown")]
pub use markdown::parse_markdown;
pub use mappings::{AttributeConvertor, EmbedConvertor, MappingKind, Mappings};
pub use markdelta_core::{
    Attribute, AttributeScope, AttributeValue, Attributes, Delta, Embed, Insert, Operation,
};
pub use node::{AttributeBag, Element, Node};
pub use service::{DeltaOptions, MarkdownToDelta};

/// Error type for markdelta operations
#[derive(Debug, thiserror::Error)]
pub enum DeltaError {
    /// A tag was converted without a mapping in the requested table
    #[error("No {kind} mapping for element <{tag}>")]
    UnmappedConversion { kind: MappingKind, tag: String },
}

pub type Result<T> = std::result::Result<T, DeltaError>;

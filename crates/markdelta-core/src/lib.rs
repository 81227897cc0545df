//! markdelta-core - rich-text delta data model
//!
//! This crate provides the operation types produced by the `markdelta`
//! converter: formatting attributes, embedded values and the [`Delta`]
//! sequence itself, together with its JSON wire form.
//!
//! # Architecture
//!
//! ```text
//! Markdown String ──parse──▶ ┌─────────────┐
//!                            │             │
//!                            │ Markup Tree │ ──convert──▶ Delta ──▶ JSON
//! Custom Node Tree ─────────▶│             │
//!                            └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use markdelta_core::{Attribute, Attributes, Delta};
//!
//! let mut delta = Delta::new();
//! delta.insert_text("Title", Attributes::new());
//!
//! let mut line = Attributes::new();
//! let (key, value) = Attribute::header(1).into_entry();
//! line.insert(key, value);
//! delta.insert_text("\n", line);
//!
//! assert_eq!(
//!     delta.to_json().unwrap(),
//!     r#"[{"insert":"Title"},{"insert":"\n","attributes":{"header":1}}]"#
//! );
//! ```

mod attribute;
mod delta;
mod embed;

pub use attribute::{Attribute, AttributeScope, AttributeValue, Attributes, EXCLUSIVE_BLOCK_KEYS};
pub use delta::{Delta, Insert, Operation, OBJECT_REPLACEMENT};
pub use embed::Embed;

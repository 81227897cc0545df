//! Convertor types for tag mappings.

use markdelta_core::{Attribute, Embed};

use crate::node::AttributeBag;

/// Type alias for attribute conversion functions
pub type AttributeFn = Box<dyn Fn(&AttributeBag) -> Attribute + Send + Sync>;

/// Type alias for embed conversion functions
pub type EmbedFn = Box<dyn Fn(&AttributeBag) -> Embed + Send + Sync>;

/// Builds a formatting attribute from an element's attribute bag
pub struct AttributeConvertor {
    convert: AttributeFn,
}

impl AttributeConvertor {
    pub fn new<F>(convert: F) -> Self
    where
        F: Fn(&AttributeBag) -> Attribute + Send + Sync + 'static,
    {
        Self {
            convert: Box::new(convert),
        }
    }

    /// Always produce the same attribute, whatever the element carries
    pub fn constant(attribute: Attribute) -> Self {
        Self::new(move |_| attribute.clone())
    }

    pub fn convert(&self, attributes: &AttributeBag) -> Attribute {
        (self.convert)(attributes)
    }
}

/// Builds an embedded value from an element's attribute bag
pub struct EmbedConvertor {
    convert: EmbedFn,
}

impl EmbedConvertor {
    pub fn new<F>(convert: F) -> Self
    where
        F: Fn(&AttributeBag) -> Embed + Send + Sync + 'static,
    {
        Self {
            convert: Box::new(convert),
        }
    }

    pub fn convert(&self, attributes: &AttributeBag) -> Embed {
        (self.convert)(attributes)
    }
}

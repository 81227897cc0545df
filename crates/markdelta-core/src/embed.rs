//! Embedded values
//!
//! An embed is a non-text unit of the delta, serialized as a single-entry
//! object such as `{"hr": true}` or `{"image": "cat.png"}`.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// An embedded object inserted as one unit
#[derive(Debug, Clone, PartialEq)]
pub struct Embed {
    kind: String,
    data: Value,
}

impl Embed {
    pub fn new(kind: &str, data: impl Into<Value>) -> Self {
        Self {
            kind: kind.to_string(),
            data: data.into(),
        }
    }

    /// Horizontal rule divider
    pub fn horizontal_rule() -> Self {
        Self::new("hr", true)
    }

    /// Image with the given source
    pub fn image(src: &str) -> Self {
        Self::new("image", src)
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn data(&self) -> &Value {
        &self.data
    }
}

impl Serialize for Embed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.kind, &self.data)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_rule_json() {
        let json = serde_json::to_string(&Embed::horizontal_rule()).unwrap();
        assert_eq!(json, r#"{"hr":true}"#);
    }

    #[test]
    fn test_image_json() {
        let json = serde_json::to_string(&Embed::image("cat.png")).unwrap();
        assert_eq!(json, r#"{"image":"cat.png"}"#);
    }

    #[test]
    fn test_structured_data() {
        let embed = Embed::new("video", serde_json::json!({ "src": "a.mp4", "autoplay": false }));
        assert_eq!(embed.kind(), "video");
        assert_eq!(embed.data()["src"], "a.mp4");
    }
}

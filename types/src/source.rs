//! Live stream source definitions.

use serde::{Deserialize, Serialize};

/// Identifier of a live stream source (a YouTube channel ID).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(garde::Validate))]
#[serde(transparent)]
pub struct SourceId(#[cfg_attr(feature = "validation", garde(length(min = 1)))] String);

impl SourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A configured live stream.
///
/// Sources are created once from static configuration and never change
/// during a session. Identity is the `id`; two sources with the same id
/// are the same source regardless of display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(garde::Validate))]
pub struct Source {
    /// Channel identifier handed to the embedded player
    #[cfg_attr(feature = "validation", garde(dive))]
    pub id: SourceId,
    /// Human-readable name shown in the UI
    #[cfg_attr(feature = "validation", garde(length(min = 1)))]
    pub name: String,
}

impl Source {
    pub fn new(id: impl Into<SourceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_deserializes_from_config_shape() {
        let source: Source =
            serde_json::from_str(r#"{"id": "UCJTq8YQXj-2_BNgwis4SGsg", "name": "RonnyBons"}"#)
                .unwrap();
        assert_eq!(source.id.as_str(), "UCJTq8YQXj-2_BNgwis4SGsg");
        assert_eq!(source.name, "RonnyBons");
    }

    #[test]
    fn source_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&SourceId::new("UCabc")).unwrap();
        assert_eq!(json, "\"UCabc\"");
    }

    #[test]
    fn blank_id_is_empty() {
        assert!(SourceId::new("   ").is_empty());
        assert!(!SourceId::new("UC1").is_empty());
    }

    #[cfg(feature = "validation")]
    #[test]
    fn validation_rejects_empty_name() {
        use garde::Validate;

        assert!(Source::new("UC1", "Rey").validate().is_ok());
        assert!(Source::new("UC1", "").validate().is_err());
        assert!(Source::new("", "Rey").validate().is_err());
    }
}

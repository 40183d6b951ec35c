//! Loading and saving view-hierarchy dumps.
//!
//! A dump is the JSON form of a [`ViewNode`] tree: fixtures checked into a
//! repo, output captured from a live hierarchy, or input handed to the
//! `viewfinder` CLI. Bound actions are closures and have no JSON form, so
//! a round-tripped tree always comes back with `action: None`.

use std::path::Path;

use thiserror::Error;

use crate::view::ViewNode;

/// Errors from reading or writing hierarchy dumps.
#[derive(Error, Debug)]
pub enum HierarchyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Loads a hierarchy dump from a JSON file.
pub fn load(path: impl AsRef<Path>) -> Result<ViewNode, HierarchyError> {
    let contents = std::fs::read_to_string(path)?;
    from_json(&contents)
}

/// Parses a hierarchy dump from a JSON string.
pub fn from_json(json: &str) -> Result<ViewNode, HierarchyError> {
    Ok(serde_json::from_str(json)?)
}

/// Serializes a hierarchy as pretty-printed JSON.
pub fn to_json(root: &ViewNode) -> Result<String, HierarchyError> {
    Ok(serde_json::to_string_pretty(root)?)
}

/// Writes a hierarchy dump to a JSON file.
pub fn save(root: &ViewNode, path: impl AsRef<Path>) -> Result<(), HierarchyError> {
    let json = to_json(root)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{ButtonBuilder, ViewBuilder};
    use crate::query::ButtonQueries;
    use crate::view::{ControlState, Image};

    #[test]
    fn dump_roundtrip_preserves_queryable_attributes() {
        let tree = ViewBuilder::new()
            .with_subview(
                ButtonBuilder::new()
                    .with_title_text("Login")
                    .with_image(Image::named("cat", vec![1, 2, 3]))
                    .with_state(ControlState::Disabled)
                    .build(),
            )
            .build();

        let json = to_json(&tree).unwrap();
        let loaded = from_json(&json).unwrap();

        assert!(loaded.has_button_with_exact_text("Login"));
        assert!(loaded.has_button_with_image(&Image::from_bytes(vec![1, 2, 3])));
        assert_eq!(loaded.find_buttons_with_state(ControlState::Disabled).len(), 1);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = from_json("{\"kind\": \"button\"").unwrap_err();
        assert!(matches!(err, HierarchyError::JsonParse(_)));
    }

    #[test]
    fn unknown_kind_tag_is_rejected() {
        let err = from_json("{\"kind\": \"slider\"}").unwrap_err();
        assert!(matches!(err, HierarchyError::JsonParse(_)));
    }

    #[test]
    fn load_missing_file_is_an_io_error() {
        let err = load("/nonexistent/dump.json").unwrap_err();
        assert!(matches!(err, HierarchyError::Io(_)));
    }
}

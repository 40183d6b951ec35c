//! Shared view-hierarchy types.
//!
//! This module defines the core data structures representing a UI view
//! hierarchy. Nodes form a tree via their `children` fields and are either
//! buttons or generic container views. The query layer treats the tree as
//! read-only; the only side effect anywhere in the crate is invoking a
//! button's bound [`TapAction`].

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A node in a view hierarchy.
///
/// Serialized with a `kind` tag discriminator so hierarchy dumps remain
/// self-describing JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ViewNode {
    /// A tappable button with optional title, image, and bound action.
    Button(Button),
    /// A generic container view with no queryable attributes of its own.
    Container(Container),
}

impl ViewNode {
    /// The node's child views, in their stored (traversal) order.
    pub fn children(&self) -> &[ViewNode] {
        match self {
            ViewNode::Button(button) => &button.children,
            ViewNode::Container(container) => &container.children,
        }
    }

    /// Returns the button attributes if this node is a button.
    pub fn as_button(&self) -> Option<&Button> {
        match self {
            ViewNode::Button(button) => Some(button),
            ViewNode::Container(_) => None,
        }
    }
}

/// A generic container view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Container {
    /// Child views nested within this container.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ViewNode>,
}

/// A button node.
///
/// Carries the attributes the query layer matches against: title text,
/// the image configured for its normal presentation, and its current
/// interaction state. A button may also hold a bound action, invoked by
/// [`tap_button_with_exact_text`](crate::query::ButtonQueries::tap_button_with_exact_text),
/// and arbitrary child views (controls can host subviews).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Button {
    /// The button's title text, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The image configured for the button's normal presentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,

    /// The button's current interaction state.
    #[serde(default)]
    pub state: ControlState,

    /// The action bound to the button, if any.
    ///
    /// Closures are not representable in a hierarchy dump: this field is
    /// skipped on serialization and deserializes as `None`.
    #[serde(skip)]
    pub action: Option<TapAction>,

    /// Child views nested within this button.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ViewNode>,
}

/// A view controller owning a root view.
///
/// The usual entry point for queries against a screen's worth of hierarchy:
/// searching a controller searches its root view and everything beneath it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewController {
    /// The controller's root view.
    pub view: ViewNode,
}

impl Default for ViewNode {
    fn default() -> Self {
        ViewNode::Container(Container::default())
    }
}

/// The interaction state of a button.
///
/// A closed set mirroring the control states a UI framework reports. States
/// are plain tags, not a bitmask: no state implies or subsumes another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlState {
    #[default]
    Normal,
    Highlighted,
    Disabled,
    Selected,
    Focused,
    Application,
    Reserved,
}

impl ControlState {
    /// Short lowercase name, matching the dump serialization.
    pub fn name(&self) -> &'static str {
        match self {
            ControlState::Normal => "normal",
            ControlState::Highlighted => "highlighted",
            ControlState::Disabled => "disabled",
            ControlState::Selected => "selected",
            ControlState::Focused => "focused",
            ControlState::Application => "application",
            ControlState::Reserved => "reserved",
        }
    }
}

/// An image asset compared by content.
///
/// Two images are equal if and only if their underlying content bytes are
/// equal. The optional asset name is display metadata and takes no part in
/// equality. Content is serialized as base64 in hierarchy dumps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    /// Asset name, for display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Raw image content.
    ///
    /// Wrapped in `Arc` so fixture builders and query results can share
    /// one copy of the bytes.
    #[serde(with = "base64_bytes")]
    pub data: Arc<Vec<u8>>,
}

impl Image {
    /// Creates an unnamed image from raw content bytes.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self {
            name: None,
            data: Arc::new(data),
        }
    }

    /// Creates a named image from raw content bytes.
    pub fn named(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: Some(name.into()),
            data: Arc::new(data),
        }
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for Image {}

/// A zero-argument action bound to a button.
///
/// Cloning shares the underlying closure. Invoking it is the only side
/// effect the query layer ever performs.
#[derive(Clone)]
pub struct TapAction(Arc<dyn Fn() + Send + Sync>);

impl TapAction {
    /// Wraps a closure as a bound action.
    pub fn new(action: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(action))
    }

    /// Invokes the bound action synchronously on the calling thread.
    pub fn invoke(&self) {
        (self.0)()
    }
}

impl fmt::Debug for TapAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TapAction")
    }
}

mod base64_bytes {
    use std::sync::Arc;

    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &Arc<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(data.as_slice()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Arc<Vec<u8>>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(&encoded)
            .map(Arc::new)
            .map_err(serde::de::Error::custom)
    }
}

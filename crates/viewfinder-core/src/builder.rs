//! Fluent builders for assembling view-hierarchy fixtures.
//!
//! These exist for tests: production hierarchies come from the host UI
//! framework (or a dump file), but the query layer's own tests and any
//! consumer's fixtures need a cheap way to stand up trees. Builders are
//! plain consuming value builders; `build()` hands back an owned node.
//!
//! ```
//! use viewfinder_core::builder::{ButtonBuilder, ViewBuilder};
//! use viewfinder_core::view::ControlState;
//!
//! let tree = ViewBuilder::new()
//!     .with_subview(
//!         ButtonBuilder::new()
//!             .with_title_text("Login")
//!             .with_state(ControlState::Highlighted)
//!             .build(),
//!     )
//!     .build();
//! ```

use crate::view::{Button, Container, ControlState, Image, TapAction, ViewController, ViewNode};

/// Builds a button node.
///
/// Defaults: no title, no image, [`ControlState::Normal`], no bound action,
/// no subviews.
#[derive(Debug, Default)]
pub struct ButtonBuilder {
    button: Button,
}

impl ButtonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the button's title text.
    pub fn with_title_text(mut self, text: impl Into<String>) -> Self {
        self.button.title = Some(text.into());
        self
    }

    /// Sets the image for the button's normal presentation.
    pub fn with_image(mut self, image: Image) -> Self {
        self.button.image = Some(image);
        self
    }

    /// Sets the button's interaction state.
    pub fn with_state(mut self, state: ControlState) -> Self {
        self.button.state = state;
        self
    }

    /// Binds an action to the button.
    pub fn with_action(mut self, action: TapAction) -> Self {
        self.button.action = Some(action);
        self
    }

    /// Appends a subview to the button.
    pub fn with_subview(mut self, subview: ViewNode) -> Self {
        self.button.children.push(subview);
        self
    }

    pub fn build(self) -> ViewNode {
        ViewNode::Button(self.button)
    }
}

/// Builds a generic container view.
#[derive(Debug, Default)]
pub struct ViewBuilder {
    container: Container,
}

impl ViewBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a subview.
    pub fn with_subview(mut self, subview: ViewNode) -> Self {
        self.container.children.push(subview);
        self
    }

    /// Appends several subviews, preserving their order.
    pub fn with_subviews(mut self, subviews: impl IntoIterator<Item = ViewNode>) -> Self {
        self.container.children.extend(subviews);
        self
    }

    pub fn build(self) -> ViewNode {
        ViewNode::Container(self.container)
    }
}

/// Builds a view controller whose root view holds the given subviews.
#[derive(Debug, Default)]
pub struct ViewControllerBuilder {
    root: ViewBuilder,
}

impl ViewControllerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a subview to the controller's root view.
    pub fn with_subview(mut self, subview: ViewNode) -> Self {
        self.root = self.root.with_subview(subview);
        self
    }

    /// Appends several subviews to the controller's root view.
    pub fn with_subviews(mut self, subviews: impl IntoIterator<Item = ViewNode>) -> Self {
        self.root = self.root.with_subviews(subviews);
        self
    }

    pub fn build(self) -> ViewController {
        ViewController {
            view: self.root.build(),
        }
    }
}

//! The public button-query surface.
//!
//! [`ButtonQueries`] layers the criterion matchers over the search engine
//! behind one required accessor, so the same query methods work on a bare
//! [`ViewNode`], a [`ViewController`], or a slice of root views. All
//! queries are synchronous reads; only
//! [`tap_button_with_exact_text`](ButtonQueries::tap_button_with_exact_text)
//! has a side effect, and that effect is the matched button's own bound
//! action.
//!
//! # Example
//!
//! ```
//! use viewfinder_core::builder::{ButtonBuilder, ViewControllerBuilder};
//! use viewfinder_core::query::ButtonQueries;
//!
//! let controller = ViewControllerBuilder::new()
//!     .with_subview(ButtonBuilder::new().with_title_text("Login").build())
//!     .build();
//!
//! assert!(controller.has_button_with_exact_text("Login"));
//! assert!(controller.find_button_with_exact_text("Sign Up").is_none());
//! ```

use tracing::debug;

use crate::criteria::ButtonCriterion;
use crate::search;
use crate::view::{Button, ControlState, Image, ViewController, ViewNode};

/// Button queries over a view hierarchy.
///
/// Implementors supply [`search_roots`](ButtonQueries::search_roots); every
/// query method is a default built on it. Each root is searched in full,
/// itself included, in strict pre-order; roots are taken in slice order.
pub trait ButtonQueries {
    /// The root nodes a query descends from.
    fn search_roots(&self) -> &[ViewNode];

    /// Finds the first button whose title equals `text` exactly.
    fn find_button_with_exact_text(&self, text: &str) -> Option<&Button> {
        self.find_button(&ButtonCriterion::ExactText(text.to_string()))
    }

    /// Finds the first button whose normal-presentation image has the same
    /// content as `image`.
    fn find_button_with_image(&self, image: &Image) -> Option<&Button> {
        self.find_button(&ButtonCriterion::Image(image.clone()))
    }

    /// Whether any button's title equals `text` exactly.
    fn has_button_with_exact_text(&self, text: &str) -> bool {
        self.find_button_with_exact_text(text).is_some()
    }

    /// Whether any button carries an image with the same content as `image`.
    fn has_button_with_image(&self, image: &Image) -> bool {
        self.find_button_with_image(image).is_some()
    }

    /// Every button whose interaction state is exactly `state`, in
    /// traversal order. Empty, never an error, when nothing matches.
    fn find_buttons_with_state(&self, state: ControlState) -> Vec<&Button> {
        let criterion = ButtonCriterion::State(state);
        let mut matches = Vec::new();
        for root in self.search_roots() {
            matches.extend(search::find_all(root, |button| criterion.matches(button)));
        }
        matches
    }

    /// Every button in the hierarchy, in traversal order.
    fn buttons(&self) -> Vec<&Button> {
        let mut all = Vec::new();
        for root in self.search_roots() {
            all.extend(search::find_all(root, |_| true));
        }
        all
    }

    /// Finds the first button satisfying an arbitrary criterion.
    fn find_button(&self, criterion: &ButtonCriterion) -> Option<&Button> {
        self.search_roots()
            .iter()
            .find_map(|root| search::find_first(root, |button| criterion.matches(button)))
    }

    /// Taps the first button whose title equals `text` exactly.
    ///
    /// Invokes the button's bound action synchronously, exactly once, on
    /// the calling thread. A miss (no matching button, or a match with no
    /// bound action) is a silent no-op, not an error; the return value
    /// reports whether an action ran.
    fn tap_button_with_exact_text(&self, text: &str) -> bool {
        match self.find_button_with_exact_text(text) {
            Some(button) => match &button.action {
                Some(action) => {
                    debug!(text, "tapping button");
                    action.invoke();
                    true
                }
                None => {
                    debug!(text, "matched button has no bound action, tap skipped");
                    false
                }
            },
            None => {
                debug!(text, "no button matched, tap skipped");
                false
            }
        }
    }
}

impl ButtonQueries for ViewNode {
    fn search_roots(&self) -> &[ViewNode] {
        std::slice::from_ref(self)
    }
}

impl ButtonQueries for ViewController {
    fn search_roots(&self) -> &[ViewNode] {
        std::slice::from_ref(&self.view)
    }
}

impl ButtonQueries for [ViewNode] {
    fn search_roots(&self) -> &[ViewNode] {
        self
    }
}

//! Match criteria for button queries.
//!
//! A [`ButtonCriterion`] is a self-contained description of "which button",
//! usable directly as a search predicate. The three criteria mirror the
//! attributes a button exposes: exact title text, normal-presentation
//! image, and interaction state.

use crate::view::{Button, ControlState, Image};

/// A criterion a button either satisfies or does not.
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonCriterion {
    /// Case-sensitive, whole-string equality against the button's title.
    /// A button with no title never matches.
    ExactText(String),

    /// Content equality against the image configured for the button's
    /// normal presentation. A button with no image never matches, and two
    /// images with distinct content never match even when both are present.
    Image(Image),

    /// Exact equality against the button's interaction state. States are
    /// plain tags: no state implies or subsumes another.
    State(ControlState),
}

impl ButtonCriterion {
    /// Whether `button` satisfies this criterion.
    pub fn matches(&self, button: &Button) -> bool {
        match self {
            ButtonCriterion::ExactText(text) => button.title.as_deref() == Some(text.as_str()),
            ButtonCriterion::Image(image) => button.image.as_ref() == Some(image),
            ButtonCriterion::State(state) => button.state == *state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(title: Option<&str>, image: Option<Image>, state: ControlState) -> Button {
        Button {
            title: title.map(str::to_string),
            image,
            state,
            ..Default::default()
        }
    }

    #[test]
    fn exact_text_is_case_sensitive_whole_string() {
        let login = button(Some("Login"), None, ControlState::Normal);
        assert!(ButtonCriterion::ExactText("Login".into()).matches(&login));
        assert!(!ButtonCriterion::ExactText("login".into()).matches(&login));
        assert!(!ButtonCriterion::ExactText("Log".into()).matches(&login));
        assert!(!ButtonCriterion::ExactText("Login ".into()).matches(&login));
    }

    #[test]
    fn untitled_button_matches_no_text() {
        let untitled = button(None, None, ControlState::Normal);
        assert!(!ButtonCriterion::ExactText(String::new()).matches(&untitled));
        assert!(!ButtonCriterion::ExactText("Login".into()).matches(&untitled));
    }

    #[test]
    fn image_matches_on_content_equality() {
        let cat = Image::named("cat", vec![1, 2, 3]);
        let foliage = Image::named("foliage", vec![7, 8, 9]);
        let with_cat = button(None, Some(cat.clone()), ControlState::Normal);

        assert!(ButtonCriterion::Image(cat).matches(&with_cat));
        assert!(!ButtonCriterion::Image(foliage).matches(&with_cat));
    }

    #[test]
    fn imageless_button_matches_no_image() {
        let bare = button(Some("Login"), None, ControlState::Normal);
        let cat = Image::named("cat", vec![1, 2, 3]);
        assert!(!ButtonCriterion::Image(cat).matches(&bare));
    }

    #[test]
    fn state_matches_exactly() {
        let disabled = button(None, None, ControlState::Disabled);
        assert!(ButtonCriterion::State(ControlState::Disabled).matches(&disabled));
        assert!(!ButtonCriterion::State(ControlState::Highlighted).matches(&disabled));
        assert!(!ButtonCriterion::State(ControlState::Normal).matches(&disabled));
    }
}

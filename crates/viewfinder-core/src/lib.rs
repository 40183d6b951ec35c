//! # viewfinder-core
//!
//! Core library for querying UI view hierarchies.
//!
//! This crate provides a small, synchronous query engine over a tree of
//! view nodes: locate buttons by exact title text, by image content, or by
//! interaction state, and simulate a tap by invoking a matched button's
//! bound action. Trees come from the host UI framework, from a JSON dump,
//! or from the fixture builders; queries never mutate them.
//!
//! ## Modules
//!
//! - [`view`] - View-hierarchy data model: nodes, buttons, states, images, actions
//! - [`search`] - Depth-first pre-order traversal engine
//! - [`criteria`] - Button match criteria (exact text, image, state)
//! - [`query`] - The public [`ButtonQueries`](query::ButtonQueries) trait
//! - [`builder`] - Fluent builders for test fixtures
//! - [`hierarchy`] - JSON dump load/save
//!
//! ## Example
//!
//! ```
//! use viewfinder_core::builder::{ButtonBuilder, ViewBuilder, ViewControllerBuilder};
//! use viewfinder_core::query::ButtonQueries;
//! use viewfinder_core::view::{ControlState, TapAction};
//!
//! let controller = ViewControllerBuilder::new()
//!     .with_subview(
//!         ViewBuilder::new()
//!             .with_subview(
//!                 ButtonBuilder::new()
//!                     .with_title_text("Login")
//!                     .with_action(TapAction::new(|| println!("logging in")))
//!                     .build(),
//!             )
//!             .build(),
//!     )
//!     .build();
//!
//! // Buttons are found at any nesting depth, in pre-order.
//! assert!(controller.has_button_with_exact_text("Login"));
//! assert!(controller.find_buttons_with_state(ControlState::Selected).is_empty());
//!
//! // Tapping invokes the bound action exactly once; misses are no-ops.
//! assert!(controller.tap_button_with_exact_text("Login"));
//! assert!(!controller.tap_button_with_exact_text("Sign Up"));
//! ```

pub mod builder;
pub mod criteria;
pub mod hierarchy;
pub mod query;
pub mod search;
pub mod view;

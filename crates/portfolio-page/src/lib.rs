//! Page controller for the portfolio site.
//!
//! All interactive UI state lives in a single [`PageController`]: mobile
//! menu visibility, scroll-driven active-link tracking, the poster modal
//! with its history integration, and the contact form lifecycle.
//!
//! The controller is pure and synchronous: the embedder translates browser
//! events into [`PageEvent`]s, feeds them to
//! [`PageController::handle_event`], and performs the returned
//! [`PageCommand`]s against the DOM. The one asynchronous operation, the
//! contact POST, is carried out by [`api::ApiClient`] and fed back in as a
//! [`PageEvent::SubmissionCompleted`].

pub mod api;
pub mod controller;
pub mod events;
pub mod scrollspy;
pub mod state;

pub use api::ApiClient;
pub use controller::PageController;
pub use events::{FormField, PageCommand, PageEvent};
pub use scrollspy::{ObserverConfig, SectionObservation};
pub use state::{
    NavigationState, Poster, PosterModalState, PosterRegistry, SectionId, StatusStyle,
    SubmissionResult, SubmitStatus,
};

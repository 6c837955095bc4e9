//! Events and commands
//!
//! The embedder emits [`PageEvent`]s for user intent and browser callbacks;
//! the controller answers with [`PageCommand`]s, the side effects to
//! perform against the DOM. This separates "what the user did" from "what
//! to do about it" and keeps every transition testable.

use portfolio_types::ContactSubmission;

use crate::scrollspy::SectionObservation;
use crate::state::{SectionId, StatusStyle, SubmissionResult};

/// Form fields that can receive focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

/// User intent and browser callbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------
    /// Mobile menu toggle control was clicked.
    MenuToggleClicked,

    /// An in-menu anchor was activated; the menu always closes.
    NavLinkActivated(SectionId),

    /// A batch of intersection observations was delivered.
    SectionsObserved(Vec<SectionObservation>),

    // -------------------------------------------------------------------------
    // Poster modal
    // -------------------------------------------------------------------------
    /// The poster link in the publications section was activated.
    PosterLinkActivated,

    /// Escape was pressed while the scoped key listener is installed.
    EscapePressed,

    /// The modal backdrop itself (not its content) was clicked.
    BackdropClicked,

    /// The modal's close control was activated.
    CloseButtonClicked,

    /// Browser back/forward landed on `hash`.
    HistoryChanged { hash: String },

    /// First load finished with the location at `hash`; `year` feeds the
    /// footer.
    Loaded { hash: String, year: i32 },

    // -------------------------------------------------------------------------
    // Contact form
    // -------------------------------------------------------------------------
    /// The form was submitted with these raw field values.
    SubmitForm {
        name: String,
        email: String,
        message: String,
    },

    /// The in-flight request finished.
    SubmissionCompleted(SubmissionResult),

    /// The "send another" affordance in the success status was activated.
    SendAnotherActivated,
}

/// Side effects the embedder performs against the DOM.
#[derive(Debug, Clone, PartialEq)]
pub enum PageCommand {
    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------
    /// Show or hide the mobile menu.
    SetMenuVisible(bool),

    /// Mirror the menu state onto the toggle's `aria-expanded` attribute.
    SetAriaExpanded(bool),

    /// Mark this nav link active and clear the marking from all others.
    SetActiveLink(SectionId),

    // -------------------------------------------------------------------------
    // Poster modal
    // -------------------------------------------------------------------------
    /// Show the modal with the given asset, title, and caption.
    ShowPoster {
        pdf_path: String,
        title: String,
        caption: String,
    },

    /// Hide the modal.
    HidePoster,

    /// Clear the embedded frame's source to stop any in-flight load.
    ClearPosterFrame,

    /// Suppress background page scrolling.
    LockScroll,

    /// Restore background page scrolling.
    UnlockScroll,

    /// Push a history entry for `hash`; `poster` is the marker flag that
    /// tags the entry as a modal-open state.
    PushHistory { hash: String, poster: bool },

    /// Install the global escape-key listener. Emitted only on
    /// closed→open; paired with [`PageCommand::RemoveEscapeListener`].
    InstallEscapeListener,

    /// Remove the global escape-key listener. Emitted exactly once per
    /// open→closed transition.
    RemoveEscapeListener,

    // -------------------------------------------------------------------------
    // Contact form
    // -------------------------------------------------------------------------
    /// Render status text with the given semantic styling.
    RenderStatus {
        text: String,
        style: StatusStyle,
        /// Append the "send another" affordance after the text.
        offer_send_another: bool,
    },

    /// Clear the status region.
    ClearStatus,

    /// Issue the one contact request with this (already trimmed) payload.
    SendContact(ContactSubmission),

    /// Enable or disable the submit control (double-submit guard).
    SetSubmitEnabled(bool),

    /// Reset all form fields to empty.
    ResetForm,

    /// Move input focus to a form field.
    FocusField(FormField),

    // -------------------------------------------------------------------------
    // Page chrome
    // -------------------------------------------------------------------------
    /// Give the status region `role="status"` and `aria-live="polite"`.
    MarkStatusRegionLive,

    /// Write the current year into the footer.
    SetFooterYear(i32),
}

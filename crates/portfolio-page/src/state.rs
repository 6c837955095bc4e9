//! Page state
//!
//! Split into navigation state (menu + active section), poster modal state,
//! and the contact form submission lifecycle. Using enums for the modal and
//! the submission status prevents impossible states like a half-open modal
//! or two submissions in flight.

// =============================================================================
// SECTIONS
// =============================================================================

/// The fixed, ordered set of page sections tracked by the scroll-spy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Education,
    Skills,
    Research,
    Teaching,
    Publications,
    Contact,
}

impl SectionId {
    /// All sections in page order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::Education,
        SectionId::Skills,
        SectionId::Research,
        SectionId::Teaching,
        SectionId::Publications,
        SectionId::Contact,
    ];

    /// The element id the section's anchor links point at.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Education => "education",
            SectionId::Skills => "skills",
            SectionId::Research => "research",
            SectionId::Teaching => "teaching",
            SectionId::Publications => "publications",
            SectionId::Contact => "contact",
        }
    }

    /// Location hash for this section, e.g. `#publications`.
    pub fn hash(&self) -> String {
        format!("#{}", self.as_str())
    }

    /// Parse an element id back into a section.
    pub fn from_id(id: &str) -> Option<SectionId> {
        SectionId::ALL.iter().copied().find(|s| s.as_str() == id)
    }
}

/// Navigation state: mobile menu visibility and the currently highlighted
/// nav link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Whether the mobile menu is expanded.
    pub menu_open: bool,
    /// Section whose nav link carries the active marking, if any.
    pub active_section: Option<SectionId>,
}

// =============================================================================
// POSTER MODAL
// =============================================================================

/// A poster that can be shown in the viewer modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poster {
    /// History hash token that represents "this poster is open".
    pub hash: String,
    /// Path of the embedded PDF asset.
    pub pdf_path: String,
    /// Title shown in the modal header.
    pub title: String,
    /// Venue the poster was presented at; rendered via [`Poster::caption`].
    pub venue: String,
}

impl Poster {
    /// Caption shown under the poster, fixed form.
    pub fn caption(&self) -> String {
        format!("Poster presented at {}", self.venue)
    }
}

/// Lookup of posters keyed by their hash token.
///
/// The page currently registers a single poster, but open/deep-link logic
/// goes through the registry rather than hard-coding the asset.
#[derive(Debug, Clone)]
pub struct PosterRegistry {
    posters: Vec<Poster>,
}

impl PosterRegistry {
    pub fn new(posters: Vec<Poster>) -> Self {
        Self { posters }
    }

    /// Find a poster by its full hash token (including the leading `#`).
    pub fn by_hash(&self, hash: &str) -> Option<&Poster> {
        self.posters.iter().find(|p| p.hash == hash)
    }

    /// First registered poster; the one the publications link opens.
    pub fn primary(&self) -> Option<&Poster> {
        self.posters.first()
    }
}

impl Default for PosterRegistry {
    fn default() -> Self {
        Self::new(vec![Poster {
            hash: "#poster".to_string(),
            pdf_path: "assets/posters/multi-robot-systems.pdf".to_string(),
            title: "Advancements in Multi-Robot Systems".to_string(),
            venue: "the Brown Graduate Research Symposium".to_string(),
        }])
    }
}

/// Poster modal state. Invariant: after any settled transition, `Open`
/// agrees with the poster hash being the current history entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PosterModalState {
    /// No modal is open.
    #[default]
    Closed,
    /// Modal is showing the poster registered under `hash`.
    Open { hash: String },
}

impl PosterModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, PosterModalState::Open { .. })
    }
}

// =============================================================================
// CONTACT FORM LIFECYCLE
// =============================================================================

/// Outcome of one submission attempt. Drives the status text and its
/// semantic styling; nothing else persists across attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// Relay accepted and delivered; `id` is the transport's identifier.
    Success { id: String },
    /// A required field was empty; no network call was made.
    ValidationFailure,
    /// The request failed, returned non-2xx, or carried a negative body.
    TransportFailure,
}

/// Lifecycle of the contact form's single async operation.
///
/// While `InProgress`, further submit events are rejected (the submit
/// control is disabled), so at most one request is ever in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    /// No submission running.
    #[default]
    Idle,
    /// Request is in flight.
    InProgress,
    /// Last attempt finished with this result.
    Finished(SubmissionResult),
}

impl SubmitStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, SubmitStatus::Idle)
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, SubmitStatus::InProgress)
    }
}

/// Semantic styling of the rendered status text. The embedder maps these
/// to the page's text color classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStyle {
    /// Red: validation or transport failure.
    Error,
    /// Gray: in-flight "Sending..." text.
    Neutral,
    /// Green: delivery confirmed.
    Success,
}

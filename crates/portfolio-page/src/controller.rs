//! The page controller: one instance owning all interactive UI state.
//!
//! Every browser event flows through [`PageController::handle_event`],
//! which mutates state and returns the side effects to perform. Handlers
//! run to completion; the only suspension point on the page is the contact
//! POST, which lives in [`crate::api`] and reports back as an event.
//!
//! The escape-key listener is scoped to the modal-visible lifetime: the
//! install command is emitted only on closed→open and the remove command
//! exactly once on open→closed, so the listener can never leak.

use portfolio_types::{ContactSubmission, MSG_FAILURE, MSG_SENDING, MSG_SUCCESS, MSG_VALIDATION};

use crate::events::{FormField, PageCommand, PageEvent};
use crate::scrollspy::{resolve_active, ObserverConfig, SectionObservation};
use crate::state::{
    NavigationState, PosterModalState, PosterRegistry, SectionId, StatusStyle, SubmissionResult,
    SubmitStatus,
};

/// Owns navigation, poster modal, and contact form state.
pub struct PageController {
    nav: NavigationState,
    modal: PosterModalState,
    submit: SubmitStatus,
    registry: PosterRegistry,
    observer: ObserverConfig,
}

impl Default for PageController {
    fn default() -> Self {
        Self::new()
    }
}

impl PageController {
    pub fn new() -> Self {
        Self {
            nav: NavigationState::default(),
            modal: PosterModalState::default(),
            submit: SubmitStatus::default(),
            registry: PosterRegistry::default(),
            observer: ObserverConfig::default(),
        }
    }

    /// Replace the poster registry (tests, alternate page variants).
    pub fn with_registry(mut self, registry: PosterRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn modal(&self) -> &PosterModalState {
        &self.modal
    }

    pub fn submit_status(&self) -> &SubmitStatus {
        &self.submit
    }

    /// Observer configuration the embedder should install the intersection
    /// observer with.
    pub fn observer_config(&self) -> ObserverConfig {
        self.observer
    }

    /// Process one event and return the side effects to perform, in order.
    pub fn handle_event(&mut self, event: PageEvent) -> Vec<PageCommand> {
        match event {
            PageEvent::MenuToggleClicked => self.toggle_menu(),
            PageEvent::NavLinkActivated(_) => self.close_menu(),
            PageEvent::SectionsObserved(observations) => self.track_sections(&observations),

            PageEvent::PosterLinkActivated => match self.registry.primary().cloned() {
                Some(poster) => self.open_poster(&poster.hash, true),
                None => Vec::new(),
            },
            PageEvent::EscapePressed
            | PageEvent::BackdropClicked
            | PageEvent::CloseButtonClicked => self.close_poster(true),
            PageEvent::HistoryChanged { hash } => self.sync_with_history(&hash),
            PageEvent::Loaded { hash, year } => self.initial_load(&hash, year),

            PageEvent::SubmitForm {
                name,
                email,
                message,
            } => self.submit_form(&name, &email, &message),
            PageEvent::SubmissionCompleted(result) => self.finish_submission(result),
            PageEvent::SendAnotherActivated => self.reset_after_success(),
        }
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    fn toggle_menu(&mut self) -> Vec<PageCommand> {
        self.nav.menu_open = !self.nav.menu_open;
        vec![
            PageCommand::SetMenuVisible(self.nav.menu_open),
            PageCommand::SetAriaExpanded(self.nav.menu_open),
        ]
    }

    /// Force the menu closed regardless of prior state. Idempotent: a
    /// closed menu stays closed and the attribute stays "false".
    fn close_menu(&mut self) -> Vec<PageCommand> {
        self.nav.menu_open = false;
        vec![
            PageCommand::SetMenuVisible(false),
            PageCommand::SetAriaExpanded(false),
        ]
    }

    fn track_sections(&mut self, observations: &[SectionObservation]) -> Vec<PageCommand> {
        match resolve_active(observations) {
            Some(section) => {
                self.nav.active_section = Some(section);
                vec![PageCommand::SetActiveLink(section)]
            }
            None => Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Poster modal
    // -------------------------------------------------------------------------

    /// Open the poster registered under `hash`. `push_history` is false for
    /// browser-driven transitions (back/forward, deep link), where the
    /// location already carries the poster hash.
    fn open_poster(&mut self, hash: &str, push_history: bool) -> Vec<PageCommand> {
        if self.modal.is_open() {
            return Vec::new();
        }
        let Some(poster) = self.registry.by_hash(hash) else {
            tracing::debug!(hash, "no poster registered for hash");
            return Vec::new();
        };

        self.modal = PosterModalState::Open {
            hash: poster.hash.clone(),
        };
        let mut commands = vec![
            PageCommand::ShowPoster {
                pdf_path: poster.pdf_path.clone(),
                title: poster.title.clone(),
                caption: poster.caption(),
            },
            PageCommand::LockScroll,
        ];
        if push_history {
            commands.push(PageCommand::PushHistory {
                hash: poster.hash.clone(),
                poster: true,
            });
        }
        commands.push(PageCommand::InstallEscapeListener);
        commands
    }

    /// Close the modal if open. `push_history` is false when the browser
    /// already navigated away (popstate); explicit closes push the
    /// publications entry so the location agrees with the modal state.
    fn close_poster(&mut self, push_history: bool) -> Vec<PageCommand> {
        if !self.modal.is_open() {
            return Vec::new();
        }
        self.modal = PosterModalState::Closed;

        let mut commands = vec![
            PageCommand::HidePoster,
            PageCommand::UnlockScroll,
            PageCommand::ClearPosterFrame,
        ];
        if push_history {
            commands.push(PageCommand::PushHistory {
                hash: SectionId::Publications.hash(),
                poster: false,
            });
        }
        commands.push(PageCommand::RemoveEscapeListener);
        commands
    }

    /// Back/forward navigation: make the modal agree with the location.
    fn sync_with_history(&mut self, hash: &str) -> Vec<PageCommand> {
        if self.registry.by_hash(hash).is_some() {
            self.open_poster(hash, false)
        } else {
            self.close_poster(false)
        }
    }

    /// First load: page chrome setup plus deep-link support.
    fn initial_load(&mut self, hash: &str, year: i32) -> Vec<PageCommand> {
        let mut commands = vec![
            PageCommand::MarkStatusRegionLive,
            PageCommand::SetFooterYear(year),
        ];
        if self.registry.by_hash(hash).is_some() {
            commands.extend(self.open_poster(hash, false));
        }
        commands
    }

    // -------------------------------------------------------------------------
    // Contact form
    // -------------------------------------------------------------------------

    fn submit_form(&mut self, name: &str, email: &str, message: &str) -> Vec<PageCommand> {
        if self.submit.is_in_progress() {
            // Double-submit guard: the control is disabled while a request
            // is in flight, and a racing event is dropped here.
            tracing::debug!("submit ignored: request already in flight");
            return Vec::new();
        }

        let submission = ContactSubmission::from_raw(name, email, message);
        if !submission.is_complete() {
            return vec![PageCommand::RenderStatus {
                text: MSG_VALIDATION.to_string(),
                style: StatusStyle::Error,
                offer_send_another: false,
            }];
        }

        self.submit = SubmitStatus::InProgress;
        vec![
            PageCommand::RenderStatus {
                text: MSG_SENDING.to_string(),
                style: StatusStyle::Neutral,
                offer_send_another: false,
            },
            PageCommand::SetSubmitEnabled(false),
            PageCommand::SendContact(submission),
        ]
    }

    fn finish_submission(&mut self, result: SubmissionResult) -> Vec<PageCommand> {
        let status = match &result {
            SubmissionResult::Success { .. } => PageCommand::RenderStatus {
                text: MSG_SUCCESS.to_string(),
                style: StatusStyle::Success,
                offer_send_another: true,
            },
            SubmissionResult::ValidationFailure => PageCommand::RenderStatus {
                text: MSG_VALIDATION.to_string(),
                style: StatusStyle::Error,
                offer_send_another: false,
            },
            SubmissionResult::TransportFailure => PageCommand::RenderStatus {
                text: MSG_FAILURE.to_string(),
                style: StatusStyle::Error,
                offer_send_another: false,
            },
        };
        self.submit = SubmitStatus::Finished(result);
        vec![status, PageCommand::SetSubmitEnabled(true)]
    }

    fn reset_after_success(&mut self) -> Vec<PageCommand> {
        self.submit = SubmitStatus::Idle;
        vec![
            PageCommand::ResetForm,
            PageCommand::ClearStatus,
            PageCommand::FocusField(FormField::Name),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(commands: &[PageCommand], wanted: &PageCommand) -> bool {
        commands.iter().any(|c| c == wanted)
    }

    fn sent_submission(commands: &[PageCommand]) -> Option<&ContactSubmission> {
        commands.iter().find_map(|c| match c {
            PageCommand::SendContact(s) => Some(s),
            _ => None,
        })
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    #[test]
    fn test_menu_toggle_flips_state_and_aria() {
        let mut page = PageController::new();
        let commands = page.handle_event(PageEvent::MenuToggleClicked);
        assert!(page.nav().menu_open);
        assert!(contains(&commands, &PageCommand::SetMenuVisible(true)));
        assert!(contains(&commands, &PageCommand::SetAriaExpanded(true)));

        let commands = page.handle_event(PageEvent::MenuToggleClicked);
        assert!(!page.nav().menu_open);
        assert!(contains(&commands, &PageCommand::SetMenuVisible(false)));
    }

    #[test]
    fn test_nav_link_close_is_idempotent() {
        let mut page = PageController::new();
        assert!(!page.nav().menu_open);

        // Closing an already-closed menu leaves state unchanged and still
        // forces the attribute to "false".
        let commands = page.handle_event(PageEvent::NavLinkActivated(SectionId::Research));
        assert!(!page.nav().menu_open);
        assert_eq!(
            commands,
            vec![
                PageCommand::SetMenuVisible(false),
                PageCommand::SetAriaExpanded(false),
            ]
        );
    }

    #[test]
    fn test_teaching_in_central_band_marks_only_teaching() {
        let mut page = PageController::new();
        page.handle_event(PageEvent::SectionsObserved(vec![SectionObservation::new(
            SectionId::Research,
            true,
        )]));
        assert_eq!(page.nav().active_section, Some(SectionId::Research));

        let commands = page.handle_event(PageEvent::SectionsObserved(vec![
            SectionObservation::new(SectionId::Research, false),
            SectionObservation::new(SectionId::Teaching, true),
        ]));
        assert_eq!(page.nav().active_section, Some(SectionId::Teaching));
        // SetActiveLink clears all other links by contract
        assert_eq!(
            commands,
            vec![PageCommand::SetActiveLink(SectionId::Teaching)]
        );
    }

    #[test]
    fn test_empty_observation_batch_keeps_active_link() {
        let mut page = PageController::new();
        page.handle_event(PageEvent::SectionsObserved(vec![SectionObservation::new(
            SectionId::Home,
            true,
        )]));
        let commands = page.handle_event(PageEvent::SectionsObserved(vec![
            SectionObservation::new(SectionId::Home, false),
        ]));
        assert!(commands.is_empty());
        assert_eq!(page.nav().active_section, Some(SectionId::Home));
    }

    // -------------------------------------------------------------------------
    // Poster modal
    // -------------------------------------------------------------------------

    #[test]
    fn test_open_poster_locks_scroll_and_pushes_history() {
        let mut page = PageController::new();
        let commands = page.handle_event(PageEvent::PosterLinkActivated);

        assert!(page.modal().is_open());
        assert!(contains(&commands, &PageCommand::LockScroll));
        assert!(contains(&commands, &PageCommand::InstallEscapeListener));
        assert!(contains(
            &commands,
            &PageCommand::PushHistory {
                hash: "#poster".to_string(),
                poster: true,
            }
        ));
        assert!(commands.iter().any(|c| matches!(
            c,
            PageCommand::ShowPoster { title, .. }
                if title == "Advancements in Multi-Robot Systems"
        )));
    }

    #[test]
    fn test_escape_closes_and_pushes_publications_entry() {
        let mut page = PageController::new();
        page.handle_event(PageEvent::PosterLinkActivated);
        let commands = page.handle_event(PageEvent::EscapePressed);

        assert!(!page.modal().is_open());
        assert!(contains(&commands, &PageCommand::UnlockScroll));
        assert!(contains(&commands, &PageCommand::ClearPosterFrame));
        assert!(contains(&commands, &PageCommand::RemoveEscapeListener));
        assert!(contains(
            &commands,
            &PageCommand::PushHistory {
                hash: "#publications".to_string(),
                poster: false,
            }
        ));
    }

    #[test]
    fn test_escape_with_modal_closed_is_a_no_op() {
        let mut page = PageController::new();
        assert!(page.handle_event(PageEvent::EscapePressed).is_empty());
        assert!(page.handle_event(PageEvent::BackdropClicked).is_empty());
    }

    #[test]
    fn test_history_round_trip_reopens_same_poster() {
        let mut page = PageController::new();

        // Open from the publications link
        let open = page.handle_event(PageEvent::PosterLinkActivated);
        let first_shown = open
            .iter()
            .find_map(|c| match c {
                PageCommand::ShowPoster {
                    pdf_path, caption, ..
                } => Some((pdf_path.clone(), caption.clone())),
                _ => None,
            })
            .expect("open should show the poster");

        // Browser back: popstate to the publications anchor. The browser
        // already moved, so the controller closes without pushing.
        let back = page.handle_event(PageEvent::HistoryChanged {
            hash: "#publications".to_string(),
        });
        assert!(!page.modal().is_open());
        assert!(contains(&back, &PageCommand::HidePoster));
        assert!(!back
            .iter()
            .any(|c| matches!(c, PageCommand::PushHistory { .. })));

        // Browser forward: the poster entry again, same asset and caption.
        let forward = page.handle_event(PageEvent::HistoryChanged {
            hash: "#poster".to_string(),
        });
        assert!(page.modal().is_open());
        let reshown = forward
            .iter()
            .find_map(|c| match c {
                PageCommand::ShowPoster {
                    pdf_path, caption, ..
                } => Some((pdf_path.clone(), caption.clone())),
                _ => None,
            })
            .expect("forward should reopen the poster");
        assert_eq!(reshown, first_shown);
    }

    #[test]
    fn test_escape_listener_scoped_to_modal_lifetime() {
        let mut page = PageController::new();

        let open = page.handle_event(PageEvent::PosterLinkActivated);
        let installs = open
            .iter()
            .filter(|c| **c == PageCommand::InstallEscapeListener)
            .count();
        assert_eq!(installs, 1);

        // A second open attempt while visible installs nothing
        assert!(page.handle_event(PageEvent::PosterLinkActivated).is_empty());

        let close = page.handle_event(PageEvent::CloseButtonClicked);
        let removes = close
            .iter()
            .filter(|c| **c == PageCommand::RemoveEscapeListener)
            .count();
        assert_eq!(removes, 1);

        // And a second close removes nothing
        assert!(page.handle_event(PageEvent::CloseButtonClicked).is_empty());
    }

    #[test]
    fn test_deep_link_opens_poster_on_load() {
        let mut page = PageController::new();
        let commands = page.handle_event(PageEvent::Loaded {
            hash: "#poster".to_string(),
            year: 2026,
        });

        assert!(page.modal().is_open());
        assert!(contains(&commands, &PageCommand::MarkStatusRegionLive));
        assert!(contains(&commands, &PageCommand::SetFooterYear(2026)));
        // Already at the poster entry; no extra history push
        assert!(!commands
            .iter()
            .any(|c| matches!(c, PageCommand::PushHistory { .. })));
    }

    #[test]
    fn test_plain_load_sets_up_chrome_only() {
        let mut page = PageController::new();
        let commands = page.handle_event(PageEvent::Loaded {
            hash: String::new(),
            year: 2026,
        });
        assert!(!page.modal().is_open());
        assert_eq!(
            commands,
            vec![
                PageCommand::MarkStatusRegionLive,
                PageCommand::SetFooterYear(2026),
            ]
        );
    }

    // -------------------------------------------------------------------------
    // Contact form
    // -------------------------------------------------------------------------

    #[test]
    fn test_empty_field_blocks_network_call() {
        let mut page = PageController::new();
        let commands = page.handle_event(PageEvent::SubmitForm {
            name: "".to_string(),
            email: "x@example.com".to_string(),
            message: "Hi".to_string(),
        });

        assert!(sent_submission(&commands).is_none());
        assert!(contains(
            &commands,
            &PageCommand::RenderStatus {
                text: "Please fill out all fields.".to_string(),
                style: StatusStyle::Error,
                offer_send_another: false,
            }
        ));
        assert!(page.submit_status().is_idle());
    }

    #[test]
    fn test_whitespace_only_field_blocks_network_call() {
        let mut page = PageController::new();
        let commands = page.handle_event(PageEvent::SubmitForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "   ".to_string(),
        });
        assert!(sent_submission(&commands).is_none());
        assert!(page.submit_status().is_idle());
    }

    #[test]
    fn test_valid_submit_sends_exactly_one_trimmed_request() {
        let mut page = PageController::new();
        let commands = page.handle_event(PageEvent::SubmitForm {
            name: "  Ada ".to_string(),
            email: " ada@example.com ".to_string(),
            message: " Hi ".to_string(),
        });

        let sends = commands
            .iter()
            .filter(|c| matches!(c, PageCommand::SendContact(_)))
            .count();
        assert_eq!(sends, 1);
        assert_eq!(
            sent_submission(&commands),
            Some(&ContactSubmission::from_raw("Ada", "ada@example.com", "Hi"))
        );
        assert!(contains(
            &commands,
            &PageCommand::RenderStatus {
                text: "Sending...".to_string(),
                style: StatusStyle::Neutral,
                offer_send_another: false,
            }
        ));
        assert!(contains(&commands, &PageCommand::SetSubmitEnabled(false)));
        assert!(page.submit_status().is_in_progress());
    }

    #[test]
    fn test_double_submit_while_in_flight_is_rejected() {
        let mut page = PageController::new();
        page.handle_event(PageEvent::SubmitForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hi".to_string(),
        });

        let second = page.handle_event(PageEvent::SubmitForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hi again".to_string(),
        });
        assert!(second.is_empty());
        assert!(page.submit_status().is_in_progress());
    }

    #[test]
    fn test_success_offers_send_another() {
        let mut page = PageController::new();
        page.handle_event(PageEvent::SubmitForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hi".to_string(),
        });
        let commands = page.handle_event(PageEvent::SubmissionCompleted(
            SubmissionResult::Success {
                id: "m1".to_string(),
            },
        ));

        assert!(commands.iter().any(|c| matches!(
            c,
            PageCommand::RenderStatus {
                style: StatusStyle::Success,
                offer_send_another: true,
                ..
            }
        )));
        assert!(contains(&commands, &PageCommand::SetSubmitEnabled(true)));
    }

    #[test]
    fn test_transport_failure_renders_fixed_message() {
        let mut page = PageController::new();
        page.handle_event(PageEvent::SubmitForm {
            name: "Bo".to_string(),
            email: "bo@example.com".to_string(),
            message: "Hello".to_string(),
        });
        let commands =
            page.handle_event(PageEvent::SubmissionCompleted(SubmissionResult::TransportFailure));

        assert!(contains(
            &commands,
            &PageCommand::RenderStatus {
                text: "There was a problem sending your message. Please try again later."
                    .to_string(),
                style: StatusStyle::Error,
                offer_send_another: false,
            }
        ));
    }

    #[test]
    fn test_send_another_resets_form_and_focuses_name() {
        let mut page = PageController::new();
        page.handle_event(PageEvent::SubmitForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hi".to_string(),
        });
        page.handle_event(PageEvent::SubmissionCompleted(SubmissionResult::Success {
            id: "m1".to_string(),
        }));

        let commands = page.handle_event(PageEvent::SendAnotherActivated);
        assert_eq!(
            commands,
            vec![
                PageCommand::ResetForm,
                PageCommand::ClearStatus,
                PageCommand::FocusField(FormField::Name),
            ]
        );
        assert!(page.submit_status().is_idle());

        // The next attempt starts a fresh submission
        let commands = page.handle_event(PageEvent::SubmitForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Round two".to_string(),
        });
        assert!(sent_submission(&commands).is_some());
    }
}

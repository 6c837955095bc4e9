//! Scroll-spy: derive the active nav link from intersection observations.
//!
//! The browser's intersection observer delivers batched entries; the logic
//! here is pure so the viewport-band judgment and the tie-break policy can
//! be tested without a layout engine.

use crate::state::SectionId;

/// Configuration of the observer and the effective viewport used to judge
/// "active".
///
/// The viewport is shrunk to its central band: the top 40% and bottom 55%
/// are excluded, so a section only counts as intersecting once it occupies
/// the middle of the screen. Matches an observer root margin of
/// `-40% 0px -55% 0px`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverConfig {
    /// Intersection ratios the observer reports at.
    pub thresholds: [f32; 4],
    /// Fraction of the viewport excluded at the top.
    pub top_exclusion: f32,
    /// Fraction of the viewport excluded at the bottom.
    pub bottom_exclusion: f32,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            thresholds: [0.0, 0.25, 0.5, 1.0],
            top_exclusion: 0.40,
            bottom_exclusion: 0.55,
        }
    }
}

impl ObserverConfig {
    /// The central band in viewport coordinates, `(top, bottom)`.
    pub fn band(&self, viewport_height: f32) -> (f32, f32) {
        (
            viewport_height * self.top_exclusion,
            viewport_height * (1.0 - self.bottom_exclusion),
        )
    }

    /// Judge whether a section spanning `section_top..section_bottom` (in
    /// viewport coordinates) intersects the central band.
    pub fn judge(&self, section_top: f32, section_bottom: f32, viewport_height: f32) -> bool {
        let (band_top, band_bottom) = self.band(viewport_height);
        section_top < band_bottom && section_bottom > band_top
    }
}

/// One delivered intersection entry for a tracked section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionObservation {
    pub section: SectionId,
    pub is_intersecting: bool,
}

impl SectionObservation {
    pub fn new(section: SectionId, is_intersecting: bool) -> Self {
        Self {
            section,
            is_intersecting,
        }
    }
}

/// Resolve the active section from a batch of observations.
///
/// Tie-break policy: the most recently delivered intersecting observation
/// wins; non-intersecting entries never clear an earlier winner.
pub fn resolve_active(observations: &[SectionObservation]) -> Option<SectionId> {
    observations
        .iter()
        .filter(|obs| obs.is_intersecting)
        .map(|obs| obs.section)
        .last()
}

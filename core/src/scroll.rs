//! Scroll-derived UI state.
//!
//! The navbar needs two things from the scroll position: whether the page
//! has moved past a small threshold (compact navbar style) and which
//! section is currently in view (link highlighting). Geometry comes in
//! from the caller, so the selection rules live here as plain math and are
//! tested without a DOM.

use serde::{Deserialize, Serialize};

use crate::section::Section;

/// Scroll offset (px) past which the navbar switches to its compact style.
///
/// Strictly greater-than: a page sitting at exactly 50px does not count as
/// scrolled.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Look-ahead (px) added to the scroll offset before matching sections, so
/// the highlight flips slightly before a section reaches the viewport top.
pub const PROBE_OFFSET: f64 = 100.0;

/// Vertical extent of one rendered section: its `offsetTop` and
/// `offsetHeight` as measured from layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionExtent {
    /// Distance from the top of the document to the section's top edge.
    pub top: f64,
    /// Rendered height of the section.
    pub height: f64,
}

impl SectionExtent {
    /// Whether `probe` falls in the half-open range `[top, top + height)`.
    pub fn contains(&self, probe: f64) -> bool {
        probe >= self.top && probe < self.top + self.height
    }
}

/// UI state derived from the window scroll position.
///
/// Owned by the page component and recomputed by the scroll handler;
/// children only read it. Never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    /// True once the page has scrolled past [`SCROLL_THRESHOLD`].
    pub is_scrolled: bool,
    /// The section currently highlighted in the navbar. Always exactly one.
    pub active_section: Section,
}

impl Default for ScrollState {
    /// State at page load, before any scroll event: top of page, home active.
    fn default() -> Self {
        ScrollState {
            is_scrolled: false,
            active_section: Section::Home,
        }
    }
}

impl ScrollState {
    /// Recompute both flags from the current scroll offset.
    ///
    /// `extent_of` reports the measured extent of a section, or `None` when
    /// its element is missing; missing sections are skipped by the scan.
    /// When the probe lands outside every extent the previous active
    /// section is kept, so there is never a "no section" state.
    pub fn update(
        &mut self,
        scroll_y: f64,
        extent_of: impl Fn(Section) -> Option<SectionExtent>,
    ) {
        self.is_scrolled = is_scrolled(scroll_y);
        if let Some(section) = section_at(scroll_y + PROBE_OFFSET, extent_of) {
            self.active_section = section;
        }
    }
}

/// Whether an offset counts as scrolled (strictly past [`SCROLL_THRESHOLD`]).
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

/// The first section, in page order, whose extent contains `probe`.
///
/// First match wins, so overlapping or zero-height extents resolve to the
/// topmost section. Returns `None` when nothing matches.
pub fn section_at(
    probe: f64,
    extent_of: impl Fn(Section) -> Option<SectionExtent>,
) -> Option<Section> {
    Section::ALL
        .into_iter()
        .find(|&section| extent_of(section).is_some_and(|extent| extent.contains(probe)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// The reference layout: four bands at home[0,800) projects[800,1600)
    /// about[1600,2200) contact[2200,3000).
    fn banded(section: Section) -> Option<SectionExtent> {
        let (top, height) = match section {
            Section::Home => (0.0, 800.0),
            Section::Projects => (800.0, 800.0),
            Section::About => (1600.0, 600.0),
            Section::Contact => (2200.0, 800.0),
        };
        Some(SectionExtent { top, height })
    }

    #[test]
    fn threshold_is_strictly_greater_than_50() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(49.9));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.1));
        assert!(is_scrolled(60.0));
    }

    #[test]
    fn probe_inside_a_band_selects_that_section() {
        for section in Section::ALL {
            let extent = banded(section).unwrap();
            // Left edge is inclusive, interior is obviously inside.
            assert_eq!(section_at(extent.top, banded), Some(section));
            assert_eq!(section_at(extent.top + extent.height / 2.0, banded), Some(section));
        }
    }

    #[test]
    fn band_right_edge_belongs_to_the_next_section() {
        assert_eq!(section_at(800.0, banded), Some(Section::Projects));
        assert_eq!(section_at(1600.0, banded), Some(Section::About));
        assert_eq!(section_at(2200.0, banded), Some(Section::Contact));
        // Past the very end of the last section, nothing matches.
        assert_eq!(section_at(3000.0, banded), None);
    }

    #[test]
    fn scenario_from_the_reference_layout() {
        let mut state = ScrollState::default();

        // scrollY=750 -> probe 850 -> projects.
        state.update(750.0, banded);
        assert!(state.is_scrolled);
        assert_eq!(state.active_section, Section::Projects);

        // scrollY=0 -> probe 100 -> home, not scrolled.
        state.update(0.0, banded);
        assert!(!state.is_scrolled);
        assert_eq!(state.active_section, Section::Home);

        // scrollY=60 -> scrolled, still home (probe 160 is inside home).
        state.update(60.0, banded);
        assert!(state.is_scrolled);
        assert_eq!(state.active_section, Section::Home);
    }

    #[test]
    fn out_of_range_probe_keeps_the_previous_section() {
        let mut state = ScrollState::default();
        state.update(2300.0, banded);
        assert_eq!(state.active_section, Section::Contact);

        // Scrolled past the end of contact: probe 4100 matches nothing, so
        // the active section is retained while is_scrolled still updates.
        state.update(4000.0, banded);
        assert!(state.is_scrolled);
        assert_eq!(state.active_section, Section::Contact);
    }

    #[test]
    fn probe_above_the_first_section_keeps_the_default() {
        // Layout that starts lower than the probe ever reaches at the top.
        let sunk = |section: Section| {
            banded(section).map(|e| SectionExtent {
                top: e.top + 500.0,
                height: e.height,
            })
        };

        let mut state = ScrollState::default();
        state.update(0.0, sunk); // probe 100 < 500
        assert_eq!(state.active_section, Section::Home);
        assert!(!state.is_scrolled);
    }

    #[test]
    fn overlapping_extents_resolve_to_the_topmost_section() {
        let overlapping = |section: Section| match section {
            Section::Home => Some(SectionExtent { top: 0.0, height: 1000.0 }),
            Section::Projects => Some(SectionExtent { top: 500.0, height: 1000.0 }),
            _ => None,
        };

        assert_eq!(section_at(600.0, overlapping), Some(Section::Home));
        assert_eq!(section_at(1200.0, overlapping), Some(Section::Projects));
    }

    #[test]
    fn zero_height_extent_never_matches() {
        let degenerate = |section: Section| match section {
            Section::Home => Some(SectionExtent { top: 0.0, height: 0.0 }),
            Section::Projects => Some(SectionExtent { top: 0.0, height: 400.0 }),
            _ => None,
        };

        // Home's empty range [0, 0) contains nothing, so projects wins.
        assert_eq!(section_at(0.0, degenerate), Some(Section::Projects));
    }

    #[test]
    fn missing_sections_are_skipped() {
        let without_projects = |section: Section| match section {
            Section::Projects => None,
            other => banded(other),
        };

        // Probe inside what would be projects: no match anywhere, retain.
        let mut state = ScrollState::default();
        state.update(2300.0, without_projects);
        assert_eq!(state.active_section, Section::Contact);

        state.update(900.0, without_projects); // probe 1000, projects missing
        assert_eq!(state.active_section, Section::Contact);

        // Sections after the gap are still reachable.
        state.update(1600.0, without_projects); // probe 1700 -> about
        assert_eq!(state.active_section, Section::About);
    }

    #[test]
    fn no_geometry_at_all_is_a_no_op_on_the_section() {
        let mut state = ScrollState::default();
        state.update(750.0, |_| None);
        assert!(state.is_scrolled);
        assert_eq!(state.active_section, Section::Home);
    }

    #[test]
    fn fractional_offsets_are_handled() {
        let mut state = ScrollState::default();
        state.update(799.5, banded); // probe 899.5 -> projects
        assert_eq!(state.active_section, Section::Projects);
        state.update(50.5, banded);
        assert!(state.is_scrolled);
    }

    #[test]
    fn state_round_trips_through_json() {
        let state = ScrollState {
            is_scrolled: true,
            active_section: Section::About,
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"is_scrolled":true,"active_section":"about"}"#);

        let back: ScrollState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}

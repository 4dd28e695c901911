//! # portfolio-core
//!
//! The DOM-free half of the portfolio page: the four sections in their
//! fixed order and the scroll math that picks the active one. The literal
//! page content lives here too.
//!
//! The companion `portfolio-site` crate renders this model with Leptos and
//! feeds real DOM geometry into [`scroll`]. Keeping the model free of any
//! browser types means every behavioral rule of the page is testable with
//! plain `cargo test` on the host.
//!
//! ## Layout
//!
//! - [`section`] - the four page sections and their fixed order
//! - [`scroll`] - scroll-derived UI state and the section scan
//! - [`content`] - profile, projects, skills, and experience data
//!
//! ## Quick look
//!
//! ```rust
//! use portfolio_core::{ScrollState, Section, SectionExtent};
//!
//! let mut state = ScrollState::default();
//! assert_eq!(state.active_section, Section::Home);
//!
//! // Pretend the page is laid out as four 800px bands and we scrolled to 750.
//! state.update(750.0, |section| {
//!     let idx = Section::ALL.iter().position(|s| *s == section).unwrap();
//!     Some(SectionExtent { top: idx as f64 * 800.0, height: 800.0 })
//! });
//!
//! assert!(state.is_scrolled);
//! assert_eq!(state.active_section, Section::Projects);
//! ```

#![warn(missing_docs)]

pub mod content;
pub mod scroll;
pub mod section;

pub use scroll::{ScrollState, SectionExtent, PROBE_OFFSET, SCROLL_THRESHOLD};
pub use section::Section;

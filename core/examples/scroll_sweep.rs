//! Sweep a synthetic page layout and print the navbar state transitions.
//!
//! Run with: `cargo run --example scroll_sweep`

use portfolio_core::{ScrollState, Section, SectionExtent};

fn main() {
    // Four stacked sections, same shape as the rendered page.
    let extent_of = |section: Section| {
        let (top, height) = match section {
            Section::Home => (0.0, 800.0),
            Section::Projects => (800.0, 800.0),
            Section::About => (1600.0, 600.0),
            Section::Contact => (2200.0, 800.0),
        };
        Some(SectionExtent { top, height })
    };

    let mut state = ScrollState::default();
    let mut previous = state;

    println!("{:>8}  {:<8}  {}", "scrollY", "scrolled", "active");
    println!("{:>8}  {:<8}  {}", 0, state.is_scrolled, state.active_section.id());

    for step in 1..=120 {
        let scroll_y = f64::from(step) * 25.0;
        state.update(scroll_y, extent_of);
        if state != previous {
            println!(
                "{:>8}  {:<8}  {}",
                scroll_y,
                state.is_scrolled,
                state.active_section.id()
            );
            previous = state;
        }
    }
}

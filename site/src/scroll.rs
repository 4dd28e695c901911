//! Wires the scroll model up to the real window.
//!
//! All selection logic lives in `portfolio_core::scroll`; this module only
//! reads geometry out of the DOM and pushes it through a signal.

use leptos::prelude::*;
use portfolio_core::{ScrollState, Section, SectionExtent};
use wasm_bindgen::prelude::*;

/// Measure a section element, `None` if it is not in the DOM yet.
fn measure(section: Section) -> Option<SectionExtent> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(section.id())?;
    let element = element.dyn_into::<web_sys::HtmlElement>().ok()?;
    Some(SectionExtent {
        top: f64::from(element.offset_top()),
        height: f64::from(element.offset_height()),
    })
}

fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Track the window scroll position as a [`ScrollState`] signal.
///
/// Recomputes once after mount (the page may be restored mid-scroll) and on
/// every scroll event after that. The listener is detached again when the
/// owning scope is disposed.
pub fn use_scroll_state() -> ReadSignal<ScrollState> {
    let (state, set_state) = signal(ScrollState::default());
    let recompute = move || set_state.update(|state| state.update(current_scroll_y(), measure));

    let listener = StoredValue::new_local(None::<Closure<dyn FnMut()>>);

    // Runs once: it tracks no signals. Attaching here rather than in the
    // component body means the section elements exist by the first measure.
    Effect::new(move || {
        recompute();

        let closure = Closure::wrap(Box::new(recompute) as Box<dyn FnMut()>);
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }
        listener.set_value(Some(closure));
    });

    on_cleanup(move || {
        listener.update_value(|slot| {
            if let (Some(window), Some(closure)) = (web_sys::window(), slot.take()) {
                let _ = window
                    .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            }
        });
    });

    state
}

use leptos::prelude::*;
use portfolio_core::content::PROFILE;
use portfolio_core::{ScrollState, Section};

#[component]
pub fn Nav(scroll: ReadSignal<ScrollState>) -> impl IntoView {
    view! {
        <nav class=move || if scroll.get().is_scrolled { "nav scrolled" } else { "nav" }>
            <div class="nav-inner">
                <a href="#home" class="nav-brand">
                    {PROFILE.name}
                    <span class="nav-brand-dot">"."</span>
                </a>
                <div class="nav-links">
                    {Section::ALL.into_iter().map(|section| {
                        view! {
                            <a
                                href=section.anchor()
                                class=move || if scroll.get().active_section == section {
                                    "nav-link active"
                                } else {
                                    "nav-link"
                                }
                            >
                                {section.label()}
                            </a>
                        }
                    }).collect::<Vec<_>>()}
                </div>
                // Shown on narrow viewports in place of the links.
                <button class="nav-menu-btn" aria-label="Menu">
                    <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor">
                        <path stroke-linecap="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"></path>
                    </svg>
                </button>
            </div>
        </nav>
    }
}

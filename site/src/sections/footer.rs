use leptos::prelude::*;
use portfolio_core::content::PROFILE;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();
    view! {
        <footer class="footer">
            <p class="footer-copyright">
                {format!("© {} {}. All rights reserved.", year, PROFILE.name)}
            </p>
        </footer>
    }
}

use leptos::prelude::*;
use portfolio_core::content::PROFILE;

#[component]
pub fn Home() -> impl IntoView {
    let greeting = format!("Hi, I'm {}", PROFILE.name);
    view! {
        <section id="home" class="section hero">
            <h2 class="section-title">"Welcome to My Portfolio"</h2>
            <div class="hero-grid">
                <div class="hero-portrait">
                    <img src="assets/portrait.svg" alt=PROFILE.name width="192" height="192" />
                </div>
                <div class="hero-content">
                    <h2 class="hero-name">{greeting}</h2>
                    <h3 class="hero-role">{PROFILE.role}</h3>
                    <p class="hero-bio">{PROFILE.bio}</p>
                    <div class="hero-actions">
                        <button class="btn btn-primary">"Hire Me"</button>
                        <button class="btn btn-secondary">"Download CV"</button>
                    </div>
                </div>
            </div>
        </section>
    }
}

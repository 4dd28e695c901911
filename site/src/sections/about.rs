use leptos::prelude::*;
use portfolio_core::content::{EXPERIENCE, SKILLS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section">
            <h2 class="section-title">"About Me"</h2>
            <div class="about-grid">
                <div class="about-column">
                    <h3 class="about-heading">"My Skills"</h3>
                    <div class="skill-list">
                        {SKILLS.iter().map(|skill| {
                            view! {
                                <div class="skill">
                                    <div class="skill-row">
                                        <span class="skill-name">{skill.name}</span>
                                        <span class="skill-level">{skill.level}</span>
                                    </div>
                                    <div class="skill-track">
                                        <div
                                            class="skill-fill"
                                            style=format!("width: {}", skill.level)
                                        ></div>
                                    </div>
                                </div>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
                <div class="about-column">
                    <h3 class="about-heading">"Experience"</h3>
                    <div class="timeline">
                        {EXPERIENCE.iter().map(|entry| {
                            view! {
                                <div class="timeline-entry">
                                    <h4 class="timeline-title">{entry.title}</h4>
                                    <p class="timeline-period">{entry.period}</p>
                                    <p class="timeline-description">{entry.description}</p>
                                </div>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}

use leptos::prelude::*;
use portfolio_core::content::PROJECTS;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="section">
            <h2 class="section-title">"My Projects"</h2>
            <div class="project-grid">
                {PROJECTS.iter().map(|project| {
                    view! {
                        <article class="project-card">
                            <h3 class="project-title">{project.title}</h3>
                            <p class="project-description">{project.description}</p>
                            <div class="project-tags">
                                {project.tags.iter().map(|tag| {
                                    view! { <span class="project-tag">{*tag}</span> }
                                }).collect::<Vec<_>>()}
                            </div>
                        </article>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

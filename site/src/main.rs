// Portfolio - Leptos 0.8 Edition
// amaraosei.dev

mod scroll;
mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let scroll = scroll::use_scroll_state();

    view! {
        <ConsoleGreeting />
        <Nav scroll=scroll />
        <main class="container">
            <Home />
            <Projects />
            <About />
            <Contact />
        </main>
        <Footer />
    }
}

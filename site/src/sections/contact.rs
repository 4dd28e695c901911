use leptos::prelude::*;
use portfolio_core::content::PROFILE;

/// Contact form plus direct channels. The form is presentational only,
/// there is no submit handler wired up yet.
#[component]
pub fn Contact() -> impl IntoView {
    let mailto = format!("mailto:{}", PROFILE.email);
    let tel = format!("tel:{}", PROFILE.phone.replace(' ', ""));

    view! {
        <section id="contact" class="section">
            <h2 class="section-title">"Contact Me"</h2>
            <div class="contact-inner">
                <form class="contact-form">
                    <div class="form-row">
                        <div class="form-field">
                            <label class="form-label">"Name"</label>
                            <input type="text" id="name" class="form-input" placeholder="Your name" />
                        </div>
                        <div class="form-field">
                            <label class="form-label">"Email"</label>
                            <input type="email" id="email" class="form-input" placeholder="your.email@example.com" />
                        </div>
                    </div>
                    <div class="form-field">
                        <label class="form-label">"Subject"</label>
                        <input type="text" id="subject" class="form-input" placeholder="Subject" />
                    </div>
                    <div class="form-field">
                        <label class="form-label">"Message"</label>
                        <textarea id="message" rows="5" class="form-input" placeholder="Your message here..."></textarea>
                    </div>
                    <button type="submit" class="btn btn-primary btn-wide">"Send Message"</button>
                </form>
                <div class="contact-channels">
                    <a href=mailto class="contact-channel">
                        <span class="contact-icon">"✉"</span>
                        {PROFILE.email}
                    </a>
                    <a href=tel class="contact-channel">
                        <span class="contact-icon">"☎"</span>
                        {PROFILE.phone}
                    </a>
                    <span class="contact-channel">
                        <span class="contact-icon">"⌂"</span>
                        {PROFILE.location}
                    </span>
                </div>
            </div>
        </section>
    }
}

// Page sections, top to bottom as rendered.

mod about;
mod contact;
mod footer;
mod greeting;
mod home;
mod nav;
mod projects;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use greeting::ConsoleGreeting;
pub use home::Home;
pub use nav::Nav;
pub use projects::Projects;

//! The page's content sections and their fixed order.

use serde::{Deserialize, Serialize};

/// One of the four content sections, stacked top to bottom on the page.
///
/// Serializes as its DOM id (`"home"`, `"projects"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Hero block: portrait, greeting, call-to-action buttons.
    Home,
    /// Project card grid.
    Projects,
    /// Skills and experience columns.
    About,
    /// Contact form and contact channels.
    Contact,
}

impl Section {
    /// Every section in page order (single source of truth).
    ///
    /// Both the navbar links and the scroll scan iterate this array, so the
    /// order here is what "topmost section wins" means.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Projects,
        Section::About,
        Section::Contact,
    ];

    /// The `id` attribute of the section element in the DOM.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Projects => "projects",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    /// In-page anchor target for navigation links.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "#home",
            Section::Projects => "#projects",
            Section::About => "#about",
            Section::Contact => "#contact",
        }
    }

    /// Link text shown in the navbar.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projects",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn page_order_is_home_projects_about_contact() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["home", "projects", "about", "contact"]);
    }

    #[test]
    fn anchor_is_hash_plus_id() {
        for section in Section::ALL {
            assert_eq!(section.anchor(), format!("#{}", section.id()));
        }
    }

    #[test]
    fn serde_names_match_dom_ids() {
        for section in Section::ALL {
            let json = serde_json::to_string(&section).unwrap();
            assert_eq!(json, format!("\"{}\"", section.id()));

            let back: Section = serde_json::from_str(&json).unwrap();
            assert_eq!(back, section);
        }
    }
}

//! Everything the page says, as plain data.
//!
//! Copy lives here instead of inline in the views so the components stay
//! pure layout and the data can be checked for shape (counts, percentages,
//! non-empty fields) under `cargo test`.

/// Who the site belongs to.
#[derive(Clone, Copy, Debug)]
pub struct Profile {
    /// Display name, also used as the navbar brand.
    pub name: &'static str,
    /// Job title shown under the name in the hero.
    pub role: &'static str,
    /// Short introduction paragraph for the hero.
    pub bio: &'static str,
    /// Contact e-mail, rendered as a mailto link.
    pub email: &'static str,
    /// Contact phone number.
    pub phone: &'static str,
    /// City and country line.
    pub location: &'static str,
}

/// The single profile rendered across hero, contact, and footer.
pub const PROFILE: Profile = Profile {
    name: "Amara Osei",
    role: "Frontend Developer",
    bio: "I build fast, accessible interfaces for the web. Six years of \
          shipping product UI, from design-system groundwork to the last \
          pixel of polish.",
    email: "amara@amaraosei.dev",
    phone: "+44 20 7946 0823",
    location: "London, United Kingdom",
};

/// One portfolio project card.
#[derive(Clone, Copy, Debug)]
pub struct Project {
    /// Card heading.
    pub title: &'static str,
    /// One or two sentences on what it is.
    pub description: &'static str,
    /// Tech tags rendered as pills under the description.
    pub tags: &'static [&'static str],
}

/// Featured work, in display order.
pub const PROJECTS: &[Project] = &[
    Project {
        title: "Linen & Loom",
        description: "Storefront for an independent textile studio. Product \
                      catalogue, cart, and checkout with server-driven \
                      inventory and a sub-second first paint on 3G.",
        tags: &["Next.js", "TypeScript", "Stripe"],
    },
    Project {
        title: "Standup Board",
        description: "Realtime task board a distributed team runs its \
                      mornings on. Optimistic drag-and-drop, presence \
                      indicators, and offline queueing.",
        tags: &["React", "WebSockets", "IndexedDB"],
    },
    Project {
        title: "Wavelength",
        description: "Audio-reactive landing page for a podcast network. \
                      Canvas visualiser driven by the Web Audio API, fully \
                      keyboard-navigable.",
        tags: &["Canvas", "Web Audio", "Tailwind CSS"],
    },
];

/// One row in the skills list.
#[derive(Clone, Copy, Debug)]
pub struct Skill {
    /// Skill name.
    pub name: &'static str,
    /// Proficiency as a CSS percentage string, e.g. `"90%"`. Used directly
    /// as the fill width of the skill bar.
    pub level: &'static str,
}

impl Skill {
    /// The level parsed as a whole percent, `None` if it is malformed or
    /// over 100. Exists so tests can pin the data down.
    pub fn level_percent(&self) -> Option<u8> {
        self.level
            .strip_suffix('%')
            .and_then(|digits| digits.parse::<u8>().ok())
            .filter(|&percent| percent <= 100)
    }
}

/// Skills shown in the about section, in display order.
pub const SKILLS: &[Skill] = &[
    Skill { name: "JavaScript", level: "90%" },
    Skill { name: "React", level: "85%" },
    Skill { name: "Next.js", level: "80%" },
    Skill { name: "Tailwind CSS", level: "95%" },
    Skill { name: "Node.js", level: "75%" },
];

/// One entry in the experience timeline.
#[derive(Clone, Copy, Debug)]
pub struct Experience {
    /// Role and company.
    pub title: &'static str,
    /// Date range, e.g. `"2022 - Present"`.
    pub period: &'static str,
    /// What the role involved.
    pub description: &'static str,
}

/// Work history, most recent first.
pub const EXPERIENCE: &[Experience] = &[
    Experience {
        title: "Senior Frontend Developer, Brightline",
        period: "2022 - Present",
        description: "Own the component library behind three product teams. \
                      Led the migration off a legacy SPA, cutting bundle \
                      size by half and raising Lighthouse scores into the \
                      high nineties.",
    },
    Experience {
        title: "Frontend Developer, Fieldnote",
        period: "2019 - 2022",
        description: "Built the mapping and reporting UI for an agritech \
                      platform used across 400 farms. Introduced visual \
                      regression testing and a shared design-token pipeline.",
    },
];

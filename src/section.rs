use std::fmt::{Display, Formatter};

use crate::motion::{RevealPreset, ScrollTrigger};

/// Page sections in the order they appear in the navigation and on the page.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Education,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Education,
        Section::Contact,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }

    /// Element id, without the leading `#`.
    pub const fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Contact => "contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }

    /// Accepts `#contact` or `contact`.
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let id = anchor.strip_prefix('#').unwrap_or(anchor);
        Section::ALL.into_iter().find(|section| section.id() == id)
    }

    /// Reveal used by the section heading.
    pub const fn heading_reveal(self) -> RevealPreset {
        match self {
            Section::Home => RevealPreset::Letter,
            Section::About
            | Section::Skills
            | Section::Projects
            | Section::Experience
            | Section::Education
            | Section::Contact => RevealPreset::FadeIn,
        }
    }

    /// Reveal used by the section's cards and columns.
    pub const fn body_reveal(self) -> RevealPreset {
        match self {
            Section::Home => RevealPreset::FadeIn,
            Section::About => RevealPreset::SlideInLeft,
            Section::Skills => RevealPreset::ScaleIn,
            Section::Projects | Section::Education | Section::Contact => RevealPreset::SlideUp,
            Section::Experience => RevealPreset::SlideInRight,
        }
    }

    /// Scroll position that plays the section's body reveal. `Home` is on screen at
    /// load, so it reveals immediately instead.
    pub fn scroll_trigger(self) -> Option<ScrollTrigger> {
        match self {
            Section::Home => None,
            _ => Some(ScrollTrigger::default()),
        }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

mod about;
mod home;
mod projects;
mod work;

use leptos::prelude::*;

pub use about::AboutContent;
pub use home::HomeContent;
pub use projects::ProjectsContent;
pub use work::WorkContent;

/// One of the content areas of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Projects,
    About,
    Work,
}

impl Section {
    /// Every section, in the order they appear on the home page.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Projects,
        Section::About,
        Section::Work,
    ];

    /// Path segment the section is served under.
    pub fn slug(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Projects => "projects",
            Section::About => "aboutme",
            Section::Work => "work",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projects",
            Section::About => "About me",
            Section::Work => "Work",
        }
    }

    pub fn render(self) -> AnyView {
        match self {
            Section::Home => view! { <HomeContent /> }.into_any(),
            Section::Projects => view! { <ProjectsContent /> }.into_any(),
            Section::About => view! { <AboutContent /> }.into_any(),
            Section::Work => view! { <WorkContent /> }.into_any(),
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

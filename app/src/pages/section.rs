use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::NavBar;
use crate::sections::Section;

/// A single section on its own page, e.g. `/work`.
#[component]
pub fn Index(section: Section) -> impl IntoView {
    cfg_if::cfg_if! {
        if #[cfg(feature = "ssr")] {
            log::debug!("rendering section `{section}'");
        }
    }

    view! {
        <Title text=section.title() />
        <NavBar />
        <main class="section-page">
            {section.render()}
        </main>
    }
}

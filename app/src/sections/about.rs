use leptos::prelude::*;

use super::Section;

// TODO: Load the prose from a markdown document so edits don't need a rebuild.
#[component]
pub fn AboutContent() -> impl IntoView {
    let section = Section::About;
    view! {
        <section class="content-section about" data-section=section.slug()>
            <h2>{section.title()}</h2>
            <p>
                "I am a software developer who enjoys readable code, small tools that do one thing well, and learning in public."
            </p>
            <p>"Outside of the keyboard: books, long walks and too much coffee."</p>
        </section>
    }
}

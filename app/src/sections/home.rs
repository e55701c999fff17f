use leptos::prelude::*;

use super::Section;

#[component]
pub fn HomeContent() -> impl IntoView {
    let section = Section::Home;
    view! {
        <section class="content-section home" data-section=section.slug()>
            <h2>{section.title()}</h2>
            <p>
                "Welcome! This is a small corner of the web where I keep track of what I build, where I work, and what I am curious about."
            </p>
            <p>"Use the links above to jump straight to a section."</p>
        </section>
    }
}

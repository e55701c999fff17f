use leptos::prelude::*;

use super::Section;

#[component]
pub fn WorkContent() -> impl IntoView {
    let section = Section::Work;
    view! {
        <section class="content-section work" data-section=section.slug()>
            <h2>{section.title()}</h2>
            <p>"Building web services and the tooling around them: APIs, build pipelines and deployment."</p>
        </section>
    }
}

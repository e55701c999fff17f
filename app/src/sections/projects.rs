use leptos::prelude::*;

use super::Section;

#[component]
pub fn ProjectsContent() -> impl IntoView {
    let section = Section::Projects;
    view! {
        <section class="content-section projects" data-section=section.slug()>
            <h2>{section.title()}</h2>
            <ul>
                <li>"This website, server-side rendered and hydrated in the browser."</li>
                <li>"Assorted command-line tools and experiments, mostly written over weekends."</li>
            </ul>
        </section>
    }
}

use leptos::prelude::*;

use crate::components::NavBar;
use crate::sections::Section;

pub const HEADING: &str = "This is Home";

const FRAME_CLASS: &str = "bg-black hover:only:object-center border-amber-600";

/// The home page: a heading, the nav bar and every section.
#[component]
pub fn Index() -> impl IntoView {
    view! {
        <div class="backdrop-blur p-8 min-h-screen">
            <h1 class="text-3xl font-semibold mb-6">{HEADING}</h1>
            <NavBar />
            <ContentArea />
        </div>
    }
}

/// Renders each section once in the fixed site order, then once more per
/// entry of `sections`, each inside its own frame and keyed by position.
///
/// `render` builds a section's content, [`Section::render`] by default.
#[component]
pub fn ContentArea(
    #[prop(default = Section::ALL.to_vec())] sections: Vec<Section>,
    #[prop(optional)] render: Option<fn(Section) -> AnyView>,
) -> impl IntoView {
    let render = render.unwrap_or(Section::render);

    view! {
        <div class="flex flex-wrap justify-center items-start gap-8 p-8">
            {render(Section::Home)}
            {render(Section::Projects)}
            {render(Section::About)}
            {render(Section::Work)}
            <For
                each=move || sections.clone().into_iter().enumerate()
                key=|(index, _)| *index
                children=move |(_, section)| {
                    view! { <div class=FRAME_CLASS>{render(section)}</div> }
                }
            />
        </div>
    }
}

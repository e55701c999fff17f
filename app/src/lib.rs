pub mod components;
pub mod pages;
pub mod sections;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    SsrMode, StaticSegment,
};

use crate::components::LinkKind;
use crate::pages::section::Index as SectionPage;
use crate::sections::Section;

const SITE_NAME: &str = "Homepage";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Personal website: projects, work and a few words about me."/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    // Every link below lives under the <Router/>.
    provide_context(LinkKind::Router);

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/homepage.css"/>

        <Title formatter=|text: String| {
            if text.is_empty() {
                String::from(SITE_NAME)
            } else {
                format!("{} - {}", text, SITE_NAME)
            }
        }/>

        <Router>
            // Everything is static, render it completely on the server.
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=pages::home::Index
                    ssr=SsrMode::Async
                />
                // One static route per section, so that any other root level path
                // (e.g. /favicon.ico) is left to the static file handler.
                <Route
                    path=StaticSegment(Section::Work.slug())
                    view=|| view! { <SectionPage section=Section::Work /> }
                    ssr=SsrMode::Async
                />
                <Route
                    path=StaticSegment(Section::Projects.slug())
                    view=|| view! { <SectionPage section=Section::Projects /> }
                    ssr=SsrMode::Async
                />
                <Route
                    path=StaticSegment(Section::About.slug())
                    view=|| view! { <SectionPage section=Section::About /> }
                    ssr=SsrMode::Async
                />
                <Route
                    path=StaticSegment(Section::Home.slug())
                    view=|| view! { <SectionPage section=Section::Home /> }
                    ssr=SsrMode::Async
                />
            </Routes>
        </Router>
    }
}

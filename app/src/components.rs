use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::components::A;

const LINK_CLASS: &str = "text-blue-500 underline hover:text-blue-700 transition";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavTarget {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavTarget; 3] = [
    NavTarget { href: "/work", label: "work" },
    NavTarget { href: "/projects", label: "projects" },
    NavTarget { href: "/aboutme", label: "aboutme" },
];

/// How a [`NavLink`] navigates, provided through the reactive context.
///
/// `Router` renders the router's `<A/>` so that following the link is a
/// client-side transition; it must only be provided under a `<Router/>`.
/// `Anchor` renders a plain `<a href>` and is used when nothing is provided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkKind {
    #[default]
    Anchor,
    Router,
}

#[component]
pub fn NavLink(href: &'static str, children: Children) -> impl IntoView {
    match use_context::<LinkKind>().unwrap_or_default() {
        LinkKind::Router => Either::Left(view! {
            <A href=href attr:class=LINK_CLASS>{children()}</A>
        }),
        LinkKind::Anchor => Either::Right(view! {
            <a href=href class=LINK_CLASS>{children()}</a>
        }),
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="flex gap-6 mb-8">
            {NAV_LINKS
                .into_iter()
                .map(|target| view! { <NavLink href=target.href>{target.label}</NavLink> })
                .collect_view()}
        </nav>
    }
}

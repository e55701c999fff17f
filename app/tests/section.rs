use app::sections::Section;
use app::App;
use leptos::prelude::*;
use leptos_router::location::RequestUrl;

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn render_at(path: &str) -> String {
    Owner::new().with(|| {
        provide_context(RequestUrl::new(path));
        view! { <App /> }.to_html()
    })
}

fn section_order(html: &str) -> Vec<&str> {
    html.split("data-section=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect()
}

fn nav_hrefs(html: &str) -> Vec<&str> {
    let start = html.find("<nav").expect("no <nav> in the page");
    let end = html[start..].find("</nav>").expect("unterminated <nav>");
    html[start..start + end]
        .split("href=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect()
}

#[test]
fn nav_destinations_render_their_section() {
    setup();

    for (path, slug) in [
        ("/work", "work"),
        ("/projects", "projects"),
        ("/aboutme", "aboutme"),
    ] {
        let html = render_at(path);
        assert_eq!(vec![slug], section_order(&html), "at {path}");
        assert_eq!(vec!["/work", "/projects", "/aboutme"], nav_hrefs(&html), "at {path}");
        assert!(!html.contains("<h1"), "at {path}");
    }
}

#[test]
fn home_section_has_its_own_page() {
    setup();

    let html = render_at(&format!("/{}", Section::Home.slug()));
    assert_eq!(vec!["home"], section_order(&html));
}

#[test]
fn root_renders_the_home_page() {
    setup();

    let html = render_at("/");
    assert_eq!(8, section_order(&html).len());
    assert!(html.contains("This is Home"));
    assert!(!html.contains("Page not found."));
}

#[test]
fn other_root_level_paths_are_not_sections() {
    setup();

    for path in ["/favicon.ico", "/robots.txt", "/nope", "/about"] {
        let html = render_at(path);
        assert!(section_order(&html).is_empty(), "at {path}");
        assert!(html.contains("Page not found."), "at {path}");
    }
}

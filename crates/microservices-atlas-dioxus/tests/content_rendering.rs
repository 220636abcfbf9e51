//! Renders the shipped site content through the page components.

use dioxus::dioxus_core::VirtualDom;
use dioxus_ssr::render;
use microservices_atlas_dioxus::ui::components::page_view::{PageView, PageViewProps};
use microservices_atlas_engine::{Page, PageLibrary, io};
use std::path::PathBuf;

fn library() -> PageLibrary {
    let content_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../content");
    io::load_library(&content_dir).unwrap()
}

fn render_page(page: &Page) -> String {
    let mut dom = VirtualDom::new_with_props(PageView, PageViewProps { page: page.clone() });
    dom.rebuild_in_place();
    render(&dom)
}

#[test]
fn every_page_mounts_collapsed() {
    for page in library().pages() {
        let html = render_page(page);

        assert!(
            !html.contains("aria-expanded=\"true\""),
            "page '{}' rendered an open entry",
            page.slug()
        );
        assert!(!html.contains("disclosure-body"), "page '{}'", page.slug());
    }
}

#[test]
fn gateway_page_shows_headers_but_not_bodies() {
    let library = library();
    let html = render_page(library.get("api-gateway").unwrap());

    assert!(html.contains("Do I need a gateway for two services?"));
    assert!(html.contains("Authentication"));
    assert!(!html.contains("jwt-policy.yaml"));
    assert!(html.contains("gateway-route.yaml"));
    assert_eq!(html.matches("class=\"disclosure-group\"").count(), 2);
}

#[test]
fn kubernetes_page_renders_cards() {
    let library = library();
    let html = render_page(library.get("kubernetes").unwrap());

    assert!(html.contains("card card-step"));
    assert!(html.contains("card card-challenge level-high"));
}

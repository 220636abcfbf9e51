use crate::ui::components::{EmptyLibrary, ErrorScreen, PageLink, PageNav, PageView};
use dioxus::prelude::*;
use microservices_atlas_engine::PageLibrary;
use std::path::PathBuf;

const ATLAS_CSS: &str = include_str!("../assets/atlas.css");

/// Everything the window needs, resolved before launch
#[derive(Debug, Clone)]
pub struct Site {
    pub content_path: PathBuf,
    pub library: Result<PageLibrary, String>,
    pub start_page: Option<String>,
}

/// Root component: reads the [`Site`] provided at launch
#[component]
pub fn SiteRoot() -> Element {
    let site = use_context::<Site>();

    rsx! {
        style { {ATLAS_CSS} }
        match site.library {
            Ok(library) => rsx! {
                App {
                    library,
                    content_path: site.content_path.display().to_string(),
                    start_page: site.start_page,
                }
            },
            Err(details) => rsx! {
                ErrorScreen {
                    title: "Content error".to_string(),
                    message: format!("Failed to load pages from {}", site.content_path.display()),
                    details: Some(details),
                }
            },
        }
    }
}

#[component]
pub fn App(library: PageLibrary, content_path: String, start_page: Option<String>) -> Element {
    let initial = start_page_index(&library, start_page.as_deref());
    let mut selected = use_signal(move || initial);

    let links: Vec<PageLink> = library
        .pages()
        .iter()
        .map(|page| PageLink {
            slug: page.slug().to_string(),
            title: page.title().to_string(),
        })
        .collect();
    let current = library.pages().get(*selected.read()).cloned();

    rsx! {
        div {
            class: "app-container",
            nav {
                class: "sidebar",
                h2 { "Topics" }
                PageNav {
                    links,
                    selected: *selected.read(),
                    on_select: move |index: usize| {
                        log::debug!("Selecting page {index}");
                        selected.set(index);
                    },
                }
            }
            main {
                class: "main-content",
                if let Some(page) = current {
                    // Keyed by slug: switching pages remounts and resets disclosure state
                    PageView { key: "{page.slug()}", page }
                } else {
                    EmptyLibrary { content_path }
                }
            }
        }
    }
}

fn start_page_index(library: &PageLibrary, start_page: Option<&str>) -> usize {
    let Some(slug) = start_page else {
        return 0;
    };
    library.position(slug).unwrap_or_else(|| {
        log::warn!("Start page '{slug}' not found; showing the first page");
        0
    })
}

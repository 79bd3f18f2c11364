use dioxus::prelude::*;

use crate::core::config::NavEntry;
use crate::hooks;

/// Fixed top navigation. Links point at in-page section ids; the behaviors
/// take care of highlighting, smooth scrolling and collapsing the mobile menu.
#[component]
pub fn SiteNavbar(brand: String, entries: Vec<NavEntry>) -> Element {
    let mut menu_open = use_signal(|| false);
    let collapse_class = if menu_open() {
        format!("collapse {} {}", hooks::NAVBAR_COLLAPSE, hooks::SHOW)
    } else {
        format!("collapse {}", hooks::NAVBAR_COLLAPSE)
    };

    rsx! {
        nav { id: hooks::MAIN_NAV_ID, class: "navbar navbar-expand-lg fixed-top",
            div { class: "container",
                a { class: "navbar-brand", href: "#home", "{brand}" }
                button {
                    r#type: "button",
                    class: "navbar-toggler",
                    aria_label: "Toggle navigation",
                    onclick: move |_| menu_open.toggle(),
                    span { class: "navbar-toggler-icon" }
                }
                div { class: collapse_class,
                    ul { class: "navbar-nav ms-auto",
                        for entry in entries.iter() {
                            li { class: "nav-item",
                                a {
                                    class: hooks::NAV_LINK,
                                    href: "#{entry.id}",
                                    onclick: move |_| menu_open.set(false),
                                    "{entry.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

//! The portfolio page.
//!
//! Markup only: every interactive effect is attached afterwards by the
//! behaviors, which find their elements through the [`crate::hooks`] ids and
//! classes rendered here.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::SiteNavbar;
use crate::core::config::SiteConfig;
use crate::hooks;

mod sections;

pub use sections::{About, Contact, Footer, Gallery, Hero, Services, Stats, Testimonials};

#[component]
pub fn Portfolio() -> Element {
    let config = use_hook(|| Rc::new(SiteConfig::embedded_or_default()));

    use_effect({
        let config = Rc::clone(&config);
        move || mount_behaviors(&config)
    });

    let content = &config.content;

    rsx! {
        div { class: hooks::PAGE_LOADER,
            div { class: "loader-spinner" }
        }

        SiteNavbar { brand: content.brand.clone(), entries: content.nav.clone() }

        main {
            Hero { hero: content.hero.clone() }
            About { about: content.about.clone() }
            Services { services: content.services.clone() }
            Gallery { gallery: content.gallery.clone() }
            Stats { stats: content.stats.clone() }
            Testimonials { testimonials: content.testimonials.clone() }
            Contact { contact: content.contact.clone() }
        }

        Footer { brand: content.brand.clone(), footer: content.footer.clone() }

        button {
            id: hooks::SCROLL_TOP_ID,
            class: "scroll-top",
            r#type: "button",
            aria_label: "Back to top",
            i { class: "fas fa-arrow-up" }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn mount_behaviors(config: &SiteConfig) {
    if let Err(err) = crate::web::mount(config) {
        tracing::error!(%err, "page behaviors not mounted");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn mount_behaviors(_config: &SiteConfig) {
    tracing::debug!(
        platform = crate::core::platform::Platform::current().label(),
        "page behaviors need a browser; rendering markup only"
    );
}

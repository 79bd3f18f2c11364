//! Shared UI crate for the portfolio page: the page view, the interactive
//! behaviors and the browser adapter that connects them.

pub mod behaviors;
pub mod core;
pub mod driver;
pub mod hooks;
pub mod site;
pub mod views;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub mod components {
    // Fixed top navigation (components/navbar.rs)
    mod navbar;
    pub use navbar::SiteNavbar;
}

pub use crate::core::config::SiteConfig;
pub use views::Portfolio;

#[cfg(test)]
pub(crate) mod testing;

//! Markup conventions shared by the page view and the behaviors.
//!
//! Any markup that carries these ids, classes and data attributes gets the
//! interactive behavior, whether it was rendered by [`crate::views`] or not.

// Element ids.
pub const MAIN_NAV_ID: &str = "mainNav";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const FORM_MESSAGE_ID: &str = "formMessage";
pub const SCROLL_TOP_ID: &str = "scrollTop";
pub const ABOUT_ID: &str = "about";
pub const FIELD_NAME_ID: &str = "name";
pub const FIELD_EMAIL_ID: &str = "email";
pub const FIELD_SUBJECT_ID: &str = "subject";
pub const FIELD_MESSAGE_ID: &str = "message";

// Classes.
pub const NAV_LINK: &str = "nav-link";
pub const NAVBAR_COLLAPSE: &str = "navbar-collapse";
pub const FILTER_BUTTON: &str = "filter-btn";
pub const PORTFOLIO_ITEM: &str = "portfolio-item";
pub const PORTFOLIO_CARD: &str = "portfolio-card";
pub const SERVICE_CARD: &str = "service-card";
pub const TESTIMONIAL_ITEM: &str = "testimonial-item";
pub const TESTIMONIAL_PREV: &str = "testimonial-prev";
pub const TESTIMONIAL_NEXT: &str = "testimonial-next";
pub const TESTIMONIAL_DOTS: &str = "testimonial-dots";
pub const TESTIMONIAL_DOT: &str = "testimonial-dot";
pub const TESTIMONIALS_SLIDER: &str = "testimonials-slider";
pub const STAT_NUMBER: &str = "stat-number";
pub const STATS_SECTION: &str = "stats-section";
pub const PROGRESS_BAR: &str = "progress-bar";
pub const FORM_CONTROL: &str = "form-control";
pub const NEWSLETTER_FORM: &str = "newsletter-form";
pub const HERO_SECTION: &str = "hero-section";
pub const HERO_TITLE: &str = "hero-title";
pub const PAGE_LOADER: &str = "page-loader";
pub const CUSTOM_CURSOR: &str = "custom-cursor";

// State classes toggled by the behaviors.
pub const ACTIVE: &str = "active";
pub const SCROLLED: &str = "scrolled";
pub const HIDDEN: &str = "hidden";
pub const VISIBLE: &str = "visible";
pub const SHOW: &str = "show";
pub const LOADED: &str = "loaded";
pub const HOVER: &str = "hover";
pub const FOCUSED: &str = "focused";

// Data attributes.
pub const DATA_FILTER: &str = "data-filter";
pub const DATA_CATEGORY: &str = "data-category";
pub const DATA_TARGET: &str = "data-target";
pub const DATA_SHARE: &str = "data-share";
pub const DATA_SRC: &str = "data-src";

/// Filter value matching every gallery item.
pub const FILTER_ALL: &str = "all";

/// Build a class selector (`.name`).
pub fn class_selector(class: &str) -> String {
    format!(".{class}")
}

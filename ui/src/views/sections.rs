use dioxus::prelude::*;

use crate::core::config::{
    AboutContent, ContactContent, FooterContent, GalleryContent, HeroContent, Service, Stat,
    Testimonial,
};
use crate::hooks;

#[component]
pub fn Hero(hero: HeroContent) -> Element {
    let section_class = format!("{} d-flex align-items-center", hooks::HERO_SECTION);
    rsx! {
        section { id: "home", class: section_class,
            div { class: "container",
                h1 { class: hooks::HERO_TITLE, "{hero.title}" }
                p { class: "hero-subtitle", "{hero.subtitle}" }
                a { class: "btn btn-primary btn-lg", href: "#{hero.cta_target}", "{hero.cta_label}" }
            }
        }
    }
}

#[component]
pub fn About(about: AboutContent) -> Element {
    rsx! {
        section { id: hooks::ABOUT_ID, class: "about-section py-5",
            div { class: "container",
                h2 { class: "section-title", "{about.heading}" }
                div { class: "row",
                    div { class: "col-lg-6",
                        for paragraph in about.paragraphs.iter() {
                            p { "{paragraph}" }
                        }
                    }
                    div { class: "col-lg-6 skills",
                        for skill in about.skills.iter() {
                            div { class: "skill mb-3",
                                div { class: "d-flex justify-content-between",
                                    span { "{skill.name}" }
                                    span { "{skill.level}%" }
                                }
                                div { class: "progress",
                                    div {
                                        class: hooks::PROGRESS_BAR,
                                        role: "progressbar",
                                        style: "width: {skill.level}%",
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Services(services: Vec<Service>) -> Element {
    rsx! {
        section { id: "services", class: "services-section py-5",
            div { class: "container",
                h2 { class: "section-title", "Services" }
                div { class: "row g-4",
                    for service in services.iter() {
                        div { class: "col-md-6 col-lg-3",
                            div { class: hooks::SERVICE_CARD,
                                i { class: "{service.icon}" }
                                h3 { "{service.title}" }
                                p { "{service.summary}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Gallery(gallery: GalleryContent) -> Element {
    let item_class = format!("col-md-6 col-lg-4 {}", hooks::PORTFOLIO_ITEM);
    rsx! {
        section { id: "portfolio", class: "portfolio-section py-5",
            div { class: "container",
                h2 { class: "section-title", "Portfolio" }
                div { class: "portfolio-filters",
                    for filter in gallery.filters.iter() {
                        button {
                            r#type: "button",
                            class: filter_class(&filter.value),
                            "data-filter": "{filter.value}",
                            "{filter.label}"
                        }
                    }
                }
                div { class: "row g-4",
                    for item in gallery.items.iter() {
                        div {
                            class: item_class.clone(),
                            "data-category": "{item.category}",
                            div { class: hooks::PORTFOLIO_CARD,
                                img { "data-src": "{item.image}", alt: "{item.title}" }
                                div { class: "portfolio-overlay",
                                    h4 { "{item.title}" }
                                    p { "{item.caption}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Stats(stats: Vec<Stat>) -> Element {
    let section_class = format!("{} py-5", hooks::STATS_SECTION);
    rsx! {
        section { class: section_class,
            div { class: "container",
                div { class: "row text-center",
                    for stat in stats.iter() {
                        div { class: "col-6 col-md-3",
                            span { class: hooks::STAT_NUMBER, "data-target": "{stat.target}", "0" }
                            p { class: "stat-label", "{stat.label}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Testimonials(testimonials: Vec<Testimonial>) -> Element {
    rsx! {
        section { id: "testimonials", class: "testimonials-section py-5",
            div { class: "container",
                h2 { class: "section-title", "What Clients Say" }
                div { class: hooks::TESTIMONIALS_SLIDER,
                    for (index, testimonial) in testimonials.iter().enumerate() {
                        div {
                            class: slide_class(index),
                            blockquote { "{testimonial.quote}" }
                            p { class: "testimonial-author",
                                strong { "{testimonial.author}" }
                                span { "{testimonial.role}" }
                            }
                        }
                    }
                }
                div { class: "testimonial-controls",
                    button { r#type: "button", class: hooks::TESTIMONIAL_PREV, aria_label: "Previous",
                        i { class: "fas fa-chevron-left" }
                    }
                    div { class: hooks::TESTIMONIAL_DOTS }
                    button { r#type: "button", class: hooks::TESTIMONIAL_NEXT, aria_label: "Next",
                        i { class: "fas fa-chevron-right" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Contact(contact: ContactContent) -> Element {
    rsx! {
        section { id: "contact", class: "contact-section py-5",
            div { class: "container",
                h2 { class: "section-title", "{contact.heading}" }
                p { class: "lead", "{contact.intro}" }
                div { class: "row",
                    div { class: "col-lg-4 contact-info",
                        p { i { class: "fas fa-envelope me-2" } "{contact.email}" }
                        p { i { class: "fas fa-phone me-2" } "{contact.phone}" }
                        p { i { class: "fas fa-map-marker-alt me-2" } "{contact.location}" }
                    }
                    div { class: "col-lg-8",
                        form { id: hooks::CONTACT_FORM_ID, novalidate: true,
                            div { class: "mb-3",
                                input { id: hooks::FIELD_NAME_ID, class: hooks::FORM_CONTROL, r#type: "text", placeholder: "Your Name" }
                            }
                            div { class: "mb-3",
                                input { id: hooks::FIELD_EMAIL_ID, class: hooks::FORM_CONTROL, r#type: "email", placeholder: "Your Email" }
                            }
                            div { class: "mb-3",
                                input { id: hooks::FIELD_SUBJECT_ID, class: hooks::FORM_CONTROL, r#type: "text", placeholder: "Subject" }
                            }
                            div { class: "mb-3",
                                textarea { id: hooks::FIELD_MESSAGE_ID, class: hooks::FORM_CONTROL, rows: "5", placeholder: "Your Message" }
                            }
                            button { r#type: "submit", class: "btn btn-primary", "Send Message" }
                            div { id: hooks::FORM_MESSAGE_ID, class: "form-message", style: "display: none" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer(brand: String, footer: FooterContent) -> Element {
    rsx! {
        footer { class: "footer py-4",
            div { class: "container d-flex flex-wrap justify-content-between align-items-center",
                p { class: "mb-0", "© {brand}. {footer.note}" }
                form { class: hooks::NEWSLETTER_FORM,
                    input { class: "newsletter-input", r#type: "email", placeholder: "Your email" }
                    button { r#type: "submit", class: "btn btn-outline-light", "Subscribe" }
                }
                div { class: "social-share",
                    for platform in footer.share.iter() {
                        a {
                            href: "#",
                            "data-share": "{platform}",
                            aria_label: "Share on {platform}",
                            i { class: "fab fa-{platform}" }
                        }
                    }
                }
            }
        }
    }
}

/// The "all" filter starts selected.
fn filter_class(value: &str) -> String {
    if value == hooks::FILTER_ALL {
        format!("{} {}", hooks::FILTER_BUTTON, hooks::ACTIVE)
    } else {
        hooks::FILTER_BUTTON.to_string()
    }
}

fn slide_class(index: usize) -> String {
    if index == 0 {
        format!("{} {}", hooks::TESTIMONIAL_ITEM, hooks::ACTIVE)
    } else {
        hooks::TESTIMONIAL_ITEM.to_string()
    }
}

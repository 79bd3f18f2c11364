//! Site configuration: behavior tuning, optional effects and page content.
//!
//! Everything is read from `assets/site.toml`, embedded at compile time. Every
//! field has a default, so a partial file (or none at all) still yields a
//! working page.

use serde::{Deserialize, Serialize};

use super::error::Result;

/// Embedded site definition (ui/assets/site.toml).
pub const SITE_TOML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/site.toml"));

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub behavior: BehaviorConfig,
    pub effects: EffectsConfig,
    pub content: SiteContent,
}

impl SiteConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(SITE_TOML)
    }

    /// Embedded configuration, or defaults when it fails to parse.
    pub fn embedded_or_default() -> Self {
        match Self::embedded() {
            Ok(config) => config,
            Err(err) => {
                tracing::error!("{err}; falling back to built-in defaults");
                Self::default()
            }
        }
    }
}

/// Thresholds, offsets and durations used by the page behaviors.
/// Distances are CSS pixels, durations milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    pub nav_scrolled_threshold: f64,
    pub section_lookahead: f64,
    pub header_offset: f64,
    pub gallery_reveal_delay_ms: u64,
    pub gallery_fade_ms: u64,
    pub carousel_interval_ms: u64,
    pub swipe_threshold: f64,
    pub counter_duration_ms: u64,
    pub counter_frame_ms: u64,
    pub progress_restore_delay_ms: u64,
    pub form_message_ms: u64,
    pub simulated_send_ms: u64,
    pub scroll_top_threshold: f64,
    pub loader_fade_ms: u64,
    pub parallax_speed: f64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            nav_scrolled_threshold: 100.0,
            section_lookahead: 200.0,
            header_offset: 80.0,
            gallery_reveal_delay_ms: 10,
            gallery_fade_ms: 300,
            carousel_interval_ms: 5000,
            swipe_threshold: 50.0,
            counter_duration_ms: 2000,
            counter_frame_ms: 16,
            progress_restore_delay_ms: 100,
            form_message_ms: 5000,
            simulated_send_ms: 1500,
            scroll_top_threshold: 300.0,
            loader_fade_ms: 500,
            parallax_speed: 0.5,
        }
    }
}

/// Switches for the cosmetic handlers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub newsletter: bool,
    pub social_share: bool,
    pub cursor: bool,
    pub parallax: bool,
    pub lazy_images: bool,
    pub page_loader: bool,
    pub field_focus: bool,
    pub typewriter: TypewriterConfig,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            newsletter: true,
            social_share: true,
            cursor: true,
            parallax: true,
            lazy_images: true,
            page_loader: true,
            field_focus: true,
            typewriter: TypewriterConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub enabled: bool,
    pub prefix: String,
    pub words: Vec<String>,
    pub start_delay_ms: u64,
    pub type_ms: u64,
    pub delete_ms: u64,
    pub hold_ms: u64,
    pub next_word_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            prefix: "Professional ".to_string(),
            words: vec![
                "Virtual Assistant".to_string(),
                "Project Manager".to_string(),
                "Social Media Expert".to_string(),
                "Content Creator".to_string(),
            ],
            start_delay_ms: 2000,
            type_ms: 100,
            delete_ms: 50,
            hold_ms: 2000,
            next_word_ms: 500,
        }
    }
}

/// Copy rendered by the page view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub brand: String,
    pub hero: HeroContent,
    pub nav: Vec<NavEntry>,
    pub about: AboutContent,
    pub services: Vec<Service>,
    pub gallery: GalleryContent,
    pub stats: Vec<Stat>,
    pub testimonials: Vec<Testimonial>,
    pub contact: ContactContent,
    pub footer: FooterContent,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            brand: "Portfolio".to_string(),
            hero: HeroContent::default(),
            nav: Vec::new(),
            about: AboutContent::default(),
            services: Vec::new(),
            gallery: GalleryContent::default(),
            stats: Vec::new(),
            testimonials: Vec::new(),
            contact: ContactContent::default(),
            footer: FooterContent::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
    pub cta_target: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NavEntry {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutContent {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Percentage, 0..=100.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryContent {
    pub filters: Vec<GalleryFilter>,
    pub items: Vec<GalleryItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GalleryFilter {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryItem {
    pub title: String,
    pub category: String,
    pub image: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub target: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactContent {
    pub heading: String,
    pub intro: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterContent {
    pub note: String,
    pub share: Vec<String>,
}

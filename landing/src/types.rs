//! Content table types for the landing page.
//!
//! The page treats its copy, image paths, prices, and FAQ text as an
//! opaque read-only configuration. These types define that configuration:
//!
//! - **Serializable** - the table can be swapped out via JSON from the
//!   content pipeline without touching any component
//! - **Clone-friendly** - sections take their slice of the table by value
//! - **Trusted** - a malformed built-in table is an authoring error, not a
//!   runtime failure mode; only external JSON decoding is fallible
//!
//! # Example
//!
//! ```rust
//! use tempo_landing::types::Content;
//!
//! let json = r#"{ "name": "Tempo AI", "tagline": "", "cta_label": "Get Started",
//!     "hero": { "headline": "", "subtitle": "", "icon": "/logo.svg",
//!               "device_images": [] },
//!     "showcase_images": [],
//!     "features": [], "feature_highlights": [], "bento": [], "benefits": [],
//!     "pricing": [], "faqs": [], "testimonials": [],
//!     "cta_marquee_a": [], "cta_marquee_b": [] }"#;
//! let content = Content::from_json(json).unwrap();
//! assert_eq!(content.name, "Tempo AI");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure decoding an externally supplied content table.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content table is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Hero section copy and imagery.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    pub headline: String,
    pub subtitle: String,
    /// Brand icon shown in the shrinking badge.
    pub icon: String,
    /// Five device shots flanking the copy, left to right.
    pub device_images: Vec<String>,
}

/// One card of the features grid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub description: String,
    /// Key into the icon set (see `sections::icons`).
    pub icon: String,
}

/// Reading direction of a feature highlight row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowDirection {
    #[default]
    Ltr,
    Rtl,
}

/// A large alternating image/copy row.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureHighlight {
    pub title: String,
    pub description: String,
    pub image: String,
    pub direction: RowDirection,
}

/// One bento grid card; full-width cards span both columns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BentoItem {
    pub title: String,
    pub content: String,
    pub image: String,
    pub image_alt: String,
    pub full_width: bool,
}

/// One slide of the benefits carousel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BenefitItem {
    pub id: u32,
    pub text: String,
    pub image: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    pub period: String,
    pub description: String,
    pub features: Vec<String>,
    pub button_text: String,
    pub popular: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub text: String,
    pub name: String,
    pub role: String,
    pub image: String,
}

/// Mini-card for the call-to-action marquee wall.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarqueeCard {
    pub name: String,
    pub handle: String,
    pub avatar: String,
    pub quote: String,
}

/// The complete content table consumed by the page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub name: String,
    pub tagline: String,
    pub cta_label: String,
    pub hero: HeroContent,
    /// Device shots for the three-column showcase below the hero.
    pub showcase_images: Vec<String>,
    pub features: Vec<Feature>,
    pub feature_highlights: Vec<FeatureHighlight>,
    pub bento: Vec<BentoItem>,
    pub benefits: Vec<BenefitItem>,
    pub pricing: Vec<PricingPlan>,
    pub faqs: Vec<FaqItem>,
    pub testimonials: Vec<Testimonial>,
    pub cta_marquee_a: Vec<MarqueeCard>,
    pub cta_marquee_b: Vec<MarqueeCard>,
}

impl Content {
    /// Decode a content table supplied by the content pipeline.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_round_trips_through_json() {
        let content = crate::content::default_content();
        let json = serde_json::to_string(&content).unwrap();
        let decoded = Content::from_json(&json).unwrap();
        assert_eq!(content, decoded);
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        let err = Content::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Decode(_)));
    }

    #[test]
    fn row_direction_uses_lowercase_wire_form() {
        let ltr: RowDirection = serde_json::from_str("\"ltr\"").unwrap();
        let rtl: RowDirection = serde_json::from_str("\"rtl\"").unwrap();
        assert_eq!(ltr, RowDirection::Ltr);
        assert_eq!(rtl, RowDirection::Rtl);
    }
}

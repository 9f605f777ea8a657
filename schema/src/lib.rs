//! Shared request/response model for the `/generate-post` endpoint.
//!
//! This crate owns the JSON shape exchanged by `client` and `server`.
//! The wire format keeps the flat festival fields (`null`/`false` outside
//! festival briefs) while the Rust side models a brief's focus as a sum type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a category label is not one of [`ContentCategory::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content category: {0}")]
pub struct UnknownCategory(pub String);

// =============================================================================
// CONTENT CATEGORY
// =============================================================================

/// Kind of post being requested. Serialized as its human-readable label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentCategory {
    #[default]
    #[serde(rename = "Service Promotion")]
    ServicePromotion,
    #[serde(rename = "Brand Awareness")]
    BrandAwareness,
    #[serde(rename = "Festival / Occasion")]
    FestivalOccasion,
    #[serde(rename = "Trending Topic")]
    TrendingTopic,
    #[serde(rename = "Educational")]
    Educational,
    #[serde(rename = "Founder / Team")]
    FounderTeam,
    #[serde(rename = "Testimonial")]
    Testimonial,
    #[serde(rename = "Engagement Post")]
    EngagementPost,
}

impl ContentCategory {
    /// Every category, in selector order.
    pub const ALL: [Self; 8] = [
        Self::ServicePromotion,
        Self::BrandAwareness,
        Self::FestivalOccasion,
        Self::TrendingTopic,
        Self::Educational,
        Self::FounderTeam,
        Self::Testimonial,
        Self::EngagementPost,
    ];

    /// Wire label, e.g. `"Festival / Occasion"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ServicePromotion => "Service Promotion",
            Self::BrandAwareness => "Brand Awareness",
            Self::FestivalOccasion => "Festival / Occasion",
            Self::TrendingTopic => "Trending Topic",
            Self::Educational => "Educational",
            Self::FounderTeam => "Founder / Team",
            Self::Testimonial => "Testimonial",
            Self::EngagementPost => "Engagement Post",
        }
    }

    #[must_use]
    pub fn is_festival(self) -> bool {
        self == Self::FestivalOccasion
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContentCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

// =============================================================================
// PROFILE
// =============================================================================

/// Brand identity used to personalize generated content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub industry: String,
    pub primary_service: String,
    pub target_audience: String,
    pub tone: String,
    pub phone: String,
    pub cta: String,
    #[serde(default)]
    pub forbidden_words: Vec<String>,
}

// =============================================================================
// BRIEF
// =============================================================================

/// Festival-only details of a brief.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FestivalDetails {
    pub name: String,
    pub kind: String,
    pub cta_enabled: bool,
}

/// What a brief is about: a regular category or a festival.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BriefFocus {
    /// Any category other than [`ContentCategory::FestivalOccasion`].
    Standard(ContentCategory),
    Festival(FestivalDetails),
}

/// The content request: platform, topic and focus.
///
/// Serializes to the flat wire shape; festival fields are `null`/`false`
/// unless the focus is [`BriefFocus::Festival`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "WireBrief", from = "WireBrief")]
pub struct Brief {
    pub platform: String,
    pub topic: String,
    focus: BriefFocus,
}

impl Brief {
    /// Build a brief, reading festival details only for festival briefs.
    #[must_use]
    pub fn new(
        platform: String,
        topic: String,
        category: ContentCategory,
        festival: impl FnOnce() -> FestivalDetails,
    ) -> Self {
        let focus = if category.is_festival() {
            BriefFocus::Festival(festival())
        } else {
            BriefFocus::Standard(category)
        };
        Self { platform, topic, focus }
    }

    #[must_use]
    pub fn focus(&self) -> &BriefFocus {
        &self.focus
    }

    #[must_use]
    pub fn category(&self) -> ContentCategory {
        match &self.focus {
            BriefFocus::Standard(category) => *category,
            BriefFocus::Festival(_) => ContentCategory::FestivalOccasion,
        }
    }

    #[must_use]
    pub fn festival(&self) -> Option<&FestivalDetails> {
        match &self.focus {
            BriefFocus::Festival(details) => Some(details),
            BriefFocus::Standard(_) => None,
        }
    }

    /// Festival CTA flag; `false` for standard briefs.
    #[must_use]
    pub fn cta_enabled(&self) -> bool {
        self.festival().map_or(false, |f| f.cta_enabled)
    }
}

#[derive(Serialize, Deserialize)]
struct WireBrief {
    platform: String,
    content_category: ContentCategory,
    topic: String,
    #[serde(default)]
    festival_name: Option<String>,
    #[serde(default)]
    festival_type: Option<String>,
    #[serde(default)]
    cta_enabled: Option<bool>,
}

impl From<Brief> for WireBrief {
    fn from(brief: Brief) -> Self {
        let content_category = brief.category();
        let (festival_name, festival_type, cta_enabled) = match brief.focus {
            BriefFocus::Festival(f) => (Some(f.name), Some(f.kind), f.cta_enabled),
            BriefFocus::Standard(_) => (None, None, false),
        };
        Self {
            platform: brief.platform,
            content_category,
            topic: brief.topic,
            festival_name,
            festival_type,
            cta_enabled: Some(cta_enabled),
        }
    }
}

impl From<WireBrief> for Brief {
    fn from(wire: WireBrief) -> Self {
        let WireBrief { platform, content_category, topic, festival_name, festival_type, cta_enabled } = wire;
        Self::new(platform, topic, content_category, || FestivalDetails {
            name: festival_name.unwrap_or_default(),
            kind: festival_type.unwrap_or_default(),
            cta_enabled: cta_enabled.unwrap_or(false),
        })
    }
}

// =============================================================================
// REQUEST / RESPONSE
// =============================================================================

/// Free-form agency guidance appended to the prompt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgencyInstructions {
    #[serde(default)]
    pub extra_instructions: Option<String>,
}

/// Body of `POST /generate-post`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub profile: Profile,
    pub brief: Brief,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<AgencyInstructions>,
}

/// Generated content bundle returned by `POST /generate-post`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub headline: String,
    pub caption: String,
    pub cta: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    pub design_prompt: String,
    /// Server-side path of a generated image, if any.
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub cost_metadata: Option<serde_json::Value>,
}

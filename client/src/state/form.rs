//! Generator form view-model.
//!
//! DESIGN
//! ======
//! The form inputs are bound to a single `GeneratorForm` value held in a
//! signal. Submission reads this model instead of querying elements, and the
//! festival panel visibility is derived from the selected category.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use schema::{Brief, ContentCategory, FestivalDetails, GenerationRequest, Profile};

/// Current values of every generator form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratorForm {
    pub brand_name: String,
    pub industry: String,
    pub primary_service: String,
    pub target_audience: String,
    pub brand_tone: String,
    pub brand_phone: String,
    pub cta: String,
    pub platform: String,
    pub topic: String,
    pub category: ContentCategory,
    pub festival_name: String,
    pub festival_type: String,
    pub cta_enabled: bool,
}

impl GeneratorForm {
    /// Whether the festival-detail panel is shown.
    pub fn festival_visible(&self) -> bool {
        self.category.is_festival()
    }

    /// Apply a category selector change. Unknown labels keep the current category.
    pub fn select_category(&mut self, label: &str) {
        if let Ok(category) = label.parse() {
            self.category = category;
        }
    }

    /// Build the `/generate-post` payload from the current inputs.
    ///
    /// Blank inputs are sent as empty strings; festival inputs are only
    /// read when the festival category is selected.
    pub fn to_request(&self) -> GenerationRequest {
        let profile = Profile {
            name: self.brand_name.clone(),
            industry: self.industry.clone(),
            primary_service: self.primary_service.clone(),
            target_audience: self.target_audience.clone(),
            tone: self.brand_tone.clone(),
            phone: self.brand_phone.clone(),
            cta: self.cta.clone(),
            forbidden_words: Vec::new(),
        };
        let brief = Brief::new(self.platform.clone(), self.topic.clone(), self.category, || FestivalDetails {
            name: self.festival_name.clone(),
            kind: self.festival_type.clone(),
            cta_enabled: self.cta_enabled,
        });
        GenerationRequest { profile, brief, instructions: None }
    }
}

/// Free-text inputs of the generator form, keyed by their element ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    BrandName,
    Industry,
    PrimaryService,
    TargetAudience,
    BrandTone,
    BrandPhone,
    Cta,
    Platform,
    Topic,
    FestivalName,
    FestivalType,
}

impl TextField {
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::BrandName => "brand-name",
            Self::Industry => "industry",
            Self::PrimaryService => "primary-service",
            Self::TargetAudience => "target-audience",
            Self::BrandTone => "brand-tone",
            Self::BrandPhone => "brand-phone",
            Self::Cta => "cta",
            Self::Platform => "platform",
            Self::Topic => "topic",
            Self::FestivalName => "festival-name",
            Self::FestivalType => "festival-type",
        }
    }

    pub fn value(self, form: &GeneratorForm) -> &str {
        match self {
            Self::BrandName => &form.brand_name,
            Self::Industry => &form.industry,
            Self::PrimaryService => &form.primary_service,
            Self::TargetAudience => &form.target_audience,
            Self::BrandTone => &form.brand_tone,
            Self::BrandPhone => &form.brand_phone,
            Self::Cta => &form.cta,
            Self::Platform => &form.platform,
            Self::Topic => &form.topic,
            Self::FestivalName => &form.festival_name,
            Self::FestivalType => &form.festival_type,
        }
    }

    pub fn set(self, form: &mut GeneratorForm, value: String) {
        let slot = match self {
            Self::BrandName => &mut form.brand_name,
            Self::Industry => &mut form.industry,
            Self::PrimaryService => &mut form.primary_service,
            Self::TargetAudience => &mut form.target_audience,
            Self::BrandTone => &mut form.brand_tone,
            Self::BrandPhone => &mut form.brand_phone,
            Self::Cta => &mut form.cta,
            Self::Platform => &mut form.platform,
            Self::Topic => &mut form.topic,
            Self::FestivalName => &mut form.festival_name,
            Self::FestivalType => &mut form.festival_type,
        };
        *slot = value;
    }
}

/// Parse the `cta-enabled` selector value. Only `"true"` enables the CTA.
pub fn parse_cta_enabled(value: &str) -> bool {
    value == "true"
}

//! Prompt assembly: profile + brief → plain-text LLM prompt.
//!
//! DESIGN
//! ======
//! The model is asked for a fixed plain-text layout (`Headline:`, `Caption:`,
//! `CTA:`, `Hashtags:`, `IMAGE PROMPT`) that `services::parse` reads back.
//! Category-specific guidance is appended as internal instructions.

use std::fmt::Write;

use schema::{AgencyInstructions, Brief, ContentCategory, Profile};

const PREAMBLE: &str = "\
You are a senior social media strategist and creative director
working inside a professional social media marketing platform.

Your job is to generate HIGH-QUALITY, ACCURATE, READY-TO-USE
social media content for brands.

STRICT RULES (NON-NEGOTIABLE):
1. You MUST ALWAYS generate TWO THINGS:
   a) Post text content
   b) Image generation prompt

2. You must NEVER generate images.
3. You must NEVER return JSON.
4. You must NEVER explain your output.
5. You must NEVER include placeholders like XXXXX or dummy numbers.
6. Follow the brand details EXACTLY as provided.
7. Do NOT modify brand name, phone number, or CTA text.
8. Adapt tone, writing style, and visuals strictly based on Content Category.
9. Avoid spam, exaggeration, clickbait, or excessive emojis.
10. Output must be clean, professional, and ready to copy-paste.
";

const OUTPUT_FORMAT: &str = "\
REQUIRED OUTPUT FORMAT (STRICT - PLAIN TEXT ONLY):

Your response MUST follow this structure exactly:

POST TEXT
Headline:
<one clear, professional headline>

Caption:
<clean, well-written caption aligned with content category>

CTA:
<include CTA only if applicable>

Hashtags:
<relevant, non-spammy hashtags>


IMAGE PROMPT
Create a professional 1080x1080 social media post design with
<clear visual description>.
The style should match the brand tone and content category.
Mention colors, layout, mood, and visual elements clearly.
The design must be clean, modern, premium, and uncluttered.

REMEMBER:
- NO JSON format
- NO placeholders or dummy data
- Brand details must be EXACT
- Output must be ready to copy-paste
- Follow content category behavior strictly
";

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Build the full generation prompt.
#[must_use]
pub fn assemble_prompt(profile: &Profile, brief: &Brief, instructions: Option<&AgencyInstructions>) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(PREAMBLE);

    let _ = write!(
        out,
        "\nBRAND DETAILS:\n\
         Brand Name: {}\n\
         Industry: {}\n\
         Primary Service: {}\n\
         Target Audience: {}\n\
         Brand Tone: {}\n\
         Phone Number / CTA Contact: {}\n\
         CTA Text: {}\n",
        profile.name,
        profile.industry,
        profile.primary_service,
        profile.target_audience,
        profile.tone,
        profile.phone,
        profile.cta,
    );

    let _ = write!(
        out,
        "\nCONTENT DETAILS:\n\
         Platform: {}\n\
         Content Category: {}\n\
         Topic / Goal: {}\n",
        brief.platform,
        brief.category(),
        brief.topic,
    );

    if let Some(festival) = brief.festival() {
        let _ = write!(
            out,
            "\nFESTIVAL DETAILS:\n\
             Festival Name: {}\n\
             Festival Type: {}\n\
             CTA Enabled: {}\n",
            festival.name,
            festival.kind,
            yes_no(festival.cta_enabled),
        );
    }

    let _ = write!(
        out,
        "\nCONTENT CATEGORY BEHAVIOR (INTERNAL LOGIC):\n{}\n\n",
        category_behavior(brief.category(), brief.cta_enabled()),
    );
    out.push_str(OUTPUT_FORMAT);

    if let Some(extra) = instructions
        .and_then(|i| i.extra_instructions.as_deref())
        .filter(|s| !s.trim().is_empty())
    {
        let _ = write!(out, "\n\nADDITIONAL INSTRUCTIONS:\n{extra}\n");
    }

    out
}

/// Writing guidance for one content category.
#[must_use]
pub fn category_behavior(category: ContentCategory, cta_enabled: bool) -> String {
    let lines: &[&str] = match category {
        ContentCategory::ServicePromotion => &[
            "Focus on benefits, growth, leads, ROI",
            "CTA should be strong and clear",
            "Highlight results and transformation",
            "Professional and persuasive tone",
        ],
        ContentCategory::BrandAwareness => &[
            "Focus on trust, positioning, credibility",
            "CTA is soft or optional",
            "Build brand reputation and authority",
            "Emphasize values and mission",
        ],
        ContentCategory::FestivalOccasion => {
            return format!(
                "- Mention the specific festival explicitly\n\
                 - Emotional, respectful, culturally appropriate\n\
                 - NO selling language\n\
                 - CTA only if CTA Enabled = Yes (currently: {})\n\
                 - Warm, celebratory, and genuine tone\n\
                 - Focus on wishes and celebration, not promotion",
                yes_no(cta_enabled)
            );
        }
        ContentCategory::TrendingTopic => &[
            "Opinionated, expert, insightful",
            "Position brand as knowledgeable",
            "Add value to the conversation",
            "Thought leadership tone",
        ],
        ContentCategory::Educational => &[
            "Teach ONE clear idea",
            "Encourage save, learn, or awareness",
            "Minimal CTA",
            "Helpful and informative tone",
            "Break down complex topics simply",
        ],
        ContentCategory::FounderTeam => &[
            "Human, authentic, trust-building",
            "No selling tone",
            "Share story, journey, or behind-the-scenes",
            "Personal and relatable",
        ],
        ContentCategory::Testimonial => &[
            "Social proof, confidence, credibility",
            "Professional tone",
            "Real results and experiences",
            "Build trust through customer success",
        ],
        ContentCategory::EngagementPost => &[
            "Ask a clear question",
            "Encourage comments or interaction",
            "NO selling",
            "Conversational and inviting tone",
            "Make audience feel heard",
        ],
    };
    lines
        .iter()
        .map(|line| format!("- {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "prompt_test.rs"]
mod prompt_test;

//! Prompt templates for Arv.
//!
//! Prompts can be customized by placing TOML files in the custom prompts directory.
//! Templates use `{{variable}}` placeholders; the pipeline supplies `query`,
//! `site`, `category` and `research` depending on the stage.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Prompts {
    pub categorizer: CategorizerPrompts,
    pub research: ResearchPrompts,
    pub writer: WriterPrompts,
    /// Custom variables from config, available in all prompts.
    #[serde(skip)]
    pub variables: std::collections::HashMap<String, String>,
}

/// Prompt for the categorization step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CategorizerPrompts {
    pub instructions: String,
}

impl Default for CategorizerPrompts {
    fn default() -> Self {
        Self {
            instructions: r#"You are a categorizer for natural-language questions about heritage and historical sites.

Extract structured metadata from the question and return a strictly valid JSON object in this format:

{
  "category": "<One of: General Information, Location & Accessibility, Visiting Hours & Timing, Tickets & Pricing, Historical & Cultural Insights, Visitor Tips & Rules, Facilities & Nearby Attractions, Custom Experience, Comparison & Recommendations, Language & Culture>",
  "site": "<The name of the heritage site mentioned, if any. If none is specified, write 'Unknown'>",
  "intent": "<A short natural-language phrase explaining what the user wants to know or achieve>",
  "question_type": "<One of: fact, opinion, recommendation, instruction, comparison, clarification>"
}

Rules:
- Use exactly one category per question.
- Focus only on heritage, tourism and historical topics.
- Keep your output strictly in raw JSON (no markdown, no code block).
- Do not explain or narrate anything outside the JSON object.
- If the site is not mentioned, set "site" to "Unknown".

Now categorize the following question:
"{{query}}""#
                .to_string(),
        }
    }
}

/// Research instruction templates, one per category.
///
/// Each template describes the target JSON schema for its category and is
/// rendered with `{{query}}` (the original question) and `{{site}}` (the
/// site name the categorizer extracted).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchPrompts {
    pub general: String,
    pub location: String,
    pub hours: String,
    pub tickets: String,
    pub history: String,
    pub tips: String,
    pub facilities: String,
    pub experience: String,
    pub comparison: String,
    pub language: String,
}

impl Default for ResearchPrompts {
    fn default() -> Self {
        Self {
            general: r#"You are a research agent gathering GENERAL INFORMATION about heritage sites.

Search the web and extract clear, accurate facts about the site. Do not narrate, assume, or summarize creatively. Do not include opinions, user reviews, or travel-blog content.

Question: {{query}}
Site: {{site}}

Collect:
- Full name of the site
- Country and city or region
- Year of establishment or recognition
- Who built or founded it (if applicable)
- Historical significance
- Cultural importance
- UNESCO World Heritage status (yes/no and year)
- Official website (if available)

Output format (strict JSON):
{
  "site": "...",
  "location": { "country": "...", "city_or_region": "..." },
  "established_year": "...",
  "founded_by": "...",
  "historical_significance": "...",
  "cultural_importance": "...",
  "unesco_status": { "is_unesco_site": true, "designation_year": "..." },
  "official_website": "..."
}

Rules:
- Use only verifiable information from credible sources (UNESCO, official tourism boards, government sites).
- Never invent facts. If data is missing, use "unknown" or null.
- Output only the final JSON object, no extra text."#
                .to_string(),

            location: r#"You are a research agent gathering LOCATION & ACCESSIBILITY information about heritage sites.

Search the web and extract details that help a visitor understand where the site is and how to reach it.

Question: {{query}}
Site: {{site}}

Collect:
- Country and state/region
- Nearest major city or airport
- Transportation modes to the site (road, rail, air)
- Accessibility status (wheelchair accessible, senior-friendly)
- Distance from the nearest major city
- Geo-coordinates (latitude and longitude)

Output format (strict JSON):
{
  "site": "...",
  "location": {
    "country": "...",
    "state_or_region": "...",
    "nearest_major_city": "...",
    "distance_from_city_km": "...",
    "geo_coordinates": { "latitude": "...", "longitude": "..." }
  },
  "transportation": {
    "available_modes": ["road", "rail", "air"],
    "nearest_airport": "...",
    "nearest_rail_station": "..."
  },
  "accessibility": { "wheelchair_accessible": true, "senior_friendly": true, "note": "..." }
}

Rules:
- Use only factual information from reliable sources (official tourism boards, transit authorities).
- Do not speculate. If a data point is unavailable, use "unknown" or null.
- Output only the final JSON object, nothing else."#
                .to_string(),

            hours: r#"You are a research agent gathering VISITING HOURS & TIMING information about heritage sites.

Search the web and extract structured information so travelers know when they can visit.

Question: {{query}}
Site: {{site}}

Collect:
- Opening and closing times per weekday (note seasonal variations)
- Last entry time (if applicable)
- Holidays or closed days
- Time zone of the site
- Average visit duration
- Night entry or evening programs (if applicable)

Output format (strict JSON):
{
  "site": "...",
  "timing": {
    "time_zone": "...",
    "weekly_schedule": {
      "monday": { "open": "...", "close": "..." },
      "tuesday": { "open": "...", "close": "..." },
      "wednesday": { "open": "...", "close": "..." },
      "thursday": { "open": "...", "close": "..." },
      "friday": { "open": "...", "close": "..." },
      "saturday": { "open": "...", "close": "..." },
      "sunday": { "open": "...", "close": "..." }
    },
    "last_entry_time": "...",
    "closed_on": ["..."],
    "special_events": { "night_entry_available": true, "description": "..." },
    "average_visit_duration": "..."
  }
}

Rules:
- Use only official tourism websites or the site's own pages.
- No tips, suggestions, or opinions.
- If data is missing, use "unknown" or null.
- Output only the structured JSON response."#
                .to_string(),

            tickets: r#"You are a research agent gathering TICKETS & PRICING information about heritage sites.

Search the web and collect entry costs, booking methods and ticketing rules.

Question: {{query}}
Site: {{site}}

Collect:
- Entry prices for adults, children and seniors (local and foreign)
- Ticket categories (guided tour, group, fast track)
- Discounts or free-entry policies (students, disabled, residents)
- Online booking options and on-site purchase availability
- Currency used
- Extra charges (camera fees, parking, special exhibitions)
- Ticket validity duration

Output format (strict JSON):
{
  "site": "...",
  "ticketing": {
    "currency": "...",
    "pricing": {
      "local_adult": "...", "local_child": "...", "local_senior": "...",
      "foreign_adult": "...", "foreign_child": "...", "foreign_senior": "..."
    },
    "ticket_types": [ { "type": "...", "price": "...", "includes": "..." } ],
    "discounts": { "available_for": ["..."], "details": "..." },
    "booking": { "online_available": true, "official_website": "...", "on_site_purchase": true },
    "additional_charges": { "camera_fee": "...", "parking_fee": "...", "special_exhibit_fee": "..." },
    "ticket_validity": "..."
  }
}

Rules:
- Pull data only from official or credible sources.
- No opinions, promotions, or tips.
- If any info is not available, use "unknown" or null.
- Output only the final JSON object."#
                .to_string(),

            history: r#"You are a research agent gathering HISTORICAL & CULTURAL INSIGHTS about heritage sites.

Extract factual data explaining the site's origins, cultural relevance, associated traditions and historical events.

Question: {{query}}
Site: {{site}}

Collect:
- Founding history and construction timeline
- Historical significance (events, periods, dynasties, empires)
- Key architectural or cultural features
- Religious, spiritual, or ceremonial relevance
- Widely cited myths, folklore, or legends
- UNESCO status and the reason for designation
- Notable restoration efforts

Output format (strict JSON):
{
  "site": "...",
  "historical_background": {
    "founded_in": "...",
    "built_by": "...",
    "construction_period": "...",
    "historical_events": ["..."],
    "dynasties_or_empires": ["..."],
    "unesco_status": { "designated": true, "year": "...", "reason": "..." }
  },
  "cultural_significance": {
    "religious_importance": "...",
    "myths_and_legends": "...",
    "ceremonial_use": "...",
    "architectural_features": ["..."]
  },
  "restoration_and_conservation": {
    "major_restoration_years": ["..."],
    "preservation_status": "...",
    "governing_body": "..."
  }
}

Rules:
- Use only factual, credible sources (UNESCO, heritage organizations, history archives).
- Never invent or assume. If a field is unavailable, use "unknown" or null.
- No personal interpretation or opinion.
- Output only the final JSON object."#
                .to_string(),

            tips: r#"You are a research agent gathering VISITOR TIPS & RULES for heritage sites.

Collect practical, official, up-to-date information that helps tourists prepare for a visit while respecting local customs and regulations.

Question: {{query}}
Site: {{site}}

Collect:
- General visitor guidelines or rules
- Dress code (if any)
- Photography or videography restrictions
- Items allowed or prohibited inside the site
- Conduct expectations
- Safety advice
- Peak hours to avoid and best times to visit
- Official warnings or temporary restrictions

Output format (strict JSON):
{
  "site": "...",
  "rules": {
    "dress_code": "...",
    "photography_allowed": true,
    "videography_allowed": false,
    "prohibited_items": ["..."],
    "conduct_guidelines": ["..."]
  },
  "tips": {
    "best_visit_times": "...",
    "peak_hours_to_avoid": "...",
    "safety_advice": ["..."],
    "family_friendly": true,
    "elderly_friendly": true
  },
  "notices": { "temporary_restrictions": "...", "special_guidelines": "..." }
}

Rules:
- Use only verified and official sources (government tourism sites, site management authorities).
- No user-generated content or personal opinions.
- If information is unavailable, use "unknown" or null.
- Output only the structured JSON object."#
                .to_string(),

            facilities: r#"You are a research agent gathering FACILITIES & NEARBY ATTRACTIONS information about heritage sites.

Help visitors understand what amenities are available on-site and what notable attractions are nearby.

Question: {{query}}
Site: {{site}}

Collect:
- On-site facilities (restrooms, drinking water, food courts, guided tour booths, wheelchair ramps)
- Parking availability
- Nearest accommodations within 5-10 km
- Emergency services nearby (hospitals, police)
- Notable attractions within 15-20 km
- Visitor centers or help desks

Output format (strict JSON):
{
  "site": "...",
  "facilities": {
    "restrooms": true,
    "drinking_water": true,
    "food_courts": true,
    "guided_tour_services": true,
    "wheelchair_access": true,
    "parking_available": true,
    "visitor_center": true
  },
  "nearby_accommodations": [ { "name": "...", "type": "hotel/homestay/lodge", "distance_km": "..." } ],
  "emergency_services": {
    "nearest_hospital": "...", "hospital_distance_km": "...",
    "police_station": "...", "police_distance_km": "..."
  },
  "nearby_attractions": [ { "name": "...", "type": "temple/museum/park", "distance_km": "..." } ]
}

Rules:
- Rely only on reliable, verifiable sources (maps providers, official tourism sites, local listings).
- Do not speculate. If information is not available, use "unknown" or null.
- Facts only; no suggestions, reviews, or tips.
- Output only the structured JSON."#
                .to_string(),

            experience: r#"You are a research agent gathering CUSTOM EXPERIENCE options for heritage sites.

Extract data that helps travelers design a personalized, meaningful visit.

Question: {{query}}
Site: {{site}}

Collect:
- Available guided tours (official, private, or themed)
- Exclusive experiences (sunrise/sunset viewing, local rituals, behind-the-scenes access)
- Activities tailored for families, solo travelers, or seniors
- Seasonal or time-specific experiences (festivals, events, exhibitions)
- Booking channels for custom packages

Output format (strict JSON):
{
  "site": "...",
  "custom_experiences": {
    "guided_tours": [ { "name": "...", "type": "official/private/themed", "duration_hours": "...", "booking_link": "..." } ],
    "exclusive_experiences": [ { "name": "...", "description": "...", "best_time": "..." } ],
    "tailored_activities": { "for_families": "...", "for_solo_travelers": "...", "for_seniors": "..." },
    "seasonal_events": [ { "event_name": "...", "description": "...", "season": "..." } ],
    "booking_channels": ["..."]
  }
}

Rules:
- Use only verified sources: tourism boards, official tour sites, licensed operators.
- Avoid opinions, marketing phrases, or general travel advice.
- Use "unknown" or null if a field cannot be found.
- Output nothing outside the structured JSON block."#
                .to_string(),

            comparison: r#"You are a research agent gathering COMPARISONS and RECOMMENDATIONS involving heritage sites.

Extract factual, non-opinionated comparisons between the given site and similar or nearby heritage sites, and suggest related sites worth visiting based on location, theme, or cultural context.

Question: {{query}}
Site: {{site}}

Collect:
- Comparisons with similar sites (architecture, time period, cultural significance, visitor experience)
- Key similarities and differences
- Recommended alternative or complementary sites
- The reason for each recommendation

Output format (strict JSON):
{
  "site": "...",
  "comparisons": [ { "compared_with": "...", "similarities": ["..."], "differences": ["..."] } ],
  "recommendations": [ { "site_name": "...", "location": "...", "reason_for_recommendation": "..." } ]
}

Rules:
- Use only factual data from reliable sources (UNESCO, heritage tourism boards, historical records).
- No subjective opinions or traveler reviews.
- If comparison data is limited, keep fields minimal or use "unknown" or null.
- Return only the final JSON block, no narrative content."#
                .to_string(),

            language: r#"You are a research agent gathering LANGUAGE & CULTURE information for heritage sites.

Extract accurate data that helps a visitor understand the linguistic and cultural context of the site.

Question: {{query}}
Site: {{site}}

Collect:
- Primary and secondary languages spoken in the region
- Local dialects or indigenous languages
- Cultural practices and traditions associated with the site or region
- Festivals, rituals, or events held at or near the site
- Religious or spiritual significance (if applicable)
- Etiquette expectations for visitors (dress code, greetings, taboos)

Output format (strict JSON):
{
  "site": "...",
  "language": {
    "primary": "...",
    "secondary": ["..."],
    "local_dialects": ["..."]
  },
  "culture": {
    "associated_traditions": ["..."],
    "festivals_or_rituals": ["..."],
    "religious_significance": "...",
    "visitor_etiquette": ["..."]
  }
}

Rules:
- Use only verifiable sources (cultural tourism boards, local government, UNESCO, academic sources).
- Do not generate folklore, speculative traditions, or fictional details.
- If information is not available, use "unknown" or null.
- Return only the structured JSON."#
                .to_string(),
        }
    }
}

/// Prompt for the writing step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterPrompts {
    pub instructions: String,
}

impl Default for WriterPrompts {
    fn default() -> Self {
        Self {
            instructions: r#"You are a professional travel and culture content writer.

Convert structured research data into a clear, polished description for readers interested in visiting or learning about heritage sites. Write professionally, avoid fluff or exaggeration, and stick strictly to the provided facts.

Research data:
{{research}}

Instructions:
1. Use only the data given above. Do not make up any facts.
2. Reword it into a smooth, readable paragraph or bullet format, whichever suits the content.
3. If a data field is missing or marked "unknown", omit it from the output.
4. For list-type data (features, traditions), use bullet points for readability.
5. Maintain category context: write in a voice appropriate for {{category}} content.

Output format:
A short, clean piece of text (max 200 words) that is well-organized, faithful to the data, and ready to publish on a heritage information page.

Now write a polished informational passage for the category {{category}} at {{site}} using the data above."#
                .to_string(),
        }
    }
}

impl Prompts {
    /// Load prompts from the default templates, with optional custom directory and variables.
    pub fn load(
        custom_dir: Option<&str>,
        custom_variables: Option<&std::collections::HashMap<String, String>>,
    ) -> crate::error::Result<Self> {
        let mut prompts = Prompts::default();

        if let Some(vars) = custom_variables {
            prompts.variables = vars.clone();
        }

        if let Some(dir) = custom_dir {
            let custom_path = PathBuf::from(shellexpand::tilde(dir).to_string());

            let categorizer_path = custom_path.join("categorizer.toml");
            if categorizer_path.exists() {
                let content = std::fs::read_to_string(&categorizer_path)?;
                prompts.categorizer = toml::from_str(&content)?;
            }

            let research_path = custom_path.join("research.toml");
            if research_path.exists() {
                let content = std::fs::read_to_string(&research_path)?;
                prompts.research = toml::from_str(&content)?;
            }

            let writer_path = custom_path.join("writer.toml");
            if writer_path.exists() {
                let content = std::fs::read_to_string(&writer_path)?;
                prompts.writer = toml::from_str(&content)?;
            }
        }

        Ok(prompts)
    }

    /// Render a prompt template with the given variables.
    pub fn render(template: &str, vars: &std::collections::HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{{{}}}}}", key), value);
        }
        result
    }

    /// Render a prompt template with both provided variables and custom config variables.
    /// Provided variables take precedence over custom config variables.
    pub fn render_with_custom(
        &self,
        template: &str,
        vars: &std::collections::HashMap<String, String>,
    ) -> String {
        let mut merged = self.variables.clone();
        for (key, value) in vars {
            merged.insert(key.clone(), value.clone());
        }
        Self::render(template, &merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompts_nonempty() {
        let prompts = Prompts::default();
        assert!(!prompts.categorizer.instructions.is_empty());
        assert!(!prompts.research.general.is_empty());
        assert!(!prompts.writer.instructions.is_empty());
    }

    #[test]
    fn test_categorizer_prompt_lists_all_labels() {
        let prompts = Prompts::default();
        for label in [
            "General Information",
            "Location & Accessibility",
            "Visiting Hours & Timing",
            "Tickets & Pricing",
            "Historical & Cultural Insights",
            "Visitor Tips & Rules",
            "Facilities & Nearby Attractions",
            "Custom Experience",
            "Comparison & Recommendations",
            "Language & Culture",
        ] {
            assert!(
                prompts.categorizer.instructions.contains(label),
                "missing label: {}",
                label
            );
        }
    }

    #[test]
    fn test_research_templates_carry_placeholders() {
        let research = ResearchPrompts::default();
        for template in [
            &research.general,
            &research.location,
            &research.hours,
            &research.tickets,
            &research.history,
            &research.tips,
            &research.facilities,
            &research.experience,
            &research.comparison,
            &research.language,
        ] {
            assert!(template.contains("{{query}}"));
            assert!(template.contains("{{site}}"));
        }
    }

    #[test]
    fn test_render_template() {
        let template = "Question about {{site}}: {{query}}";
        let mut vars = std::collections::HashMap::new();
        vars.insert("site".to_string(), "Taj Mahal".to_string());
        vars.insert("query".to_string(), "when was it built?".to_string());

        let result = Prompts::render(template, &vars);
        assert_eq!(result, "Question about Taj Mahal: when was it built?");
    }

    #[test]
    fn test_render_with_custom_precedence() {
        let mut prompts = Prompts::default();
        prompts
            .variables
            .insert("site".to_string(), "Unknown".to_string());

        let mut vars = std::collections::HashMap::new();
        vars.insert("site".to_string(), "Acropolis".to_string());

        let result = prompts.render_with_custom("Visit {{site}}", &vars);
        assert_eq!(result, "Visit Acropolis");
    }
}

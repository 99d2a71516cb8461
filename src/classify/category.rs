//! Closed category and question-type vocabularies.
//!
//! The categorizer and the pipeline dispatch share these enums, so a category
//! string outside the ten permitted labels fails at parse time instead of
//! leaving the dispatch without a matching arm.

use crate::error::ArvError;
use serde::{Deserialize, Serialize};

/// Topic category for a heritage-site question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "General Information")]
    GeneralInformation,
    #[serde(rename = "Location & Accessibility")]
    LocationAccessibility,
    #[serde(rename = "Visiting Hours & Timing")]
    VisitingHours,
    #[serde(rename = "Tickets & Pricing")]
    TicketsPricing,
    #[serde(rename = "Historical & Cultural Insights")]
    HistoricalInsights,
    #[serde(rename = "Visitor Tips & Rules")]
    VisitorTips,
    #[serde(rename = "Facilities & Nearby Attractions")]
    Facilities,
    #[serde(rename = "Custom Experience")]
    CustomExperience,
    #[serde(rename = "Comparison & Recommendations")]
    Comparison,
    #[serde(rename = "Language & Culture")]
    LanguageCulture,
}

impl Category {
    /// All ten categories, in the order the categorizer prompt lists them.
    pub const ALL: [Category; 10] = [
        Category::GeneralInformation,
        Category::LocationAccessibility,
        Category::VisitingHours,
        Category::TicketsPricing,
        Category::HistoricalInsights,
        Category::VisitorTips,
        Category::Facilities,
        Category::CustomExperience,
        Category::Comparison,
        Category::LanguageCulture,
    ];

    /// The wire label for this category (the string the model returns).
    pub fn label(&self) -> &'static str {
        match self {
            Category::GeneralInformation => "General Information",
            Category::LocationAccessibility => "Location & Accessibility",
            Category::VisitingHours => "Visiting Hours & Timing",
            Category::TicketsPricing => "Tickets & Pricing",
            Category::HistoricalInsights => "Historical & Cultural Insights",
            Category::VisitorTips => "Visitor Tips & Rules",
            Category::Facilities => "Facilities & Nearby Attractions",
            Category::CustomExperience => "Custom Experience",
            Category::Comparison => "Comparison & Recommendations",
            Category::LanguageCulture => "Language & Culture",
        }
    }

    /// An example question for this category.
    pub fn example_query(&self) -> &'static str {
        match self {
            Category::GeneralInformation => "Tell me about the Taj Mahal.",
            Category::LocationAccessibility => "Where is Angkor Wat located?",
            Category::VisitingHours => "What are the opening hours of the Louvre?",
            Category::TicketsPricing => "How much is the entry fee for the Acropolis?",
            Category::HistoricalInsights => "Who built the Pyramids of Giza and why?",
            Category::VisitorTips => "What should I wear when visiting the Golden Temple?",
            Category::Facilities => "What can I see near the Eiffel Tower?",
            Category::CustomExperience => "Can I get a private tour of the Red Fort?",
            Category::Comparison => "Which is better to visit, Hampi or Badami?",
            Category::LanguageCulture => "What language is spoken at Hampi?",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = ArvError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| ArvError::UnknownCategory(s.to_string()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Rhetorical form of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Fact,
    Opinion,
    Recommendation,
    Instruction,
    Comparison,
    Clarification,
}

impl std::str::FromStr for QuestionType {
    type Err = ArvError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fact" => Ok(QuestionType::Fact),
            "opinion" => Ok(QuestionType::Opinion),
            "recommendation" => Ok(QuestionType::Recommendation),
            "instruction" => Ok(QuestionType::Instruction),
            "comparison" => Ok(QuestionType::Comparison),
            "clarification" => Ok(QuestionType::Clarification),
            _ => Err(ArvError::UnknownQuestionType(s.to_string())),
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            QuestionType::Fact => "fact",
            QuestionType::Opinion => "opinion",
            QuestionType::Recommendation => "recommendation",
            QuestionType::Instruction => "instruction",
            QuestionType::Comparison => "comparison",
            QuestionType::Clarification => "clarification",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_label_parses_back() {
        for category in Category::ALL {
            let parsed: Category = category.label().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let result = "Weather Forecast".parse::<Category>();
        assert!(matches!(result, Err(ArvError::UnknownCategory(_))));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let parsed: Category = "tickets & pricing".parse().unwrap();
        assert_eq!(parsed, Category::TicketsPricing);
    }

    #[test]
    fn test_exactly_ten_categories() {
        assert_eq!(Category::ALL.len(), 10);
        let labels: std::collections::HashSet<_> =
            Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels.len(), 10);
    }

    #[test]
    fn test_example_queries_are_distinct() {
        let queries: std::collections::HashSet<_> =
            Category::ALL.iter().map(|c| c.example_query()).collect();
        assert_eq!(queries.len(), 10);
    }

    #[test]
    fn test_question_type_parses_all_six() {
        for name in [
            "fact",
            "opinion",
            "recommendation",
            "instruction",
            "comparison",
            "clarification",
        ] {
            assert!(name.parse::<QuestionType>().is_ok());
        }
        assert!(matches!(
            "rant".parse::<QuestionType>(),
            Err(ArvError::UnknownQuestionType(_))
        ));
    }

    #[test]
    fn test_category_serde_uses_labels() {
        let json = serde_json::to_string(&Category::TicketsPricing).unwrap();
        assert_eq!(json, "\"Tickets & Pricing\"");
        let parsed: Category = serde_json::from_str("\"Language & Culture\"").unwrap();
        assert_eq!(parsed, Category::LanguageCulture);
    }
}

use first_agent_core::tool::{Error as ToolError, Tool, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

type Entry = (&'static str, &'static str);

static RECOMMENDATIONS: &[(&str, [Entry; 3])] = &[
    (
        "movie",
        [
            (
                "The Shawshank Redemption",
                "A timeless classic about hope and friendship",
            ),
            ("Inception", "Mind-bending sci-fi thriller"),
            ("Parasite", "Award-winning social commentary"),
        ],
    ),
    (
        "restaurant",
        [
            ("The Italian Corner", "Authentic pasta and cozy atmosphere"),
            ("Sushi Master", "Fresh sushi and modern ambiance"),
            ("Green Leaf", "Healthy vegetarian options"),
        ],
    ),
    (
        "book",
        [
            ("Project Hail Mary", "Exciting sci-fi adventure"),
            ("Atomic Habits", "Practical guide to building good habits"),
            ("The Midnight Library", "Thought-provoking fiction"),
        ],
    ),
];

#[derive(Deserialize, JsonSchema)]
pub struct RecommendationParameters {
    #[schemars(description = "The category: movie, restaurant or book.")]
    category: String,
    #[serde(default)]
    #[schemars(description = "Optional preferences or constraints.")]
    preferences: String,
}

#[derive(Serialize, JsonSchema)]
pub struct Recommendation {
    category: &'static str,
    name: &'static str,
    reason: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    preferences: Option<String>,
}

/// A tool for recommending a movie, a restaurant or a book.
///
/// The first entry mentioning one of the preference words wins; without a
/// match, the first entry of the category is recommended.
#[derive(Default)]
pub struct RecommendationTool;

impl RecommendationTool {
    /// Creates a new recommendation tool.
    #[inline]
    pub fn new() -> Self {
        RecommendationTool
    }
}

impl Tool for RecommendationTool {
    type Input = RecommendationParameters;
    type Output = Recommendation;

    fn name(&self) -> &str {
        "make_recommendation"
    }

    fn description(&self) -> &str {
        r#"
Recommends a movie, a restaurant or a book, optionally guided by the user's preferences."#
    }

    fn execute(
        &self,
        input: RecommendationParameters,
    ) -> ToolResult<Recommendation> {
        let wanted = input.category.trim().to_lowercase();
        let Some(&(category, entries)) =
            RECOMMENDATIONS.iter().find(|(c, _)| *c == wanted)
        else {
            return Err(ToolError::invalid_input().with_reason(format!(
                "Sorry, I don't have recommendations for '{}'. Try 'movie', 'restaurant', or 'book'.",
                input.category
            )));
        };

        let preferences = input.preferences.trim();
        let keywords: Vec<String> = preferences
            .split(|c: char| !c.is_alphanumeric() && c != '-')
            .filter(|w| w.len() > 2)
            .map(str::to_lowercase)
            .collect();
        let &(name, reason) = entries
            .iter()
            .find(|(_, reason)| {
                let reason = reason.to_lowercase();
                keywords.iter().any(|k| reason.contains(k.as_str()))
            })
            .unwrap_or(&entries[0]);

        Ok(Recommendation {
            category,
            name,
            reason,
            preferences: (!preferences.is_empty())
                .then(|| preferences.to_owned()),
        })
    }
}

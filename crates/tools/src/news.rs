use first_agent_core::tool::{Tool, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

static HEADLINES: &[(&str, [&str; 4])] = &[
    (
        "technology",
        [
            "New AI breakthrough announced by major tech company",
            "Smartphone sales reach record high in Q4",
            "Cybersecurity experts warn of new threat",
            "Tech giant launches revolutionary product",
        ],
    ),
    (
        "sports",
        [
            "Local team wins championship in dramatic finish",
            "Star player signs record-breaking contract",
            "Olympic games preparations underway",
            "Underdog team pulls off major upset",
        ],
    ),
    (
        "business",
        [
            "Stock market reaches new all-time high",
            "Major merger announced between industry leaders",
            "Startup raises $100M in Series B funding",
            "Economic indicators show strong growth",
        ],
    ),
];

fn default_num_headlines() -> u32 {
    3
}

#[derive(Deserialize, JsonSchema)]
pub struct NewsHeadlinesParameters {
    #[schemars(description = "The news topic to search for.")]
    topic: String,
    #[serde(default = "default_num_headlines")]
    #[schemars(description = "Number of headlines to return.")]
    num_headlines: u32,
}

#[derive(Serialize, JsonSchema)]
pub struct NewsHeadlines {
    topic: String,
    category: &'static str,
    headlines: Vec<&'static str>,
}

/// A tool for fetching news headlines on a topic.
///
/// Topics outside the known categories fall back to technology news.
#[derive(Default)]
pub struct NewsHeadlinesTool;

impl NewsHeadlinesTool {
    /// Creates a new news headlines tool.
    #[inline]
    pub fn new() -> Self {
        NewsHeadlinesTool
    }
}

impl Tool for NewsHeadlinesTool {
    type Input = NewsHeadlinesParameters;
    type Output = NewsHeadlines;

    fn name(&self) -> &str {
        "get_news_headlines"
    }

    fn description(&self) -> &str {
        r#"
Fetches the top news headlines for a topic.
Known categories are technology, sports and business."#
    }

    fn execute(&self, input: NewsHeadlinesParameters) -> ToolResult<NewsHeadlines> {
        let topic = input.topic.to_lowercase();
        let &(category, headlines) = HEADLINES
            .iter()
            .find(|(category, _)| {
                topic.contains(category) || category.contains(topic.as_str())
            })
            .unwrap_or(&HEADLINES[0]);

        let count = usize::try_from(input.num_headlines).unwrap_or(usize::MAX);
        Ok(NewsHeadlines {
            topic: input.topic,
            category,
            headlines: headlines.iter().take(count).copied().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headlines(topic: &str, num_headlines: u32) -> NewsHeadlines {
        NewsHeadlinesTool::new()
            .execute(NewsHeadlinesParameters {
                topic: topic.to_owned(),
                num_headlines,
            })
            .unwrap()
    }

    #[test]
    fn test_matching_topic() {
        let news = headlines("Sports", 2);
        assert_eq!(news.category, "sports");
        assert_eq!(
            news.headlines,
            [
                "Local team wins championship in dramatic finish",
                "Star player signs record-breaking contract",
            ]
        );

        assert_eq!(headlines("tech", 3).category, "technology");
        assert_eq!(headlines("small business news", 3).category, "business");
    }

    #[test]
    fn test_unmatched_topic_falls_back() {
        let news = headlines("gardening", 10);
        assert_eq!(news.topic, "gardening");
        assert_eq!(news.category, "technology");
        assert_eq!(news.headlines.len(), 4);
    }
}

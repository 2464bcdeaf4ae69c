use first_agent_core::tool::{Tool, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::round_to;

#[derive(Deserialize, JsonSchema)]
pub struct TextAnalysisParameters {
    #[schemars(description = "The text to analyze.")]
    text: String,
}

#[derive(Debug, PartialEq, Serialize, JsonSchema)]
pub struct TextAnalysis {
    characters: usize,
    characters_no_spaces: usize,
    words: usize,
    sentences: usize,
    average_word_length: f64,
}

/// A tool for computing basic statistics of a text.
#[derive(Default)]
pub struct TextAnalysisTool;

impl TextAnalysisTool {
    /// Creates a new text analysis tool.
    #[inline]
    pub fn new() -> Self {
        TextAnalysisTool
    }
}

impl Tool for TextAnalysisTool {
    type Input = TextAnalysisParameters;
    type Output = TextAnalysis;

    fn name(&self) -> &str {
        "analyze_text"
    }

    fn description(&self) -> &str {
        r#"
Analyzes a text and returns basic statistics: character, word and sentence counts, and the average word length."#
    }

    fn execute(&self, input: TextAnalysisParameters) -> ToolResult<TextAnalysis> {
        Ok(analyze(&input.text))
    }
}

fn analyze(text: &str) -> TextAnalysis {
    let words = text.split_whitespace().count();
    let characters_no_spaces = text.chars().filter(|&c| c != ' ').count();
    let average_word_length = if words == 0 {
        0.0
    } else {
        round_to(characters_no_spaces as f64 / words as f64, 1)
    };

    TextAnalysis {
        characters: text.chars().count(),
        characters_no_spaces,
        words,
        sentences: text.matches(['.', '!', '?']).count(),
        average_word_length,
    }
}

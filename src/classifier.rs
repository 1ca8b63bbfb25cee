//! Line classifier
//!
//! Turns raw source text into an ordered sequence of classified line tokens.
//! One token is produced per physical line (`\n` split semantics, so a
//! trailing newline yields a final empty line), in original order, with no
//! line skipped or merged. Classification is total: a line matching no rule
//! becomes [`Category::Unclassified`](crate::token::Category::Unclassified)
//! rather than an error.

use crate::rules::classify_line;
use crate::token::LineToken;

/// Stateful driver for classification passes.
///
/// The classifier has two states: unparsed (fresh, no result) and parsed
/// (result available via [`lines`](Self::lines)). Running
/// [`classify`](Self::classify) transitions to parsed and stores the result;
/// re-running replaces the stored result. The rule table itself is a shared
/// static, so instances are cheap and independent.
#[derive(Debug, Default)]
pub struct LineClassifier {
    tokens: Vec<LineToken>,
    parsed: bool,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a classification pass over `input`.
    ///
    /// Splits on `\n`, trims each line, and assigns the category of the
    /// first matching rule. The returned slice is index-aligned with the
    /// physical lines of the input.
    pub fn classify(&mut self, input: &str) -> &[LineToken] {
        self.tokens = input
            .split('\n')
            .enumerate()
            .map(|(line, raw)| {
                let text = raw.trim().to_string();
                let category = classify_line(&text);
                LineToken {
                    text,
                    category,
                    line,
                }
            })
            .collect();
        self.parsed = true;
        &self.tokens
    }

    /// The most recently produced classification result.
    ///
    /// Empty until the first [`classify`](Self::classify) call; stable
    /// across repeated calls until the next pass.
    pub fn lines(&self) -> &[LineToken] {
        &self.tokens
    }

    /// Whether a classification pass has run on this instance.
    pub fn is_parsed(&self) -> bool {
        self.parsed
    }
}

/// One-shot classification of a source text.
pub fn classify(input: &str) -> Vec<LineToken> {
    let mut classifier = LineClassifier::new();
    classifier.classify(input);
    classifier.tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Category;

    #[test]
    fn test_one_token_per_physical_line() {
        let tokens = classify("int main() {\nreturn 0;\n}");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].category, Category::EntryPoint);
        assert_eq!(tokens[1].category, Category::Return);
        assert_eq!(tokens[2].category, Category::BlockClose);
    }

    #[test]
    fn test_trailing_newline_yields_empty_token() {
        let tokens = classify("return 0;\n");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].text, "");
        assert_eq!(tokens[1].category, Category::Unclassified);
    }

    #[test]
    fn test_empty_input_yields_single_blank_token() {
        let tokens = classify("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "");
        assert_eq!(tokens[0].category, Category::Unclassified);
    }

    #[test]
    fn test_lines_are_trimmed() {
        let tokens = classify("    int x = 5;\t\n\twhile (x) {");
        assert_eq!(tokens[0].text, "int x = 5;");
        assert_eq!(tokens[0].category, Category::ScalarDeclaration);
        assert_eq!(tokens[1].text, "while (x) {");
        assert_eq!(tokens[1].category, Category::WhileLoop);
    }

    #[test]
    fn test_whitespace_only_line_is_unclassified() {
        let tokens = classify("   \t  ");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "");
        assert_eq!(tokens[0].category, Category::Unclassified);
    }

    #[test]
    fn test_line_index_is_position_in_result() {
        let tokens = classify("a\nb\nc");
        for (idx, token) in tokens.iter().enumerate() {
            assert_eq!(token.line, idx);
        }
    }

    #[test]
    fn test_state_transition() {
        let mut classifier = LineClassifier::new();
        assert!(!classifier.is_parsed());
        assert!(classifier.lines().is_empty());

        classifier.classify("return;");
        assert!(classifier.is_parsed());
        assert_eq!(classifier.lines().len(), 1);
    }

    #[test]
    fn test_lines_stable_until_next_pass() {
        let mut classifier = LineClassifier::new();
        classifier.classify("int x = 5;\n}");
        let first: Vec<LineToken> = classifier.lines().to_vec();
        assert_eq!(classifier.lines(), first.as_slice());
        assert_eq!(classifier.lines(), first.as_slice());

        classifier.classify("printf(\"hi\");");
        assert_eq!(classifier.lines().len(), 1);
        assert_eq!(classifier.lines()[0].category, Category::ConsoleWrite);
    }

    #[test]
    fn test_reclassification_is_idempotent() {
        let source = "int main() {\nint x = 5;\nwhile (x > 0) {\nx = x - 1;\n}\nreturn 0;\n}\n";
        let first = classify(source);
        let second = classify(source);
        assert_eq!(first, second);
    }
}

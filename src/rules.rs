//! Classification rules
//!
//! The ordered rule table mapping line patterns to categories, and the
//! first-match-wins walk over it.
//!
//! Rules are tried in declaration order and the first match wins. The order
//! is a correctness invariant, not a cosmetic one: the function-declaration
//! pattern is a strict superset of the entry-point and scalar-declaration
//! patterns, so those must be tried first. Matching is a substring test
//! against the trimmed line, except where a pattern is `^`-anchored.

use crate::token::Category;
use once_cell::sync::Lazy;
use regex::Regex;

/// Identifier reserved for the program entry point.
///
/// Declaration-shaped rules capture the declared identifier as `ident` and
/// must not claim a line whose only declared identifier is this one; the
/// entry-point rule owns it.
const ENTRY_IDENT: &str = "main";

/// Rule patterns in precedence order. First match wins.
///
/// Patterns with an `ident` capture group carry an identifier guard: a
/// candidate match whose captured identifier equals [`ENTRY_IDENT`] is
/// rejected, and the remaining candidates on the line are still considered.
const RULE_PATTERNS: &[(&str, Category)] = &[
    // Entry point: int main / void main, covering both returning forms
    (r"int \s*main|void \s*main", Category::EntryPoint),
    // Scalar declaration: numeric type + identifier + `;` or `=`
    (
        r"(?:int|float|double) \s*(?P<ident>[a-zA-Z][a-zA-Z0-9]*)\s*[;=]",
        Category::ScalarDeclaration,
    ),
    // Function declaration: return type + identifier. Broader than the two
    // rules above; table position disambiguates.
    (
        r"(?:int|void|char\s*\*\s*|float|double) \s*(?P<ident>[a-zA-Z][a-zA-Z0-9]*)",
        Category::FunctionDeclaration,
    ),
    // String declaration: char pointer, or sized char array + `;` or `=`
    (
        r"char\s*\*|char\s+[a-zA-Z][a-zA-Z0-9]*\s*\[[0-9]+\]\s*[;=]",
        Category::StringDeclaration,
    ),
    // File handle declaration: FILE pointer
    (r"FILE\s*\*", Category::FileDeclaration),
    // Conditional opener: if ( / else (
    (r"if\s*\(|else\s*\(", Category::Conditional),
    // While loop opener, anchored to line start
    (r"^while", Category::WhileLoop),
    // Recognized stdio/stdlib calls. Anchoring follows the original tool:
    // printf, gets and for are only recognized at line start.
    (r"atoi", Category::NumericConversion),
    (r"fopen", Category::FileOpen),
    (r"fprintf", Category::FileWrite),
    (r"^printf", Category::ConsoleWrite),
    (r"fclose", Category::FileClose),
    (r"^gets", Category::UnsafeRead),
    (r"^for", Category::ForLoop),
    (r"fgets", Category::BufferedRead),
    // Assignment or mutation: any `+` or `=` not captured above
    (r"[+=]", Category::Assignment),
    // Block boundaries
    (r"\{", Category::BlockOpen),
    (r"\}", Category::BlockClose),
    // Return statement, anchored to line start
    (r"^return", Category::Return),
];

/// One entry of the rule table: a compiled pattern and the category it
/// assigns. Immutable once constructed; precedence is the entry's position
/// in the table.
pub struct Rule {
    pattern: Regex,
    category: Category,
    /// The pattern captures a declared identifier that is subject to the
    /// entry-point identifier guard.
    ident_guard: bool,
}

impl Rule {
    fn new(pattern: &str, category: Category) -> Self {
        let pattern = Regex::new(pattern).unwrap();
        let ident_guard = pattern.capture_names().flatten().any(|name| name == "ident");
        Self {
            pattern,
            category,
            ident_guard,
        }
    }

    /// The category this rule assigns when it matches.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The pattern string, as written in the table.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Test a trimmed line against this rule.
    ///
    /// For guarded rules, every candidate match on the line is considered:
    /// `int main;` does not match the scalar-declaration rule, but
    /// `int main; int x;` does, through the second declaration.
    pub fn matches(&self, line: &str) -> bool {
        if self.ident_guard {
            self.pattern.captures_iter(line).any(|caps| {
                caps.name("ident")
                    .map_or(true, |m| m.as_str() != ENTRY_IDENT)
            })
        } else {
            self.pattern.is_match(line)
        }
    }
}

/// The shared rule table, compiled once per process. All patterns are
/// known-good constants, so compilation cannot fail. `Regex` is `Sync`,
/// which makes the table safe to share across classifier instances.
static RULE_TABLE: Lazy<Vec<Rule>> = Lazy::new(|| {
    RULE_PATTERNS
        .iter()
        .map(|(pattern, category)| Rule::new(pattern, *category))
        .collect()
});

/// Read-only, ordered traversal of the rule table.
pub fn rule_table() -> &'static [Rule] {
    &RULE_TABLE
}

/// Determine the category of a single trimmed line.
///
/// Walks the rule table in order and returns the first matching rule's
/// category, or [`Category::Unclassified`] if no rule matches. Total over
/// all input: this function never fails.
pub fn classify_line(line: &str) -> Category {
    RULE_TABLE
        .iter()
        .find(|rule| rule.matches(line))
        .map_or(Category::Unclassified, Rule::category)
}

//! Line token types for the classification pipeline
//!
//! Being line based, all the downstream generator needs is one token per
//! physical line. Each line is tokenized into exactly one category. In the
//! real world a line might fit more than one category (a `while` header
//! also opens a block), so the order of categorization is crucial to
//! getting the right result; that ordering lives in the rule table.
//!
//! The Category enum is the definitive set: entry point, declarations
//! (scalar, function, string, file handle), control-flow openers, the
//! recognized stdio/stdlib calls, assignment, block open/close, return,
//! and the unclassified fallback.

use std::fmt;

/// The classification assigned to one physical line.
///
/// The set is closed: it is fixed at compile time and never extended at
/// runtime. The `Display` names (and the serde identifiers) are the stable
/// contract surface consumed by code generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Category {
    /// Program entry point definition (`int main` / `void main`)
    EntryPoint,

    /// Integer or floating-point variable declaration or declaration-with-assignment
    ScalarDeclaration,

    /// Return-typed function or method declaration
    FunctionDeclaration,

    /// Pointer-to-char or sized char array declaration
    StringDeclaration,

    /// `FILE *` handle declaration
    FileDeclaration,

    /// `if (` / `else (` block opener
    Conditional,

    /// `while` loop opener
    WhileLoop,

    /// `atoi` call (numeric-string conversion)
    NumericConversion,

    /// `fopen` call
    FileOpen,

    /// `fprintf` call
    FileWrite,

    /// `printf` call at line start
    ConsoleWrite,

    /// `fclose` call
    FileClose,

    /// `gets` call at line start
    UnsafeRead,

    /// `for` loop opener at line start
    ForLoop,

    /// `fgets` call
    BufferedRead,

    /// Assignment or mutation (`+` or `=` present)
    Assignment,

    /// Line containing `{`
    BlockOpen,

    /// Line containing `}`
    BlockClose,

    /// `return` statement at line start
    Return,

    /// Fallback for lines matching no rule (includes blank lines)
    Unclassified,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::EntryPoint => "ENTRY_POINT",
            Category::ScalarDeclaration => "SCALAR_DECLARATION",
            Category::FunctionDeclaration => "FUNCTION_DECLARATION",
            Category::StringDeclaration => "STRING_DECLARATION",
            Category::FileDeclaration => "FILE_DECLARATION",
            Category::Conditional => "CONDITIONAL",
            Category::WhileLoop => "WHILE_LOOP",
            Category::NumericConversion => "NUMERIC_CONVERSION",
            Category::FileOpen => "FILE_OPEN",
            Category::FileWrite => "FILE_WRITE",
            Category::ConsoleWrite => "CONSOLE_WRITE",
            Category::FileClose => "FILE_CLOSE",
            Category::UnsafeRead => "UNSAFE_READ",
            Category::ForLoop => "FOR_LOOP",
            Category::BufferedRead => "BUFFERED_READ",
            Category::Assignment => "ASSIGNMENT",
            Category::BlockOpen => "BLOCK_OPEN",
            Category::BlockClose => "BLOCK_CLOSE",
            Category::Return => "RETURN",
            Category::Unclassified => "UNCLASSIFIED",
        };
        write!(f, "{}", name)
    }
}

/// A line token represents one physical line of the classified input.
///
/// Line tokens are produced by a classification pass, which splits the input
/// on newlines and assigns one category per line. Each token stores:
/// - The trimmed line text (leading/trailing whitespace removed)
/// - The assigned category
/// - The index of this token in the classification result
///
/// The index doubles as the physical line number (results are index-aligned
/// with the input) and as a non-owning back-reference into the owning result
/// sequence, so a later consumer can look up sibling lines such as an
/// enclosing block opener.
///
/// Tokens are created exactly once per line and are immutable thereafter.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineToken {
    /// The trimmed text of the line
    pub text: String,

    /// The classification of this line
    pub category: Category,

    /// Index of this token in the classification result (== physical line number)
    pub line: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display_names() {
        assert_eq!(Category::EntryPoint.to_string(), "ENTRY_POINT");
        assert_eq!(Category::ScalarDeclaration.to_string(), "SCALAR_DECLARATION");
        assert_eq!(Category::FunctionDeclaration.to_string(), "FUNCTION_DECLARATION");
        assert_eq!(Category::StringDeclaration.to_string(), "STRING_DECLARATION");
        assert_eq!(Category::FileDeclaration.to_string(), "FILE_DECLARATION");
        assert_eq!(Category::Conditional.to_string(), "CONDITIONAL");
        assert_eq!(Category::WhileLoop.to_string(), "WHILE_LOOP");
        assert_eq!(Category::NumericConversion.to_string(), "NUMERIC_CONVERSION");
        assert_eq!(Category::FileOpen.to_string(), "FILE_OPEN");
        assert_eq!(Category::FileWrite.to_string(), "FILE_WRITE");
        assert_eq!(Category::ConsoleWrite.to_string(), "CONSOLE_WRITE");
        assert_eq!(Category::FileClose.to_string(), "FILE_CLOSE");
        assert_eq!(Category::UnsafeRead.to_string(), "UNSAFE_READ");
        assert_eq!(Category::ForLoop.to_string(), "FOR_LOOP");
        assert_eq!(Category::BufferedRead.to_string(), "BUFFERED_READ");
        assert_eq!(Category::Assignment.to_string(), "ASSIGNMENT");
        assert_eq!(Category::BlockOpen.to_string(), "BLOCK_OPEN");
        assert_eq!(Category::BlockClose.to_string(), "BLOCK_CLOSE");
        assert_eq!(Category::Return.to_string(), "RETURN");
        assert_eq!(Category::Unclassified.to_string(), "UNCLASSIFIED");
    }

    #[test]
    fn test_line_token_construction() {
        let token = LineToken {
            text: "return 0;".to_string(),
            category: Category::Return,
            line: 3,
        };
        assert_eq!(token.text, "return 0;");
        assert_eq!(token.category, Category::Return);
        assert_eq!(token.line, 3);
    }
}

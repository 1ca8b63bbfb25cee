//! # ctok
//!
//! A line classifier for C-like source text.
//!
//! The crate takes a source text blob and classifies each physical line into
//! one of a closed set of syntactic categories, producing an ordered sequence
//! of line tokens for a downstream line-based code generator. Classification
//! is whole-line: no expression parsing, no AST, no sub-line tokenization.
//!
//! The design has two components, depended on bottom-up:
//!
//! - [`rules`] — the ordered rule table: `(pattern, category)` pairs tried
//!   in declaration order, first match wins. Table order is a correctness
//!   invariant; several patterns overlap and the earlier rule must win.
//! - [`classifier`] — the per-line pass: split on newlines, trim, walk the
//!   table, emit one [`LineToken`] per physical line.
//!
//! Classification is a total function: it never fails, and lines no rule
//! recognizes are tagged [`Category::Unclassified`].

pub mod classifier;
pub mod rules;
pub mod token;

pub use classifier::{classify, LineClassifier};
pub use rules::{classify_line, rule_table, Rule};
pub use token::{Category, LineToken};

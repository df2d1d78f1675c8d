//! Editor prototyping tool (edit_pt) is a library of text-editor infrastructure blocks:
//! a regular expression engine, a priority-ordered [Tokenizer], a persistent [Rope](rope::Rope)
//! and [operational transformation](ot) primitives for concurrent editing.
//!
//! # Overview
//!
//! The regex engine is built in classical stages. A pattern string is parsed by a
//! recursive descent [Parser](regex::Parser) into an abstract syntax tree ([Regex](regex::Regex)),
//! compiled to an epsilon-NFA by Thompson construction, determinized by subset construction
//! and finally flattened into a transition table. All three automata implement the common
//! [IMatcher] contract and behave identically; the table backend is what [compile](regex::Regex::compile)
//! returns and what the [Tokenizer] runs on.
//!
//! The concrete metasyntax is not fixed: a [Language](regex::Language) descriptor names the
//! marker code points (escape, union, grouping, classes, repetition, range and wildcard),
//! and the alphabet for `.`, negated classes and ranges is a caller-configurable
//! [Alphabet](regex::Alphabet).
//!
//! # Example
//!
//! ```
//! use edit_pt::regex::parse;
//! use edit_pt::{IMatcher, Span, Tokenizer};
//!
//! // Direct matching through any of the compiled backends.
//! let matcher = parse("(ab)+").unwrap().compile();
//! assert_eq!(matcher.match_prefix("ababab"), Some(6));
//! assert_eq!(matcher.subn("dababd", "c"), ("dcd".to_string(), 1));
//!
//! // A tokenizer built from prioritized pattern/tag pairs.
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Tok {
//!     Number,
//!     Word,
//!     Space,
//! }
//!
//! let tokenizer = Tokenizer::new(vec![
//!     ("[0-9]+", Tok::Number),
//!     ("[a-z]+", Tok::Word),
//!     (" +", Tok::Space),
//! ])
//! .unwrap();
//!
//! let tokens = tokenizer.tokenize("abc 42").unwrap();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].lexeme, "abc");
//! assert_eq!(tokens[1].span, Span::new(3, 4));
//! assert_eq!(tokens[2].tag, Tok::Number);
//! ```
//!
//! Ropes and the OT operations stand alone but compose: a rope is the document
//! representation the operations are applied to.
//!
//! ```
//! use edit_pt::ot::Operation;
//! use edit_pt::rope::Rope;
//!
//! let document = Rope::from("hello");
//! let insert = Operation::insert(2, "XX");
//! let edited = insert.apply(&document).unwrap();
//! assert_eq!(edited, Rope::from("heXXllo"));
//! assert_eq!(insert.undo().apply(&edited).unwrap(), document);
//! ```

mod error;
mod matcher;
pub mod ot;
pub mod regex;
pub mod rope;
mod tokenization;
pub mod util;

#[cfg(test)]
mod __tests__;

use crate::util::Log;
use once_cell::unsync::OnceCell;

/// An error returned when a regex pattern cannot be parsed.
///
/// The `annotation` renders the offending pattern on one line and a marker line
/// underneath, with `^` at the significant positions and `-` joining the two
/// carets of a range. It is intended to be shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserError {
    pub reason: String,
    pub annotation: String,
}

/// An error returned when no pattern of a [Tokenizer] matches at the current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerError {
    pub reason: String,
    pub position: usize,
}

/// An error returned for a [deleted](rope::Rope::deleted) call whose preconditions
/// do not hold. Rope operations are persistent, so a failed operation leaves no
/// partial state behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RopeError {
    /// The position lies beyond the end of the rope.
    OutOfBounds { position: usize, length: usize },
    /// The string to delete extends past the end of the rope.
    TooLong { required: usize, available: usize },
    /// The rope content at the position differs from the string to delete.
    Mismatch { expected: String, found: String },
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
/// The `[start, end)` bounds of a matched region, counted in code points.
pub struct Span {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A successful [find](IMatcher::find) result carrying the searched string and the
/// matched [Span].
pub struct Find<'s> {
    pub string: &'s str,
    pub span: Span,
}

/// A lazy iterator of non-overlapping [Find]s returned from [find_all](IMatcher::find_all).
///
/// The scan resumes at the end of each emitted find and advances one further code
/// point after a zero-length find, so the iterator is finite even for patterns
/// matching the empty string.
pub struct FindAll<'m, 's, TMatcher> {
    matcher: &'m TMatcher,
    string: &'s str,
    offset: usize,
    exhausted: bool,
}

/// A replacement source for [sub](IMatcher::sub) and [subn](IMatcher::subn):
/// either a literal string or a function from a [Find] to its replacement.
pub trait Substitution {
    fn substitute(&self, find: &Find) -> String;
}

/// The contract shared by the NFA, DFA and DFA-table backends.
///
/// Implementations provide [match_prefix](IMatcher::match_prefix); finding,
/// scanning and substitution are derived from it and therefore agree across
/// backends by construction. All offsets are counted in code points.
pub trait IMatcher {
    /// Returns the length of the longest prefix of `string` in the language of the
    /// regex, or [None]. Matches are only reported after consuming at least one
    /// code point; the empty input matches with `0` iff the regex accepts the
    /// empty string.
    fn match_prefix(&self, string: &str) -> Option<usize>;

    /// Returns the leftmost match in `string`.
    fn find<'s>(&self, string: &'s str) -> Option<Find<'s>> {
        self.find_from(string, 0)
    }

    /// Returns the leftmost match at or after the code point `offset`.
    fn find_from<'s>(&self, string: &'s str, offset: usize) -> Option<Find<'s>> {
        let starts = matcher::char_starts(string);
        let mut offset = offset;
        while offset < starts.len() {
            if let Some(end) = self.match_prefix(&string[starts[offset]..]) {
                return Some(Find::new(string, Span::new(offset, offset + end)));
            }
            offset += 1;
        }
        None
    }

    /// Lazily yields the non-overlapping matches in `string` from left to right.
    fn find_all<'m, 's>(&'m self, string: &'s str) -> FindAll<'m, 's, Self>
    where
        Self: Sized,
    {
        FindAll {
            matcher: self,
            string,
            offset: 0,
            exhausted: false,
        }
    }

    /// Replaces every match in `string` through the substitution and returns the
    /// result together with the number of replacements.
    fn subn<TSub: Substitution>(&self, string: &str, substitution: TSub) -> (String, usize)
    where
        Self: Sized,
    {
        let starts = matcher::char_starts(string);
        let mut result = String::new();
        let mut consumed = 0;
        let mut count = 0;
        for find in self.find_all(string) {
            result.push_str(&string[starts[consumed]..starts[find.span.start]]);
            result.push_str(&substitution.substitute(&find));
            consumed = find.span.end;
            count += 1;
        }
        result.push_str(&string[starts[consumed]..]);
        (result, count)
    }

    /// Replaces every match in `string` through the substitution.
    fn sub<TSub: Substitution>(&self, string: &str, substitution: TSub) -> String
    where
        Self: Sized,
    {
        self.subn(string, substitution).0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Element of the tokenized data: the tag of the winning pattern, the matched
/// lexeme and its [Span] in the input.
pub struct Token<TTag> {
    pub tag: TTag,
    pub lexeme: String,
    pub span: Span,
}

/// A priority-ordered tokenizer over compiled regex matchers.
///
/// The tokenizer is constructed from `(pattern, tag)` pairs; every pattern is
/// parsed and compiled up front. Disambiguation between patterns is first-match
/// in declaration order, not longest-match, so a pattern for `ab+` must be
/// declared before one for `a+` to win on `"abab"`.
pub struct Tokenizer<TTag> {
    definitions: Vec<(regex::DfaTable, TTag)>,
    log: OnceCell<Log<&'static str>>,
}

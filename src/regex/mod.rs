//! A regular expression engine built in classical stages.
//!
//! A pattern string is parsed by the recursive descent [Parser] into a [Regex] tree,
//! compiled to an epsilon-[Nfa] by Thompson construction, determinized into a [Dfa]
//! by subset construction and finally flattened into a [DfaTable]. Each stage
//! implements [IMatcher](crate::IMatcher) and the three backends agree on every
//! input; the NFA is the reference semantics, the other two exist for speed.
//!
//! The supported language is strictly regular: literals, escapes, `.`, concatenation,
//! union, `*`/`+` repetition, non-capturing groups and (negated) character classes
//! with ranges. There are no capturing groups, backreferences or lookaround.
//!
//! # Example
//!
//! ```
//! use edit_pt::regex::{parse, Regex};
//! use edit_pt::IMatcher;
//!
//! let regex = parse("a|b*").unwrap();
//! assert_eq!(
//!     regex,
//!     Regex::union(
//!         Regex::Character('a'),
//!         Regex::repetition(Regex::Character('b'))
//!     )
//! );
//!
//! let nfa = regex.to_nfa();
//! let table = regex.to_dfa_table();
//! for string in ["a", "bbb", "", "ba"] {
//!     assert_eq!(nfa.match_prefix(string), table.match_prefix(string));
//! }
//! assert_eq!(table.match_prefix("bbba"), Some(3));
//! ```
//!
//! The metasyntax markers are configurable through [Language], and the alphabet
//! backing `.`, negated classes and range expansion through [Alphabet]:
//!
//! ```
//! use edit_pt::regex::{Alphabet, Language, Parser};
//! use edit_pt::IMatcher;
//!
//! let language = Language::default().with_union('/').with_any('_');
//! let parser = Parser::with_alphabet(language, Alphabet::from("ab"));
//! let matcher = parser.parse("a/_").unwrap().compile();
//! assert_eq!(matcher.match_prefix("b"), Some(1));
//! assert_eq!(matcher.match_prefix("c"), None);
//! ```

mod ast;
mod dfa;
mod input;
mod language;
mod nfa;
mod parser;
mod table;

#[cfg(test)]
mod __tests__;

pub use self::parser::parse;

use once_cell::unsync::OnceCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

/// The concrete metasyntax of the regex surface language.
///
/// A descriptor names the eleven single-code-point markers; everything else
/// (the special, repetition and end character sets) is derived from them and
/// cached lazily. Two descriptors are equal iff all eleven markers match.
#[derive(Debug, Clone)]
pub struct Language {
    escape: char,
    union: char,
    group_begin: char,
    group_end: char,
    either_begin: char,
    either_end: char,
    neither_indicator: char,
    zero_or_more: char,
    one_or_more: char,
    range: char,
    any: char,
    special_characters: OnceCell<BTreeSet<char>>,
    repetition_characters: OnceCell<BTreeSet<char>>,
    end_characters: OnceCell<BTreeSet<char>>,
}

/// The set of code points backing `.`, negated classes and range expansion.
///
/// The default is every Unicode scalar value; an explicit set is shared cheaply
/// between the AST nodes referring to it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Alphabet {
    /// Every Unicode scalar value.
    Full,
    /// An explicit character set.
    Chars(Rc<BTreeSet<char>>),
}

/// One element of a character class body: a literal character or an inclusive
/// range restricted to its alphabet.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClassItem {
    Character(char),
    Range(char, char, Alphabet),
}

/// The abstract syntax tree of a regular expression. Equality is structural;
/// class bodies are order-insensitive sets.
///
/// Prefer the builder functions ([concatenation](Regex::concatenation),
/// [union](Regex::union), ...) over the raw variants: they normalize `Epsilon`
/// operands away, matching what the [Parser] produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Regex {
    /// Matches the empty string.
    Epsilon,
    /// Matches any one code point of the alphabet.
    Any(Alphabet),
    /// Matches exactly one code point.
    Character(char),
    Concatenation(Rc<Regex>, Rc<Regex>),
    Union(Rc<Regex>, Rc<Regex>),
    /// Kleene star: zero or more of the inner expression. `+` never reaches the
    /// AST; the parser desugars `x+` to `Concatenation(x, Repetition(x))`.
    Repetition(Rc<Regex>),
    /// Structural grouping without capture.
    Group(Rc<Regex>),
    /// A character class: any listed character or range member.
    Either(BTreeSet<ClassItem>),
    /// A negated character class: the alphabet minus the listed set.
    Neither(BTreeSet<ClassItem>, Alphabet),
}

/// A pattern string wrapped as a code-point sequence with a forward cursor,
/// plus the annotation routines used to render parser errors.
pub struct Input {
    string: String,
    characters: Vec<char>,
    cursor: usize,
}

/// Recursive descent parser from a pattern [Input] to a [Regex], driven by a
/// [Language] descriptor and an [Alphabet].
pub struct Parser {
    language: Language,
    alphabet: Alphabet,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
/// A wrapper to indicate the index of a state in an automaton arena.
pub struct StateId(usize);

#[derive(Debug, Clone)]
/// An NFA state: deterministic edges, an ordered list of epsilon moves and a
/// finality flag.
pub struct NfaState {
    movements: BTreeMap<char, StateId>,
    epsilon_moves: Vec<StateId>,
    is_final: bool,
}

/// An epsilon-NFA produced by Thompson construction.
///
/// States are arena-allocated and referred to by [StateId], which keeps the
/// cyclic graphs of `Repetition` free of ownership cycles. Every fragment has
/// exactly one start and one final state.
#[derive(Debug, Clone)]
pub struct Nfa {
    states: Vec<NfaState>,
    start: StateId,
    finish: StateId,
}

#[derive(Debug, Clone)]
/// A DFA state: deterministic edges and a finality flag.
pub struct DfaState {
    movements: BTreeMap<char, StateId>,
    is_final: bool,
}

/// A DFA produced by subset construction over an [Nfa]; states are interned by
/// epsilon-closure identity.
#[derive(Debug, Clone)]
pub struct Dfa {
    states: Vec<DfaState>,
    start: StateId,
    finals: BTreeSet<StateId>,
}

/// A flat transition table: one map per reachable DFA state, index 0 being the
/// start state, plus the set of final indices. This is the backend
/// [compile](Regex::compile) returns.
#[derive(Debug, Clone)]
pub struct DfaTable {
    table: Vec<BTreeMap<char, usize>>,
    finals: BTreeSet<usize>,
}

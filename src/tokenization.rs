use crate::matcher::char_starts;
use crate::regex::{Language, Parser};
use crate::util::Log;
use crate::{IMatcher, ParserError, Span, Token, Tokenizer, TokenizerError};
use once_cell::unsync::OnceCell;
use std::fmt::Debug;

impl<TTag: Copy + Debug> Tokenizer<TTag> {
    /// Compiles the `(pattern, tag)` pairs with the default [Language] and
    /// alphabet. Declaration order is priority order.
    pub fn new(definitions: Vec<(&str, TTag)>) -> Result<Self, ParserError> {
        Self::with_parser(&Parser::new(Language::default()), definitions)
    }

    /// Compiles the `(pattern, tag)` pairs with a custom parser, for tokenizers
    /// over a non-default metasyntax or a restricted alphabet.
    pub fn with_parser(
        parser: &Parser,
        definitions: Vec<(&str, TTag)>,
    ) -> Result<Self, ParserError> {
        let mut compiled = Vec::with_capacity(definitions.len());
        for (pattern, tag) in definitions {
            compiled.push((parser.parse(pattern)?.compile(), tag));
        }
        Ok(Self {
            definitions: compiled,
            log: OnceCell::new(),
        })
    }

    /// Set a log label to debug the tokenization based on the level of [Log].
    pub fn set_log(&self, log: Log<&'static str>) -> Result<(), String> {
        self.log
            .set(log)
            .map_err(|err| format!("Log label {} is already assigned.", err))
    }

    /// Splits `input` into a token stream.
    ///
    /// At every cursor position the matchers are tried in declaration order and
    /// the first one with a match wins, consuming its matched prefix. A
    /// non-empty remainder no pattern matches aborts with a [TokenizerError]
    /// carrying the cursor position.
    pub fn tokenize(&self, input: &str) -> Result<Vec<Token<TTag>>, TokenizerError> {
        let starts = char_starts(input);
        let end_of_input = starts.len() - 1;
        let mut tokens: Vec<Token<TTag>> = Vec::new();
        let mut cursor = 0;

        #[cfg(debug_assertions)]
        let debug = self.log.get().map_or(Log::None, |label| *label);

        while cursor < end_of_input {
            let remaining = &input[starts[cursor]..];
            let matched = self
                .definitions
                .iter()
                .find_map(|(matcher, tag)| matcher.match_prefix(remaining).map(|end| (end, *tag)));
            match matched {
                Some((end, tag)) => {
                    let token = Token {
                        tag,
                        lexeme: input[starts[cursor]..starts[cursor + end]].to_string(),
                        span: Span::new(cursor, cursor + end),
                    };
                    #[cfg(debug_assertions)]
                    if debug.order() >= Log::Success(()).order() {
                        println!("[{}; TokenSuccess]: {:?} at {}", debug, token.tag, token.span);
                    }
                    cursor += end;
                    tokens.push(token);
                }
                None => {
                    #[cfg(debug_assertions)]
                    if debug.order() >= Log::Default(()).order() {
                        println!("[{}; TokenizerError]: at position {}", debug, cursor);
                    }
                    return Err(TokenizerError::new(cursor));
                }
            }
        }
        Ok(tokens)
    }
}
